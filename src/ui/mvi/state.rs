//! Base trait for UI state.

/// Marker trait for UI state snapshots.
///
/// `Clone` produces the next snapshot, `PartialEq` lets callers skip work
/// when a step changed nothing.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
