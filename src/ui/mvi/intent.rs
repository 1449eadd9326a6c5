//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents are produced by event sources (typing, clicks, startup) and
/// consumed by a [`Reducer`](super::Reducer).
pub trait Intent: Send + 'static {}
