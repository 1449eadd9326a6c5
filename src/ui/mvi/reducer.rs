//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// Computes the next state from the current one and an intent.
///
/// Side effects (persistence, timers) belong to the caller around the
/// reduce call, never to the reducer itself.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Must be total: intents that do not apply return the state unchanged.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
