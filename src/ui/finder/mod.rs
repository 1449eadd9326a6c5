mod intent;
mod reducer;
mod state;

pub use intent::FinderIntent;
pub use reducer::FinderReducer;
pub use state::{FinderState, ViewMode};
