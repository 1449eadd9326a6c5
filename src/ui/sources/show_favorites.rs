use super::ClickTarget;
use crate::ui::finder::FinderIntent;

/// Clicks on the dedicated favorites control. No debounce.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShowFavoritesStream;

impl ShowFavoritesStream {
    pub fn on_click(&self, target: &ClickTarget) -> Option<FinderIntent> {
        matches!(target, ClickTarget::ShowFavorites).then_some(FinderIntent::ShowFavorites)
    }

    /// Keyboard activation of the same control.
    pub fn on_activate(&self) -> FinderIntent {
        FinderIntent::ShowFavorites
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_control_clicks_emit() {
        assert_eq!(
            ShowFavoritesStream.on_click(&ClickTarget::ShowFavorites),
            Some(FinderIntent::ShowFavorites)
        );
        assert_eq!(
            ShowFavoritesStream.on_click(&ClickTarget::Entry("cat".into())),
            None
        );
    }
}
