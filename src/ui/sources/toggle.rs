use super::ClickTarget;
use crate::ui::finder::{FinderIntent, FinderState};

/// Clicks anywhere, filtered to entry rows, mapped to add/remove.
#[derive(Debug, Default, Clone, Copy)]
pub struct ToggleStream;

impl ToggleStream {
    /// `state` must be the store's current snapshot: membership decides
    /// between add and remove.
    pub fn on_click(&self, target: &ClickTarget, state: &FinderState) -> Option<FinderIntent> {
        let ClickTarget::Entry(name) = target else {
            return None;
        };
        if state.is_favorite(name) {
            Some(FinderIntent::RemoveFavorite(name.clone()))
        } else {
            Some(FinderIntent::AddFavorite(name.clone()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignores_non_entry_targets() {
        let state = FinderState::default();
        assert_eq!(ToggleStream.on_click(&ClickTarget::Nothing, &state), None);
        assert_eq!(ToggleStream.on_click(&ClickTarget::ShowFavorites, &state), None);
    }

    #[test]
    fn branches_on_current_membership() {
        let target = ClickTarget::Entry("cat".into());
        let empty = FinderState::default();
        assert_eq!(
            ToggleStream.on_click(&target, &empty),
            Some(FinderIntent::AddFavorite("cat".into()))
        );

        let with_cat = FinderState::with_favorites(["cat"].into_iter().collect());
        assert_eq!(
            ToggleStream.on_click(&target, &with_cat),
            Some(FinderIntent::RemoveFavorite("cat".into()))
        );
    }
}
