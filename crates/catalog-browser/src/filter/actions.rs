//! Named transitions on [`FilterState`].
//!
//! The presentation layer turns clicks and keystrokes into [`FilterAction`]s and applies
//! them with [`FilterState::apply`]. The effect of `ToggleCategory` depends on the
//! catalog's [`FilterMode`].

use super::{FilterMode, FilterState};
use crate::model::CategoryId;

/// Transitions the presentation layer can request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterAction {
    /// Replace the selected user (`"all"` clears the user filter).
    SelectUser(String),
    /// Replace the search text.
    SetSearchQuery(String),
    /// Select or deselect a category.
    ///
    /// # Modes
    /// In [`FilterMode::Legacy`] this only ever appends.
    ToggleCategory(CategoryId),
    /// Clear the category selection.
    ResetCategories,
    /// Reset user and search text; the category selection is kept.
    ResetAll,
}

impl FilterState {
    /// Applies one transition.
    pub fn apply(&mut self, action: FilterAction, mode: FilterMode) {
        match action {
            FilterAction::SelectUser(name) => self.select_user(name),
            FilterAction::SetSearchQuery(text) => self.set_search_query(text),
            FilterAction::ToggleCategory(id) => match mode {
                FilterMode::Intended => {
                    self.toggle_category(id);
                }
                FilterMode::Legacy => self.append_category(id),
            },
            FilterAction::ResetCategories => self.reset_categories(),
            FilterAction::ResetAll => self.reset_all(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_depends_on_mode() {
        let mut intended = FilterState::new();
        let mut legacy = FilterState::new();

        for _ in 0..2 {
            intended.apply(FilterAction::ToggleCategory(CategoryId(1)), FilterMode::Intended);
            legacy.apply(FilterAction::ToggleCategory(CategoryId(1)), FilterMode::Legacy);
        }

        assert!(intended.selected_categories().is_empty());
        assert_eq!(legacy.selected_categories().len(), 2);
    }

    #[test]
    fn test_actions_map_to_transitions() {
        let mut state = FilterState::new();
        state.apply(FilterAction::SelectUser("Anna".into()), FilterMode::Intended);
        state.apply(FilterAction::SetSearchQuery("mi".into()), FilterMode::Intended);
        state.apply(FilterAction::ToggleCategory(CategoryId(2)), FilterMode::Intended);

        assert_eq!(state.selected_user().as_str(), "Anna");
        assert_eq!(state.search_query(), "mi");

        state.apply(FilterAction::ResetAll, FilterMode::Intended);
        assert!(state.selected_user().is_all());
        assert!(state.selected_categories().contains(CategoryId(2)));

        state.apply(FilterAction::ResetCategories, FilterMode::Intended);
        assert!(state.selected_categories().is_empty());
    }
}
