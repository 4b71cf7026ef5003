//! Filter state and its transitions.
//!
//! [`FilterState`] is a flat value: the selected user, the search text and the selected
//! categories. It is owned by the presentation layer and changed only through the
//! transition methods below (or [`FilterState::apply`] with a
//! [`FilterAction`](super::FilterAction)).

use crate::model::CategoryId;
use std::fmt::Display;

/// The user selection value meaning "no user filter".
pub const ALL_USERS: &str = "all";

/// Which user's products are shown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum UserSelection {
    /// The `"all"` sentinel: no user filter.
    #[default]
    All,
    /// Only products owned by a user with exactly this name.
    Named(String),
}

impl UserSelection {
    /// Parses a selection, mapping the [`ALL_USERS`] sentinel to [`UserSelection::All`].
    pub fn from_name(name: impl Into<String>) -> Self {
        let name = name.into();
        if name == ALL_USERS {
            UserSelection::All
        } else {
            UserSelection::Named(name)
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, UserSelection::All)
    }

    /// The selection as the presentation layer names it (`"all"` or the user name).
    pub fn as_str(&self) -> &str {
        match self {
            UserSelection::All => ALL_USERS,
            UserSelection::Named(name) => name.as_str(),
        }
    }
}

impl From<&str> for UserSelection {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl From<String> for UserSelection {
    fn from(name: String) -> Self {
        Self::from_name(name)
    }
}

impl Display for UserSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The selected category ids, in the order they were selected.
///
/// [`toggle`](Self::toggle) keeps the ids unique. [`append`](Self::append) does not and
/// exists only for [`FilterMode::Legacy`](super::FilterMode::Legacy).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorySelection {
    ids: Vec<CategoryId>,
}

impl CategorySelection {
    pub fn contains(&self, id: CategoryId) -> bool {
        self.ids.contains(&id)
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = CategoryId> + '_ {
        self.ids.iter().copied()
    }

    /// Adds `id` if absent, removes it if present. Returns whether it is selected afterwards.
    pub fn toggle(&mut self, id: CategoryId) -> bool {
        if let Some(position) = self.ids.iter().position(|&selected| selected == id) {
            self.ids.remove(position);
            false
        } else {
            self.ids.push(id);
            true
        }
    }

    pub fn append(&mut self, id: CategoryId) {
        self.ids.push(id);
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }
}

impl FromIterator<CategoryId> for CategorySelection {
    fn from_iter<I: IntoIterator<Item = CategoryId>>(iter: I) -> Self {
        let mut selection = Self::default();
        for id in iter {
            if !selection.contains(id) {
                selection.ids.push(id);
            }
        }
        selection
    }
}

/// Current filter state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    selected_user: UserSelection,
    search_query: String,
    selected_categories: CategorySelection,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_user(&self) -> &UserSelection {
        &self.selected_user
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn selected_categories(&self) -> &CategorySelection {
        &self.selected_categories
    }

    /// Replaces the selected user. `"all"` clears the user filter.
    pub fn select_user(&mut self, name: impl Into<String>) {
        self.selected_user = UserSelection::from_name(name);
    }

    pub fn set_search_query(&mut self, text: impl Into<String>) {
        self.search_query = text.into();
    }

    pub fn toggle_category(&mut self, id: CategoryId) -> bool {
        self.selected_categories.toggle(id)
    }

    /// Selects `id` without ever deselecting it, duplicates included.
    pub fn append_category(&mut self, id: CategoryId) {
        self.selected_categories.append(id);
    }

    pub fn reset_categories(&mut self) {
        self.selected_categories.clear();
    }

    /// Resets the user selection and the search text. The category selection is kept.
    pub fn reset_all(&mut self) {
        self.selected_user = UserSelection::All;
        self.search_query.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_is_unfiltered() {
        let state = FilterState::new();
        assert!(state.selected_user().is_all());
        assert_eq!(state.selected_user().as_str(), "all");
        assert!(state.search_query().is_empty());
        assert!(state.selected_categories().is_empty());
    }

    #[test]
    fn test_all_sentinel_maps_to_all() {
        assert_eq!(UserSelection::from("all"), UserSelection::All);
        assert_eq!(
            UserSelection::from("All"),
            UserSelection::Named("All".to_string())
        );
        assert_eq!(UserSelection::from("Max".to_string()).to_string(), "Max");
    }

    #[test]
    fn test_toggle_category_adds_then_removes() {
        let mut state = FilterState::new();
        assert!(state.toggle_category(CategoryId(1)));
        assert!(state.toggle_category(CategoryId(2)));
        assert!(!state.toggle_category(CategoryId(1)));

        let ids: Vec<_> = state.selected_categories().iter().collect();
        assert_eq!(ids, vec![CategoryId(2)]);
    }

    #[test]
    fn test_append_category_never_removes() {
        let mut state = FilterState::new();
        state.append_category(CategoryId(3));
        state.append_category(CategoryId(3));
        assert_eq!(state.selected_categories().len(), 2);
        assert!(state.selected_categories().contains(CategoryId(3)));
    }

    #[test]
    fn test_reset_all_keeps_categories() {
        let mut state = FilterState::new();
        state.select_user("Max");
        state.set_search_query("xyz");
        state.toggle_category(CategoryId(4));

        state.reset_all();

        assert!(state.selected_user().is_all());
        assert_eq!(state.search_query(), "");
        assert!(state.selected_categories().contains(CategoryId(4)));

        state.reset_categories();
        assert_eq!(state, FilterState::new());
    }

    #[test]
    fn test_collecting_selection_dedups() {
        let selection: CategorySelection =
            [CategoryId(1), CategoryId(2), CategoryId(1)].into_iter().collect();
        assert_eq!(selection.len(), 2);
    }
}
