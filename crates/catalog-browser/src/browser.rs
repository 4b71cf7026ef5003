//! # Browser Session
//!
//! Provides the presentation-facing API over a [`Catalog`]: it owns the [`FilterState`],
//! exposes the transitions the filter panel triggers, and derives everything the panel
//! and the product table need to render.
//!
//! Every call runs to completion synchronously. The visible list is recomputed from the
//! immutable catalog on each request, never cached.

use crate::catalog::Catalog;
use crate::filter::{FilterAction, FilterState, UserSelection};
use crate::model::{CategoryId, FullProduct, Sex};
use tracing::{debug, instrument};

/// One tab in the user filter row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserTab {
    /// Label shown on the tab, `"All"` for the sentinel tab.
    pub label: String,
    /// Value passed to [`Browser::select_user`] when the tab is clicked.
    pub selection: UserSelection,
    pub active: bool,
}

/// One button in the category filter row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryButton {
    pub id: CategoryId,
    pub title: String,
    pub selected: bool,
}

/// The tone a user's name is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserTone {
    /// Male owners.
    Link,
    /// Female owners.
    Danger,
}

impl From<Sex> for UserTone {
    fn from(sex: Sex) -> Self {
        match sex {
            Sex::Male => UserTone::Link,
            Sex::Female => UserTone::Danger,
        }
    }
}

/// A filtering session over a borrowed [`Catalog`].
///
/// # Example
///
/// ```rust
/// use catalog_browser::browser::Browser;
/// use catalog_browser::catalog::Catalog;
/// use catalog_browser::filter::FilterMode;
/// use catalog_browser::fixtures::Fixtures;
///
/// let catalog = Catalog::new(Fixtures::embedded().unwrap(), FilterMode::Intended);
/// let mut browser = Browser::new(&catalog);
///
/// browser.select_user("Max");
/// browser.set_search_query("xyz");
/// assert!(!browser.has_matches());
///
/// browser.reset_all();
/// assert_eq!(browser.visible_products().len(), catalog.full_products().len());
/// ```
#[derive(Debug, Clone)]
pub struct Browser<'c> {
    catalog: &'c Catalog,
    state: FilterState,
}

impl<'c> Browser<'c> {
    pub fn new(catalog: &'c Catalog) -> Self {
        Self {
            catalog,
            state: FilterState::new(),
        }
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Applies a transition using the catalog's filter mode.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, action: FilterAction) {
        self.state.apply(action, self.catalog.mode());
        debug!(state = ?self.state, "Filter state changed");
    }

    pub fn select_user(&mut self, name: impl Into<String>) {
        self.dispatch(FilterAction::SelectUser(name.into()));
    }

    pub fn set_search_query(&mut self, text: impl Into<String>) {
        self.dispatch(FilterAction::SetSearchQuery(text.into()));
    }

    /// The clear button next to the search field.
    pub fn clear_search(&mut self) {
        self.set_search_query(String::new());
    }

    pub fn toggle_category(&mut self, id: CategoryId) {
        self.dispatch(FilterAction::ToggleCategory(id));
    }

    pub fn reset_categories(&mut self) {
        self.dispatch(FilterAction::ResetCategories);
    }

    pub fn reset_all(&mut self) {
        self.dispatch(FilterAction::ResetAll);
    }

    /// Products visible under the current state, in source order.
    pub fn visible_products(&self) -> Vec<&'c FullProduct> {
        self.catalog.visible_products(&self.state)
    }

    /// `false` means the "no products matching" message should be shown instead of rows.
    pub fn has_matches(&self) -> bool {
        !self.visible_products().is_empty()
    }

    /// `"All"` followed by one tab per user in fixture order.
    pub fn user_tabs(&self) -> Vec<UserTab> {
        let selected = self.state.selected_user();
        let mut tabs = vec![UserTab {
            label: "All".to_string(),
            selection: UserSelection::All,
            active: selected.is_all(),
        }];
        tabs.extend(self.catalog.users().iter().map(|user| UserTab {
            label: user.name.clone(),
            selection: UserSelection::Named(user.name.clone()),
            active: selected.as_str() == user.name && !selected.is_all(),
        }));
        tabs
    }

    /// One button per category in fixture order.
    pub fn category_buttons(&self) -> Vec<CategoryButton> {
        let selected = self.state.selected_categories();
        self.catalog
            .categories()
            .iter()
            .map(|category| CategoryButton {
                id: category.id,
                title: category.title.clone(),
                selected: selected.contains(category.id),
            })
            .collect()
    }

    /// The "All" category button is highlighted when nothing is selected.
    pub fn all_categories_active(&self) -> bool {
        self.state.selected_categories().is_empty()
    }

    /// The clear button is only shown while there is search text.
    pub fn show_clear_search(&self) -> bool {
        !self.state.search_query().is_empty()
    }
}
