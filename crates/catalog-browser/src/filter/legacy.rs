//! Compatibility pipeline for [`FilterMode::Legacy`](super::FilterMode::Legacy).
//!
//! The user filter only narrows when the selected name belongs to a known user; any other
//! name falls through and keeps everything. The category selection is ignored.

use super::engine::{matches_query, matches_user};
use super::{FilterState, UserSelection};
use crate::model::{FullProduct, User};
use catalog_framework::RecordStore;
use tracing::debug;

pub fn legacy_visible_products<'a>(
    products: &'a [FullProduct],
    state: &FilterState,
    known_users: &RecordStore<User>,
) -> Vec<&'a FullProduct> {
    let selection = match state.selected_user() {
        UserSelection::Named(name) if known_users.iter().any(|user| &user.name == name) => {
            state.selected_user().clone()
        }
        _ => UserSelection::All,
    };

    let folded_query = state.search_query().to_lowercase();
    let visible: Vec<&FullProduct> = products
        .iter()
        .filter(|product| matches_user(product, &selection))
        .filter(|product| matches_query(product, &folded_query))
        .collect();

    debug!(
        user = %selection,
        ignored_categories = state.selected_categories().len(),
        after = visible.len(),
        "Legacy filter"
    );
    visible
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, CategoryId, Product, Sex};

    fn fixture() -> (Vec<FullProduct>, RecordStore<User>) {
        let max = User::new(1, "Max", Sex::Male);
        let products = vec![
            FullProduct::new(
                Product::new(100, "Banana", 10),
                Some(Category::new(10, "Fruits", "🍏", 1)),
                Some(max.clone()),
            ),
            FullProduct::new(Product::new(101, "Car", 999), None, None),
        ];
        (products, RecordStore::new(vec![max]))
    }

    #[test]
    fn test_known_user_narrows() {
        let (products, users) = fixture();
        let mut state = FilterState::new();
        state.select_user("Max");

        let visible = legacy_visible_products(&products, &state, &users);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Banana");
    }

    #[test]
    fn test_unknown_user_keeps_everything() {
        let (products, users) = fixture();
        let mut state = FilterState::new();
        state.select_user("Zed");

        assert_eq!(legacy_visible_products(&products, &state, &users).len(), 2);
    }

    #[test]
    fn test_categories_never_narrow() {
        let (products, users) = fixture();
        let mut state = FilterState::new();
        state.append_category(CategoryId(10));

        assert_eq!(legacy_visible_products(&products, &state, &users).len(), 2);
    }

    #[test]
    fn test_search_still_applies() {
        let (products, users) = fixture();
        let mut state = FilterState::new();
        state.set_search_query("CAR");

        let visible = legacy_visible_products(&products, &state, &users);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Car");
    }
}
