//! Filter predicates and the narrowing pipeline.
//!
//! Each predicate is independent, so the order of the pipeline does not change the
//! result. It is fixed anyway (user, search, category) so that step-by-step logs are
//! comparable between runs.

use super::{CategorySelection, FilterState, UserSelection};
use crate::model::FullProduct;
use tracing::debug;

/// `All` keeps everything; a name keeps only products whose owner has exactly that name.
/// A product without a resolved owner never matches a name.
pub fn matches_user(product: &FullProduct, selection: &UserSelection) -> bool {
    match selection {
        UserSelection::All => true,
        UserSelection::Named(name) => product.user_name() == Some(name.as_str()),
    }
}

/// Case-insensitive substring match on the product name.
///
/// `folded_query` must already be lowercased. An empty query matches everything.
pub fn matches_query(product: &FullProduct, folded_query: &str) -> bool {
    folded_query.is_empty() || product.name.to_lowercase().contains(folded_query)
}

/// An empty selection keeps everything; otherwise the product's resolved category must
/// be selected. A product with a dangling category never matches a non-empty selection.
pub fn matches_categories(product: &FullProduct, selection: &CategorySelection) -> bool {
    selection.is_empty()
        || product
            .resolved_category_id()
            .is_some_and(|id| selection.contains(id))
}

/// Returns the products passing every active filter, in their original order.
pub fn visible_products<'a>(
    products: &'a [FullProduct],
    state: &FilterState,
) -> Vec<&'a FullProduct> {
    let by_user: Vec<&FullProduct> = products
        .iter()
        .filter(|product| matches_user(product, state.selected_user()))
        .collect();
    debug!(
        user = %state.selected_user(),
        before = products.len(),
        after = by_user.len(),
        "User filter"
    );

    let folded_query = state.search_query().to_lowercase();
    let by_query: Vec<&FullProduct> = by_user
        .into_iter()
        .filter(|product| matches_query(product, &folded_query))
        .collect();
    debug!(query = state.search_query(), after = by_query.len(), "Search filter");

    let visible: Vec<&FullProduct> = by_query
        .into_iter()
        .filter(|product| matches_categories(product, state.selected_categories()))
        .collect();
    debug!(
        categories = state.selected_categories().len(),
        after = visible.len(),
        "Category filter"
    );

    visible
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, CategoryId, Product, ProductId, Sex, User};

    fn full(
        id: u32,
        name: &str,
        category: Option<(u32, &str)>,
        user: Option<&str>,
    ) -> FullProduct {
        let category_id = category.map(|(id, _)| id).unwrap_or(999);
        FullProduct::new(
            Product::new(id, name, category_id),
            category.map(|(id, title)| Category::new(id, title, "*", 1)),
            user.map(|name| User::new(1, name, Sex::Male)),
        )
    }

    fn sample() -> Vec<FullProduct> {
        vec![
            full(1, "Milk", Some((2, "Drinks")), Some("Roma")),
            full(2, "Bread and butter", Some((1, "Grocery")), Some("Anna")),
            full(3, "Banana", Some((3, "Fruits")), Some("Anna")),
            full(4, "Car", None, None),
            full(5, "Breadsticks", Some((1, "Grocery")), Some("Roma")),
        ]
    }

    fn ids(products: &[&FullProduct]) -> Vec<u32> {
        products.iter().map(|p| p.id.0).collect()
    }

    #[test]
    fn test_unfiltered_state_shows_everything() {
        let products = sample();
        let visible = visible_products(&products, &FilterState::new());
        assert_eq!(ids(&visible), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_user_filter_is_exact_and_case_sensitive() {
        let products = sample();
        let mut state = FilterState::new();

        state.select_user("Anna");
        assert_eq!(ids(&visible_products(&products, &state)), vec![2, 3]);

        state.select_user("anna");
        assert!(visible_products(&products, &state).is_empty());
    }

    #[test]
    fn test_unknown_user_yields_empty_result() {
        let products = sample();
        let mut state = FilterState::new();
        state.select_user("Nobody");
        assert!(visible_products(&products, &state).is_empty());
    }

    #[test]
    fn test_search_folds_case() {
        let products = sample();
        let mut state = FilterState::new();
        state.set_search_query("bread");
        assert_eq!(ids(&visible_products(&products, &state)), vec![2, 5]);

        state.set_search_query("BREAD AND");
        assert_eq!(ids(&visible_products(&products, &state)), vec![2]);
    }

    #[test]
    fn test_search_does_not_trim() {
        let products = sample();
        let mut state = FilterState::new();
        state.set_search_query(" bread");
        assert!(visible_products(&products, &state).is_empty());
    }

    #[test]
    fn test_category_filter() {
        let products = sample();
        let mut state = FilterState::new();
        state.toggle_category(CategoryId(1));
        state.toggle_category(CategoryId(3));
        assert_eq!(ids(&visible_products(&products, &state)), vec![2, 3, 5]);

        // The dangling product's raw id never matches
        state.reset_categories();
        state.toggle_category(CategoryId(999));
        assert!(visible_products(&products, &state).is_empty());
    }

    #[test]
    fn test_filters_intersect() {
        let products = sample();
        let mut state = FilterState::new();
        state.select_user("Roma");
        state.set_search_query("bread");
        state.toggle_category(CategoryId(1));
        assert_eq!(ids(&visible_products(&products, &state)), vec![5]);
    }

    #[test]
    fn test_predicates_commute() {
        let products = sample();
        let selection = UserSelection::from("Anna");

        let user_then_query: Vec<ProductId> = products
            .iter()
            .filter(|p| matches_user(p, &selection))
            .filter(|p| matches_query(p, "b"))
            .map(|p| p.id)
            .collect();
        let query_then_user: Vec<ProductId> = products
            .iter()
            .filter(|p| matches_query(p, "b"))
            .filter(|p| matches_user(p, &selection))
            .map(|p| p.id)
            .collect();

        assert_eq!(user_then_query, query_then_user);
        assert_eq!(user_then_query, vec![ProductId(2), ProductId(3)]);
    }

    #[test]
    fn test_idempotent() {
        let products = sample();
        let mut state = FilterState::new();
        state.set_search_query("a");
        assert_eq!(
            visible_products(&products, &state),
            visible_products(&products, &state)
        );
    }
}
