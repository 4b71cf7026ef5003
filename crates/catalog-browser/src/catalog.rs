//! # Catalog Context
//!
//! The [`Catalog`] is the read-only context built once at startup: the three source
//! collections, the derived [`FullProduct`] list and the configured [`FilterMode`].
//! Sessions borrow it; nothing in it changes afterwards.

use crate::config::BrowserConfig;
use crate::error::FixtureError;
use crate::filter::{legacy_visible_products, visible_products, FilterMode, FilterState};
use crate::fixtures::Fixtures;
use crate::model::{Category, FullProduct, Product, User};
use crate::view::build_full_products;
use catalog_framework::{CatalogRecord, RecordStore};
use tracing::{info, warn};

/// Immutable catalog data plus the filtering behaviour to apply to it.
///
/// # Example
///
/// ```rust
/// use catalog_browser::catalog::Catalog;
/// use catalog_browser::filter::{FilterMode, FilterState};
/// use catalog_browser::fixtures::Fixtures;
///
/// let catalog = Catalog::new(Fixtures::embedded().unwrap(), FilterMode::Intended);
///
/// let mut state = FilterState::new();
/// state.select_user("Anna");
/// assert!(catalog
///     .visible_products(&state)
///     .iter()
///     .all(|p| p.user_name() == Some("Anna")));
/// ```
#[derive(Debug, Clone)]
pub struct Catalog {
    users: RecordStore<User>,
    categories: RecordStore<Category>,
    products: RecordStore<Product>,
    full_products: Vec<FullProduct>,
    mode: FilterMode,
}

impl Catalog {
    /// Builds the catalog: stores the collections and derives the full products once.
    pub fn new(fixtures: Fixtures, mode: FilterMode) -> Self {
        let users = RecordStore::new(fixtures.users);
        let categories = RecordStore::new(fixtures.categories);
        let products = RecordStore::new(fixtures.products);

        report_duplicates("User", &users);
        report_duplicates("Category", &categories);
        report_duplicates("Product", &products);

        let full_products = build_full_products(&products, &categories, &users);

        info!(
            %mode,
            users = users.len(),
            categories = categories.len(),
            products = full_products.len(),
            "Catalog ready"
        );

        Self {
            users,
            categories,
            products,
            full_products,
            mode,
        }
    }

    /// Loads the fixtures named by `config` and builds the catalog.
    pub fn from_config(config: &BrowserConfig) -> Result<Self, FixtureError> {
        let fixtures = Fixtures::load(config.fixtures_dir.as_deref())?;
        Ok(Self::new(fixtures, config.mode))
    }

    pub fn users(&self) -> &RecordStore<User> {
        &self.users
    }

    pub fn categories(&self) -> &RecordStore<Category> {
        &self.categories
    }

    pub fn products(&self) -> &RecordStore<Product> {
        &self.products
    }

    /// Every product, denormalized, in source order.
    pub fn full_products(&self) -> &[FullProduct] {
        &self.full_products
    }

    pub fn mode(&self) -> FilterMode {
        self.mode
    }

    /// Products visible under `state`, in source order.
    pub fn visible_products(&self, state: &FilterState) -> Vec<&FullProduct> {
        match self.mode {
            FilterMode::Intended => visible_products(&self.full_products, state),
            FilterMode::Legacy => legacy_visible_products(&self.full_products, state, &self.users),
        }
    }
}

fn report_duplicates<T: CatalogRecord>(record_type: &str, store: &RecordStore<T>) {
    let duplicates = store.duplicate_ids();
    if !duplicates.is_empty() {
        warn!(record_type, ?duplicates, "Duplicate ids in fixtures");
    }
}
