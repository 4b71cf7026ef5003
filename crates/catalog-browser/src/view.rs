//! # View Builder
//!
//! Joins the raw collections into denormalized [`FullProduct`] records.
//!
//! For each product the category is looked up by `category_id`, then that category's
//! owner by `owner_id`. A reference that does not resolve leaves the field `None`;
//! it is logged and otherwise ignored so the catalog stays renderable with partial data.

use crate::model::{Category, FullProduct, Product, User};
use catalog_framework::RecordStore;
use tracing::{debug, warn};

/// Builds one [`FullProduct`] per product, in product order.
///
/// The output is a 1:1 map of `products`: same length, same order. Pure apart from
/// logging; identical inputs give identical outputs.
pub fn build_full_products(
    products: &RecordStore<Product>,
    categories: &RecordStore<Category>,
    users: &RecordStore<User>,
) -> Vec<FullProduct> {
    let full_products: Vec<FullProduct> = products
        .iter()
        .map(|product| {
            let category = categories.get(product.category_id).cloned();
            if category.is_none() {
                warn!(
                    product_id = %product.id,
                    category_id = %product.category_id,
                    "Dangling category reference"
                );
            }

            let user = category.as_ref().and_then(|category| {
                let owner = users.get(category.owner_id).cloned();
                if owner.is_none() {
                    warn!(
                        category_id = %category.id,
                        owner_id = %category.owner_id,
                        "Dangling owner reference"
                    );
                }
                owner
            });

            FullProduct::new(product.clone(), category, user)
        })
        .collect();

    debug!(size = full_products.len(), "Full products built");
    full_products
}
