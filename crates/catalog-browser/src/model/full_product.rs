use crate::model::{Category, CategoryId, Product, ProductId, User};
use catalog_framework::CatalogRecord;
use serde::Serialize;

/// A product denormalized with its resolved category and owning user.
///
/// Either reference may fail to resolve; the corresponding field is then `None`.
/// When `category` is `None`, `user` is always `None` as well, since there is no
/// owner to look up.
///
/// Values are built once by [`build_full_products`](crate::view::build_full_products)
/// and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FullProduct {
    pub id: ProductId,
    pub name: String,
    pub category_id: CategoryId,
    pub category: Option<Category>,
    pub user: Option<User>,
}

impl FullProduct {
    pub fn new(product: Product, category: Option<Category>, user: Option<User>) -> Self {
        Self {
            id: product.id,
            name: product.name,
            category_id: product.category_id,
            category,
            user,
        }
    }

    /// Name of the owning user, if resolved.
    pub fn user_name(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.name.as_str())
    }

    /// Id of the resolved category. Unlike `category_id`, this is `None` for a
    /// dangling reference.
    pub fn resolved_category_id(&self) -> Option<CategoryId> {
        self.category.as_ref().map(|c| c.id)
    }
}

impl CatalogRecord for FullProduct {
    type Id = ProductId;

    fn id(&self) -> ProductId {
        self.id
    }
}
