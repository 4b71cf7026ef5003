//! Represents a product in the catalog.
//!
//! # Catalog Framework
//! This struct implements the [`CatalogRecord`] trait,
//! allowing it to be held by a [`RecordStore`](catalog_framework::RecordStore).
//!
//! The denormalized form with resolved category and owner is
//! [`FullProduct`](crate::model::FullProduct).
use crate::model::CategoryId;
use catalog_framework::CatalogRecord;
use serde::{Deserialize, Serialize};

use std::fmt::Display;

/// Type-safe identifier for Products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "product_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category_id: CategoryId,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier
    /// * `name` - Product name, the field the search filter matches against
    /// * `category_id` - Reference to the owning category (may dangle)
    pub fn new(id: u32, name: impl Into<String>, category_id: u32) -> Self {
        Self {
            id: ProductId(id),
            name: name.into(),
            category_id: CategoryId(category_id),
        }
    }
}

impl CatalogRecord for Product {
    type Id = ProductId;

    fn id(&self) -> ProductId {
        self.id
    }
}
