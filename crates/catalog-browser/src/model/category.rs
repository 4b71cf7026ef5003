use crate::model::UserId;
use catalog_framework::CatalogRecord;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub u32);

impl From<u32> for CategoryId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "category_{}", self.0)
    }
}

/// A product category, owned by a [`User`](crate::model::User).
///
/// `owner_id` is a reference that may dangle; it is resolved when the
/// [`FullProduct`](crate::model::FullProduct) view is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub title: String,
    pub icon: String,
    pub owner_id: UserId,
}

impl Category {
    pub fn new(
        id: u32,
        title: impl Into<String>,
        icon: impl Into<String>,
        owner_id: u32,
    ) -> Self {
        Self {
            id: CategoryId(id),
            title: title.into(),
            icon: icon.into(),
            owner_id: UserId(owner_id),
        }
    }

    /// The label shown in the category column, e.g. `"🍞 - Grocery"`.
    pub fn label(&self) -> String {
        format!("{} - {}", self.icon, self.title)
    }
}

impl CatalogRecord for Category {
    type Id = CategoryId;

    fn id(&self) -> CategoryId {
        self.id
    }
}
