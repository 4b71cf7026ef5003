use catalog_framework::CatalogRecord;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u32);

impl From<u32> for UserId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "user_{}", self.0)
    }
}

/// A user's sex as recorded in the fixture data.
///
/// The data layer writes the short forms `"m"` / `"f"`; the long forms are accepted too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    #[serde(alias = "m")]
    Male,
    #[serde(alias = "f")]
    Female,
}

/// Represents a user who owns categories.
///
/// # Catalog Framework
/// This struct implements the [`CatalogRecord`] trait,
/// allowing it to be held by a [`RecordStore`](catalog_framework::RecordStore).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub sex: Sex,
}

impl User {
    /// Creates a new User instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier
    /// * `name` - Display name, also the value the user filter matches against
    /// * `sex` - Drives the tone the name is rendered with
    pub fn new(id: u32, name: impl Into<String>, sex: Sex) -> Self {
        Self {
            id: UserId(id),
            name: name.into(),
            sex,
        }
    }
}

impl CatalogRecord for User {
    type Id = UserId;

    fn id(&self) -> UserId {
        self.id
    }
}
