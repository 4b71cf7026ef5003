//! # CatalogRecord Trait
//!
//! The `CatalogRecord` trait defines the contract every static dataset record (User,
//! Category, Product, …) must implement to be held by a [`RecordStore`](crate::RecordStore).
//! It fixes the record's identifier type and how to read it, which is all the store needs
//! to offer ordered iteration plus lookup by id.
//!
//! # Architecture Note
//! By defining a contract that all record types satisfy, the lookup logic used by the
//! join is written *once* and reused for every collection.
//!
//! The associated `Id` type keeps lookups type-safe: a `UserId` can't be used to look
//! up a category, even though both wrap the same integer.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any record must implement to be stored in a [`RecordStore`](crate::RecordStore).
pub trait CatalogRecord: Clone + Debug + Send + Sync + 'static {
    /// The unique identifier for this record.
    /// Must be convertible from `u32`, the integer ids used by the fixture data.
    type Id: Eq + Hash + Copy + Display + Debug + Send + Sync + From<u32>;

    /// Returns the record's identifier.
    fn id(&self) -> Self::Id;
}
