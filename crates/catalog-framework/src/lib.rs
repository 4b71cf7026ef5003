//! # Catalog Framework
//!
//! Domain-agnostic building blocks for read-only catalog views over static datasets.
//!
//! ## Architecture Overview
//!
//! The framework separates concerns into two layers:
//!
//! 1. **Record Layer** ([`CatalogRecord`]) - what a record is and how it is identified
//! 2. **Store Layer** ([`RecordStore`]) - ordered, immutable storage with id lookup
//!
//! Domain crates define their records, implement [`CatalogRecord`] once per type, and get
//! ordered iteration and first-match id resolution for free. Joins between collections
//! are then plain `Option`-returning lookups.
//!
//! ```rust
//! use catalog_framework::{CatalogRecord, RecordStore};
//!
//! #[derive(Clone, Debug)]
//! struct Owner { id: u32, name: String }
//!
//! #[derive(Clone, Debug)]
//! struct Pet { id: u32, owner_id: u32 }
//!
//! impl CatalogRecord for Owner {
//!     type Id = u32;
//!     fn id(&self) -> u32 { self.id }
//! }
//!
//! impl CatalogRecord for Pet {
//!     type Id = u32;
//!     fn id(&self) -> u32 { self.id }
//! }
//!
//! let owners = RecordStore::new(vec![Owner { id: 1, name: "Ann".into() }]);
//! let pets = RecordStore::new(vec![Pet { id: 7, owner_id: 1 }, Pet { id: 8, owner_id: 2 }]);
//!
//! let names: Vec<Option<&str>> = pets
//!     .iter()
//!     .map(|pet| owners.get(pet.owner_id).map(|o| o.name.as_str()))
//!     .collect();
//! assert_eq!(names, vec![Some("Ann"), None]);
//! ```
//!
//! ## Concurrency Model
//!
//! There is none. Stores are immutable after construction and every operation is a
//! synchronous, allocation-light read.

pub mod entity;
pub mod store;
pub mod tracing;

// Re-export core types for convenience
pub use entity::CatalogRecord;
pub use store::RecordStore;
