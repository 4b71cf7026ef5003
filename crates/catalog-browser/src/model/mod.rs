//! Pure data structures implementing the [`CatalogRecord`](catalog_framework::CatalogRecord) trait.

pub mod category;
pub mod full_product;
pub mod product;
pub mod user;

pub use category::*;
pub use full_product::*;
pub use product::*;
pub use user::*;
