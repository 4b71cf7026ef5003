//! # Filter Engine
//!
//! Computes the visible subset of a [`FullProduct`](crate::model::FullProduct) list for a
//! given [`FilterState`].
//!
//! ## Structure
//!
//! - [`state`] - [`FilterState`] and its transitions
//! - [`actions`] - [`FilterAction`], the transitions as values
//! - [`engine`] - predicates and the [`visible_products`] pipeline
//! - [`legacy`] - the [`FilterMode::Legacy`] pipeline
//! - [`mode`] - [`FilterMode`]
//!
//! ## Pipeline
//!
//! 1. **User** - `"all"` keeps everything, otherwise the owner's name must match exactly.
//! 2. **Search** - case-insensitive substring match on the product name.
//! 3. **Category** - an empty selection keeps everything, otherwise the resolved
//!    category must be selected.
//!
//! Results keep the relative order of the input. Nothing here can fail: a name that
//! matches no user simply gives an empty result.
//!
//! ```rust
//! use catalog_browser::filter::{visible_products, FilterState};
//! use catalog_browser::model::{FullProduct, Product};
//!
//! let products = vec![
//!     FullProduct::new(Product::new(1, "Bread and butter", 1), None, None),
//!     FullProduct::new(Product::new(2, "Milk", 1), None, None),
//! ];
//!
//! let mut state = FilterState::new();
//! state.set_search_query("bread");
//! let visible = visible_products(&products, &state);
//! assert_eq!(visible.len(), 1);
//! ```

pub mod actions;
pub mod engine;
pub mod legacy;
pub mod mode;
pub mod state;

pub use actions::*;
pub use engine::*;
pub use legacy::*;
pub use mode::*;
pub use state::*;
