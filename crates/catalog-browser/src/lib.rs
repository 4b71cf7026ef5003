//! # Catalog Browser Library
//!
//! Joins static users, categories and products into denormalized
//! [`FullProduct`](model::FullProduct) records and filters them by owner, name and category.
//!
//! ## Module Tour
//!
//! - **[model]**: The source records ([`User`](model::User), [`Category`](model::Category),
//!   [`Product`](model::Product)) and the derived [`FullProduct`](model::FullProduct).
//! - **[fixtures]**: Loading the source collections, embedded or from a directory.
//! - **[view]**: The join, [`build_full_products`](view::build_full_products).
//! - **[filter]**: Filter state, transitions and the filtering pipelines.
//! - **[catalog]**: The immutable [`Catalog`](catalog::Catalog) context built at startup.
//! - **[browser]**: A filtering session over a catalog, as the presentation layer sees it.
//! - **[render]**: Plain-text panel and table.
//! - **[config]** and **[cli]**: Settings and the command-line front end.

pub mod browser;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod fixtures;
pub mod model;
pub mod render;
pub mod view;
