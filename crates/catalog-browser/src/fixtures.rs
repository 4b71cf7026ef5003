//! # Fixture Loading
//!
//! The three source collections arrive as camelCase JSON arrays, one file per
//! collection: `users.json`, `categories.json`, `products.json`.
//!
//! The default dataset is compiled into the binary; a directory with the same three
//! files can replace it. Records are deserialized as-is: dangling references and
//! duplicate ids are left for the catalog to report, never rejected here.

use crate::error::FixtureError;
use crate::model::{Category, Product, User};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub const USERS_FILE: &str = "users.json";
pub const CATEGORIES_FILE: &str = "categories.json";
pub const PRODUCTS_FILE: &str = "products.json";

const EMBEDDED_USERS: &str = include_str!("../fixtures/users.json");
const EMBEDDED_CATEGORIES: &str = include_str!("../fixtures/categories.json");
const EMBEDDED_PRODUCTS: &str = include_str!("../fixtures/products.json");

/// The raw source collections, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fixtures {
    pub users: Vec<User>,
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
}

impl Fixtures {
    pub fn new(users: Vec<User>, categories: Vec<Category>, products: Vec<Product>) -> Self {
        Self {
            users,
            categories,
            products,
        }
    }

    /// The dataset shipped with the crate.
    pub fn embedded() -> Result<Self, FixtureError> {
        let origin = Path::new("<embedded>");
        Ok(Self {
            users: parse(EMBEDDED_USERS, &origin.join(USERS_FILE))?,
            categories: parse(EMBEDDED_CATEGORIES, &origin.join(CATEGORIES_FILE))?,
            products: parse(EMBEDDED_PRODUCTS, &origin.join(PRODUCTS_FILE))?,
        })
    }

    /// Loads `users.json`, `categories.json` and `products.json` from `dir`.
    pub fn load_dir(dir: &Path) -> Result<Self, FixtureError> {
        let fixtures = Self {
            users: load_file(&dir.join(USERS_FILE))?,
            categories: load_file(&dir.join(CATEGORIES_FILE))?,
            products: load_file(&dir.join(PRODUCTS_FILE))?,
        };
        info!(
            dir = %dir.display(),
            users = fixtures.users.len(),
            categories = fixtures.categories.len(),
            products = fixtures.products.len(),
            "Fixtures loaded"
        );
        Ok(fixtures)
    }

    /// Loads from `dir` when given, otherwise falls back to the embedded dataset.
    pub fn load(dir: Option<&Path>) -> Result<Self, FixtureError> {
        match dir {
            Some(dir) => Self::load_dir(dir),
            None => Self::embedded(),
        }
    }
}

fn load_file<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, FixtureError> {
    let content = fs::read_to_string(path).map_err(|source| FixtureError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&content, path)
}

fn parse<T: DeserializeOwned>(content: &str, path: &Path) -> Result<Vec<T>, FixtureError> {
    serde_json::from_str(content).map_err(|source| FixtureError::Parse {
        path: PathBuf::from(path),
        source,
    })
}
