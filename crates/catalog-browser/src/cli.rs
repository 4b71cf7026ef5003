//! Command-line front end.
//!
//! Flags drive the same transitions a user would trigger in the filter panel, in this
//! order: `--user`, `--search`, then one category toggle per `--category`.

use crate::browser::Browser;
use crate::catalog::Catalog;
use crate::config::BrowserConfig;
use crate::error::FixtureError;
use crate::model::CategoryId;
use crate::render::{render_panel, render_products};
use clap::Parser;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "catalog-browser")]
#[command(version, about = "Browse the product catalog filtered by owner, name and category")]
pub struct Cli {
    #[command(flatten)]
    pub config: BrowserConfig,

    /// Only show products owned by this user ("all" for everyone)
    #[arg(long, short = 'u', default_value = "all")]
    pub user: String,

    /// Case-insensitive search in product names
    #[arg(long, short = 's', default_value = "")]
    pub search: String,

    /// Toggle a category by id (repeatable)
    #[arg(long = "category", short = 'c', value_name = "ID")]
    pub categories: Vec<u32>,

    /// Print the filter panel above the table
    #[arg(long)]
    pub panel: bool,
}

/// Builds the catalog, applies the requested filters and returns the rendered output.
pub fn run(cli: &Cli) -> Result<String, FixtureError> {
    let catalog = Catalog::from_config(&cli.config)?;
    let mut browser = Browser::new(&catalog);

    browser.select_user(cli.user.as_str());
    browser.set_search_query(cli.search.as_str());
    for &id in &cli.categories {
        browser.toggle_category(CategoryId(id));
    }

    let visible = browser.visible_products();
    info!(visible = visible.len(), total = catalog.full_products().len(), "Rendering");

    let mut output = String::new();
    if cli.panel {
        output.push_str(&render_panel(&browser));
        output.push('\n');
    }
    output.push_str(&render_products(&visible));
    output.push('\n');
    Ok(output)
}
