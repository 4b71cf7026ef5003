//! Plain-text rendering of the filter panel and the product table.

use crate::browser::{Browser, UserTone};
use crate::model::FullProduct;
use tabled::{builder::Builder, settings::Style};

/// Shown in place of the table when no product passes the filters.
pub const NO_MATCHES_MESSAGE: &str = "No products matching selected criteria";

/// One rendered table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRow {
    pub id: String,
    pub product: String,
    /// `"{icon} - {title}"`, empty when the category did not resolve.
    pub category: String,
    /// Owner name, empty when the owner did not resolve.
    pub user: String,
    pub tone: Option<UserTone>,
}

impl From<&FullProduct> for ProductRow {
    fn from(product: &FullProduct) -> Self {
        Self {
            id: product.id.0.to_string(),
            product: product.name.clone(),
            category: product
                .category
                .as_ref()
                .map(|c| c.label())
                .unwrap_or_default(),
            user: product.user_name().unwrap_or_default().to_string(),
            tone: product.user.as_ref().map(|u| UserTone::from(u.sex)),
        }
    }
}

impl ProductRow {
    /// Owner cell text; female owners are marked with a trailing `(f)`.
    fn user_cell(&self) -> String {
        match self.tone {
            Some(UserTone::Danger) => format!("{} (f)", self.user),
            _ => self.user.clone(),
        }
    }
}

/// Renders the table for `products`, or [`NO_MATCHES_MESSAGE`] when there are none.
pub fn render_products(products: &[&FullProduct]) -> String {
    if products.is_empty() {
        return NO_MATCHES_MESSAGE.to_string();
    }

    let mut builder = Builder::default();
    builder.push_record(["ID", "Product", "Category", "User"]);
    for product in products {
        let row = ProductRow::from(*product);
        let user = row.user_cell();
        builder.push_record([row.id, row.product, row.category, user]);
    }

    builder.build().with(Style::rounded()).to_string()
}

/// Renders the filter panel: user tabs, search text, category buttons.
///
/// Active tabs and selected categories are wrapped in brackets.
pub fn render_panel(browser: &Browser<'_>) -> String {
    let users: Vec<String> = browser
        .user_tabs()
        .into_iter()
        .map(|tab| mark(&tab.label, tab.active))
        .collect();

    let mut categories = vec![mark("All", browser.all_categories_active())];
    categories.extend(
        browser
            .category_buttons()
            .into_iter()
            .map(|button| mark(&button.title, button.selected)),
    );

    let search = if browser.show_clear_search() {
        format!("\"{}\" (x)", browser.state().search_query())
    } else {
        "-".to_string()
    };

    format!(
        "Users:      {}\nSearch:     {}\nCategories: {}\n",
        users.join(" "),
        search,
        categories.join(" ")
    )
}

fn mark(label: &str, on: bool) -> String {
    if on {
        format!("[{}]", label)
    } else {
        label.to_string()
    }
}
