use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Which filtering behaviour a catalog applies.
///
/// `Legacy` reproduces the browser this catalog replaces, bugs included:
/// - selecting a category only ever appends it, a second click never deselects;
/// - the selected categories are collected but never narrow the list;
/// - the user filter only narrows for names of known users, any other name shows everything.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    /// Toggle categories and apply every filter
    #[default]
    Intended,
    /// Reproduce the original append-only categories and unapplied category filter
    Legacy,
}

impl Display for FilterMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilterMode::Intended => write!(f, "intended"),
            FilterMode::Legacy => write!(f, "legacy"),
        }
    }
}
