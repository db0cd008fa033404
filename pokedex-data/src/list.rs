use serde::{
    Deserialize,
    Serialize,
};

use crate::NamedResource;

/// A single page of the species listing.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListPage {
    /// Total number of species upstream.
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

impl ListPage {
    /// A page with no results and no neighbors.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Checks if the page has no results.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Checks if there is a page after this one.
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}
