#[cfg(test)]
#[path = "portfolios_test.rs"]
mod portfolios_test;

use crate::net::types::Portfolio;

/// Dashboard portfolio list state. Starts loading; settles exactly once per
/// fetch into either items or an error.
#[derive(Clone, Debug, PartialEq)]
pub struct PortfoliosState {
    pub items: Vec<Portfolio>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for PortfoliosState {
    fn default() -> Self {
        Self { items: Vec::new(), loading: true, error: None }
    }
}

impl PortfoliosState {
    pub fn loaded(&mut self, items: Vec<Portfolio>) {
        self.items = items;
        self.loading = false;
        self.error = None;
    }

    pub fn failed(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    /// Settled with nothing to show.
    pub fn is_empty(&self) -> bool {
        !self.loading && self.error.is_none() && self.items.is_empty()
    }
}
