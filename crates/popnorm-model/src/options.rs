//! Options for table normalization.

use serde::{Deserialize, Serialize};

/// Options controlling cell coercion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizeOptions {
    /// Read population text such as `1,500` as 1500.
    ///
    /// Off by default: grouped digits fail plain numeric parsing and the
    /// cell degrades to zero like any other unparseable value.
    pub accept_thousands_separators: bool,
}

impl NormalizeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_thousands_separators(mut self, enable: bool) -> Self {
        self.accept_thousands_separators = enable;
        self
    }
}
