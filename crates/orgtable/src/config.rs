//! # Configuration
//!
//! Configuration is managed by [`clapfig`], which handles layered loading from TOML
//! files, environment variables, and programmatic overrides.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Environment variables**: `ORGTABLE__ENDPOINT`, `ORGTABLE__PAGE_SIZE`, etc.
//! 2. **Global Config**: `orgtable.toml` in the data directory.
//! 3. **Compiled Defaults**: Built-in fallbacks via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `endpoint` | `http://localhost:3001/api/company_page` | Record service URL |
//! | `page_size` | `20` | Rows per page |
//! | `default_sort` | `round_valuation_usd` | Column sorted on start-up |
//! | `snapshot` | `true` | Keep `snapshot.json` of the last good fetch |
//!
//! ## CLI Usage
//!
//! - `orgtable config`: Show all configuration values.
//! - `orgtable config get <key>`: Get a specific value.
//! - `orgtable config set <key> <value>`: Set a value.
//! - `orgtable config gen`: Generate a sample `orgtable.toml`.

use confique::Config;
use serde::{Deserialize, Serialize};

use crate::model::Column;
use crate::view::{DEFAULT_PAGE_SIZE, DEFAULT_SORT_COLUMN};

pub const DEFAULT_ENDPOINT: &str = "http://localhost:3001/api/company_page";

/// Configuration for orgtable, stored in `orgtable.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct OrgTableConfig {
    /// URL answering GET with a JSON array of company records.
    #[config(default = "http://localhost:3001/api/company_page")]
    pub endpoint: String,

    /// Rows per page.
    #[config(default = 20)]
    pub page_size: usize,

    /// Column sorted on start-up, in its first direction.
    #[config(default = "round_valuation_usd")]
    pub default_sort: String,

    /// Write the last good fetch to `snapshot.json` and fall back to it when offline.
    #[config(default = true)]
    pub snapshot: bool,
}

impl Default for OrgTableConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            default_sort: DEFAULT_SORT_COLUMN.field().to_string(),
            snapshot: true,
        }
    }
}

impl OrgTableConfig {
    /// The start-up sort column. Unknown names fall back to the default column.
    pub fn default_sort_column(&self) -> Column {
        self.default_sort.parse().unwrap_or_else(|_| {
            tracing::warn!(value = %self.default_sort, "unknown default_sort column, using default");
            DEFAULT_SORT_COLUMN
        })
    }

    /// Page size, never zero.
    pub fn page_size(&self) -> usize {
        self.page_size.max(1)
    }
}
