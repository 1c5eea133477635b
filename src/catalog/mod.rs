//! Lookup snapshot of tags and users used for resolution
//!
//! The snapshot is read from a JSON file:
//!
//! ```json
//! {
//!   "tags": [{"id": 1, "name": "needs review", "colorName": "red"}],
//!   "users": [{"slug": "jdoe", "firstName": "Jane", "lastName": "Doe"}]
//! }
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::filters::{ResolutionIssue, parse_query, resolve_with_report};
use crate::models::{SearchOptions, Tag, User};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub users: Vec<User>,
}

impl Catalog {
    pub fn new(tags: Vec<Tag>, users: Vec<User>) -> Self {
        Self { tags, users }
    }

    /// Parse and resolve `query` against this snapshot
    pub fn resolve(&self, query: &str) -> SearchOptions {
        self.resolve_with_report(query).0
    }

    pub fn resolve_with_report(&self, query: &str) -> (SearchOptions, Vec<ResolutionIssue>) {
        resolve_with_report(&parse_query(query), &self.tags, &self.users)
    }
}

/// Load a catalog snapshot from a JSON file
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;
    let catalog: Catalog = serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse catalog JSON: {}", path.display()))?;

    info!(
        path = %path.display(),
        tags = catalog.tags.len(),
        users = catalog.users.len(),
        "loaded catalog"
    );

    Ok(catalog)
}
