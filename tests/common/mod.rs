//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use evidence_query::{Tag, User};
use tempfile::TempDir;

/// Tags used across the end-to-end scenarios
pub fn sample_tags() -> Vec<Tag> {
    vec![
        Tag::new(1, "needs review", "red"),
        Tag::new(2, "done", "green"),
        Tag::new(3, "sql injection", "purple"),
        Tag::new(4, "xss", "yellow"),
    ]
}

/// Users used across the end-to-end scenarios
pub fn sample_users() -> Vec<User> {
    vec![User::new("jdoe", "Jane", "Doe"), User::new("rroe", "Richard", "Roe")]
}

/// Builder for catalog JSON files in a temp directory
pub struct CatalogFileBuilder {
    temp_dir: TempDir,
    tags: Vec<Tag>,
    users: Vec<User>,
}

impl CatalogFileBuilder {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir, tags: Vec::new(), users: Vec::new() }
    }

    pub fn with_tags(mut self, tags: Vec<Tag>) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_users(mut self, users: Vec<User>) -> Self {
        self.users = users;
        self
    }

    /// Use the sample tags and users
    pub fn with_samples(self) -> Self {
        self.with_tags(sample_tags()).with_users(sample_users())
    }

    /// Write `catalog.json` and return the temp dir with the file path
    pub fn build(self) -> (TempDir, PathBuf) {
        let path = self.temp_dir.path().join("catalog.json");
        let json = serde_json::json!({ "tags": self.tags, "users": self.users });
        fs::write(&path, serde_json::to_string_pretty(&json).expect("Failed to serialize"))
            .expect("Failed to write catalog.json");
        (self.temp_dir, path)
    }
}

impl Default for CatalogFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Write arbitrary content as a catalog file
pub fn write_raw_catalog(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("catalog.json");
    fs::write(&path, content).expect("Failed to write catalog.json");
    path
}
