use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Environment variable naming the catalog file
pub const CATALOG_ENV_VAR: &str = "EVIDENCE_QUERY_CATALOG";

const APP_DIR_NAME: &str = "evidence-query";
const CATALOG_FILENAME: &str = "catalog.json";

/// Where a catalog path came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// Named by flag or environment variable; must exist
    Explicit(PathBuf),
    /// Platform config directory; may be absent
    Default(PathBuf),
}

/// Resolve the catalog location: explicit path, then env var, then config dir
pub fn catalog_path(explicit: Option<PathBuf>) -> Result<CatalogSource> {
    if let Some(path) = explicit {
        return Ok(CatalogSource::Explicit(path));
    }

    if let Some(path) = env::var_os(CATALOG_ENV_VAR).filter(|v| !v.is_empty()) {
        return Ok(CatalogSource::Explicit(PathBuf::from(path)));
    }

    let config_dir = dirs::config_dir().context("Failed to get platform config directory")?;
    Ok(CatalogSource::Default(config_dir.join(APP_DIR_NAME).join(CATALOG_FILENAME)))
}
