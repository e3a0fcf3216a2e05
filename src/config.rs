//! Environment-driven configuration shared by the binaries.
//!
//! Everything is optional: without any variables set, tools use the shipped
//! catalog, look for `content/` above the working directory, and log warnings
//! only.

use crate::catalog::CatalogIndex;
use anyhow::Result;
use std::env;
use std::path::PathBuf;
use tracing::debug;

/// Path to a catalog document that replaces the shipped table.
pub const CATALOG_ENV: &str = "PATTERNBOOK_CATALOG";
/// Directory that entry `file` paths are resolved against.
pub const CONTENT_ROOT_ENV: &str = "PATTERNBOOK_ROOT";
/// `tracing-subscriber` filter directive for the binaries.
pub const LOG_ENV: &str = "PATTERNBOOK_LOG";

/// Where the active catalog comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Builtin,
    File(PathBuf),
}

impl CatalogSource {
    /// Pick the source from `PATTERNBOOK_CATALOG`; blank values mean builtin.
    pub fn from_env() -> Self {
        Self::from_override(env::var(CATALOG_ENV).ok().as_deref())
    }

    /// Explicit override first (e.g. a CLI flag), then the environment.
    pub fn resolve(cli_override: Option<&str>) -> Self {
        match cli_override {
            Some(path) if !path.trim().is_empty() => Self::from_override(Some(path)),
            _ => Self::from_env(),
        }
    }

    fn from_override(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(path) if !path.is_empty() => CatalogSource::File(PathBuf::from(path)),
            _ => CatalogSource::Builtin,
        }
    }

    /// Build a validated index from this source.
    pub fn load(&self) -> Result<CatalogIndex> {
        debug!(source = ?self, "loading catalog");
        match self {
            CatalogSource::Builtin => CatalogIndex::builtin(),
            CatalogSource::File(path) => CatalogIndex::load(path),
        }
    }
}
