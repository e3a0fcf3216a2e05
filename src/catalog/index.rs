//! Validated view of a catalog with keyed lookups.
//!
//! The index refuses catalogs that break the id and reference invariants, and
//! documents whose schema_version it does not know, so tooling never renders
//! navigation from a half-broken table.

use crate::catalog::identity::{EntryId, SectionId};
use crate::catalog::model::{CATALOG_SCHEMA_VERSION, Catalog, CatalogDocument, Entry, Section};
use crate::schema::validate_catalog_document;
use crate::validation::validate_catalog;
use anyhow::{Context, Result, bail};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Clone)]
/// Catalog plus id maps pointing into its section and entry lists.
pub struct CatalogIndex {
    catalog: Catalog,
    sections_by_id: BTreeMap<SectionId, usize>,
    entries_by_id: BTreeMap<EntryId, usize>,
}

impl CatalogIndex {
    /// Validate `catalog` and build the id maps.
    pub fn new(catalog: Catalog) -> Result<Self> {
        let errors = validate_catalog(&catalog);
        if !errors.is_empty() {
            warn!(count = errors.len(), "catalog failed validation");
            bail!("catalog is invalid:\n{}", errors.join("\n"));
        }

        let sections_by_id = catalog
            .sections()
            .iter()
            .enumerate()
            .map(|(idx, section)| (section.id.clone(), idx))
            .collect();
        let entries_by_id = catalog
            .entries()
            .iter()
            .enumerate()
            .map(|(idx, entry)| (entry.id.clone(), idx))
            .collect();

        debug!(
            sections = catalog.sections().len(),
            entries = catalog.entries().len(),
            "indexed catalog"
        );
        Ok(Self {
            catalog,
            sections_by_id,
            entries_by_id,
        })
    }

    /// Index the shipped catalog.
    pub fn builtin() -> Result<Self> {
        Self::new(Catalog::builtin().clone())
    }

    /// Load, schema-check, and validate a catalog document from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let catalog = load_document(path)?;
        Self::new(catalog).with_context(|| format!("validating catalog {}", path.display()))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Resolve a section by id; `None` for unknown ids.
    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections_by_id
            .get(id)
            .map(|&idx| &self.catalog.sections()[idx])
    }

    /// Resolve an entry by id; `None` for unknown ids.
    pub fn entry(&self, id: &str) -> Option<&Entry> {
        self.entries_by_id
            .get(id)
            .map(|&idx| &self.catalog.entries()[idx])
    }

    /// Section ids in stable sorted order.
    pub fn section_ids(&self) -> impl Iterator<Item = &SectionId> {
        self.sections_by_id.keys()
    }

    /// Entry ids in stable sorted order.
    pub fn entry_ids(&self) -> impl Iterator<Item = &EntryId> {
        self.entries_by_id.keys()
    }
}

/// Read a catalog document, checking the schema and schema_version.
///
/// Catalog invariants are not checked here; pair with `validate_catalog` or
/// `CatalogIndex::new`.
pub fn load_document(path: &Path) -> Result<Catalog> {
    let file = File::open(path).with_context(|| format!("opening catalog {}", path.display()))?;
    let value: Value = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing catalog {}", path.display()))?;

    validate_catalog_document(&value, &path.display().to_string())?;

    let document: CatalogDocument =
        serde_json::from_value(value).with_context(|| format!("loading {}", path.display()))?;
    validate_schema_version(&document.schema_version)
        .with_context(|| format!("loading {}", path.display()))?;

    debug!(path = %path.display(), "loaded catalog document");
    Ok(document.into())
}

fn validate_schema_version(schema_version: &str) -> Result<()> {
    if schema_version != CATALOG_SCHEMA_VERSION {
        bail!(
            "schema_version '{}' is not supported (expected {})",
            schema_version,
            CATALOG_SCHEMA_VERSION
        );
    }
    Ok(())
}
