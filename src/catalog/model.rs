//! Catalog data model and the JSON document it is stored as.
//!
//! The types mirror `schema/catalog.schema.json` so documents, the built-in
//! table, and the CLI output all share one shape. Use `CatalogIndex` for
//! validation and id lookup; use `Catalog` directly for the derived views.

use crate::catalog::identity::{EntryId, SectionId};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// The only document version this crate reads or writes.
pub const CATALOG_SCHEMA_VERSION: &str = "patternbook_catalog_v1";

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
/// Top-level grouping of documentation content.
pub struct Section {
    pub id: SectionId,
    pub title: String,
    pub icon: String,
    pub description: String,
    pub color: String,
    pub gradient: String,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
/// Reference to a single documentation page plus its display metadata.
///
/// `file` is copied verbatim from configuration and never interpreted here;
/// see `resolve_entry_file` for the viewer-side lookup.
pub struct Entry {
    pub id: EntryId,
    pub title: String,
    pub icon: String,
    pub file: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub section: Option<SectionId>,
}

impl Entry {
    /// True when the entry belongs to `section_id` (null never matches).
    pub fn in_section(&self, section_id: &str) -> bool {
        self.section
            .as_ref()
            .is_some_and(|section| section.as_str() == section_id)
    }

    /// The grouping label, or `None` when absent or empty.
    pub fn category_label(&self) -> Option<&str> {
        self.category.as_deref().filter(|label| !label.is_empty())
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
/// Immutable list of sections and entries.
///
/// Definition order is display order; every derived view preserves it.
pub struct Catalog {
    sections: Vec<Section>,
    entries: Vec<Entry>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
/// On-disk form of a catalog.
pub struct CatalogDocument {
    pub schema_version: String,
    pub sections: Vec<Section>,
    pub entries: Vec<Entry>,
}

impl Catalog {
    pub fn new(sections: Vec<Section>, entries: Vec<Entry>) -> Self {
        Self { sections, entries }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Linear lookup by section id; `CatalogIndex` offers keyed lookups.
    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.id.as_str() == id)
    }

    pub fn entry(&self, id: &str) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.id.as_str() == id)
    }

    /// Parse a catalog document without checking catalog invariants.
    pub fn from_json_str(data: &str) -> Result<Self> {
        let document: CatalogDocument =
            serde_json::from_str(data).context("parsing catalog document")?;
        Ok(document.into())
    }

    /// Snapshot the catalog as a versioned document.
    pub fn to_document(&self) -> CatalogDocument {
        CatalogDocument {
            schema_version: CATALOG_SCHEMA_VERSION.to_string(),
            sections: self.sections.clone(),
            entries: self.entries.clone(),
        }
    }
}

impl From<CatalogDocument> for Catalog {
    fn from(document: CatalogDocument) -> Self {
        Self::new(document.sections, document.entries)
    }
}
