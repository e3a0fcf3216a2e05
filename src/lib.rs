//! Shared library for the patternbook documentation catalog.
//!
//! The crate exposes the navigation model (sections and entries), the shipped
//! catalog table, and the derived views a documentation viewer renders from
//! it. Around that core sit the optional pieces tools need: validation,
//! catalog documents checked against `schema/catalog.schema.json`, content
//! path resolution, and environment configuration for the `catalog` binary.

pub mod catalog;
pub mod config;
pub mod content;
pub mod logging;
pub mod schema;
pub mod validation;

pub use catalog::{
    CATALOG_SCHEMA_VERSION, Catalog, CatalogDocument, CatalogIndex, DESIGN_PATTERNS, Entry,
    EntryId, JS_FUNDAMENTALS, Section, SectionId, load_document,
};
pub use config::CatalogSource;
pub use content::{find_content_root, resolve_entry_file};
pub use schema::validate_catalog_document;
pub use validation::validate_catalog;
