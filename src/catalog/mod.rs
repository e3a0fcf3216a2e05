//! Navigation catalog for the documentation set.
//!
//! `Catalog` holds the sections and entries and answers the derived views a
//! viewer needs (categories per section, entries per section, entries grouped
//! by category). `Catalog::builtin()` is the shipped table; `CatalogIndex`
//! adds validation and keyed lookups on top of any catalog.

pub mod builtin;
pub mod identity;
pub mod index;
pub mod model;
mod query;

pub use builtin::{DESIGN_PATTERNS, JS_FUNDAMENTALS};
pub use identity::{EntryId, SectionId};
pub use index::{CatalogIndex, load_document};
pub use model::{CATALOG_SCHEMA_VERSION, Catalog, CatalogDocument, Entry, Section};
