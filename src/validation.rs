//! Integrity checks for catalog configuration.
//!
//! Queries never depend on these checks; they exist so tooling and startup
//! code can surface authoring mistakes (duplicate ids, dangling section
//! references) before a viewer renders a broken menu.

use crate::catalog::Catalog;
use std::collections::BTreeSet;

/// Collect every invariant violation in `catalog`.
pub fn validate_catalog(catalog: &Catalog) -> Vec<String> {
    // Report everything at once rather than stopping at the first problem.
    let mut errors = Vec::new();

    let mut section_ids = BTreeSet::new();
    for (idx, section) in catalog.sections().iter().enumerate() {
        if section.id.as_str().trim().is_empty() {
            errors.push(format!("sections[{idx}] has an empty id"));
            continue;
        }
        if !section_ids.insert(section.id.as_str()) {
            errors.push(format!("duplicate section id '{}'", section.id));
        }
    }

    let mut entry_ids = BTreeSet::new();
    for (idx, entry) in catalog.entries().iter().enumerate() {
        let blank_id = entry.id.as_str().trim().is_empty();
        if blank_id {
            errors.push(format!("entries[{idx}] has an empty id"));
        } else if !entry_ids.insert(entry.id.as_str()) {
            errors.push(format!("duplicate entry id '{}'", entry.id));
        }

        let display = if blank_id {
            format!("entries[{idx}]")
        } else {
            format!("entry '{}'", entry.id)
        };
        if let Some(section) = &entry.section {
            if !section_ids.contains(section.as_str()) {
                errors.push(format!("{display} references unknown section '{section}'"));
            }
        }
        if let Some(category) = &entry.category {
            if category.trim().is_empty() {
                errors.push(format!("{display} has an empty category label"));
            }
        }
        if entry.file.trim().is_empty() {
            errors.push(format!("{display} has no file"));
        }
    }

    errors
}
