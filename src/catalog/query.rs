//! Derived views over a catalog.
//!
//! Every query here is total: any string is an acceptable section id, and an
//! id that matches nothing yields an empty result instead of an error. Results
//! borrow from the catalog and keep definition order, which viewers rely on as
//! display order.

use crate::catalog::model::{Catalog, Entry};
use indexmap::IndexMap;
use std::collections::HashSet;

impl Catalog {
    /// Distinct category labels used by a section, in first-occurrence order.
    ///
    /// Null and empty categories are dropped.
    pub fn categories_for_section(&self, section_id: &str) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut categories = Vec::new();
        for entry in self.entries().iter().filter(|e| e.in_section(section_id)) {
            if let Some(label) = entry.category_label() {
                if seen.insert(label) {
                    categories.push(label);
                }
            }
        }
        categories
    }

    /// Entries whose `section` equals `section_id` exactly, in definition order.
    pub fn entries_for_section(&self, section_id: &str) -> Vec<&Entry> {
        self.entries()
            .iter()
            .filter(|entry| entry.in_section(section_id))
            .collect()
    }

    /// Section entries bucketed by category.
    ///
    /// Keys follow `categories_for_section`. Entries without a category are
    /// left out entirely; there is no catch-all bucket for them.
    pub fn group_entries_by_category(&self, section_id: &str) -> IndexMap<&str, Vec<&Entry>> {
        let entries = self.entries_for_section(section_id);
        self.categories_for_section(section_id)
            .into_iter()
            .map(|category| {
                let bucket: Vec<&Entry> = entries
                    .iter()
                    .copied()
                    .filter(|entry| entry.category_label() == Some(category))
                    .collect();
                (category, bucket)
            })
            .collect()
    }
}
