//! JSON Schema check for catalog documents.
//!
//! The schema ships inside the binary so installed tools validate documents
//! the same way the test suite does, regardless of the working directory.

use anyhow::{Context, Result, anyhow, bail};
use jsonschema::JSONSchema;
use serde_json::Value;

const CATALOG_SCHEMA: &str = include_str!("../schema/catalog.schema.json");

/// Parse the embedded catalog schema.
pub fn catalog_schema() -> Result<Value> {
    serde_json::from_str(CATALOG_SCHEMA).context("parsing embedded catalog schema")
}

/// Validate a parsed document, reporting every schema violation.
///
/// `origin` names the document in error messages (usually its path).
pub fn validate_catalog_document(document: &Value, origin: &str) -> Result<()> {
    let schema = catalog_schema()?;
    let compiled = JSONSchema::compile(&schema)
        .map_err(|err| anyhow!("compiling catalog schema: {err}"))?;

    if let Err(errors) = compiled.validate(document) {
        let details = errors
            .map(|err| {
                let path = err.instance_path.to_string();
                if path.is_empty() {
                    err.to_string()
                } else {
                    format!("{path}: {err}")
                }
            })
            .collect::<Vec<_>>()
            .join("\n");
        bail!("catalog document {origin} failed schema validation:\n{details}");
    }
    Ok(())
}
