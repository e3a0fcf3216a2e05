use anyhow::{Context, Result, bail};
use serde_json::{Value, json};
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

pub fn catalog_binary() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_catalog"));
    // Keep the caller's environment from selecting a different catalog.
    cmd.env_remove("PATTERNBOOK_CATALOG")
        .env_remove("PATTERNBOOK_ROOT")
        .env_remove("PATTERNBOOK_LOG");
    cmd
}

pub fn run_command(mut cmd: Command) -> Result<Output> {
    let output = cmd
        .output()
        .with_context(|| format!("failed to run command: {:?}", cmd))?;
    if output.status.success() {
        Ok(output)
    } else {
        bail!(
            "command {:?} failed: status {:?}\nstdout: {}\nstderr: {}",
            cmd,
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        )
    }
}

pub fn stdout_json(output: &Output) -> Result<Value> {
    serde_json::from_slice(&output.stdout).context("stdout was not JSON")
}

/// Write `document` to a temporary `.json` file that lives as long as the handle.
pub fn write_document(document: &Value) -> Result<NamedTempFile> {
    let mut file = tempfile::Builder::new()
        .suffix(".json")
        .tempfile()
        .context("failed to allocate catalog file")?;
    serde_json::to_writer_pretty(&mut file, document)?;
    file.flush()?;
    Ok(file)
}

pub fn write_raw(contents: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new().context("failed to allocate catalog file")?;
    file.write_all(contents.as_bytes())?;
    file.flush()?;
    Ok(file)
}

/// Small two-section document with an uncategorized entry inside a section.
pub fn fixture_document() -> Value {
    json!({
        "schema_version": "patternbook_catalog_v1",
        "sections": [
            section("guides"),
            section("reference")
        ],
        "entries": [
            {"id": "home", "title": "Home", "icon": "🏠", "file": "README.md", "category": null, "section": null},
            {"id": "setup", "title": "Setup", "icon": "⚙️", "file": "guides/setup.md", "category": "Getting Started", "section": "guides"},
            {"id": "glossary", "title": "Glossary", "icon": "📖", "file": "guides/glossary.md", "section": "guides"},
            {"id": "api", "title": "API", "icon": "🔌", "file": "reference/api.md", "category": "Interfaces", "section": "reference"},
            {"id": "deploy", "title": "Deploy", "icon": "🚀", "file": "guides/deploy.md", "category": "Operations", "section": "guides"},
            {"id": "first-run", "title": "First Run", "icon": "▶️", "file": "guides/first-run.md", "category": "Getting Started", "section": "guides"}
        ]
    })
}

fn section(id: &str) -> Value {
    json!({
        "id": id,
        "title": id.to_uppercase(),
        "icon": "#",
        "description": format!("{id} pages"),
        "color": "#123456",
        "gradient": "linear-gradient(90deg, #123456 0%, #654321 100%)"
    })
}

pub fn path_arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
