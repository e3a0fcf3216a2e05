//! Command-line view of the documentation catalog.
//!
//! Prints the same derived views a viewer renders (sections, categories,
//! entries, grouped entries) as JSON on stdout, plus maintenance commands to
//! validate or dump the active catalog and resolve an entry's markdown file.
//! The active catalog is the shipped table unless `--catalog` or
//! `PATTERNBOOK_CATALOG` names a document.

use anyhow::{Context, Result, bail};
use patternbook::logging::init_logging;
use patternbook::{
    Catalog, CatalogSource, find_content_root, load_document, resolve_entry_file,
    validate_catalog,
};
use serde::Serialize;
use serde_json::json;
use std::env;
use std::io::{self, Write};

fn main() {
    init_logging();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{err:#}");
            std::process::exit(1);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse()?;
    let source = CatalogSource::resolve(cli.catalog.as_deref());

    match &cli.command {
        Command::Check => return check(&source),
        Command::Dump => {
            let index = source.load()?;
            print_json(&index.catalog().to_document())?;
        }
        Command::Sections => {
            let index = source.load()?;
            print_json(index.catalog().sections())?;
        }
        Command::Categories(section) => {
            let index = source.load()?;
            print_json(&index.catalog().categories_for_section(section))?;
        }
        Command::Entries(section) => {
            let index = source.load()?;
            print_json(&index.catalog().entries_for_section(section))?;
        }
        Command::Groups(section) => {
            let index = source.load()?;
            print_json(&index.catalog().group_entries_by_category(section))?;
        }
        Command::Resolve(entry_id) => {
            let index = source.load()?;
            let Some(entry) = index.entry(entry_id) else {
                bail!("Unknown entry '{entry_id}'");
            };
            let root = find_content_root()?;
            let path = resolve_entry_file(&root, entry)?;
            println!("{}", path.display());
        }
    }
    Ok(0)
}

struct Cli {
    catalog: Option<String>,
    command: Command,
}

enum Command {
    Sections,
    Categories(String),
    Entries(String),
    Groups(String),
    Check,
    Dump,
    Resolve(String),
}

impl Cli {
    fn parse() -> Result<Self> {
        let mut args = env::args().skip(1);
        let mut catalog = None;
        let mut positional = Vec::new();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                // Everything after `--` is positional, so ids may start with '-'.
                "--" => {
                    positional.extend(args.by_ref());
                    break;
                }
                "--help" | "-h" => usage(0),
                "--catalog" | "-c" => {
                    let value = args
                        .next()
                        .with_context(|| "--catalog requires a path")?;
                    catalog = Some(value);
                }
                other if other.starts_with('-') => usage(1),
                _ => positional.push(arg),
            }
        }

        let mut positional = positional.into_iter();
        let Some(name) = positional.next() else {
            usage(1);
        };
        let argument = positional.next();
        if positional.next().is_some() {
            usage(1);
        }

        let command = match (name.as_str(), argument) {
            ("sections", None) => Command::Sections,
            ("check", None) => Command::Check,
            ("dump", None) => Command::Dump,
            ("categories", Some(section)) => Command::Categories(section),
            ("entries", Some(section)) => Command::Entries(section),
            ("groups", Some(section)) => Command::Groups(section),
            ("resolve", Some(entry)) => Command::Resolve(entry),
            _ => usage(1),
        };

        Ok(Self { catalog, command })
    }
}

fn usage(code: i32) -> ! {
    eprintln!(
        "Usage: catalog [--catalog <path>] [--] <command> [arg]\n\nCommands:\n  sections               List sections.\n  categories <section>   List a section's categories in display order.\n  entries <section>      List a section's entries in display order.\n  groups <section>       List a section's entries grouped by category.\n  check                  Validate the active catalog; exits 1 on problems.\n  dump                   Print the active catalog as a catalog document.\n  resolve <entry>        Print the markdown path for an entry.\n\nEnvironment:\n  PATTERNBOOK_CATALOG    Catalog document to use instead of the shipped table.\n  PATTERNBOOK_ROOT       Content directory used by 'resolve'.\n  PATTERNBOOK_LOG        Log filter (default: warn)."
    );
    std::process::exit(code);
}

/// Validate without building an index so every problem is listed.
fn check(source: &CatalogSource) -> Result<i32> {
    let catalog = match source {
        CatalogSource::Builtin => Catalog::builtin().clone(),
        CatalogSource::File(path) => load_document(path)?,
    };

    let errors = validate_catalog(&catalog);
    let ok = errors.is_empty();
    print_json(&json!({
        "ok": ok,
        "sections": catalog.sections().len(),
        "entries": catalog.entries().len(),
        "errors": errors,
    }))?;
    Ok(if ok { 0 } else { 1 })
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    serde_json::to_writer_pretty(&mut handle, value).context("writing JSON output")?;
    writeln!(handle)?;
    Ok(())
}
