//! `modifiers`: resolve page metadata from a modifier sheet.
//!
//! ```text
//! sheet.json ──▶ SheetDocument ──▶ ModifiersConfig ──▶ query / entries / explain
//!                                        ▲
//! config.toml ──▶ AppConfig ─────────────┘ (columns, key filter, log level)
//! ```
//!
//! All output is JSON on stdout; logs go to stderr.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::{Map, Value};

use modifiers_config::config::{load_config, AppConfig};
use modifiers_config::observability::logging::init_logging;
use modifiers_config::sheet::SheetDocument;
use modifiers_config::{Metadata, ModifiersConfig, PatternEntry};

#[derive(Parser)]
#[command(name = "modifiers")]
#[command(about = "Resolve page metadata from a modifier sheet", long_about = None)]
struct Cli {
    /// Modifier sheet (JSON).
    #[arg(short, long)]
    sheet: PathBuf,

    /// Application config (TOML). Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the merged modifiers for each path
    Query {
        #[arg(required = true)]
        paths: Vec<String>,
    },
    /// Print every parsed entry
    Entries,
    /// Print the entries matching a path, in merge order, and the result
    Explain { path: String },
}

#[derive(Serialize)]
struct EntryView<'a> {
    pattern: String,
    kind: &'static str,
    metadata: &'a Metadata,
}

impl<'a> From<&'a PatternEntry> for EntryView<'a> {
    fn from(entry: &'a PatternEntry) -> Self {
        Self {
            pattern: entry.pattern.to_string(),
            kind: entry.pattern.kind(),
            metadata: &entry.metadata,
        }
    }
}

#[derive(Serialize)]
struct Explanation<'a> {
    path: &'a str,
    matches: Vec<EntryView<'a>>,
    modifiers: Metadata,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };
    init_logging(&config.observability.log_level);

    tracing::info!(
        sheet = %cli.sheet.display(),
        path_column = %config.sheet.path_column,
        sheet_name = %config.sheet.sheet_name,
        "Configuration loaded"
    );

    let document = SheetDocument::from_file(&cli.sheet)?;
    let modifiers = ModifiersConfig::from_document(&document, &config)?;

    let output = match cli.command {
        Commands::Query { paths } => {
            let mut results = Map::new();
            for path in paths {
                let resolved = serde_json::to_value(modifiers.get_modifiers(&path))?;
                results.insert(path, resolved);
            }
            Value::Object(results)
        }
        Commands::Entries => {
            let entries: Vec<EntryView<'_>> =
                modifiers.entries().iter().map(EntryView::from).collect();
            serde_json::to_value(entries)?
        }
        Commands::Explain { path } => serde_json::to_value(Explanation {
            path: &path,
            matches: modifiers
                .matching_entries(&path)
                .into_iter()
                .map(EntryView::from)
                .collect(),
            modifiers: modifiers.get_modifiers(&path),
        })?,
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
