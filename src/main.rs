use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::{info, warn};

use likert_profile::labels::{Catalog, LabelDescriptor, label_table};
use likert_profile::profile::{ProfileData, serialize_profile};
use likert_profile::server::start_server;
use likert_profile::logging;

#[derive(Debug, Parser)]
#[command(name = "likert-profile", version, about = "Advocacy profile form service")]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand, PartialEq)]
enum Command {
    /// Run the HTTP server, configured from the environment.
    Serve,
    /// Print resolved label descriptors as JSON.
    Labels {
        /// Flat JSON map of translation keys to texts.
        #[arg(long)]
        catalog: Option<PathBuf>,
        /// List keys the label table needs but the catalog lacks.
        #[arg(long)]
        audit: bool,
        ids: Vec<String>,
    },
    /// Validate a profile document and print the stored form.
    CheckProfile { path: PathBuf },
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    if let Err(err) = run(cli.command) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<(), String> {
    match command {
        Command::Serve => serve(),
        Command::Labels {
            catalog,
            audit,
            ids,
        } => {
            let catalog = load_catalog(catalog.as_deref())?;
            if audit {
                audit_catalog(&catalog)
            } else {
                print_labels(&catalog, &ids)
            }
        }
        Command::CheckProfile { path } => {
            println!("{}", check_profile(&path)?);
            Ok(())
        }
    }
}

fn serve() -> Result<(), String> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| e.to_string())?;
    runtime
        .block_on(start_server())
        .map_err(|e| e.to_string())
}

fn load_catalog(path: Option<&Path>) -> Result<Catalog, String> {
    match path {
        Some(path) => {
            let catalog = Catalog::load(path).map_err(|e| e.to_string())?;
            info!("Loaded {} catalog entries from {}", catalog.len(), path.display());
            Ok(catalog)
        }
        None => Ok(Catalog::default()),
    }
}

fn describe(catalog: &Catalog, ids: &[String]) -> BTreeMap<String, LabelDescriptor> {
    let table = label_table();
    if ids.is_empty() {
        table
            .ids()
            .map(|id| (id.to_string(), table.resolve(id, catalog)))
            .collect()
    } else {
        ids.iter()
            .map(|id| (id.clone(), table.resolve(id, catalog)))
            .collect()
    }
}

fn print_labels(catalog: &Catalog, ids: &[String]) -> Result<(), String> {
    let out = serde_json::to_string_pretty(&describe(catalog, ids)).map_err(|e| e.to_string())?;
    println!("{out}");
    Ok(())
}

fn audit_catalog(catalog: &Catalog) -> Result<(), String> {
    let missing = label_table().missing_keys(catalog);
    for key in &missing {
        println!("{key}");
    }
    if missing.is_empty() {
        info!("Catalog covers every label key");
        Ok(())
    } else {
        warn!("{} label keys have no translation", missing.len());
        Err(format!("{} catalog keys missing", missing.len()))
    }
}

fn check_profile(path: &Path) -> Result<String, String> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    let data: ProfileData =
        serde_json::from_str(&raw).map_err(|e| format!("invalid profile document: {e}"))?;
    serialize_profile(&data).map_err(|e| e.to_string())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
