//! Export CLI commands

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use clap::Subcommand;

use crate::error::{FintrackError, FintrackResult};
use crate::export::{
    export_accounts_csv, export_budgets_csv, export_json, export_transactions_csv, export_yaml,
};
use crate::storage::Storage;

/// Export subcommands
#[derive(Subcommand)]
pub enum ExportCommands {
    /// Export one collection as CSV
    Csv {
        /// Collection to export (transactions, accounts, budgets)
        #[arg(default_value = "transactions")]
        collection: String,
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Export a full snapshot as JSON
    Json {
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Export a full snapshot as YAML
    Yaml {
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle an export command
pub fn handle_export_command(storage: &Storage, cmd: ExportCommands) -> FintrackResult<()> {
    match cmd {
        ExportCommands::Csv { collection, output } => {
            let writer = open_output(&output)?;
            match collection.as_str() {
                "transactions" | "txns" => export_transactions_csv(storage, writer)?,
                "accounts" => export_accounts_csv(storage, writer)?,
                "budgets" => export_budgets_csv(storage, writer)?,
                other => {
                    return Err(FintrackError::Validation(format!(
                        "Unknown collection '{}'. Valid: transactions, accounts, budgets",
                        other
                    )))
                }
            }
            report_done(&output);
        }

        ExportCommands::Json { output } => {
            export_json(storage, open_output(&output)?)?;
            report_done(&output);
        }

        ExportCommands::Yaml { output } => {
            export_yaml(storage, open_output(&output)?)?;
            report_done(&output);
        }
    }

    Ok(())
}

fn open_output(path: &Option<PathBuf>) -> FintrackResult<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                FintrackError::Export(format!("Failed to create {}: {}", path.display(), e))
            })?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(std::io::stdout().lock())),
    }
}

fn report_done(path: &Option<PathBuf>) {
    if let Some(path) = path {
        println!("Data exported successfully to {}!", path.display());
    }
}
