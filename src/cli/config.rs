//! Settings CLI commands

use clap::Subcommand;

use crate::config::paths::FintrackPaths;
use crate::config::settings::Settings;
use crate::error::FintrackResult;

/// Config subcommands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current settings and paths
    Show,
    /// Change a setting (currency, theme, language, date-format)
    Set {
        /// Setting name
        key: String,
        /// New value
        value: String,
    },
}

/// Handle a config command
pub fn handle_config_command(
    paths: &FintrackPaths,
    settings: &mut Settings,
    cmd: ConfigCommands,
) -> FintrackResult<()> {
    match cmd {
        ConfigCommands::Show => {
            println!("FinTrack Configuration");
            println!("======================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!();
            println!("Settings:");
            println!("  currency:    {}", settings.currency);
            println!("  theme:       {:?}", settings.theme);
            println!("  language:    {}", settings.language.code());
            println!("  date-format: {}", settings.date_format);
        }

        ConfigCommands::Set { key, value } => {
            settings.set(&key, &value)?;
            settings.save(paths)?;
            println!("Settings saved successfully!");
        }
    }

    Ok(())
}
