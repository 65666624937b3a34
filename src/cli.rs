//! CLI argument parsing for the settings maintenance tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::settings::MODULE_NAME;

/// Inspect and maintain Huepick settings files.
#[derive(Parser, Debug)]
#[command(name = "huepick-settings")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Settings root directory (defaults to the platform config directory)
    #[arg(long, global = true)]
    pub settings_root: Option<PathBuf>,

    /// Module whose settings to operate on
    #[arg(long, global = true, default_value = MODULE_NAME)]
    pub module: String,

    /// Log file path
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Log level filter (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Settings maintenance commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the effective settings as JSON, creating defaults if absent
    Show,
    /// Write a default settings file
    Init {
        /// Overwrite an existing settings file
        #[arg(long)]
        force: bool,
    },
    /// Print the settings file path
    Path,
    /// Watch the settings file and print every applied change
    Watch {
        /// Poll interval in milliseconds
        #[arg(long, default_value_t = 500)]
        interval_ms: u64,
    },
}
