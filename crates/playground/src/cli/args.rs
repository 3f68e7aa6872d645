//! CLI argument structs for all commands.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::types::{SwitchArg, ThemeArg};

/// Arguments for the `parse` command
#[derive(Parser, Debug, Clone)]
pub struct ParseArgs {
    /// Script file to parse
    pub script: PathBuf,

    /// Scene name passed to the parser (defaults to the file name)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Base path assets are resolved against
    #[arg(short, long, default_value = "")]
    pub base_path: String,

    /// Write the parse output to this file instead of stdout
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

/// Arguments for the `locate` command
#[derive(Parser, Debug, Clone)]
pub struct LocateArgs {
    /// File holding pretty-printed parse output
    pub output: PathBuf,

    /// 1-based script line(s) to locate (comma-separated)
    #[arg(short, long, value_delimiter = ',', required = true)]
    pub line: Vec<usize>,
}

/// Arguments for the `map` command
#[derive(Parser, Debug, Clone)]
pub struct MapArgs {
    /// Script file to parse
    pub script: PathBuf,

    /// 1-based script line(s) to map (comma-separated); all lines when omitted
    #[arg(short, long, value_delimiter = ',')]
    pub line: Vec<usize>,

    /// Base path assets are resolved against
    #[arg(short, long, default_value = "")]
    pub base_path: String,
}

/// Arguments for the `versions` command
#[derive(Parser, Debug, Clone)]
pub struct VersionsArgs {}

/// Arguments for the `config` command
#[derive(Parser, Debug, Clone)]
pub struct ConfigArgs {
    /// Preference to show or change
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Preference actions
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show current preferences
    Show,

    /// Set the color theme
    Theme {
        /// light, dark, or toggle
        #[arg(value_enum)]
        value: ThemeArg,
    },

    /// Turn cursor-to-output location sync on or off
    Location {
        /// on or off
        #[arg(value_enum)]
        value: SwitchArg,
    },

    /// Select the parser version to load
    Version {
        /// A version listed by `versions`
        #[arg(value_name = "VERSION")]
        parser_version: String,
    },
}
