//! CLI argument parsing and command dispatch.
//!
//! # Commands
//!
//! - `parse`: Parse a scene script and print the output JSON
//! - `locate`: Map script lines into an existing output file
//! - `map`: Parse a script and map its lines to output selections
//! - `versions`: List available parser versions
//! - `config`: Show or change preferences
//!
//! # Global Flags
//!
//! - `--json`: Output in JSON format (applies to all commands)
//! - `--config`: Preferences file to use
//!
//! # Example
//!
//! ```bash
//! webgal-playground parse game/scene/start.txt --out start.json
//! webgal-playground locate start.json --line 3
//! webgal-playground map game/scene/start.txt --line 1,2,3
//! webgal-playground config theme toggle
//! ```

mod args;
mod execute;
mod types;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{ConfigAction, ConfigArgs, LocateArgs, MapArgs, ParseArgs, VersionsArgs};
pub use types::{SwitchArg, ThemeArg};

/// WebGAL Parser Playground
///
/// Parse WebGAL scene scripts, inspect the parse tree as JSON, and map
/// script lines to the nodes that represent them.
#[derive(Parser, Debug)]
#[command(name = "webgal-playground")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output in JSON format for programmatic use
    #[arg(long, global = true)]
    pub json: bool,

    /// Preferences file (defaults to .webgal-playground/config.yaml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Parse a scene script
    ///
    /// Prints the parse result as pretty JSON, the same text the output
    /// pane of the playground shows, and reports the parse time.
    Parse(ParseArgs),

    /// Locate script lines in a saved parse output
    ///
    /// Prints the output range holding the sentence for each line.
    Locate(LocateArgs),

    /// Parse a script and map its lines to output ranges
    Map(MapArgs),

    /// List available parser versions
    Versions(VersionsArgs),

    /// Show or change preferences
    Config(ConfigArgs),
}

impl Cli {
    /// Parse CLI arguments from command line
    pub fn parse_args() -> Self {
        <Self as Parser>::parse()
    }

    /// Parse CLI arguments from an iterator (for testing)
    pub fn try_parse_from<I, T>(iter: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }

    /// Preferences path from `--config`, or the default under the working directory
    pub fn config_path(&self) -> Result<PathBuf> {
        use crate::config::PlaygroundConfig;

        match &self.config {
            Some(path) => Ok(path.clone()),
            None => Ok(PlaygroundConfig::default_path(&std::env::current_dir()?)),
        }
    }

    /// Execute the CLI command
    pub async fn execute(&self) -> Result<()> {
        use crate::output::OutputMode;
        use crate::provider::RegistryProvider;

        let output_mode = if self.json {
            OutputMode::Json
        } else {
            OutputMode::Text
        };
        let provider = RegistryProvider::builtin();

        match &self.command {
            Some(Commands::Parse(args)) => {
                execute::execute_parse(&self.config_path()?, &provider, args, output_mode).await
            }
            Some(Commands::Locate(args)) => execute::execute_locate(args, output_mode).await,
            Some(Commands::Map(args)) => {
                execute::execute_map(&self.config_path()?, &provider, args, output_mode).await
            }
            Some(Commands::Versions(args)) => {
                execute::execute_versions(&self.config_path()?, &provider, args, output_mode)
                    .await
            }
            Some(Commands::Config(args)) => {
                execute::execute_config(&self.config_path()?, &provider, args, output_mode).await
            }
            None => {
                println!("WebGAL Parser Playground");
                println!("Use --help for more information");
                Ok(())
            }
        }
    }
}
