//! Output formatting for CLI commands.
//!
//! Every command prints either human-readable text or JSON for programmatic
//! use. Text goes to the writer passed in so it can be tested.

use crate::config::PlaygroundConfig;
use crate::domain::{CommandType, Sentence};
use colored::Colorize;
use scene_locate::Selection;
use serde::Serialize;
use std::io::{self, Write};

/// Output format mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable text format
    Text,
    /// JSON format for programmatic use
    Json,
}

/// Print a value as pretty JSON to stdout
pub fn print_json<T: Serialize>(value: &T) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    writeln!(handle, "{}", json)
}

/// Color a command keyword by what it does.
fn colorize_command(command: CommandType) -> String {
    let text = command.keyword();
    match command {
        CommandType::Say => text.white().to_string(),
        CommandType::Comment => text.dimmed().to_string(),
        CommandType::ChangeScene | CommandType::CallScene | CommandType::Choose => {
            text.magenta().to_string()
        }
        CommandType::End => text.red().to_string(),
        _ => text.cyan().to_string(),
    }
}

/// Write the mapping of a script line to its output selection.
pub fn write_mapping<W: Write>(
    w: &mut W,
    line: usize,
    sentence: Option<&Sentence>,
    selection: Option<&Selection>,
) -> io::Result<()> {
    let source = match sentence {
        Some(s) if s.command_raw.is_empty() => colorize_command(s.command),
        Some(s) => format!("{} ({})", colorize_command(s.command), s.command_raw),
        None => "-".dimmed().to_string(),
    };
    match selection {
        Some(selection) => writeln!(
            w,
            "line {} {} -> {} {}",
            line,
            source,
            selection.to_string().green(),
            format!("({} lines)", selection.line_span()).dimmed()
        ),
        None => writeln!(w, "line {} {} -> {}", line, source, "no mapping".yellow()),
    }
}

/// Write a one-line parse report.
pub fn write_parse_report<W: Write>(
    w: &mut W,
    sentences: usize,
    assets: usize,
    parse_time_ms: f64,
    version: &str,
) -> io::Result<()> {
    writeln!(
        w,
        "Parsed {} sentences, {} assets in {}ms (parser {})",
        sentences,
        assets,
        format!("{:.2}", parse_time_ms).bold(),
        version.cyan()
    )
}

/// Write the version list, marking the selected one.
pub fn write_versions<W: Write>(
    w: &mut W,
    versions: &[String],
    selected: Option<&str>,
) -> io::Result<()> {
    for version in versions {
        if Some(version.as_str()) == selected {
            writeln!(w, "* {}", version.green())?;
        } else {
            writeln!(w, "  {}", version)?;
        }
    }
    Ok(())
}

/// Write the current preferences.
pub fn write_config<W: Write>(w: &mut W, config: &PlaygroundConfig) -> io::Result<()> {
    writeln!(
        w,
        "Theme:          {} ({})",
        config.theme,
        config.theme.editor_theme()
    )?;
    writeln!(
        w,
        "Location sync:  {}",
        if config.location { "on" } else { "off" }
    )?;
    writeln!(
        w,
        "Parser version: {}",
        config.parser_version.as_deref().unwrap_or("newest")
    )
}
