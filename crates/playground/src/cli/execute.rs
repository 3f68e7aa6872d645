//! Command execution logic.

use anyhow::{Context, Result};
use scene_locate::{locate, selection_for};
use serde_json::json;
use std::io;
use std::path::Path;

use super::args::{ConfigAction, ConfigArgs, LocateArgs, MapArgs, ParseArgs, VersionsArgs};
use crate::config::PlaygroundConfig;
use crate::output::{self, OutputMode};
use crate::provider::ParserProvider;
use crate::session::Session;

async fn read_script(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))
}

fn scene_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Execute the parse command
pub async fn execute_parse(
    config_path: &Path,
    provider: &dyn ParserProvider,
    args: &ParseArgs,
    output_mode: OutputMode,
) -> Result<()> {
    let text = read_script(&args.script).await?;
    let name = args.name.clone().unwrap_or_else(|| scene_name(&args.script));

    let mut session = Session::open(config_path, provider)
        .await?
        .with_scene(name, args.base_path.clone());
    session.set_text(text)?;

    if let Some(out) = &args.out {
        tokio::fs::write(out, session.output())
            .await
            .with_context(|| format!("Failed to write {}", out.display()))?;
    }

    match output_mode {
        OutputMode::Json => {
            output::print_json(&json!({
                "parserVersion": session.parser_version(),
                "parseTimeMs": session.parse_time_ms(),
                "scene": session.scene(),
            }))?;
        }
        OutputMode::Text => {
            if args.out.is_none() {
                println!("{}", session.output());
            }
            output::write_parse_report(
                &mut io::stderr().lock(),
                session.scene().sentence_list.len(),
                session.scene().assets_list.len(),
                session.parse_time_ms(),
                session.parser_version(),
            )?;
        }
    }

    Ok(())
}

/// Execute the locate command
pub async fn execute_locate(args: &LocateArgs, output_mode: OutputMode) -> Result<()> {
    let content = read_script(&args.output).await?;

    match output_mode {
        OutputMode::Json => {
            let results: Vec<_> = args
                .line
                .iter()
                .map(|&line| {
                    json!({
                        "line": line,
                        "position": locate(&content, line),
                        "selection": selection_for(&content, line),
                    })
                })
                .collect();
            output::print_json(&results)?;
        }
        OutputMode::Text => {
            let mut stdout = io::stdout().lock();
            for &line in &args.line {
                let selection = selection_for(&content, line);
                output::write_mapping(&mut stdout, line, None, selection.as_ref())?;
            }
        }
    }

    Ok(())
}

/// Execute the map command
pub async fn execute_map(
    config_path: &Path,
    provider: &dyn ParserProvider,
    args: &MapArgs,
    output_mode: OutputMode,
) -> Result<()> {
    let text = read_script(&args.script).await?;

    let mut session = Session::open(config_path, provider)
        .await?
        .with_scene(scene_name(&args.script), args.base_path.clone());
    session.set_text(text)?;

    let lines: Vec<usize> = if args.line.is_empty() {
        (1..=session.scene().sentence_list.len()).collect()
    } else {
        args.line.clone()
    };

    // Mapping is explicit here, so the location preference does not apply.
    let content = session.output();
    match output_mode {
        OutputMode::Json => {
            let results: Vec<_> = lines
                .iter()
                .map(|&line| {
                    json!({
                        "line": line,
                        "sentence": session.scene().sentence_for_line(line),
                        "selection": selection_for(content, line),
                    })
                })
                .collect();
            output::print_json(&results)?;
        }
        OutputMode::Text => {
            let mut stdout = io::stdout().lock();
            for line in lines {
                output::write_mapping(
                    &mut stdout,
                    line,
                    session.scene().sentence_for_line(line),
                    selection_for(content, line).as_ref(),
                )?;
            }
        }
    }

    Ok(())
}

/// Execute the versions command
pub async fn execute_versions(
    config_path: &Path,
    provider: &dyn ParserProvider,
    _args: &VersionsArgs,
    output_mode: OutputMode,
) -> Result<()> {
    let config = PlaygroundConfig::load(config_path).await?;
    let versions = provider.available_versions().await?;
    let selected = config
        .parser_version
        .clone()
        .or_else(|| versions.first().cloned());

    match output_mode {
        OutputMode::Json => {
            output::print_json(&json!({
                "versions": versions,
                "selected": selected,
            }))?;
        }
        OutputMode::Text => {
            output::write_versions(&mut io::stdout().lock(), &versions, selected.as_deref())?;
        }
    }

    Ok(())
}

/// Execute the config command
pub async fn execute_config(
    config_path: &Path,
    provider: &dyn ParserProvider,
    args: &ConfigArgs,
    output_mode: OutputMode,
) -> Result<()> {
    match &args.action {
        ConfigAction::Show => {}
        ConfigAction::Theme { value } => {
            let mut session = Session::open(config_path, provider).await?;
            let current = session.config().theme;
            if value.resolve(current) != current {
                session.toggle_theme().await?;
            }
        }
        ConfigAction::Location { value } => {
            let mut session = Session::open(config_path, provider).await?;
            session.set_location((*value).into()).await?;
        }
        ConfigAction::Version { parser_version } => {
            let mut session = Session::open(config_path, provider).await?;
            session.switch_version(provider, parser_version).await?;
        }
    }

    let config = PlaygroundConfig::load(config_path).await?;
    match output_mode {
        OutputMode::Json => output::print_json(&json!({
            "path": config_path.display().to_string(),
            "config": config,
        }))?,
        OutputMode::Text => output::write_config(&mut io::stdout().lock(), &config)?,
    }

    Ok(())
}
