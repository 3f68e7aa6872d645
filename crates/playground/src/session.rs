//! Playground session: the headless counterpart of the two-pane editor.
//!
//! A [`Session`] owns the script text, re-parses it on every edit, keeps the
//! pretty-printed output the right-hand pane would show, and answers cursor
//! moves with the output selection to highlight.
//!
//! # Example
//!
//! ```no_run
//! use webgal_playground::provider::RegistryProvider;
//! use webgal_playground::session::Session;
//! use std::path::Path;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let provider = RegistryProvider::builtin();
//!     let mut session = Session::open(Path::new("config.yaml"), &provider).await?;
//!     session.set_text("WebGAL:hello\nend")?;
//!     session.set_location(true).await?;
//!     if let Some(selection) = session.cursor_moved(2) {
//!         println!("highlight {selection}");
//!     }
//!     Ok(())
//! }
//! ```

use crate::config::{PlaygroundConfig, Theme};
use crate::domain::Scene;
use crate::error::Result;
use crate::parser::SceneParser;
use crate::provider::ParserProvider;
use scene_locate::{Selection, selection_for};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Scene name passed to the parser when none is set
pub const DEFAULT_SCENE_NAME: &str = "test";

/// Published output before the first parse
const EMPTY_OUTPUT: &str = "{}";

/// One editing session.
pub struct Session {
    config: PlaygroundConfig,
    config_path: Option<PathBuf>,
    parser: Box<dyn SceneParser>,
    scene_name: String,
    base_path: String,
    text: String,
    scene: Scene,
    output: String,
    parse_time: Duration,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("config", &self.config)
            .field("config_path", &self.config_path)
            .field("parser", &self.parser.version())
            .field("scene_name", &self.scene_name)
            .field("parse_time", &self.parse_time)
            .finish_non_exhaustive()
    }
}

impl Session {
    /// Create a session with explicit preferences that are not persisted.
    pub fn new(config: PlaygroundConfig, parser: Box<dyn SceneParser>) -> Self {
        Self {
            config,
            config_path: None,
            parser,
            scene_name: DEFAULT_SCENE_NAME.to_string(),
            base_path: String::new(),
            text: String::new(),
            scene: Scene::default(),
            output: EMPTY_OUTPUT.to_string(),
            parse_time: Duration::ZERO,
        }
    }

    /// Open a session whose preferences are loaded from, and saved to, `config_path`.
    ///
    /// Loads the configured parser version, or the provider's newest one. A
    /// configured version the provider no longer offers falls back to newest.
    ///
    /// # Errors
    ///
    /// Returns an error if the preferences cannot be read or the provider
    /// has no versions.
    pub async fn open(config_path: &Path, provider: &dyn ParserProvider) -> Result<Self> {
        let config = PlaygroundConfig::load(config_path).await?;

        let parser = match config.parser_version.as_deref() {
            Some(version) => match provider.load(version).await {
                Ok(parser) => parser,
                Err(e) => {
                    warn!(version, error = %e, "configured parser unavailable, using newest");
                    provider.load(&provider.newest_version().await?).await?
                }
            },
            None => provider.load(&provider.newest_version().await?).await?,
        };

        let mut session = Self::new(config, parser);
        session.config_path = Some(config_path.to_path_buf());
        Ok(session)
    }

    /// Set the scene name and base path handed to the parser.
    pub fn with_scene(mut self, scene_name: impl Into<String>, base_path: impl Into<String>) -> Self {
        self.scene_name = scene_name.into();
        self.base_path = base_path.into();
        self
    }

    /// Replace the script text and re-parse it.
    ///
    /// # Errors
    ///
    /// Returns `Error::Json` if the parse result cannot be serialized.
    pub fn set_text(&mut self, text: impl Into<String>) -> Result<()> {
        self.text = text.into();
        self.reparse()
    }

    /// Editor change handler: re-parse unless the new text is empty.
    ///
    /// Returns whether a parse happened.
    pub fn edit(&mut self, text: &str) -> Result<bool> {
        if text.is_empty() {
            return Ok(false);
        }
        self.set_text(text)?;
        Ok(true)
    }

    fn reparse(&mut self) -> Result<()> {
        let start = Instant::now();
        let scene = self.parser.parse(&self.text, &self.scene_name, &self.base_path);
        self.parse_time = start.elapsed();

        self.output = serde_json::to_string_pretty(&scene)?;
        self.scene = scene;
        debug!(
            sentences = self.scene.sentence_list.len(),
            parse_time_ms = self.parse_time_ms(),
            "re-parsed script"
        );
        Ok(())
    }

    /// Output selection for a cursor on 1-based script `line`.
    ///
    /// `None` when location sync is off or the line has no sentence.
    pub fn cursor_moved(&self, line: usize) -> Option<Selection> {
        if !self.config.location {
            return None;
        }
        selection_for(&self.output, line)
    }

    /// Flip the color theme and persist it.
    pub async fn toggle_theme(&mut self) -> Result<Theme> {
        self.config.theme = self.config.theme.toggled();
        self.persist().await?;
        Ok(self.config.theme)
    }

    /// Turn cursor following on or off and persist it.
    pub async fn set_location(&mut self, enabled: bool) -> Result<()> {
        self.config.location = enabled;
        self.persist().await
    }

    /// Load another parser version, remember it, and re-parse the current text.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownVersion` if the provider lacks `version`; the
    /// session keeps its current parser in that case.
    pub async fn switch_version(
        &mut self,
        provider: &dyn ParserProvider,
        version: &str,
    ) -> Result<()> {
        self.parser = provider.load(version).await?;
        self.config.parser_version = Some(version.to_string());
        info!(version, "switched parser version");
        self.persist().await?;
        self.reparse()
    }

    async fn persist(&self) -> Result<()> {
        match &self.config_path {
            Some(path) => self.config.save(path).await,
            None => Ok(()),
        }
    }

    /// Current preferences
    pub fn config(&self) -> &PlaygroundConfig {
        &self.config
    }

    /// Current script text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Latest parse result
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Latest parse result as pretty-printed JSON
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Version of the active parser
    pub fn parser_version(&self) -> &str {
        self.parser.version()
    }

    /// Duration of the latest parse
    pub fn parse_time(&self) -> Duration {
        self.parse_time
    }

    /// Duration of the latest parse in fractional milliseconds
    pub fn parse_time_ms(&self) -> f64 {
        self.parse_time.as_secs_f64() * 1000.0
    }
}
