//! Persisted playground preferences.
//!
//! Preferences live in a small YAML file that is read once when a session
//! opens and rewritten whenever a preference changes.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Name of the preferences directory
pub const CONFIG_DIR_NAME: &str = ".webgal-playground";

/// Name of the preferences file
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Editor theme id for the light theme
pub const LIGHT_EDITOR_THEME: &str = "webgal-theme";

/// Editor theme id for the dark theme
pub const DARK_EDITOR_THEME: &str = "webgal-theme-dark";

/// Color theme of the playground
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light theme
    #[default]
    Light,

    /// Dark theme
    Dark,
}

impl Theme {
    /// The other theme
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Id of the editor theme registered for this color theme
    pub fn editor_theme(self) -> &'static str {
        match self {
            Self::Light => LIGHT_EDITOR_THEME,
            Self::Dark => DARK_EDITOR_THEME,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

/// Preferences file structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PlaygroundConfig {
    /// Color theme
    #[serde(default)]
    pub theme: Theme,

    /// Follow the script cursor in the output pane
    #[serde(default)]
    pub location: bool,

    /// Parser version to load; newest when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parser_version: Option<String>,
}

impl PlaygroundConfig {
    /// Default preferences path under `base_dir`
    pub fn default_path(base_dir: &Path) -> PathBuf {
        base_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME)
    }

    /// Load preferences from a file.
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the file is not valid YAML for this
    /// structure, or `Error::Io` if it cannot be read.
    pub async fn load(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no preferences file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(&content)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save preferences to a file, creating its directory if needed
    pub async fn save(&self, path: &Path) -> Result<()> {
        let content =
            serde_yaml::to_string(self).map_err(|e| Error::Config(format!("YAML error: {}", e)))?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }
        fs::write(path, content).await?;
        debug!(path = %path.display(), "saved preferences");
        Ok(())
    }
}
