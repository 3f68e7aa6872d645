//! CLI value enums and their domain conversions.

use clap::ValueEnum;

use crate::config::Theme;

/// Theme selection for the `config theme` command
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeArg {
    /// Light theme
    Light,
    /// Dark theme
    Dark,
    /// Switch to the other theme
    Toggle,
}

impl ThemeArg {
    /// Theme to end up with, given the current one
    pub fn resolve(self, current: Theme) -> Theme {
        match self {
            Self::Light => Theme::Light,
            Self::Dark => Theme::Dark,
            Self::Toggle => current.toggled(),
        }
    }
}

/// On/off switch for boolean preferences
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchArg {
    /// Enable
    On,
    /// Disable
    Off,
}

impl From<SwitchArg> for bool {
    fn from(value: SwitchArg) -> Self {
        matches!(value, SwitchArg::On)
    }
}
