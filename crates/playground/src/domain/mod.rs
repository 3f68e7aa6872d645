//! Domain types for WebGAL scene parse results.
//!
//! These mirror the object the scene parser hands back: a [`Scene`] holding one
//! [`Sentence`] per script line. Field names serialize in camelCase and in
//! declaration order, so the published JSON matches what the playground shows.

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of parsing one scene file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    /// Scene name, usually the file name
    pub scene_name: String,

    /// Path or URL the scene was loaded from
    pub scene_url: String,

    /// One sentence per script line, in order
    pub sentence_list: Vec<Sentence>,

    /// Every asset referenced by the scene
    pub assets_list: Vec<Asset>,

    /// Scenes reachable from this one
    pub sub_scene_list: Vec<String>,
}

impl Scene {
    /// Sentence produced by the 1-based script line, if any
    pub fn sentence_for_line(&self, line: usize) -> Option<&Sentence> {
        line.checked_sub(1).and_then(|i| self.sentence_list.get(i))
    }
}

/// A single parsed script line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sentence {
    /// Command the line resolved to
    pub command: CommandType,

    /// Command keyword or speaker as written
    pub command_raw: String,

    /// Text after the command, with arguments removed
    pub content: String,

    /// `-key=value` arguments
    pub args: Vec<Arg>,

    /// Assets this sentence needs
    pub sentence_assets: Vec<Asset>,

    /// Scenes this sentence can jump to
    pub sub_scene: Vec<String>,
}

impl Sentence {
    /// Look up an argument by key
    pub fn arg(&self, key: &str) -> Option<&ArgValue> {
        self.args.iter().find(|a| a.key == key).map(|a| &a.value)
    }
}

/// A `-key=value` argument
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Arg {
    /// Argument name
    pub key: String,

    /// Argument value
    pub value: ArgValue,
}

impl Arg {
    /// Create an argument
    pub fn new(key: impl Into<String>, value: ArgValue) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// Value of an argument: flags are `true`, numbers and booleans are typed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArgValue {
    /// `-flag`, `-key=true`, `-key=false`
    Bool(bool),

    /// Numeric value
    Number(serde_json::Number),

    /// Anything else
    String(String),
}

impl ArgValue {
    /// Interpret raw argument text
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "true" => return Self::Bool(true),
            "false" => return Self::Bool(false),
            _ => {}
        }
        if let Ok(n) = raw.parse::<i64>() {
            return Self::Number(n.into());
        }
        if let Some(n) = raw
            .parse::<f64>()
            .ok()
            .filter(|f| f.is_finite())
            .and_then(serde_json::Number::from_f64)
        {
            return Self::Number(n);
        }
        Self::String(raw.to_string())
    }

    /// The value as text, if it is a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s}"),
        }
    }
}

/// An asset referenced by a sentence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    /// Asset name as written in the script
    pub name: String,

    /// Kind of asset
    #[serde(rename = "type")]
    pub asset_type: AssetType,

    /// Resolved location
    pub url: String,

    /// 1-based script line that references it
    pub line_number: usize,
}

/// Generates a `u8`-coded enum with keyword lookup and integer serde.
macro_rules! coded_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $code:literal => $keyword:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Every variant, in code order
            pub const ALL: &'static [$name] = &[$( $name::$variant, )+];

            /// Integer code used in serialized output
            pub fn code(self) -> u8 {
                match self {
                    $( $name::$variant => $code, )+
                }
            }

            /// Variant for an integer code
            pub fn from_code(code: u8) -> Option<Self> {
                match code {
                    $( $code => Some($name::$variant), )+
                    _ => None,
                }
            }

            /// Name used in scripts and listings
            pub fn keyword(self) -> &'static str {
                match self {
                    $( $name::$variant => $keyword, )+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.keyword())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_u8(self.code())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let code = u8::deserialize(deserializer)?;
                Self::from_code(code).ok_or_else(|| {
                    de::Error::custom(format!("unknown {} code {}", stringify!($name), code))
                })
            }
        }
    };
}

coded_enum! {
    /// Script command a sentence resolved to
    CommandType {
        /// Dialogue or narration
        Say = 0 => "say",
        /// Change background image
        ChangeBg = 1 => "changeBg",
        /// Change a character figure
        ChangeFigure = 2 => "changeFigure",
        /// Background music
        Bgm = 3 => "bgm",
        /// Play a video
        Video = 4 => "playVideo",
        /// Run a pixi effect
        Pixi = 5 => "pixiPerform",
        /// Reset pixi effects
        PixiInit = 6 => "pixiInit",
        /// Full-screen intro text
        Intro = 7 => "intro",
        /// Small avatar beside the textbox
        MiniAvatar = 8 => "miniAvatar",
        /// Switch to another scene
        ChangeScene = 9 => "changeScene",
        /// Branch choice
        Choose = 10 => "choose",
        /// End the game
        End = 11 => "end",
        /// Complex animation
        SetComplexAnimation = 12 => "setComplexAnimation",
        /// Screen filter
        SetFilter = 13 => "setFilter",
        /// Jump target
        Label = 14 => "label",
        /// Jump to a label
        JumpLabel = 15 => "jumpLabel",
        /// Choice that jumps to labels
        ChooseLabel = 16 => "chooseLabel",
        /// Set a variable
        SetVar = 17 => "setVar",
        /// Conditional jump
        If = 18 => "if",
        /// Call a scene and return
        CallScene = 19 => "callScene",
        /// Show variables (debug)
        ShowVars = 20 => "showVars",
        /// Unlock a CG in the gallery
        UnlockCg = 21 => "unlockCg",
        /// Unlock a track in the music room
        UnlockBgm = 22 => "unlockBgm",
        /// Letterbox mode
        FilmMode = 23 => "filmMode",
        /// Show or hide the textbox
        SetTextbox = 24 => "setTextbox",
        /// Named animation
        SetAnimation = 25 => "setAnimation",
        /// Sound effect
        PlayEffect = 26 => "playEffect",
        /// Inline animation
        SetTempAnimation = 27 => "setTempAnimation",
        /// Comment or blank line
        Comment = 28 => "comment",
        /// Transform a figure
        SetTransform = 29 => "setTransform",
        /// Enter/exit transitions
        SetTransition = 30 => "setTransition",
        /// Prompt the player for input
        GetUserInput = 31 => "getUserInput",
        /// Apply UI style
        ApplyStyle = 32 => "applyStyle",
        /// Pause
        Wait = 33 => "wait",
    }
}

impl CommandType {
    /// Resolve a script keyword to its command.
    ///
    /// Comments are not addressable by keyword.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| *c != Self::Comment && c.keyword() == keyword)
    }
}

coded_enum! {
    /// Kind of asset a sentence references
    AssetType {
        /// Background image
        Background = 0 => "background",
        /// Music
        Bgm = 1 => "bgm",
        /// Character figure
        Figure = 2 => "figure",
        /// Scene script
        Scene = 3 => "scene",
        /// Texture
        Tex = 4 => "tex",
        /// Voice line
        Vocal = 5 => "vocal",
        /// Video
        Video = 6 => "video",
    }
}

impl AssetType {
    /// Folder under the game root holding this kind of asset
    pub fn folder(self) -> &'static str {
        self.keyword()
    }
}
