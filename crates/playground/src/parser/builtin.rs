//! Built-in WebGAL line parser.
//!
//! Grammar, one statement per line:
//!
//! ```text
//! command:content -key=value -flag;comment
//! speaker:dialogue -vocal=v1.ogg
//! :narration
//! end
//! ```
//!
//! `\;` escapes a semicolon inside content.

use super::SceneParser;
use crate::domain::{Arg, ArgValue, Asset, AssetType, CommandType, Scene, Sentence};
use tracing::trace;

/// Version reported by the built-in engine.
pub const BUILTIN_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Keyword that marks an asset slot as cleared.
const NONE_ASSET: &str = "none";

/// Separator between choice options.
const CHOICE_SEPARATOR: char = '|';

/// The WebGAL-style parser bundled with the playground.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinParser;

impl BuiltinParser {
    /// Create the built-in parser.
    pub fn new() -> Self {
        Self
    }
}

impl SceneParser for BuiltinParser {
    fn version(&self) -> &str {
        BUILTIN_VERSION
    }

    fn parse(&self, text: &str, scene_name: &str, base_path: &str) -> Scene {
        let sentence_list: Vec<Sentence> = text
            .split('\n')
            .enumerate()
            .map(|(i, line)| parse_line(line.trim_end_matches('\r'), i + 1, base_path))
            .collect();

        let assets_list = sentence_list
            .iter()
            .flat_map(|s| s.sentence_assets.iter().cloned())
            .collect();

        let mut sub_scene_list: Vec<String> = Vec::new();
        for scene in sentence_list.iter().flat_map(|s| &s.sub_scene) {
            if !sub_scene_list.contains(scene) {
                sub_scene_list.push(scene.clone());
            }
        }

        trace!(
            scene_name,
            sentences = sentence_list.len(),
            "parsed scene"
        );

        Scene {
            scene_name: scene_name.to_string(),
            scene_url: base_path.to_string(),
            sentence_list,
            assets_list,
            sub_scene_list,
        }
    }
}

/// Parse one script line into a sentence.
fn parse_line(raw: &str, line_number: usize, base_path: &str) -> Sentence {
    let (statement, comment) = split_comment(raw);
    let statement = statement.trim();

    if statement.is_empty() {
        return Sentence {
            command: CommandType::Comment,
            command_raw: String::new(),
            content: comment.trim().to_string(),
            args: Vec::new(),
            sentence_assets: Vec::new(),
            sub_scene: Vec::new(),
        };
    }

    let (head, body) = match find_unescaped(statement, ':') {
        Some(i) => (statement[..i].trim(), Some(&statement[i + 1..])),
        None => (statement, None),
    };

    let (command, content, mut args) = match body {
        Some(body) => {
            let (content, args) = split_args(body);
            match CommandType::from_keyword(head) {
                Some(command) => (command, content, args),
                None => {
                    let mut args = args;
                    if !head.is_empty() {
                        args.insert(0, Arg::new("speaker", ArgValue::String(head.to_string())));
                    }
                    (CommandType::Say, content, args)
                }
            }
        }
        None => {
            let (content, args) = split_args(head);
            match CommandType::from_keyword(&content) {
                Some(command) => (command, String::new(), args),
                None => (CommandType::Say, content, args),
            }
        }
    };
    let command_raw = match body {
        Some(_) => head.to_string(),
        None => content_head(head),
    };

    if command == CommandType::Say {
        // An explicit `-speaker=` overrides the head; keep only the last one.
        if let Some(last) = args.iter().rposition(|a| a.key == "speaker") {
            let speaker = args.remove(last);
            args.retain(|a| a.key != "speaker");
            args.insert(0, speaker);
        }
    }

    let (sentence_assets, sub_scene) =
        collect_assets(command, &content, &args, line_number, base_path);

    Sentence {
        command,
        command_raw,
        content,
        args,
        sentence_assets,
        sub_scene,
    }
}

/// The statement text before any ` -arg`, used as `commandRaw` for colon-less lines.
fn content_head(statement: &str) -> String {
    split_args(statement).0
}

/// Split at the first unescaped `;`, returning (statement, comment).
fn split_comment(raw: &str) -> (&str, &str) {
    match find_unescaped(raw, ';') {
        Some(i) => (&raw[..i], &raw[i + 1..]),
        None => (raw, ""),
    }
}

/// Byte index of the first `target` not preceded by a backslash.
fn find_unescaped(text: &str, target: char) -> Option<usize> {
    let mut escaped = false;
    for (i, c) in text.char_indices() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == target {
            return Some(i);
        }
    }
    None
}

/// Separate trailing ` -key=value` arguments from content.
///
/// Segments that do not look like an argument (e.g. a dash in dialogue)
/// stay part of the content.
fn split_args(body: &str) -> (String, Vec<Arg>) {
    let mut segments = body.split(" -");
    let mut content = segments.next().unwrap_or_default().to_string();
    let mut args = Vec::new();

    for segment in segments {
        match parse_arg(segment) {
            Some(arg) => args.push(arg),
            None => {
                content.push_str(" -");
                content.push_str(segment);
            }
        }
    }

    (unescape(content.trim()), args)
}

/// Parse `key=value` or `flag`.
fn parse_arg(segment: &str) -> Option<Arg> {
    let segment = segment.trim();
    let (key, value) = match segment.split_once('=') {
        Some((key, value)) => (key.trim(), Some(value.trim())),
        None => (segment, None),
    };

    let mut chars = key.chars();
    let valid_key = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.');
    if !valid_key {
        return None;
    }

    let value = value.map_or(ArgValue::Bool(true), |v| ArgValue::from_raw(&unescape(v)));
    Some(Arg::new(key, value))
}

fn unescape(text: &str) -> String {
    text.replace("\\;", ";").replace("\\:", ":")
}

/// Assets and sub-scenes referenced by a sentence.
fn collect_assets(
    command: CommandType,
    content: &str,
    args: &[Arg],
    line_number: usize,
    base_path: &str,
) -> (Vec<Asset>, Vec<String>) {
    let asset = |name: &str, asset_type: AssetType| Asset {
        name: name.to_string(),
        asset_type,
        url: asset_url(base_path, asset_type, name),
        line_number,
    };

    let mut assets = Vec::new();
    let mut sub_scene = Vec::new();

    let content_type = match command {
        CommandType::ChangeBg | CommandType::UnlockCg => Some(AssetType::Background),
        CommandType::ChangeFigure | CommandType::MiniAvatar => Some(AssetType::Figure),
        CommandType::Bgm | CommandType::UnlockBgm | CommandType::PlayEffect => {
            Some(AssetType::Bgm)
        }
        CommandType::Video => Some(AssetType::Video),
        CommandType::ChangeScene | CommandType::CallScene => Some(AssetType::Scene),
        _ => None,
    };

    if let Some(asset_type) = content_type
        && is_asset_name(content)
    {
        assets.push(asset(content, asset_type));
        if asset_type == AssetType::Scene {
            sub_scene.push(content.to_string());
        }
    }

    if command == CommandType::Choose {
        for option in content.split(CHOICE_SEPARATOR) {
            if let Some((_, target)) = option.split_once(':')
                && is_asset_name(target.trim())
            {
                let target = target.trim();
                assets.push(asset(target, AssetType::Scene));
                sub_scene.push(target.to_string());
            }
        }
    }

    if let Some(vocal) = args
        .iter()
        .find(|a| a.key == "vocal")
        .and_then(|a| a.value.as_str())
        && is_asset_name(vocal)
    {
        assets.push(asset(vocal, AssetType::Vocal));
    }

    (assets, sub_scene)
}

fn is_asset_name(name: &str) -> bool {
    !name.is_empty() && name != NONE_ASSET
}

/// Resolve an asset name against the scene's base path.
fn asset_url(base_path: &str, asset_type: AssetType, name: &str) -> String {
    if name.contains("://") {
        return name.to_string();
    }
    let base = base_path.trim_end_matches('/');
    if base.is_empty() {
        format!("{}/{}", asset_type.folder(), name)
    } else {
        format!("{}/{}/{}", base, asset_type.folder(), name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parse(text: &str) -> Scene {
        BuiltinParser::new().parse(text, "test.txt", "")
    }

    fn one(line: &str) -> Sentence {
        parse(line).sentence_list.remove(0)
    }

    #[test]
    fn test_every_line_is_a_sentence() {
        let scene = parse("changeBg:bg.webp\n\n; comment\nWebGAL:hi\nend");
        assert_eq!(scene.sentence_list.len(), 5);
        let commands: Vec<CommandType> = scene.sentence_list.iter().map(|s| s.command).collect();
        assert_eq!(
            commands,
            [
                CommandType::ChangeBg,
                CommandType::Comment,
                CommandType::Comment,
                CommandType::Say,
                CommandType::End,
            ]
        );
    }

    #[test]
    fn test_speaker_line() {
        let sentence = one("WebGAL:Hello there! -vocal=v1.ogg");
        assert_eq!(sentence.command, CommandType::Say);
        assert_eq!(sentence.command_raw, "WebGAL");
        assert_eq!(sentence.content, "Hello there!");
        assert_eq!(
            sentence.arg("speaker"),
            Some(&ArgValue::String("WebGAL".to_string()))
        );
        assert_eq!(sentence.sentence_assets.len(), 1);
        assert_eq!(sentence.sentence_assets[0].asset_type, AssetType::Vocal);
        assert_eq!(sentence.sentence_assets[0].url, "vocal/v1.ogg");
    }

    #[test]
    fn test_narration_has_no_speaker() {
        let sentence = one(":The rain kept falling.");
        assert_eq!(sentence.command, CommandType::Say);
        assert_eq!(sentence.content, "The rain kept falling.");
        assert!(sentence.arg("speaker").is_none());
    }

    #[test]
    fn test_explicit_speaker_arg_wins() {
        let sentence = one("say:hi -speaker=Alice");
        assert_eq!(sentence.command, CommandType::Say);
        assert_eq!(
            sentence.arg("speaker"),
            Some(&ArgValue::String("Alice".to_string()))
        );
        assert_eq!(sentence.args.len(), 1);
    }

    #[test]
    fn test_keyword_without_colon() {
        let sentence = one("end");
        assert_eq!(sentence.command, CommandType::End);
        assert_eq!(sentence.command_raw, "end");
        assert_eq!(sentence.content, "");
    }

    #[test]
    fn test_plain_text_continues_dialogue() {
        let sentence = one("just some words");
        assert_eq!(sentence.command, CommandType::Say);
        assert_eq!(sentence.command_raw, "just some words");
        assert_eq!(sentence.content, "just some words");
    }

    #[rstest]
    #[case("changeFigure:a.png -left -next", 2)]
    #[case("setVar:a=1 -global", 1)]
    #[case("wait:500", 0)]
    fn test_arg_count(#[case] line: &str, #[case] count: usize) {
        assert_eq!(one(line).args.len(), count);
    }

    #[test]
    fn test_arg_values_are_typed() {
        let sentence = one("changeFigure:a.png -left -zIndex=3 -next=false -id=fig");
        assert_eq!(sentence.arg("left"), Some(&ArgValue::Bool(true)));
        assert_eq!(sentence.arg("zIndex"), Some(&ArgValue::Number(3.into())));
        assert_eq!(sentence.arg("next"), Some(&ArgValue::Bool(false)));
        assert_eq!(
            sentence.arg("id"),
            Some(&ArgValue::String("fig".to_string()))
        );
    }

    #[test]
    fn test_dash_in_dialogue_stays_content() {
        let sentence = one("A:wait -- what? - I think so");
        assert_eq!(sentence.content, "wait -- what? - I think so");
        assert!(sentence.args.iter().all(|a| a.key == "speaker"));
    }

    #[test]
    fn test_comment_and_escape() {
        let sentence = one("A:semi\\;colon;trailing note");
        assert_eq!(sentence.content, "semi;colon");

        let comment = one("  ; just a note ");
        assert_eq!(comment.command, CommandType::Comment);
        assert_eq!(comment.command_raw, "");
        assert_eq!(comment.content, "just a note");
    }

    #[test]
    fn test_crlf_is_stripped() {
        let scene = parse("A:one\r\nB:two\r\n");
        assert_eq!(scene.sentence_list.len(), 3);
        assert_eq!(scene.sentence_list[0].content, "one");
        assert_eq!(scene.sentence_list[2].command, CommandType::Comment);
    }

    #[test]
    fn test_assets_and_sub_scenes() {
        let scene = BuiltinParser::new().parse(
            "changeBg:bg.webp\nchangeBg:none\nbgm:s.mp3\nchoose:Left:left.txt|Right:right.txt\ncallScene:left.txt",
            "start.txt",
            "game/",
        );

        let names: Vec<(&str, AssetType)> = scene
            .assets_list
            .iter()
            .map(|a| (a.name.as_str(), a.asset_type))
            .collect();
        assert_eq!(
            names,
            [
                ("bg.webp", AssetType::Background),
                ("s.mp3", AssetType::Bgm),
                ("left.txt", AssetType::Scene),
                ("right.txt", AssetType::Scene),
                ("left.txt", AssetType::Scene),
            ]
        );
        assert_eq!(scene.assets_list[0].url, "game/background/bg.webp");
        assert_eq!(scene.assets_list[2].line_number, 4);
        assert_eq!(scene.sub_scene_list, ["left.txt", "right.txt"]);
        assert_eq!(scene.scene_url, "game/");
    }

    #[test]
    fn test_absolute_asset_url_kept() {
        let sentence = one("bgm:https://example.com/a.mp3");
        assert_eq!(sentence.sentence_assets[0].url, "https://example.com/a.mp3");
    }
}
