//! Parser version selection.
//!
//! A [`ParserProvider`] lists the parser versions it can supply and loads one
//! on request. Loading is asynchronous by contract so providers backed by a
//! plugin directory or a download can slot in without changing callers.
//!
//! # Example
//!
//! ```no_run
//! use webgal_playground::provider::{ParserProvider, RegistryProvider};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let provider = RegistryProvider::builtin();
//!     let newest = provider.newest_version().await?;
//!     let parser = provider.load(&newest).await?;
//!     let scene = parser.parse("WebGAL:hello", "start.txt", "");
//!     println!("{} sentences", scene.sentence_list.len());
//!     Ok(())
//! }
//! ```

use crate::error::{Error, Result};
use crate::parser::{BuiltinParser, SceneParser};
use async_trait::async_trait;
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Source of loadable parser versions.
#[async_trait]
pub trait ParserProvider: Send + Sync {
    /// Versions this provider can load, newest first.
    async fn available_versions(&self) -> Result<Vec<String>>;

    /// Load the parser for `version`.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownVersion` if the provider has no such version.
    async fn load(&self, version: &str) -> Result<Box<dyn SceneParser>>;

    /// The newest available version.
    ///
    /// # Errors
    ///
    /// Returns `Error::NoVersions` when the provider is empty.
    async fn newest_version(&self) -> Result<String> {
        self.available_versions()
            .await?
            .into_iter()
            .next()
            .ok_or(Error::NoVersions)
    }
}

/// Constructs a fresh parser instance.
pub type ParserFactory = Arc<dyn Fn() -> Box<dyn SceneParser> + Send + Sync>;

/// In-process provider holding named parser factories.
#[derive(Clone, Default)]
pub struct RegistryProvider {
    entries: Vec<(String, ParserFactory)>,
}

impl fmt::Debug for RegistryProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryProvider")
            .field(
                "versions",
                &self.entries.iter().map(|(v, _)| v).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl RegistryProvider {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry serving only the built-in parser.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        let version = BuiltinParser::new().version().to_string();
        registry.register(
            version,
            Arc::new(|| Box::new(BuiltinParser::new()) as Box<dyn SceneParser>),
        );
        registry
    }

    /// Register `factory` under `version`, replacing any previous entry.
    pub fn register(&mut self, version: impl Into<String>, factory: ParserFactory) {
        let version = version.into();
        self.entries.retain(|(v, _)| *v != version);
        self.entries.push((version, factory));
    }
}

#[async_trait]
impl ParserProvider for RegistryProvider {
    async fn available_versions(&self) -> Result<Vec<String>> {
        let mut versions: Vec<String> = self.entries.iter().map(|(v, _)| v.clone()).collect();
        versions.sort_by(|a, b| compare_versions(b, a));
        Ok(versions)
    }

    async fn load(&self, version: &str) -> Result<Box<dyn SceneParser>> {
        let (_, factory) = self
            .entries
            .iter()
            .find(|(v, _)| v == version)
            .ok_or_else(|| Error::UnknownVersion(version.to_string()))?;
        debug!(version, "loading parser");
        Ok(factory())
    }
}

/// Order version strings by their numeric components.
///
/// `1.10.0` sorts after `1.9.2`. Non-numeric components compare as text, and
/// a release sorts after its pre-releases (`1.0.0` > `1.0.0-beta.1`).
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    let (a_core, a_pre) = split_pre_release(a);
    let (b_core, b_pre) = split_pre_release(b);

    compare_components(a_core, b_core).then_with(|| match (a_pre, b_pre) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => compare_components(a, b),
    })
}

fn split_pre_release(version: &str) -> (&str, Option<&str>) {
    let version = version.trim().trim_start_matches('v');
    match version.split_once('-') {
        Some((core, pre)) => (core, Some(pre)),
        None => (version, None),
    }
}

fn compare_components(a: &str, b: &str) -> Ordering {
    let mut a_parts = a.split('.');
    let mut b_parts = b.split('.');
    loop {
        match (a_parts.next(), b_parts.next()) {
            (None, None) => return Ordering::Equal,
            (Some(_), None) => return Ordering::Greater,
            (None, Some(_)) => return Ordering::Less,
            (Some(x), Some(y)) => {
                let ordering = match (x.parse::<u64>(), y.parse::<u64>()) {
                    (Ok(x), Ok(y)) => x.cmp(&y),
                    _ => x.cmp(y),
                };
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Scene;
    use rstest::rstest;

    struct FixedParser(&'static str);

    impl SceneParser for FixedParser {
        fn version(&self) -> &str {
            self.0
        }

        fn parse(&self, _text: &str, scene_name: &str, _base_path: &str) -> Scene {
            Scene {
                scene_name: scene_name.to_string(),
                ..Scene::default()
            }
        }
    }

    fn registry(versions: &[&'static str]) -> RegistryProvider {
        let mut registry = RegistryProvider::new();
        for &version in versions {
            registry.register(
                version,
                Arc::new(move || Box::new(FixedParser(version)) as Box<dyn SceneParser>),
            );
        }
        registry
    }

    #[rstest]
    #[case("1.10.0", "1.9.2", Ordering::Greater)]
    #[case("4.5.13", "4.5.13", Ordering::Equal)]
    #[case("v2.0", "1.99", Ordering::Greater)]
    #[case("1.0.0-beta.1", "1.0.0", Ordering::Less)]
    #[case("1.0.0-beta.2", "1.0.0-beta.10", Ordering::Less)]
    #[case("1.0", "1.0.1", Ordering::Less)]
    fn test_compare_versions(#[case] a: &str, #[case] b: &str, #[case] expected: Ordering) {
        assert_eq!(compare_versions(a, b), expected);
    }

    #[tokio::test]
    async fn test_versions_newest_first() {
        let provider = registry(&["4.5.9", "4.5.13", "4.4.0"]);
        let versions = provider.available_versions().await.unwrap();
        assert_eq!(versions, ["4.5.13", "4.5.9", "4.4.0"]);
        assert_eq!(provider.newest_version().await.unwrap(), "4.5.13");
    }

    #[tokio::test]
    async fn test_load_known_and_unknown() {
        let provider = registry(&["1.0.0"]);
        let parser = provider.load("1.0.0").await.unwrap();
        assert_eq!(parser.version(), "1.0.0");
        assert_eq!(parser.parse("", "a.txt", "").scene_name, "a.txt");

        let err = provider.load("9.9.9").await.err().unwrap();
        assert!(matches!(err, Error::UnknownVersion(v) if v == "9.9.9"));
    }

    #[tokio::test]
    async fn test_empty_registry() {
        let provider = RegistryProvider::new();
        assert!(matches!(
            provider.newest_version().await,
            Err(Error::NoVersions)
        ));
    }

    #[test]
    fn test_register_replaces() {
        let mut provider = registry(&["1.0.0"]);
        provider.register(
            "1.0.0",
            Arc::new(|| Box::new(BuiltinParser::new()) as Box<dyn SceneParser>),
        );
        assert_eq!(provider.entries.len(), 1);
        assert_eq!(provider.entries[0].0, "1.0.0");
    }

    #[tokio::test]
    async fn test_builtin_registry() {
        let provider = RegistryProvider::builtin();
        let version = provider.newest_version().await.unwrap();
        assert_eq!(version, env!("CARGO_PKG_VERSION"));
        assert!(provider.load(&version).await.is_ok());
    }
}
