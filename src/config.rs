//! Runtime configuration: where the schedule lives and which sessions start
//! out as favorites.
//!
//! The data location is resolved in this order:
//!
//! 1. an explicit value (the `--data` CLI flag)
//! 2. the `CONFERENCE_DATA` environment variable
//! 3. [`DEFAULT_DATA_PATH`]
//!
//! Values starting with `http://` or `https://` are fetched over HTTP; anything
//! else is treated as a filesystem path.

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use crate::data::source::{DataSource, FileSource, HttpSource};
use crate::favorites::UserFavorites;
use crate::state::ConferenceData;

pub const DATA_ENV_VAR: &str = "CONFERENCE_DATA";
pub const DEFAULT_DATA_PATH: &str = "data/data.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLocation {
    File(PathBuf),
    Url(String),
}

impl SourceLocation {
    pub fn parse(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            SourceLocation::Url(trimmed.to_string())
        } else {
            SourceLocation::File(PathBuf::from(trimmed))
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceLocation::File(path) => write!(f, "{}", path.display()),
            SourceLocation::Url(url) => write!(f, "{url}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub source: SourceLocation,
    /// Session names marked as favorite at startup.
    pub favorites: Vec<String>,
}

impl Config {
    /// Resolve against the process environment.
    pub fn resolve(data: Option<String>, favorites: Vec<String>) -> Self {
        Self::resolve_with(data, std::env::var(DATA_ENV_VAR).ok(), favorites)
    }

    /// Resolve with an explicit environment value.
    pub fn resolve_with(
        data: Option<String>,
        env_value: Option<String>,
        favorites: Vec<String>,
    ) -> Self {
        let non_blank = |v: &String| !v.trim().is_empty();
        let raw = data
            .filter(non_blank)
            .or_else(|| env_value.filter(non_blank))
            .unwrap_or_else(|| DEFAULT_DATA_PATH.to_string());
        Self {
            source: SourceLocation::parse(&raw),
            favorites,
        }
    }

    pub fn open_source(&self) -> Box<dyn DataSource> {
        match &self.source {
            SourceLocation::File(path) => Box::new(FileSource::new(path.clone())),
            SourceLocation::Url(url) => Box::new(HttpSource::new(url.clone())),
        }
    }

    /// Build the data service with a favorites store seeded from the config.
    pub fn into_service(self) -> (ConferenceData, Arc<UserFavorites>) {
        let source = self.open_source();
        let favorites: Arc<UserFavorites> = Arc::new(self.favorites.into_iter().collect());
        let service = ConferenceData::from_boxed(source, favorites.clone());
        (service, favorites)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_and_paths_are_told_apart() {
        assert_eq!(
            SourceLocation::parse("https://example.org/data.json"),
            SourceLocation::Url("https://example.org/data.json".into())
        );
        assert_eq!(
            SourceLocation::parse("assets/data.json"),
            SourceLocation::File("assets/data.json".into())
        );
    }

    #[test]
    fn flag_beats_env_beats_default() {
        let flag = Config::resolve_with(Some("a.json".into()), Some("b.json".into()), vec![]);
        assert_eq!(flag.source, SourceLocation::File("a.json".into()));

        let env = Config::resolve_with(None, Some("b.json".into()), vec![]);
        assert_eq!(env.source, SourceLocation::File("b.json".into()));

        let default = Config::resolve_with(None, Some("  ".into()), vec![]);
        assert_eq!(default.source, SourceLocation::File(DEFAULT_DATA_PATH.into()));
    }

    #[test]
    fn blank_flag_falls_through_to_env() {
        let config = Config::resolve_with(Some(String::new()), Some("b.json".into()), vec![]);
        assert_eq!(config.source, SourceLocation::File("b.json".into()));
    }
}
