use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RangeError;
use crate::favorites::FavoritesStore;

use super::model::{Day, Document, Session};

// ---------------------------------------------------------------------------
// Filter criteria
// ---------------------------------------------------------------------------

/// Which sessions a timeline shows before the other predicates apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Segment {
    #[default]
    All,
    /// Only sessions the favorites store knows about.
    Favorites,
}

impl FromStr for Segment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(Segment::All),
            "favorites" | "favourites" => Ok(Segment::Favorites),
            other => Err(format!("unknown segment {other:?} (expected \"all\" or \"favorites\")")),
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::All => write!(f, "all"),
            Segment::Favorites => write!(f, "favorites"),
        }
    }
}

/// Criteria for one timeline query. The default shows every session that
/// carries at least one track.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimelineFilter {
    pub query: String,
    pub exclude_tracks: HashSet<String>,
    pub segment: Segment,
}

impl TimelineFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn exclude_track(mut self, track: impl Into<String>) -> Self {
        self.exclude_tracks.insert(track.into());
        self
    }

    pub fn with_segment(mut self, segment: Segment) -> Self {
        self.segment = segment;
        self
    }
}

// ---------------------------------------------------------------------------
// Timeline
// ---------------------------------------------------------------------------

/// Copy day `day_index` out of `document` and annotate it for `filter`.
///
/// The cached document is left untouched; each call starts from a fresh copy
/// of the day, so no visibility state leaks between calls.
pub fn timeline(
    document: &Document,
    day_index: usize,
    filter: &TimelineFilter,
    favorites: &dyn FavoritesStore,
) -> Result<Day, RangeError> {
    let mut day = document.day(day_index)?.clone();
    apply(&mut day, filter, favorites);
    log::debug!(
        "Timeline for day {day_index} ({}): {} sessions shown",
        day.date,
        day.shown_sessions
    );
    Ok(day)
}

/// Recompute `hide` on every group and session of `day` and its
/// `shown_sessions` count. Returns the count.
pub fn apply(day: &mut Day, filter: &TimelineFilter, favorites: &dyn FavoritesStore) -> usize {
    let words = query_words(&filter.query);
    day.shown_sessions = 0;

    for group in &mut day.groups {
        group.hide = true;
        for session in &mut group.sessions {
            let visible = matches_query(session, &words)
                && has_included_track(session, &filter.exclude_tracks)
                && in_segment(session, filter.segment, favorites);
            session.hide = !visible;
            if visible {
                group.hide = false;
                day.shown_sessions += 1;
            }
        }
    }

    day.shown_sessions
}

// ---------------------------------------------------------------------------
// Predicates
// ---------------------------------------------------------------------------

/// Lowercase `text`, treat `,` `.` `-` as separators and split on whitespace.
pub fn query_words(text: &str) -> Vec<String> {
    text.to_lowercase()
        .replace([',', '.', '-'], " ")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Any query word is a substring of the lowercased name. An empty query
/// matches everything.
fn matches_query(session: &Session, words: &[String]) -> bool {
    if words.is_empty() {
        return true;
    }
    let name = session.name.to_lowercase();
    words.iter().any(|word| name.contains(word.as_str()))
}

/// At least one of the session's tracks survives the exclusion set.
/// A session without tracks never passes.
fn has_included_track(session: &Session, exclude: &HashSet<String>) -> bool {
    session.tracks.iter().any(|track| !exclude.contains(track))
}

fn in_segment(session: &Session, segment: Segment, favorites: &dyn FavoritesStore) -> bool {
    match segment {
        Segment::All => true,
        Segment::Favorites => favorites.has_favorite(&session.name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(name: &str, tracks: &[&str]) -> Session {
        Session {
            name: name.to_string(),
            id: None,
            description: None,
            speaker_names: Vec::new(),
            time_start: None,
            time_end: None,
            location: None,
            tracks: tracks.iter().map(|t| t.to_string()).collect(),
            speakers: Vec::new(),
            hide: false,
        }
    }

    #[test]
    fn query_words_split_on_punctuation() {
        assert_eq!(
            query_words("  Ionic,Angular. Deep-Dive  "),
            ["ionic", "angular", "deep", "dive"]
        );
        assert!(query_words(" , . - ").is_empty());
    }

    #[test]
    fn any_word_matches_name_substring() {
        let s = session("Introduction to Ionic", &["Ionic"]);
        assert!(matches_query(&s, &query_words("angular intro")));
        assert!(!matches_query(&s, &query_words("angular react")));
        assert!(matches_query(&s, &[]));
    }

    #[test]
    fn track_predicate_needs_one_surviving_track() {
        let exclude: HashSet<String> = ["design".to_string()].into();
        assert!(has_included_track(&session("a", &["design", "dev"]), &exclude));
        assert!(!has_included_track(&session("b", &["design"]), &exclude));
        assert!(!has_included_track(&session("c", &[]), &HashSet::new()));
    }

    #[test]
    fn segment_parses_case_insensitively() {
        assert_eq!("Favorites".parse::<Segment>(), Ok(Segment::Favorites));
        assert_eq!("all".parse::<Segment>(), Ok(Segment::All));
        assert!("mine".parse::<Segment>().is_err());
    }
}
