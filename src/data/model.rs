use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize, Serializer};

use crate::error::RangeError;

// ---------------------------------------------------------------------------
// Cross-reference handles
// ---------------------------------------------------------------------------

/// Position of a speaker inside [`Document::speakers`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct SpeakerId(pub usize);

/// Position of a session inside the schedule tree: day → group → session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct SessionRef {
    pub day: usize,
    pub group: usize,
    pub session: usize,
}

// ---------------------------------------------------------------------------
// TrackSet – insertion-ordered set of track names
// ---------------------------------------------------------------------------

/// Track names in first-seen order with constant-time membership.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackSet {
    order: Vec<String>,
    seen: HashSet<String>,
}

impl TrackSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a track; returns `false` if it was already present.
    pub fn insert(&mut self, track: &str) -> bool {
        if self.seen.contains(track) {
            return false;
        }
        self.seen.insert(track.to_string());
        self.order.push(track.to_string());
        true
    }

    pub fn contains(&self, track: &str) -> bool {
        self.seen.contains(track)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Tracks in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.seen.clear();
    }
}

impl Serialize for TrackSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.order)
    }
}

// ---------------------------------------------------------------------------
// Schedule tree: Day → Group → Session
// ---------------------------------------------------------------------------

/// One conference day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Day {
    /// Display label, e.g. "Tuesday, April 5".
    pub date: String,
    #[serde(default)]
    pub groups: Vec<Group>,
    /// Number of sessions left visible by the last filter pass.
    #[serde(default, skip_deserializing)]
    pub shown_sessions: usize,
}

/// A time slot holding one or more sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub time: String,
    #[serde(default)]
    pub sessions: Vec<Session>,
    #[serde(default, skip_deserializing)]
    pub hide: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Raw speaker references, resolved against [`Speaker::name`].
    #[serde(default)]
    pub speaker_names: Vec<String>,
    #[serde(default)]
    pub time_start: Option<String>,
    #[serde(default)]
    pub time_end: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub tracks: Vec<String>,
    /// Resolved speakers, filled in by normalization.
    #[serde(default, skip_deserializing)]
    pub speakers: Vec<SpeakerId>,
    #[serde(default, skip_deserializing)]
    pub hide: bool,
}

// ---------------------------------------------------------------------------
// Speakers and map pins
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Speaker {
    /// Unique key used by [`Session::speaker_names`].
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub profile_pic: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
    #[serde(default)]
    pub about: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    /// Sessions listing this speaker, filled in by normalization.
    #[serde(default, skip_deserializing)]
    pub sessions: Vec<SessionRef>,
}

impl Speaker {
    /// Last whitespace-separated token of the name.
    pub fn last_name(&self) -> &str {
        self.name.split_whitespace().last().unwrap_or("")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapPin {
    pub name: String,
    pub lat: f64,
    #[serde(alias = "lng")]
    pub long: f64,
    /// Whether this pin is the default map centre.
    #[serde(default, alias = "center")]
    pub centre: bool,
}

// ---------------------------------------------------------------------------
// Document – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The conference dataset. `tracks` and the speaker/session links are
/// derived by [`crate::data::loader::normalize`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub schedule: Vec<Day>,
    pub speakers: Vec<Speaker>,
    #[serde(default, skip_deserializing)]
    pub tracks: TrackSet,
    pub map: Vec<MapPin>,
    #[serde(skip)]
    pub(crate) speaker_index: HashMap<String, SpeakerId>,
}

impl Document {
    /// Borrow a day, failing for indices outside the schedule.
    pub fn day(&self, index: usize) -> Result<&Day, RangeError> {
        self.schedule.get(index).ok_or(RangeError::DayOutOfRange {
            index,
            days: self.schedule.len(),
        })
    }

    /// Look up a speaker by exact name.
    pub fn speaker(&self, name: &str) -> Option<&Speaker> {
        self.speaker_index
            .get(name)
            .and_then(|id| self.speakers.get(id.0))
    }

    pub fn session(&self, at: SessionRef) -> Option<&Session> {
        self.schedule
            .get(at.day)?
            .groups
            .get(at.group)?
            .sessions
            .get(at.session)
    }

    /// Every session with its position, in document order.
    pub fn sessions(&self) -> impl Iterator<Item = (SessionRef, &Session)> {
        self.schedule.iter().enumerate().flat_map(|(d, day)| {
            day.groups.iter().enumerate().flat_map(move |(g, group)| {
                group.sessions.iter().enumerate().map(move |(s, session)| {
                    (
                        SessionRef {
                            day: d,
                            group: g,
                            session: s,
                        },
                        session,
                    )
                })
            })
        })
    }

    /// First session with exactly this name.
    pub fn find_session(&self, name: &str) -> Option<(SessionRef, &Session)> {
        self.sessions().find(|(_, session)| session.name == name)
    }

    pub fn session_count(&self) -> usize {
        self.schedule
            .iter()
            .flat_map(|day| &day.groups)
            .map(|group| group.sessions.len())
            .sum()
    }

    /// Resolved speakers of a session, in `speaker_names` order.
    pub fn session_speakers<'a>(
        &'a self,
        session: &'a Session,
    ) -> impl Iterator<Item = &'a Speaker> + 'a {
        session
            .speakers
            .iter()
            .filter_map(move |id| self.speakers.get(id.0))
    }

    /// Sessions that list this speaker, in document order.
    pub fn speaker_sessions<'a>(
        &'a self,
        speaker: &'a Speaker,
    ) -> impl Iterator<Item = &'a Session> + 'a {
        speaker
            .sessions
            .iter()
            .filter_map(move |at| self.session(*at))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_set_keeps_first_seen_order() {
        let mut tracks = TrackSet::new();
        assert!(tracks.insert("ux"));
        assert!(tracks.insert("angular"));
        assert!(!tracks.insert("ux"));
        assert_eq!(tracks.iter().collect::<Vec<_>>(), ["ux", "angular"]);
        assert!(tracks.contains("angular"));
        assert_eq!(tracks.len(), 2);
    }

    #[test]
    fn last_name_is_final_token() {
        let speaker: Speaker =
            serde_json::from_str(r#"{"name": "Ada  King Lovelace "}"#).unwrap();
        assert_eq!(speaker.last_name(), "Lovelace");
    }

    #[test]
    fn map_pin_accepts_short_field_names() {
        let pin: MapPin =
            serde_json::from_str(r#"{"name": "Hall", "lat": 43.07, "lng": -89.38, "center": true}"#)
                .unwrap();
        assert_eq!(pin.long, -89.38);
        assert!(pin.centre);
    }
}
