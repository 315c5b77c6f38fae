use std::collections::HashMap;

use crate::error::LoadError;

use super::model::{Document, SessionRef, SpeakerId};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Parse a raw schedule document and derive its cross-references.
///
/// Expected JSON shape:
///
/// ```json
/// {
///   "schedule": [
///     { "date": "Tuesday, April 5", "groups": [
///       { "time": "8:00 am", "sessions": [
///         { "name": "Breakfast", "timeStart": "8:00 am", "timeEnd": "9:00 am",
///           "location": "Main hallway", "tracks": ["Food"], "speakerNames": [] }
///       ]}
///     ]}
///   ],
///   "speakers": [ { "name": "Burt Bear", "twitter": "@burt" } ],
///   "map": [ { "name": "Convention Center", "lat": 43.07, "long": -89.38, "centre": true } ]
/// }
/// ```
///
/// `schedule`, `speakers` and `map` are required; everything under a session
/// besides `name` is optional.
pub fn parse_document(bytes: &[u8]) -> Result<Document, LoadError> {
    let mut document: Document = serde_json::from_slice(bytes)?;
    normalize(&mut document);
    Ok(document)
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Rebuild the derived parts of `document`: the speaker name index, the
/// session ↔ speaker links and the global track set.
///
/// All derived state is cleared first, so calling this again never
/// duplicates links or tracks.
pub fn normalize(document: &mut Document) {
    document.speaker_index = build_speaker_index(document);
    document.tracks.clear();
    for speaker in &mut document.speakers {
        speaker.sessions.clear();
    }

    let mut unmatched = 0usize;
    for (d, day) in document.schedule.iter_mut().enumerate() {
        for (g, group) in day.groups.iter_mut().enumerate() {
            for (s, session) in group.sessions.iter_mut().enumerate() {
                let at = SessionRef {
                    day: d,
                    group: g,
                    session: s,
                };

                session.speakers.clear();
                for name in &session.speaker_names {
                    match document.speaker_index.get(name) {
                        Some(&id) => {
                            session.speakers.push(id);
                            document.speakers[id.0].sessions.push(at);
                        }
                        None => {
                            log::debug!(
                                "Session {:?} names unknown speaker {name:?}",
                                session.name
                            );
                            unmatched += 1;
                        }
                    }
                }

                for track in &session.tracks {
                    document.tracks.insert(track);
                }
            }
        }
    }

    log::info!(
        "Normalized {} days, {} sessions, {} speakers, {} tracks ({} unmatched speaker names)",
        document.schedule.len(),
        document.session_count(),
        document.speakers.len(),
        document.tracks.len(),
        unmatched
    );
}

/// Map each speaker name to its position. The first speaker wins if a name
/// is repeated.
fn build_speaker_index(document: &Document) -> HashMap<String, SpeakerId> {
    let mut index = HashMap::with_capacity(document.speakers.len());
    for (i, speaker) in document.speakers.iter().enumerate() {
        if index.contains_key(&speaker.name) {
            log::warn!("Duplicate speaker name {:?}; keeping the first", speaker.name);
            continue;
        }
        index.insert(speaker.name.clone(), SpeakerId(i));
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_top_level_field_is_malformed() {
        let err = parse_document(br#"{"schedule": [], "speakers": []}"#).unwrap_err();
        assert!(matches!(err, LoadError::Malformed(_)));
    }

    #[test]
    fn not_json_is_malformed() {
        let err = parse_document(b"<html>404</html>").unwrap_err();
        assert!(matches!(err, LoadError::Malformed(_)));
    }

    #[test]
    fn absent_optional_session_fields_default_to_empty() {
        let doc = parse_document(
            br#"{"schedule": [{"date": "Mon", "groups": [{"time": "9", "sessions": [{"name": "Keynote"}]}]}],
                 "speakers": [], "map": []}"#,
        )
        .unwrap();
        let session = &doc.schedule[0].groups[0].sessions[0];
        assert!(session.speaker_names.is_empty());
        assert!(session.tracks.is_empty());
        assert!(session.speakers.is_empty());
        assert!(doc.tracks.is_empty());
    }
}
