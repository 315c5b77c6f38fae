use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use super::model::{Document, MapPin, Speaker};

impl Document {
    /// Speakers ordered by last name. Equal last names keep document order.
    pub fn speakers_by_last_name(&self) -> Vec<&Speaker> {
        let mut speakers: Vec<&Speaker> = self.speakers.iter().collect();
        speakers.sort_by(|a, b| compare_names(a.last_name(), b.last_name()));
        speakers
    }

    /// Every track used by any session, ascending.
    pub fn sorted_tracks(&self) -> Vec<String> {
        let mut tracks: Vec<String> = self.tracks.iter().map(str::to_string).collect();
        tracks.sort();
        tracks
    }

    pub fn map_pins(&self) -> &[MapPin] {
        &self.map
    }
}

/// Accent- and case-insensitive ordering, so "Émond" sorts among the E's and
/// "de Vries" next to "Dean". Accents, then case, break ties.
fn compare_names(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(&base_letters(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| b.cmp(a))
}

/// NFD-decompose, drop combining marks, lowercase.
fn base_letters(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}
