//! The user's favorite sessions, keyed by session name.

use std::collections::{BTreeSet, HashSet};
use std::sync::RwLock;

/// Membership test used by the favorites segment of a timeline.
pub trait FavoritesStore: Send + Sync {
    fn has_favorite(&self, session_name: &str) -> bool;
}

/// A store with nothing in it.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFavorites;

impl FavoritesStore for NoFavorites {
    fn has_favorite(&self, _session_name: &str) -> bool {
        false
    }
}

impl FavoritesStore for HashSet<String> {
    fn has_favorite(&self, session_name: &str) -> bool {
        self.contains(session_name)
    }
}

/// In-memory favorites that can change while the schedule is shared.
#[derive(Debug, Default)]
pub struct UserFavorites {
    names: RwLock<BTreeSet<String>>,
}

impl UserFavorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if the session was already a favorite.
    pub fn add_favorite(&self, session_name: impl Into<String>) -> bool {
        let mut names = self.names.write().unwrap_or_else(|e| e.into_inner());
        names.insert(session_name.into())
    }

    /// Returns `false` if the session was not a favorite.
    pub fn remove_favorite(&self, session_name: &str) -> bool {
        let mut names = self.names.write().unwrap_or_else(|e| e.into_inner());
        names.remove(session_name)
    }

    /// Current favorites, sorted.
    pub fn favorites(&self) -> Vec<String> {
        let names = self.names.read().unwrap_or_else(|e| e.into_inner());
        names.iter().cloned().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for UserFavorites {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: RwLock::new(iter.into_iter().map(Into::into).collect()),
        }
    }
}

impl FavoritesStore for UserFavorites {
    fn has_favorite(&self, session_name: &str) -> bool {
        let names = self.names.read().unwrap_or_else(|e| e.into_inner());
        names.contains(session_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_remove_round_trip_membership() {
        let favorites = UserFavorites::new();
        assert!(favorites.add_favorite("Keynote"));
        assert!(!favorites.add_favorite("Keynote"));
        assert!(favorites.has_favorite("Keynote"));
        assert!(!favorites.has_favorite("keynote"));
        assert!(favorites.remove_favorite("Keynote"));
        assert!(!favorites.has_favorite("Keynote"));
        assert!(!favorites.remove_favorite("Keynote"));
    }

    #[test]
    fn collects_from_names() {
        let favorites: UserFavorites = ["b", "a"].into_iter().collect();
        assert_eq!(favorites.favorites(), ["a", "b"]);
    }
}
