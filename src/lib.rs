//! # conference-data
//!
//! Loads a static conference schedule, links speakers to their sessions and
//! answers the filtered timeline queries a schedule UI needs.
//!
//! ## Modules
//!
//! - [`data`]: document model, loading/normalization, timeline filter, accessors
//! - [`state`]: [`ConferenceData`], the lazily loaded, cached service
//! - [`favorites`]: favorites store used by the favorites segment
//! - [`config`]: data location and startup favorites
//! - [`error`]: error types

pub mod config;
pub mod data;
pub mod error;
pub mod favorites;
pub mod state;

pub use data::filter::{Segment, TimelineFilter};
pub use data::model::{Day, Document, Group, MapPin, Session, SessionRef, Speaker, SpeakerId};
pub use data::source::{DataSource, FileSource, HttpSource, StaticSource};
pub use error::{LoadError, RangeError, ScheduleError};
pub use favorites::{FavoritesStore, NoFavorites, UserFavorites};
pub use state::ConferenceData;
