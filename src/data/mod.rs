/// Data layer: schedule types, loading, normalization and filtering.
///
/// Architecture:
/// ```text
///   file / http / in-memory
///        │
///        ▼
///   ┌──────────┐
///   │  source   │  fetch raw bytes (once, via ConferenceData)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse JSON → Document, link speakers ↔ sessions, collect tracks
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Document  │  schedule tree, speakers, track set, map pins
///   └──────────┘
///        │
///        ├──────────────┐
///        ▼              ▼
///   ┌──────────┐   ┌───────────┐
///   │  filter   │   │ accessors │  sorted speakers / tracks, map pins
///   └──────────┘   └───────────┘
///   query + track + segment predicates → annotated Day
/// ```

pub mod accessors;
pub mod filter;
pub mod loader;
pub mod model;
pub mod source;
