#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use conference_data::{DataSource, LoadError};

/// One day, two groups: "Intro to X" (design, Alice) and "Deep Dive Y" (dev).
pub const TWO_GROUPS: &str = r#"{
  "schedule": [
    {
      "date": "Tuesday, April 5",
      "groups": [
        { "time": "9:00 am", "sessions": [
          { "name": "Intro to X", "tracks": ["design"], "speakerNames": ["Alice"] }
        ]},
        { "time": "10:00 am", "sessions": [
          { "name": "Deep Dive Y", "tracks": ["dev"], "speakerNames": [] }
        ]}
      ]
    }
  ],
  "speakers": [ { "name": "Alice" } ],
  "map": []
}"#;

/// Two days, shared speakers, repeated tracks, one unknown speaker name.
pub const CONFERENCE: &str = r#"{
  "schedule": [
    {
      "date": "Tuesday, April 5",
      "groups": [
        { "time": "8:00 am", "sessions": [
          { "name": "Breakfast", "location": "Main hallway", "timeStart": "8:00 am",
            "timeEnd": "9:00 am", "tracks": ["Food"] }
        ]},
        { "time": "9:15 am", "sessions": [
          { "name": "Getting Started with Ionic", "location": "Hall 2",
            "tracks": ["Ionic"], "speakerNames": ["Ted Turtle"] },
          { "name": "Ionic Tooling", "location": "Executive Ballroom",
            "tracks": ["Tooling", "Ionic"], "speakerNames": ["Rachel Rabbit", "Nobody Known"] }
        ]},
        { "time": "10:00 am", "sessions": [
          { "name": "Migrating to Angular", "location": "Hall 1",
            "tracks": ["Angular", "Ionic"], "speakerNames": ["Ted Turtle", "ellie elephant"] }
        ]}
      ]
    },
    {
      "date": "Wednesday, April 6",
      "groups": [
        { "time": "9:00 am", "sessions": [
          { "name": "Design Systems, Explained", "tracks": ["Design"],
            "speakerNames": ["ellie elephant"] },
          { "name": "Lightning Talks", "tracks": [] }
        ]}
      ]
    }
  ],
  "speakers": [
    { "name": "Ted Turtle", "twitter": "@ted", "about": "Builds things." },
    { "name": "Rachel Rabbit", "email": "rachel@example.org" },
    { "name": "ellie elephant" },
    { "name": "Burt Bear" }
  ],
  "map": [
    { "name": "Convention Center", "lat": 43.071584, "long": -89.38012, "centre": true },
    { "name": "Hotel", "lat": 43.073281, "lng": -89.381989 }
  ]
}"#;

/// A source that counts fetches and can be slowed down to expose races.
pub struct CountingSource {
    body: Vec<u8>,
    delay: Duration,
    pub fetches: Arc<AtomicUsize>,
}

impl CountingSource {
    pub fn new(body: &str) -> Self {
        Self {
            body: body.as_bytes().to_vec(),
            delay: Duration::ZERO,
            fetches: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[async_trait]
impl DataSource for CountingSource {
    async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(self.body.clone())
    }

    fn describe(&self) -> String {
        "counting test source".to_string()
    }
}

/// Fails on the first `failures` fetches, then serves `body`.
pub struct FlakySource {
    body: Vec<u8>,
    failures: usize,
    pub fetches: Arc<AtomicUsize>,
}

impl FlakySource {
    pub fn new(body: &str, failures: usize) -> Self {
        Self {
            body: body.as_bytes().to_vec(),
            failures,
            fetches: Arc::new(AtomicUsize::new(0)),
        }
    }
}

#[async_trait]
impl DataSource for FlakySource {
    async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        let n = self.fetches.fetch_add(1, Ordering::SeqCst);
        if n < self.failures {
            return Err(LoadError::Io {
                path: "flaky.json".into(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "not yet"),
            });
        }
        Ok(self.body.clone())
    }

    fn describe(&self) -> String {
        "flaky test source".to_string()
    }
}
