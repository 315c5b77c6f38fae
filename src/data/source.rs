//! Where the raw schedule document comes from.
//!
//! A [`DataSource`] performs exactly one read of a static asset per call.
//! Caching and single-flight behaviour live in [`crate::state::ConferenceData`],
//! not here.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::error::LoadError;

#[async_trait]
pub trait DataSource: Send + Sync {
    /// Read the raw document bytes.
    async fn fetch(&self) -> Result<Vec<u8>, LoadError>;

    /// Human readable location, used in log lines.
    fn describe(&self) -> String;
}

// ---------------------------------------------------------------------------
// Filesystem
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DataSource for FileSource {
    async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        tokio::fs::read(&self.path)
            .await
            .map_err(|source| LoadError::Io {
                path: self.path.clone(),
                source,
            })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

// ---------------------------------------------------------------------------
// HTTP
// ---------------------------------------------------------------------------

/// GET of a static JSON asset.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), url)
    }

    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl DataSource for HttpSource {
    async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }
        Ok(response.bytes().await?.to_vec())
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

// ---------------------------------------------------------------------------
// In-memory
// ---------------------------------------------------------------------------

/// A document already held in memory, e.g. one embedded with `include_bytes!`.
#[derive(Debug, Clone)]
pub struct StaticSource {
    bytes: Vec<u8>,
}

impl StaticSource {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }
}

#[async_trait]
impl DataSource for StaticSource {
    async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        Ok(self.bytes.clone())
    }

    fn describe(&self) -> String {
        format!("<{} bytes in memory>", self.bytes.len())
    }
}
