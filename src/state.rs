use std::sync::Arc;

use tokio::sync::OnceCell;

use crate::data::filter::{self, TimelineFilter};
use crate::data::loader;
use crate::data::model::{Day, Document, MapPin, Speaker};
use crate::data::source::DataSource;
use crate::error::{LoadError, Result};
use crate::favorites::{FavoritesStore, NoFavorites};

// ---------------------------------------------------------------------------
// Conference data service
// ---------------------------------------------------------------------------

/// Owns the data source, the favorites store and the lazily loaded document.
///
/// The first caller of any accessor triggers the fetch; callers arriving
/// while it is in flight wait for the same result. A failed fetch leaves the
/// cache empty so a later call can try again.
pub struct ConferenceData {
    source: Box<dyn DataSource>,
    favorites: Arc<dyn FavoritesStore>,
    document: OnceCell<Arc<Document>>,
}

impl ConferenceData {
    pub fn new(source: impl DataSource + 'static) -> Self {
        Self::with_favorites(source, Arc::new(NoFavorites))
    }

    pub fn with_favorites(
        source: impl DataSource + 'static,
        favorites: Arc<dyn FavoritesStore>,
    ) -> Self {
        Self::from_boxed(Box::new(source), favorites)
    }

    pub fn from_boxed(source: Box<dyn DataSource>, favorites: Arc<dyn FavoritesStore>) -> Self {
        Self {
            source,
            favorites,
            document: OnceCell::new(),
        }
    }

    /// Fetch and normalize the document on first use; afterwards return the
    /// cached copy.
    pub async fn load(&self) -> std::result::Result<Arc<Document>, LoadError> {
        let document = self
            .document
            .get_or_try_init(|| async {
                log::info!("Fetching schedule from {}", self.source.describe());
                let bytes = self.source.fetch().await.inspect_err(|e| {
                    log::error!("Failed to fetch schedule: {e}");
                })?;
                log::debug!("Fetched {} bytes", bytes.len());
                let document = loader::parse_document(&bytes).inspect_err(|e| {
                    log::error!("Failed to parse schedule: {e}");
                })?;
                Ok::<_, LoadError>(Arc::new(document))
            })
            .await?;
        Ok(Arc::clone(document))
    }

    /// The document, if a load has already completed.
    pub fn cached(&self) -> Option<Arc<Document>> {
        self.document.get().cloned()
    }

    pub fn favorites(&self) -> &Arc<dyn FavoritesStore> {
        &self.favorites
    }

    /// Day `day_index` annotated with visibility for `filter`.
    pub async fn timeline(&self, day_index: usize, filter: &TimelineFilter) -> Result<Day> {
        let document = self.load().await?;
        let day = filter::timeline(&document, day_index, filter, self.favorites.as_ref())?;
        Ok(day)
    }

    /// All speakers, ordered by last name.
    pub async fn speakers(&self) -> std::result::Result<Vec<Speaker>, LoadError> {
        let document = self.load().await?;
        Ok(document
            .speakers_by_last_name()
            .into_iter()
            .cloned()
            .collect())
    }

    /// All tracks, ascending.
    pub async fn tracks(&self) -> std::result::Result<Vec<String>, LoadError> {
        Ok(self.load().await?.sorted_tracks())
    }

    /// Map pins in document order.
    pub async fn map(&self) -> std::result::Result<Vec<MapPin>, LoadError> {
        Ok(self.load().await?.map_pins().to_vec())
    }
}
