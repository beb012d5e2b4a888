use std::sync::Arc;

use tracing::warn;

use crate::{error::StoreError, management::KeyValueStore, types::Movie};

/// Key under which the whole catalog is stored.
pub const MOVIES_KEY: &str = "savedMovies";

/// Reads and writes the catalog as one JSON array under [`MOVIES_KEY`].
///
/// Every save rewrites the full list. `save` and `load` never report
/// failures: a failed save is logged and dropped, and a missing or corrupt
/// blob loads as an empty catalog. Use `try_save`/`try_load` to see errors.
#[derive(Clone)]
pub struct MovieStore {
    backend: Arc<dyn KeyValueStore>,
}

impl MovieStore {
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    pub async fn save(&self, movies: &[Movie]) {
        if let Err(e) = self.try_save(movies).await {
            warn!("Failed to save movies: {}", e);
        }
    }

    pub async fn load(&self) -> Vec<Movie> {
        match self.try_load().await {
            Ok(movies) => movies,
            Err(e) => {
                warn!("Failed to load movies: {}", e);
                Vec::new()
            }
        }
    }

    pub async fn try_save(&self, movies: &[Movie]) -> Result<(), StoreError> {
        let blob = Movie::encode_all(movies)?;
        self.backend.set(MOVIES_KEY, &blob).await
    }

    /// An absent key is an empty catalog, not an error.
    pub async fn try_load(&self) -> Result<Vec<Movie>, StoreError> {
        match self.backend.get(MOVIES_KEY).await? {
            Some(blob) => Ok(Movie::decode_all(&blob)?),
            None => Ok(Vec::new()),
        }
    }
}
