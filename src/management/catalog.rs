use tracing::{debug, info};

use crate::{
    error::CatalogError,
    management::MovieStore,
    tmdb::SearchSession,
    types::{Movie, MovieId, ProviderResult},
};

/// Owner of the in-memory catalog.
///
/// All mutations go through here and each one is followed by a full save.
/// Callers only ever get shared views of the list.
pub struct CatalogController {
    store: MovieStore,
    search: SearchSession,
    movies: Vec<Movie>,
}

impl CatalogController {
    /// Starts empty; call [`hydrate`](Self::hydrate) to adopt persisted state.
    pub fn new(store: MovieStore, search: SearchSession) -> Self {
        Self {
            store,
            search,
            movies: Vec::new(),
        }
    }

    /// Replaces the in-memory list with whatever the store holds.
    pub async fn hydrate(&mut self) -> &mut Self {
        self.movies = self.store.load().await;
        info!("Hydrated catalog with {} movies", self.movies.len());
        self
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn get(&self, id: MovieId) -> Option<&Movie> {
        self.movies.iter().find(|m| m.id == id)
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn search_session(&self) -> &SearchSession {
        &self.search
    }

    pub fn store(&self) -> &MovieStore {
        &self.store
    }

    pub async fn add_from_provider(
        &mut self,
        result: &ProviderResult,
        filmmaker_override: &str,
    ) -> &Movie {
        let movie = Movie::from_provider(result, filmmaker_override);
        debug!("Adding '{}' from provider id {}", movie.title, result.id);
        self.push(movie).await
    }

    pub async fn add_manual(
        &mut self,
        title: &str,
        filmmaker: &str,
    ) -> Result<&Movie, CatalogError> {
        if title.is_empty() {
            return Err(CatalogError::EmptyField("title"));
        }
        if filmmaker.is_empty() {
            return Err(CatalogError::EmptyField("filmmaker"));
        }

        let movie = Movie::manual(title, filmmaker);
        debug!("Adding '{}' manually", movie.title);
        Ok(self.push(movie).await)
    }

    /// Replaces title and filmmaker; colour and provider fields stay as they are.
    pub async fn update(
        &mut self,
        id: MovieId,
        new_title: &str,
        new_filmmaker: &str,
    ) -> Result<&Movie, CatalogError> {
        let index = self
            .movies
            .iter()
            .position(|m| m.id == id)
            .ok_or(CatalogError::NotFound(id))?;

        let movie = &mut self.movies[index];
        movie.title = new_title.to_string();
        movie.filmmaker = new_filmmaker.to_string();

        self.store.save(&self.movies).await;
        Ok(&self.movies[index])
    }

    /// Removes the first record with `id`. Returns `false`, and leaves the
    /// stored catalog untouched, when there is no such record.
    pub async fn delete(&mut self, id: MovieId) -> bool {
        let Some(index) = self.movies.iter().position(|m| m.id == id) else {
            debug!("Delete of unknown id {} ignored", id);
            return false;
        };

        let removed = self.movies.remove(index);
        debug!("Deleted '{}'", removed.title);
        self.store.save(&self.movies).await;
        true
    }

    async fn push(&mut self, movie: Movie) -> &Movie {
        self.movies.push(movie);
        self.store.save(&self.movies).await;
        &self.movies[self.movies.len() - 1]
    }
}
