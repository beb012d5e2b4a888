#![allow(dead_code)]

use std::{collections::HashMap, io, sync::Arc};

use async_trait::async_trait;
use reqwest::Url;
use tokio::sync::{Mutex, mpsc, oneshot};

use moviecli::{
    error::{SearchError, StoreError},
    management::{CatalogController, KeyValueStore, MemoryStore, MovieStore},
    tmdb::{SearchClient, SearchSession, poster_url},
    types::ProviderResult,
};

pub const IMAGE_BASE: &str = "https://image.tmdb.org/t/p/w500";

pub fn hit(id: u64, title: &str, release_date: Option<&str>) -> ProviderResult {
    ProviderResult {
        id,
        title: title.to_string(),
        poster_path: Some(format!("/{}.jpg", id)),
        release_date: release_date.map(str::to_string),
        overview: None,
    }
}

/// Answers every query with the same canned results and records queries.
#[derive(Default)]
pub struct FakeSearch {
    pub results: Vec<ProviderResult>,
    pub queries: Mutex<Vec<String>>,
}

impl FakeSearch {
    pub fn new(results: Vec<ProviderResult>) -> Self {
        Self {
            results,
            queries: Mutex::new(Vec::new()),
        }
    }

    pub async fn recorded(&self) -> Vec<String> {
        self.queries.lock().await.clone()
    }
}

#[async_trait]
impl SearchClient for FakeSearch {
    async fn search_movies(&self, query: &str) -> Result<Vec<ProviderResult>, SearchError> {
        if query.is_empty() {
            return Ok(Vec::new());
        }
        self.queries.lock().await.push(query.to_string());
        Ok(self.results.clone())
    }

    fn poster_url(&self, path: &str) -> Result<Url, SearchError> {
        poster_url(IMAGE_BASE, path)
    }
}

/// Holds each query open until the test releases its gate.
pub struct GatedSearch {
    gates: Mutex<HashMap<String, oneshot::Receiver<Result<Vec<ProviderResult>, u16>>>>,
    started: mpsc::UnboundedSender<String>,
}

impl GatedSearch {
    pub fn new() -> (Arc<Self>, mpsc::UnboundedReceiver<String>) {
        let (started, rx) = mpsc::unbounded_channel();
        (
            Arc::new(Self {
                gates: Mutex::new(HashMap::new()),
                started,
            }),
            rx,
        )
    }

    /// Send `Ok(results)` or `Err(status)` to finish the query.
    pub async fn gate(&self, query: &str) -> oneshot::Sender<Result<Vec<ProviderResult>, u16>> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().await.insert(query.to_string(), rx);
        tx
    }
}

#[async_trait]
impl SearchClient for GatedSearch {
    async fn search_movies(&self, query: &str) -> Result<Vec<ProviderResult>, SearchError> {
        let gate = self.gates.lock().await.remove(query);
        let _ = self.started.send(query.to_string());

        match gate {
            Some(rx) => match rx.await {
                Ok(Ok(results)) => Ok(results),
                Ok(Err(status)) => Err(SearchError::Http { status }),
                Err(_) => Err(SearchError::Decode("gate dropped".to_string())),
            },
            None => Ok(Vec::new()),
        }
    }

    fn poster_url(&self, path: &str) -> Result<Url, SearchError> {
        poster_url(IMAGE_BASE, path)
    }
}

/// Reads fine, refuses every write.
#[derive(Default)]
pub struct FailingStore {
    pub inner: MemoryStore,
}

#[async_trait]
impl KeyValueStore for FailingStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        self.inner.get(key).await
    }

    async fn set(&self, _key: &str, _value: &[u8]) -> Result<(), StoreError> {
        Err(StoreError::Io(io::Error::other("disk full")))
    }

    async fn remove(&self, _key: &str) -> Result<(), StoreError> {
        Err(StoreError::Io(io::Error::other("disk full")))
    }
}

pub fn controller_with(
    backend: Arc<dyn KeyValueStore>,
    search: Arc<dyn SearchClient>,
) -> CatalogController {
    CatalogController::new(MovieStore::new(backend), SearchSession::new(search))
}

pub fn memory_controller() -> (CatalogController, Arc<MemoryStore>) {
    let backend = Arc::new(MemoryStore::new());
    let controller = controller_with(backend.clone(), Arc::new(FakeSearch::default()));
    (controller, backend)
}
