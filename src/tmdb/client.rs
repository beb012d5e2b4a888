use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::debug;

use crate::{
    config::Config,
    error::SearchError,
    types::{ProviderResult, SearchResponse},
};

/// A movie search provider.
///
/// [`TmdbClient`] talks to the real service; tests substitute their own
/// implementation.
#[async_trait]
pub trait SearchClient: Send + Sync {
    /// Searches the provider by free text.
    ///
    /// An empty query returns no results without issuing a request. Results
    /// are returned in the order the provider sent them.
    async fn search_movies(&self, query: &str) -> Result<Vec<ProviderResult>, SearchError>;

    /// Full image URL for a poster path.
    fn poster_url(&self, path: &str) -> Result<Url, SearchError>;
}

/// Settings for [`TmdbClient`].
#[derive(Debug, Clone)]
pub struct TmdbConfig {
    pub api_key: String,
    /// Full search endpoint, e.g. `https://api.themoviedb.org/3/search/movie`.
    pub search_url: String,
    /// Prefix joined verbatim with poster paths.
    pub image_base_url: String,
    /// `None` keeps the transport default.
    pub timeout: Option<Duration>,
}

impl TmdbConfig {
    pub fn from_config(config: &Config, api_key: String) -> Self {
        Self {
            api_key,
            search_url: config.search_url(),
            image_base_url: config.image_base_url.clone(),
            timeout: config.search_timeout,
        }
    }
}

/// TMDB search client. Single GET, no retry.
pub struct TmdbClient {
    client: Client,
    api_key: String,
    search_url: String,
    image_base_url: String,
}

impl TmdbClient {
    pub fn new(config: TmdbConfig) -> Result<Self, SearchError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            api_key: config.api_key,
            search_url: config.search_url,
            image_base_url: config.image_base_url,
        })
    }

    /// `<search_url>?api_key=<key>&query=<percent-encoded query>`
    fn request_url(&self, query: &str) -> Result<Url, SearchError> {
        let raw = format!(
            "{base}?api_key={key}&query={query}",
            base = self.search_url,
            key = urlencoding::encode(&self.api_key),
            query = urlencoding::encode(query),
        );

        Url::parse(&raw).map_err(|e| SearchError::InvalidUrl(format!("{}: {}", self.search_url, e)))
    }
}

#[async_trait]
impl SearchClient for TmdbClient {
    async fn search_movies(&self, query: &str) -> Result<Vec<ProviderResult>, SearchError> {
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let url = self.request_url(query)?;
        debug!("TMDB movie search: query='{}'", query);

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            debug!("TMDB search failed with status {}", status);
            return Err(SearchError::Http {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let envelope: SearchResponse =
            serde_json::from_slice(&body).map_err(|e| SearchError::Decode(e.to_string()))?;

        debug!("TMDB search returned {} results", envelope.results.len());
        Ok(envelope.results)
    }

    fn poster_url(&self, path: &str) -> Result<Url, SearchError> {
        poster_url(&self.image_base_url, path)
    }
}

/// Concatenates `base` and `path` and parses the result. The path is not
/// checked against anything.
pub fn poster_url(base: &str, path: &str) -> Result<Url, SearchError> {
    let raw = format!("{}{}", base, path);
    Url::parse(&raw).map_err(|e| SearchError::InvalidUrl(format!("{}: {}", raw, e)))
}
