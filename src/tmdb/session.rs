use std::{
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
    time::Duration,
};

use tokio::{sync::Mutex, time::sleep};
use tracing::debug;

use crate::{error::SearchError, tmdb::SearchClient, types::ProviderResult};

/// Identifies one search request within a [`SearchSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTicket(u64);

/// Last search whose response was accepted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    pub generation: u64,
    pub query: String,
    pub results: Vec<ProviderResult>,
    /// User-facing message for a failed search.
    pub error: Option<String>,
}

#[derive(Debug)]
pub enum SearchOutcome {
    /// The response belongs to the newest query and was recorded.
    Current(Result<Vec<ProviderResult>, SearchError>),
    /// A newer query started before this one finished; the response was dropped.
    Stale,
}

impl SearchOutcome {
    pub fn is_stale(&self) -> bool {
        matches!(self, SearchOutcome::Stale)
    }
}

/// Runs searches against a [`SearchClient`] so that the last query wins.
///
/// Every search takes a ticket from a generation counter. A response is
/// applied only if its ticket is still the newest one when it arrives, so a
/// slow answer to an old query never overwrites a newer query's results.
#[derive(Clone)]
pub struct SearchSession {
    client: Arc<dyn SearchClient>,
    generation: Arc<AtomicU64>,
    state: Arc<Mutex<SearchState>>,
}

impl SearchSession {
    pub fn new(client: Arc<dyn SearchClient>) -> Self {
        Self {
            client,
            generation: Arc::new(AtomicU64::new(0)),
            state: Arc::new(Mutex::new(SearchState::default())),
        }
    }

    pub fn client(&self) -> &Arc<dyn SearchClient> {
        &self.client
    }

    /// Starts a new generation, making every earlier ticket stale.
    pub fn begin(&self) -> SearchTicket {
        SearchTicket(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: SearchTicket) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket.0
    }

    pub async fn search(&self, query: &str) -> SearchOutcome {
        let ticket = self.begin();
        self.run(ticket, query).await
    }

    /// Waits `delay` and only then searches, unless another query started
    /// in the meantime.
    pub async fn search_debounced(&self, query: &str, delay: Duration) -> SearchOutcome {
        let ticket = self.begin();
        sleep(delay).await;

        if !self.is_current(ticket) {
            debug!("search for '{}' superseded while debouncing", query);
            return SearchOutcome::Stale;
        }

        self.run(ticket, query).await
    }

    /// Runs the request for an already issued ticket.
    pub async fn run(&self, ticket: SearchTicket, query: &str) -> SearchOutcome {
        let result = self.client.search_movies(query).await;

        // Check under the lock so a newer response cannot slip in between.
        let mut state = self.state.lock().await;
        if !self.is_current(ticket) {
            debug!(
                "dropping stale response for '{}' (generation {})",
                query, ticket.0
            );
            return SearchOutcome::Stale;
        }

        state.generation = ticket.0;
        state.query = query.to_string();
        match &result {
            Ok(results) => {
                state.results = results.clone();
                state.error = None;
            }
            Err(e) => {
                state.results.clear();
                state.error = Some(format!("Failed to search: {}", e));
            }
        }

        SearchOutcome::Current(result)
    }

    pub async fn snapshot(&self) -> SearchState {
        self.state.lock().await.clone()
    }
}
