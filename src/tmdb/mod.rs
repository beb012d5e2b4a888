//! # TMDB Integration Module
//!
//! Remote search against The Movie Database. The module is split in two:
//!
//! - [`client`] - the [`SearchClient`] seam and its reqwest implementation,
//!   [`TmdbClient`]. One GET to the search endpoint, no retries, no paging.
//! - [`session`] - [`SearchSession`], which wraps any client and guarantees
//!   that the most recently started query owns the visible results.
//!
//! ## Error Types
//!
//! Every call returns [`crate::error::SearchError`]:
//! - `InvalidQuery` - the text cannot be carried in a URL (percent-encoding
//!   accepts any `&str`, so `TmdbClient` never returns it)
//! - `Transport` - DNS, connect, timeout
//! - `Http` - any status other than 200
//! - `Decode` - body is not a `{ "results": [...] }` envelope
//!
//! ## Usage
//!
//! ```rust,ignore
//! let client = Arc::new(TmdbClient::new(TmdbConfig::from_config(&config, key))?);
//! let session = SearchSession::new(client);
//!
//! if let SearchOutcome::Current(Ok(results)) = session.search("inception").await {
//!     // render results
//! }
//! ```

pub mod client;
pub mod session;

pub use client::{SearchClient, TmdbClient, TmdbConfig, poster_url};
pub use session::{SearchOutcome, SearchSession, SearchState, SearchTicket};
