//! Movie Catalog CLI Library
//!
//! This library keeps a personal catalog of movies. Movies are added from a
//! TMDB search or typed in by hand, edited, deleted, and persisted as a single
//! JSON blob in a local key-value store.
//!
//! # Modules
//!
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `error` - Error types for every layer
//! - `management` - Catalog controller, persistence store and key-value backends
//! - `tmdb` - TMDB search client and the latest-query-wins search session
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use moviecli::management::{CatalogController, MemoryStore, MovieStore};
//! use moviecli::tmdb::{SearchSession, TmdbClient, TmdbConfig};
//!
//! let client = TmdbClient::new(TmdbConfig::from_config(&config, api_key))?;
//! let session = SearchSession::new(Arc::new(client));
//! let store = MovieStore::new(Arc::new(MemoryStore::new()));
//! let mut catalog = CatalogController::new(store, session);
//! catalog.hydrate().await;
//! catalog.add_manual("Parasite", "Bong Joon-ho").await?;
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod management;
pub mod tmdb;
pub mod types;
pub mod utils;

/// Result type used at the command boundary, where typed errors from the
/// lower layers only need to be reported.
///
/// ```
/// use moviecli::Res;
///
/// async fn open() -> Res<usize> {
///     Ok(0)
/// }
/// ```
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints a status line prefixed with a blue `o`.
///
/// ```
/// info!("Found {} movies", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a confirmation line prefixed with a green `✓`.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a red `!` line to stderr and exits with status 1.
///
/// Only for failures the command cannot recover from; the macro never
/// returns, so it can end a `match` arm or a `let ... else`.
///
/// ```
/// let id = match lookup(needle) {
///     Some(id) => id,
///     None => error!("No movie matches id '{}'", needle),
/// };
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a yellow `!` line to stderr and carries on.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
