//! # CLI Module
//!
//! The presentation layer of moviecli. Every command opens the catalog,
//! issues controller operations, and renders the result with coloured
//! status lines or `tabled` tables.
//!
//! ## Commands
//!
//! - [`list`] - every movie in insertion order
//! - [`gallery`] - poster URL per movie, or its fallback colour
//! - [`search`] - numbered TMDB results for a query
//! - [`add_from_search`] / [`add_manual`] - append a movie
//! - [`edit`] - change title and filmmaker
//! - [`delete`] - remove a movie
//! - [`poster`] - print the poster URL of one movie
//!
//! ## Flow
//!
//! ```text
//! CLI command
//!     ↓
//! CatalogController (in-memory list, save after every change)
//!     ↓                      ↓
//! MovieStore (JSON blob)   SearchSession → TmdbClient
//! ```
//!
//! Movies are addressed by id; any unique prefix of the id is accepted.

mod add;
mod delete;
mod edit;
mod gallery;
mod list;
mod poster;
mod search;

pub use add::add_from_search;
pub use add::add_manual;
pub use delete::delete;
pub use edit::edit;
pub use gallery::gallery;
pub use list::list;
pub use poster::poster;
pub use search::search;

use std::sync::Arc;

use crate::{
    Res,
    config::Config,
    error,
    management::{CatalogController, FileStore, MovieStore},
    tmdb::{SearchSession, TmdbClient, TmdbConfig},
    types::MovieId,
    utils::{self, IdLookup},
};

/// Builds a controller over the on-disk catalog in `config.data_dir` and
/// hydrates it.
///
/// The search client is always constructed; commands that actually search
/// check for the API key first.
pub async fn build_controller(config: &Config) -> Res<CatalogController> {
    let api_key = config.api_key.clone().unwrap_or_default();
    let client = TmdbClient::new(TmdbConfig::from_config(config, api_key))?;

    let store = MovieStore::new(Arc::new(FileStore::new(config.data_dir.clone())));
    let mut controller = CatalogController::new(store, SearchSession::new(Arc::new(client)));
    controller.hydrate().await;
    Ok(controller)
}

/// [`build_controller`], exiting with an error message when it fails.
pub async fn open_catalog(config: &Config) -> CatalogController {
    match build_controller(config).await {
        Ok(controller) => controller,
        Err(e) => error!("Cannot open the movie catalog. Err: {}", e),
    }
}

fn require_api_key(config: &Config) {
    if let Err(e) = config.require_api_key() {
        error!(
            "{}. Add it to your environment or to the moviecli .env file.",
            e
        );
    }
}

fn lookup(controller: &CatalogController, needle: &str) -> MovieId {
    match utils::resolve_id(controller.movies(), needle) {
        IdLookup::Found(id) => id,
        IdLookup::Missing => error!("No movie matches id '{}'", needle),
        IdLookup::Ambiguous(n) => error!(
            "Id '{}' matches {} movies, use a longer prefix",
            needle, n
        ),
    }
}
