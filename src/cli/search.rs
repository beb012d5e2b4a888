use tabled::Table;

use crate::{
    cli,
    config::Config,
    error,
    tmdb::{SearchClient, SearchOutcome},
    types::{ProviderResult, SearchResultTableRow},
    utils, warning,
};

pub async fn search(config: &Config, query: String) {
    cli::require_api_key(config);
    let controller = cli::open_catalog(config).await;

    let results = run_search(&controller, &query).await;
    if results.is_empty() {
        warning!("No results found");
        return;
    }

    let client = controller.search_session().client();
    println!("{}", Table::new(result_rows(client.as_ref(), &results)));
}

/// Runs `query` through the controller's session behind a spinner. Exits on
/// failure; the catalog is never touched.
pub(crate) async fn run_search(
    controller: &crate::management::CatalogController,
    query: &str,
) -> Vec<ProviderResult> {
    let pb = utils::spinner(&format!("Searching TMDB for '{}'...", query));
    let outcome = controller.search_session().search(query).await;
    pb.finish_and_clear();

    match outcome {
        SearchOutcome::Current(Ok(results)) => results,
        SearchOutcome::Current(Err(e)) => error!("Failed to search: {}", e),
        SearchOutcome::Stale => Vec::new(),
    }
}

pub(crate) fn result_rows(
    client: &dyn SearchClient,
    results: &[ProviderResult],
) -> Vec<SearchResultTableRow> {
    results
        .iter()
        .enumerate()
        .map(|(i, r)| SearchResultTableRow {
            index: i + 1,
            title: utils::truncate(&r.title, 48),
            year: r.year().unwrap_or_default(),
            tmdb_id: r.id,
            poster: r
                .poster_path
                .as_deref()
                .and_then(|p| client.poster_url(p).ok())
                .map(|u| u.to_string())
                .unwrap_or_default(),
        })
        .collect()
}
