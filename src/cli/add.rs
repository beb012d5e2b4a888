use crate::{cli, config::Config, error, info, success, warning};

/// Searches `query` and adds the `pick`-th hit (1-based).
pub async fn add_from_search(
    config: &Config,
    query: String,
    pick: Option<usize>,
    filmmaker: Option<String>,
) {
    cli::require_api_key(config);
    let mut controller = cli::open_catalog(config).await;

    let results = cli::search::run_search(&controller, &query).await;
    if results.is_empty() {
        warning!("No results found for '{}'", query);
        return;
    }

    let pick = pick.unwrap_or(1);
    let Some(result) = pick.checked_sub(1).and_then(|i| results.get(i)) else {
        error!(
            "Result #{} does not exist, the search returned {} results",
            pick,
            results.len()
        );
    };

    if let Some(overview) = result.overview.as_deref().filter(|o| !o.is_empty()) {
        info!("{}", overview);
    }

    let movie = controller
        .add_from_provider(result, filmmaker.as_deref().unwrap_or_default())
        .await;
    success!(
        "Added '{}'{} by {} [{}]",
        movie.title,
        movie
            .year
            .as_deref()
            .map(|y| format!(" ({})", y))
            .unwrap_or_default(),
        movie.filmmaker,
        movie.id.short()
    );
}

pub async fn add_manual(config: &Config, title: String, filmmaker: String) {
    let mut controller = cli::open_catalog(config).await;

    match controller.add_manual(title.trim(), filmmaker.trim()).await {
        Ok(movie) => success!(
            "Added '{}' by {} [{}]",
            movie.title,
            movie.filmmaker,
            movie.id.short()
        ),
        Err(e) => error!("Cannot add movie. Err: {}", e),
    }
}
