use crate::{cli, config::Config, error, success, warning};

/// Omitted fields keep their current value.
pub async fn edit(config: &Config, id: String, title: Option<String>, filmmaker: Option<String>) {
    if title.is_none() && filmmaker.is_none() {
        warning!("Nothing to update, pass --title and/or --filmmaker");
        return;
    }

    let mut controller = cli::open_catalog(config).await;
    let id = cli::lookup(&controller, &id);

    let Some(current) = controller.get(id) else {
        error!("No movie matches id '{}'", id);
    };
    let title = title
        .map(|t| t.trim().to_string())
        .unwrap_or_else(|| current.title.clone());
    let filmmaker = filmmaker
        .map(|f| f.trim().to_string())
        .unwrap_or_else(|| current.filmmaker.clone());

    if title.is_empty() || filmmaker.is_empty() {
        error!("Title and filmmaker must not be empty");
    }

    match controller.update(id, &title, &filmmaker).await {
        Ok(movie) => success!("Updated '{}' by {}", movie.title, movie.filmmaker),
        Err(e) => error!("Cannot update movie. Err: {}", e),
    }
}
