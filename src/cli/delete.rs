use crate::{
    cli,
    config::Config,
    error, success,
    utils::{self, IdLookup},
    warning,
};

pub async fn delete(config: &Config, id: String) {
    let mut controller = cli::open_catalog(config).await;

    // an unknown id is already deleted as far as the user is concerned
    let movie_id = match utils::resolve_id(controller.movies(), &id) {
        IdLookup::Found(movie_id) => movie_id,
        IdLookup::Missing => {
            warning!("No movie matches id '{}', nothing deleted", id);
            return;
        }
        IdLookup::Ambiguous(n) => error!("Id '{}' matches {} movies, use a longer prefix", id, n),
    };

    let title = controller
        .get(movie_id)
        .map(|m| m.title.clone())
        .unwrap_or_default();

    if controller.delete(movie_id).await {
        success!("Deleted '{}'", title);
    }
}
