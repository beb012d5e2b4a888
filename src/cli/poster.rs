use crate::{cli, config::Config, error, warning};

pub async fn poster(config: &Config, id: String) {
    let controller = cli::open_catalog(config).await;
    let id = cli::lookup(&controller, &id);

    let Some(movie) = controller.get(id) else {
        error!("No movie matches id '{}'", id);
    };

    match movie.poster_path.as_deref() {
        Some(path) => match controller.search_session().client().poster_url(path) {
            Ok(url) => println!("{}", url),
            Err(e) => error!("Cannot build poster URL. Err: {}", e),
        },
        None => warning!(
            "'{}' has no poster, its card colour is {}",
            movie.title,
            movie.background_color.to_hex()
        ),
    }
}
