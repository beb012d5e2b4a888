use tabled::Table;

use crate::{cli, config::Config, info, types::GalleryTableRow, warning};

pub async fn gallery(config: &Config) {
    let controller = cli::open_catalog(config).await;

    if controller.is_empty() {
        info!("No movies added yet!");
        return;
    }

    let client = controller.search_session().client();
    let rows: Vec<GalleryTableRow> = controller
        .movies()
        .iter()
        .map(|m| {
            // movies without a poster fall back to their card colour
            let poster = match m.poster_path.as_deref() {
                Some(path) => match client.poster_url(path) {
                    Ok(url) => url.to_string(),
                    Err(e) => {
                        warning!("Poster for '{}' unavailable: {}", m.title, e);
                        m.background_color.to_hex()
                    }
                },
                None => m.background_color.to_hex(),
            };

            GalleryTableRow {
                title: m.title.clone(),
                poster,
            }
        })
        .collect();

    println!("{}", Table::new(rows));
}
