use tabled::Table;

use crate::{cli, config::Config, info, utils};

pub async fn list(config: &Config) {
    let controller = cli::open_catalog(config).await;

    if controller.is_empty() {
        info!("No movies added yet!");
        return;
    }

    let table = Table::new(utils::movie_table_rows(controller.movies()));
    println!("{}", table);
}
