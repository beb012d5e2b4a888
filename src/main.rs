use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use moviecli::{cli, config, error, warning};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List movies in the catalog
    List,

    /// Show poster URLs, or the card colour for movies without a poster
    Gallery,

    /// Search TMDB
    Search(SearchOptions),

    /// Add a movie from a TMDB search or by hand
    Add(AddOptions),

    /// Change title and filmmaker of a movie
    Edit(EditOptions),

    /// Delete a movie
    Delete(IdOptions),

    /// Print the poster URL of a movie
    Poster(IdOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct SearchOptions {
    /// Movie title to look for
    pub query: String,
}

#[derive(Parser, Debug, Clone)]
#[command(
    about = "Add a movie from a TMDB search or by hand",
    args_conflicts_with_subcommands = true, // disallow mixing a search with `manual`
    subcommand_negates_reqs = true
)]
pub struct AddOptions {
    /// Movie title to search on TMDB
    #[clap(required = true)]
    pub query: Option<String>,

    /// Which search result to add (1-based)
    #[clap(long)]
    pub pick: Option<usize>,

    /// Filmmaker/director, "Unknown" when omitted
    #[clap(long)]
    pub filmmaker: Option<String>,

    /// Subcommands under `add` (e.g., `manual`)
    #[command(subcommand)]
    pub command: Option<AddSubcommand>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum AddSubcommand {
    /// Add a movie without searching
    Manual(ManualOpts),
}

#[derive(Parser, Debug, Clone)]
pub struct ManualOpts {
    #[clap(long)]
    pub title: String,

    #[clap(long)]
    pub filmmaker: String,
}

#[derive(Parser, Debug, Clone)]
pub struct EditOptions {
    /// Movie id or a unique prefix of it
    pub id: String,

    #[clap(long)]
    pub title: Option<String>,

    #[clap(long)]
    pub filmmaker: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct IdOptions {
    /// Movie id or a unique prefix of it
    pub id: String,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_env("MOVIECLI_LOG").unwrap_or_else(|_| "warn".into()))
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_writer(std::io::stderr),
        )
        .init();
}

#[tokio::main]
async fn main() {
    init_tracing();

    if let Err(e) = config::load_env().await {
        warning!("Cannot load environment file. Err: {}", e);
    }

    let cli = Cli::parse();

    let config = match config::Config::from_env() {
        Ok(c) => c,
        Err(e) => error!("Invalid configuration. Err: {}", e),
    };

    match cli.command {
        Command::List => cli::list(&config).await,
        Command::Gallery => cli::gallery(&config).await,
        Command::Search(opt) => cli::search(&config, opt.query).await,
        Command::Add(opt) => match opt.command {
            Some(AddSubcommand::Manual(m)) => cli::add_manual(&config, m.title, m.filmmaker).await,
            None => match opt.query {
                Some(query) => cli::add_from_search(&config, query, opt.pick, opt.filmmaker).await,
                None => error!("Pass a search query or use `add manual`"),
            },
        },
        Command::Edit(opt) => cli::edit(&config, opt.id, opt.title, opt.filmmaker).await,
        Command::Delete(opt) => cli::delete(&config, opt.id).await,
        Command::Poster(opt) => cli::poster(&config, opt.id).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
