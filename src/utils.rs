use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::types::{Movie, MovieId, MovieTableRow};

/// Spinner shown while a request is in flight.
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}

#[derive(Debug, PartialEq, Eq)]
pub enum IdLookup {
    Found(MovieId),
    Missing,
    Ambiguous(usize),
}

/// Resolves a full id or a unique prefix of one (dashes ignored, case
/// insensitive) against the catalog.
pub fn resolve_id(movies: &[Movie], needle: &str) -> IdLookup {
    let needle: String = needle
        .trim()
        .chars()
        .filter(|c| *c != '-')
        .collect::<String>()
        .to_lowercase();
    if needle.is_empty() {
        return IdLookup::Missing;
    }

    let matches: Vec<MovieId> = movies
        .iter()
        .map(|m| m.id)
        .filter(|id| id.to_string().replace('-', "").starts_with(&needle))
        .collect();

    match matches.as_slice() {
        [] => IdLookup::Missing,
        [id] => IdLookup::Found(*id),
        many => IdLookup::Ambiguous(many.len()),
    }
}

pub fn movie_table_rows(movies: &[Movie]) -> Vec<MovieTableRow> {
    movies
        .iter()
        .enumerate()
        .map(|(i, m)| MovieTableRow {
            index: i + 1,
            id: m.id.short(),
            title: m.title.clone(),
            filmmaker: m.filmmaker.clone(),
            year: m.year.clone().unwrap_or_default(),
            color: m.background_color.to_hex(),
        })
        .collect()
}

/// Cuts `text` to at most `max` characters, marking the cut with `…`.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}
