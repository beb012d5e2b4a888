use std::{fmt, str::FromStr};

use rand::Rng;
use serde::{Deserialize, Serialize};
use tabled::Tabled;
use uuid::Uuid;

use crate::error::RecordError;

/// Sentinel filmmaker used when a provider movie is added without one.
pub const UNKNOWN_FILMMAKER: &str = "Unknown";

/// Lower bound of every channel of a generated pastel colour.
pub const PASTEL_MIN: f64 = 0.7;

/// Opaque, immutable identifier of a catalog record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(Uuid);

impl MovieId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// First eight hex digits, enough to address a record from the CLI.
    pub fn short(&self) -> String {
        self.0.simple().to_string()[..8].to_string()
    }
}

impl Default for MovieId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for MovieId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Colour stored as four numeric channels in `[0.0, 1.0]`.
///
/// Persisted as a `[red, green, blue, alpha]` array so the value survives
/// any process that reads the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct Rgba {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Rgba {
    pub fn new(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Random opaque pastel: each channel uniform in `[0.7, 1.0]`.
    pub fn random_pastel() -> Self {
        let mut rng = rand::rng();
        Self {
            red: rng.random_range(PASTEL_MIN..=1.0),
            green: rng.random_range(PASTEL_MIN..=1.0),
            blue: rng.random_range(PASTEL_MIN..=1.0),
            alpha: 1.0,
        }
    }

    pub fn is_pastel(&self) -> bool {
        [self.red, self.green, self.blue]
            .iter()
            .all(|c| (PASTEL_MIN..=1.0).contains(c))
            && self.alpha == 1.0
    }

    /// `(r, g, b)` scaled to 0..=255.
    pub fn to_rgb8(&self) -> (u8, u8, u8) {
        let scale = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        (scale(self.red), scale(self.green), scale(self.blue))
    }

    pub fn to_hex(&self) -> String {
        let (r, g, b) = self.to_rgb8();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }
}

impl From<[f64; 4]> for Rgba {
    fn from([red, green, blue, alpha]: [f64; 4]) -> Self {
        Self::new(red, green, blue, alpha)
    }
}

impl From<Rgba> for [f64; 4] {
    fn from(c: Rgba) -> Self {
        [c.red, c.green, c.blue, c.alpha]
    }
}

/// A catalog record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub filmmaker: String,
    pub background_color: Rgba,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
}

impl Movie {
    /// Manually entered movie: no poster, no provider id, no year.
    pub fn manual(title: impl Into<String>, filmmaker: impl Into<String>) -> Self {
        Self {
            id: MovieId::new(),
            title: title.into(),
            filmmaker: filmmaker.into(),
            background_color: Rgba::random_pastel(),
            poster_path: None,
            external_id: None,
            year: None,
        }
    }

    /// Movie built from a provider hit. An empty override resolves to
    /// [`UNKNOWN_FILMMAKER`]. The colour is still generated even when a
    /// poster exists.
    pub fn from_provider(result: &ProviderResult, filmmaker_override: &str) -> Self {
        let filmmaker = if filmmaker_override.is_empty() {
            UNKNOWN_FILMMAKER.to_string()
        } else {
            filmmaker_override.to_string()
        };

        Self {
            id: MovieId::new(),
            title: result.title.clone(),
            filmmaker,
            background_color: Rgba::random_pastel(),
            poster_path: result.poster_path.clone(),
            external_id: Some(result.id),
            year: result.year(),
        }
    }

    pub fn is_from_provider(&self) -> bool {
        self.external_id.is_some()
    }

    pub fn encode_all(movies: &[Movie]) -> Result<Vec<u8>, RecordError> {
        serde_json::to_vec(movies).map_err(|e| RecordError::Encode(e.to_string()))
    }

    pub fn decode_all(bytes: &[u8]) -> Result<Vec<Movie>, RecordError> {
        serde_json::from_slice(bytes).map_err(|e| RecordError::Malformed(e.to_string()))
    }

    pub fn decode(bytes: &[u8]) -> Result<Movie, RecordError> {
        serde_json::from_slice(bytes).map_err(|e| RecordError::Malformed(e.to_string()))
    }
}

/// A single search hit from the provider. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderResult {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
}

impl ProviderResult {
    /// First four characters of the release date.
    ///
    /// The provider sends `""` for unknown dates, so anything shorter than
    /// four characters yields `None`.
    pub fn year(&self) -> Option<String> {
        let date = self.release_date.as_deref()?;
        let year: String = date.chars().take(4).collect();
        (year.chars().count() == 4).then_some(year)
    }
}

/// Envelope of the provider's search endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<ProviderResult>,
}

#[derive(Tabled)]
pub struct MovieTableRow {
    #[tabled(rename = "#")]
    pub index: usize,
    pub id: String,
    pub title: String,
    pub filmmaker: String,
    pub year: String,
    pub color: String,
}

#[derive(Tabled)]
pub struct GalleryTableRow {
    pub title: String,
    pub poster: String,
}

#[derive(Tabled)]
pub struct SearchResultTableRow {
    #[tabled(rename = "#")]
    pub index: usize,
    pub title: String,
    pub year: String,
    #[tabled(rename = "tmdb id")]
    pub tmdb_id: u64,
    pub poster: String,
}
