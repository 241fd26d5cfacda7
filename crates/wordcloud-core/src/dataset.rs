//! Dataset loading: fetch both CSV resources, map rows to word records
//!
//! Loading is all-or-nothing. Both resources are fetched concurrently; if
//! either fetch or parse fails, each failure is logged with its resource
//! path and the whole load is aborted. There is no retry.

use std::future::Future;

use futures::future::join;
use rand::Rng;
use serde::Deserialize;
use tracing::{error, info};

use crate::config::ResourceConfig;
use crate::error::{Error, Result};
use crate::font::dynamic_font_size;
use crate::record::{DatasetKind, WordRecord};
use crate::viewport::{Viewport, cloud_dimensions};

const SEED_BASE_SIZE: f64 = 12.0;
const SEED_SIZE_SPREAD: f64 = 40.0;

/// Source of raw CSV text, addressed by relative path
pub trait ResourceSource {
    /// Fetches the full body of a resource.
    ///
    /// # Errors
    ///
    /// Implementations return [`Error::ResourceUnavailable`] when the
    /// resource cannot be retrieved.
    fn fetch(&self, path: &str) -> impl Future<Output = Result<String>>;
}

#[derive(Debug, Deserialize)]
struct SlangRow {
    keyword: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct EmojiRow {
    emoji: String,
    #[serde(rename = "Description", default)]
    description: String,
}

/// Column that holds the display token for a dataset
const fn text_column(kind: DatasetKind) -> &'static str {
    match kind {
        DatasetKind::Slang => "keyword",
        DatasetKind::Emoji => "emoji",
    }
}

/// Column that holds the tooltip body; the emoji file capitalizes it
const fn description_column(kind: DatasetKind) -> &'static str {
    match kind {
        DatasetKind::Slang => "description",
        DatasetKind::Emoji => "Description",
    }
}

/// Parses a CSV document into `(text, description)` pairs.
///
/// # Errors
///
/// Returns [`Error::MissingColumn`] if a required header is absent and
/// [`Error::CsvParse`] for malformed rows. A row that stops before the
/// description keeps its word with an empty description.
pub fn parse_rows(kind: DatasetKind, resource: &str, body: &str) -> Result<Vec<(String, String)>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(body.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| Error::csv_parse(resource, e.to_string()))?
        .clone();
    for column in [text_column(kind), description_column(kind)] {
        if !headers.iter().any(|h| h == column) {
            return Err(Error::missing_column(resource, column));
        }
    }

    match kind {
        DatasetKind::Slang => reader
            .deserialize::<SlangRow>()
            .map(|row| {
                row.map(|r| (r.keyword, r.description))
                    .map_err(|e| Error::csv_parse(resource, e.to_string()))
            })
            .collect(),
        DatasetKind::Emoji => reader
            .deserialize::<EmojiRow>()
            .map(|row| {
                row.map(|r| (r.emoji, r.description))
                    .map_err(|e| Error::csv_parse(resource, e.to_string()))
            })
            .collect(),
    }
}

/// Maps parsed rows to records with a responsive seed size.
///
/// The seed is overwritten by the layout pass before anything is drawn.
pub fn seed_records<R: Rng + ?Sized>(
    rows: Vec<(String, String)>,
    viewport: Viewport,
    rng: &mut R,
) -> Vec<WordRecord> {
    let dims = cloud_dimensions(viewport);
    let device = viewport.device();
    rows.into_iter()
        .map(|(text, description)| {
            let base = SEED_BASE_SIZE + rng.gen_range(0.0..SEED_SIZE_SPREAD);
            WordRecord::new(text, description, dynamic_font_size(base, dims, device))
        })
        .collect()
}

/// Both word collections, loaded together and kept for the session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Datasets {
    slang: Vec<WordRecord>,
    emoji: Vec<WordRecord>,
}

impl Datasets {
    #[must_use]
    pub const fn new(slang: Vec<WordRecord>, emoji: Vec<WordRecord>) -> Self {
        Self { slang, emoji }
    }

    #[must_use]
    pub fn get(&self, kind: DatasetKind) -> &[WordRecord] {
        match kind {
            DatasetKind::Slang => &self.slang,
            DatasetKind::Emoji => &self.emoji,
        }
    }

    pub fn get_mut(&mut self, kind: DatasetKind) -> &mut [WordRecord] {
        match kind {
            DatasetKind::Slang => &mut self.slang,
            DatasetKind::Emoji => &mut self.emoji,
        }
    }

    /// True when at least one collection has no records
    #[must_use]
    pub fn is_incomplete(&self) -> bool {
        self.slang.is_empty() || self.emoji.is_empty()
    }
}

fn fetch_outcome(
    kind: DatasetKind,
    resource: &str,
    fetched: Result<String>,
) -> Result<Vec<(String, String)>> {
    let outcome = fetched.and_then(|body| parse_rows(kind, resource, &body));
    if let Err(e) = &outcome {
        error!(dataset = %kind, resource, error = %e, "CSV load error");
    }
    outcome
}

/// Fetches and parses both datasets.
///
/// # Errors
///
/// Returns [`Error::InitializationAborted`] if either resource fails to
/// fetch or parse. Individual failures are logged, not returned.
pub async fn load_datasets<S, R>(
    source: &S,
    resources: &ResourceConfig,
    viewport: Viewport,
    rng: &mut R,
) -> Result<Datasets>
where
    S: ResourceSource,
    R: Rng + ?Sized,
{
    let slang_path = resources.path(DatasetKind::Slang);
    let emoji_path = resources.path(DatasetKind::Emoji);

    let (slang, emoji) = join(source.fetch(slang_path), source.fetch(emoji_path)).await;
    let slang = fetch_outcome(DatasetKind::Slang, slang_path, slang);
    let emoji = fetch_outcome(DatasetKind::Emoji, emoji_path, emoji);

    let (Ok(slang_rows), Ok(emoji_rows)) = (slang, emoji) else {
        error!("One or both CSV files failed to load.");
        return Err(Error::InitializationAborted);
    };

    let datasets = Datasets::new(
        seed_records(slang_rows, viewport, rng),
        seed_records(emoji_rows, viewport, rng),
    );
    info!(
        slang = datasets.slang.len(),
        emoji = datasets.emoji.len(),
        "Datasets loaded"
    );
    Ok(datasets)
}
