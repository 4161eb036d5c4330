//! Sprite image download and save.
//!
//! Each side (front/back) is handled independently: a failed download or
//! write is reported in that side's [`SpriteOutcome`] and the other side
//! still runs.

use crate::error::FetchError;
use crate::fetch::worker_error;
use crate::http::{self, HttpOptions};
use crate::model::Pokemon;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::task::JoinError;

/// Stem used when the record has no usable name.
const FALLBACK_STEM: &str = "pokemon";

/// Linux NAME_MAX, in bytes.
const NAME_MAX: usize = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteSide {
    Front,
    Back,
}

impl SpriteSide {
    pub const ALL: [SpriteSide; 2] = [SpriteSide::Front, SpriteSide::Back];

    pub fn as_str(self) -> &'static str {
        match self {
            SpriteSide::Front => "front",
            SpriteSide::Back => "back",
        }
    }

    /// Capitalized label for console messages ("Front", "Back").
    pub fn label(self) -> &'static str {
        match self {
            SpriteSide::Front => "Front",
            SpriteSide::Back => "Back",
        }
    }

    fn url(self, p: &Pokemon) -> Option<&str> {
        match self {
            SpriteSide::Front => p.sprites.front_url(),
            SpriteSide::Back => p.sprites.back_url(),
        }
    }
}

/// Which step of a sprite failed. Displays as the underlying [`FetchError`].
#[derive(Debug, Error)]
pub enum SpriteError {
    #[error(transparent)]
    Download(FetchError),
    #[error(transparent)]
    Save(FetchError),
}

/// Result for one side whose URL was present.
#[derive(Debug)]
pub struct SpriteOutcome {
    pub side: SpriteSide,
    /// Path written on success.
    pub result: Result<PathBuf, SpriteError>,
}

/// File name for a sprite: `<name>_<side>.png`, safe for Linux filesystems.
pub fn sprite_filename(name: &str, side: SpriteSide) -> String {
    let suffix = format!("_{}.png", side.as_str());
    let mut stem = sanitize_stem(name);
    if stem.is_empty() {
        stem = FALLBACK_STEM.to_string();
    }
    let max_stem = NAME_MAX - suffix.len();
    if stem.len() > max_stem {
        let mut take = max_stem;
        while !stem.is_char_boundary(take) {
            take -= 1;
        }
        stem.truncate(take);
    }
    stem + &suffix
}

/// Replaces path separators, NUL, control and whitespace characters with a
/// single `_`, then trims leading/trailing dots and underscores.
fn sanitize_stem(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut prev_underscore = false;
    for c in name.chars() {
        let bad = c == '/' || c == '\\' || c == '\0' || c.is_control() || c.is_whitespace();
        if bad || c == '_' {
            if !prev_underscore {
                out.push('_');
            }
            prev_underscore = true;
        } else {
            out.push(c);
            prev_underscore = false;
        }
    }
    out.trim_matches(|c| c == '.' || c == '_').to_string()
}

/// Downloads the image bytes at `url`.
pub fn download_sprite(url: &str, opts: &HttpOptions) -> Result<Vec<u8>, FetchError> {
    http::get_bytes(url, opts)
}

/// Creates (or truncates) `path` and writes all of `data` to it.
pub fn save_sprite(data: &[u8], path: &Path) -> Result<(), FetchError> {
    let mut f = File::create(path)?;
    f.write_all(data)?;
    f.flush()?;
    Ok(())
}

/// Downloads and saves one side. Blocking.
fn fetch_and_save(
    url: &str,
    path: &Path,
    opts: &HttpOptions,
) -> Result<PathBuf, SpriteError> {
    let data = download_sprite(url, opts).map_err(SpriteError::Download)?;
    save_sprite(&data, path).map_err(SpriteError::Save)?;
    tracing::debug!(url, path = %path.display(), bytes = data.len(), "sprite saved");
    Ok(path.to_path_buf())
}

/// Downloads and saves every sprite whose URL is present, front first.
///
/// Sides with no URL are skipped and produce no outcome. Runs on the blocking
/// pool; the sides are fetched one after the other.
pub async fn save_sprites(p: &Pokemon, dir: &Path, opts: HttpOptions) -> Vec<SpriteOutcome> {
    let jobs: Vec<(SpriteSide, String, PathBuf)> = SpriteSide::ALL
        .into_iter()
        .filter_map(|side| {
            side.url(p)
                .map(|url| (side, url.to_string(), dir.join(sprite_filename(&p.name, side))))
        })
        .collect();
    if jobs.is_empty() {
        tracing::info!(name = %p.name, "no sprite URLs present");
        return Vec::new();
    }

    let sides: Vec<SpriteSide> = jobs.iter().map(|(side, _, _)| *side).collect();
    let joined = tokio::task::spawn_blocking(move || {
        jobs.into_iter()
            .map(|(side, url, path)| SpriteOutcome {
                side,
                result: fetch_and_save(&url, &path, &opts),
            })
            .collect::<Vec<_>>()
    })
    .await;

    match joined {
        Ok(outcomes) => outcomes,
        Err(e) => {
            tracing::warn!("sprite worker failed: {}", e);
            worker_failed(sides, e)
        }
    }
}

/// One download failure per side when the blocking worker itself died.
fn worker_failed(sides: Vec<SpriteSide>, e: JoinError) -> Vec<SpriteOutcome> {
    let message = worker_error(e).to_string();
    sides
        .into_iter()
        .map(|side| SpriteOutcome {
            side,
            result: Err(SpriteError::Download(FetchError::Worker(message.clone()))),
        })
        .collect()
}
