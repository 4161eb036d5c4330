//! Resource URL building and the background fetch worker.

use crate::error::FetchError;
use crate::http::{self, HttpOptions};
use crate::model::{self, Pokemon};
use tokio::task::{JoinError, JoinHandle};

/// Builds the resource URL for `id_or_name` under `base`.
///
/// `base` is treated as a directory and the identifier is appended as one
/// percent-encoded path segment; the result always ends with `/`,
/// e.g. `.../api/pokemon/1/`.
pub fn resource_url(base: &str, id_or_name: &str) -> Result<String, FetchError> {
    let key = id_or_name.trim().to_lowercase();
    if key.is_empty() {
        return Err(FetchError::InvalidUrl("empty resource identifier".to_string()));
    }
    if key.contains('/') || key == "." || key == ".." {
        return Err(FetchError::InvalidUrl(format!(
            "resource identifier must be a single path segment: {key}"
        )));
    }

    let mut url = url::Url::parse(base.trim())
        .map_err(|e| FetchError::InvalidUrl(format!("{base}: {e}")))?;
    url.path_segments_mut()
        .map_err(|_| FetchError::InvalidUrl(format!("{base}: cannot be a base URL")))?
        .pop_if_empty()
        .push(&key)
        .push("");
    Ok(url.into())
}

/// Starts the GET for `url` on the blocking pool.
///
/// The handle resolves exactly once, with either the body or the error.
pub fn spawn_fetch(url: String, opts: HttpOptions) -> JoinHandle<Result<Vec<u8>, FetchError>> {
    tokio::task::spawn_blocking(move || http::get_bytes(&url, &opts))
}

/// Maps a worker that panicked or was cancelled to [`FetchError::Worker`].
pub(crate) fn worker_error(e: JoinError) -> FetchError {
    FetchError::Worker(e.to_string())
}

/// Fetches and decodes the resource at `url`.
pub async fn fetch_pokemon(url: &str, opts: HttpOptions) -> Result<Pokemon, FetchError> {
    tracing::info!(url, "fetching resource");
    let body = spawn_fetch(url.to_string(), opts)
        .await
        .map_err(worker_error)??;
    let pokemon = model::parse_pokemon(&body)?;
    tracing::info!(name = %pokemon.name, id = pokemon.id, "decoded resource");
    Ok(pokemon)
}
