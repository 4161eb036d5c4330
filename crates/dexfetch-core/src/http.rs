//! Blocking HTTP GET via libcurl.
//!
//! Used for both the JSON resource and the sprite images. Runs in the current
//! thread; call from `spawn_blocking` if used from async code.

use crate::error::FetchError;
use std::time::Duration;

/// Default `User-Agent` sent when the config does not override it.
pub const DEFAULT_USER_AGENT: &str = concat!("dexfetch/", env!("CARGO_PKG_VERSION"));

/// Curl settings applied to every request.
#[derive(Debug, Clone)]
pub struct HttpOptions {
    pub connect_timeout: Duration,
    /// Whole-transfer timeout.
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for HttpOptions {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(15),
            timeout: Duration::from_secs(60),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Performs a GET and returns the full response body.
///
/// Follows redirects. Anything other than a final `200 OK` is an error.
pub fn get_bytes(url: &str, opts: &HttpOptions) -> Result<Vec<u8>, FetchError> {
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.connect_timeout(opts.connect_timeout)?;
    easy.timeout(opts.timeout)?;
    easy.useragent(&opts.user_agent)?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    tracing::debug!(url, code, bytes = body.len(), "GET finished");
    check_status(code)?;

    Ok(body)
}

fn check_status(code: u32) -> Result<(), FetchError> {
    if code == 200 {
        Ok(())
    } else {
        Err(FetchError::Status(code))
    }
}
