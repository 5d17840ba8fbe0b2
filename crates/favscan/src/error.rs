use thiserror::Error;

/// Errors that can fail an entire discovery call.
///
/// Only the starting page can fail a discovery: an unparsable URL, a
/// network failure on the initial fetch, or a non-success status for it.
/// Manifest, social and well-known extraction failures are logged and the
/// affected candidates are dropped instead.
#[derive(Debug, Error)]
pub enum FindError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid URL \"{url}\": {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },
}
