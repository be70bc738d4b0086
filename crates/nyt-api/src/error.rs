//! Error types for the NYT API client.

use thiserror::Error;

/// Errors returned by every client operation.
#[derive(Debug, Error)]
pub enum NytError {
    /// No API key was supplied and `NYT_API_KEY` is not set.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Pagination offset is not a multiple of the page size.
    #[error("offset {offset} is not a multiple of {page_size}")]
    InvalidOffset { offset: u32, page_size: u32 },

    /// Non-200 response carrying the upstream fault payload.
    #[error("error code {status}: {message} ({code})")]
    Upstream {
        status: u16,
        message: String,
        code: String,
    },

    /// Non-200 response whose body is not a fault payload.
    #[error("unexpected status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    /// A 200 response body that does not match the expected shape.
    #[error("failed to decode {target} at {path}: {source}")]
    Decode {
        target: &'static str,
        /// Location of the failure inside the body, e.g. `results[0].link`
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// A string that names none of an enum's values.
    #[error("unknown {kind}: {value:?}")]
    UnknownVariant { kind: &'static str, value: String },

    /// An upstream date field that could not be parsed.
    #[error("invalid date in field {field}: {value:?}")]
    InvalidDate { field: &'static str, value: String },

    /// The request URL could not be assembled from the configured base URL.
    #[error("invalid url {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Transport failure from the HTTP client.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}

impl NytError {
    /// Whether the failure was raised locally, before any request was sent.
    pub fn is_validation(&self) -> bool {
        matches!(self, NytError::InvalidOffset { .. })
    }
}
