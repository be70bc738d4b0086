//! Top-level client holding one instance of each sub-API.

use crate::api::{http_client, ApiBase, Credential};
use crate::books::Books;
use crate::reviews::MovieReviews;
use crate::Result;
use shared::{ApiConfig, Config};
use tracing::info;

/// Entry point for the NYT developer API.
///
/// Every sub-API shares the same credential and HTTP connection pool.
#[derive(Debug, Clone)]
pub struct NytClient {
    pub movie_reviews: MovieReviews,
    pub books: Books,
}

impl NytClient {
    /// Create a client with default settings.
    ///
    /// Falls back to `NYT_API_KEY` when `api_key` is `None`.
    pub fn new(api_key: Option<&str>) -> Result<Self> {
        let credential = Credential::resolve(api_key)?;
        Self::with_credential(credential, &ApiConfig::default())
    }

    /// Create a client from loaded configuration.
    ///
    /// The configured key wins over `NYT_API_KEY`.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::with_credential(Credential::from_config(&config.api)?, &config.api)
    }

    pub fn with_credential(credential: Credential, config: &ApiConfig) -> Result<Self> {
        let client = http_client(config)?;

        info!(
            movies_base_url = %config.movies_base_url,
            books_base_url = %config.books_base_url,
            "NYT client initialized"
        );

        Ok(Self {
            movie_reviews: MovieReviews::new(ApiBase::new(
                client.clone(),
                credential.clone(),
                config.movies_base_url.as_str(),
            )),
            books: Books::new(ApiBase::new(
                client,
                credential,
                config.books_base_url.as_str(),
            )),
        })
    }
}
