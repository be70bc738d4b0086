//! Base client shared by every NYT sub-API.
//!
//! Owns the HTTP client and the credential, adds the `api-key` parameter and
//! turns non-200 responses into [`NytError`]s.

use super::types::FaultResponse;
use crate::error::NytError;
use crate::Result;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use shared::{ApiConfig, API_KEY_ENV};
use std::fmt;
use std::time::Duration;
use tracing::{debug, warn};

/// Ordered query parameters, encoded form-style when the URL is built.
pub type QueryParams = Vec<(&'static str, String)>;

/// API key for the NYT developer API. Never empty.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap an API key, rejecting the empty string.
    pub fn new(key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        if key.is_empty() {
            return Err(NytError::Configuration("API key must not be empty".to_string()));
        }
        Ok(Self(key))
    }

    /// Use `explicit` when given, otherwise the `NYT_API_KEY` environment variable.
    pub fn resolve(explicit: Option<&str>) -> Result<Self> {
        Self::from_config(&ApiConfig {
            api_key: explicit.map(str::to_string),
            ..Default::default()
        })
    }

    /// Take the key from `config`, falling back to `NYT_API_KEY`.
    pub fn from_config(config: &ApiConfig) -> Result<Self> {
        match config.resolve_api_key() {
            Some(key) => Self::new(key),
            None => Err(NytError::Configuration(format!(
                "No API key was passed, and the environment variable {} was not set",
                API_KEY_ENV
            ))),
        }
    }

    pub(crate) fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// Build the HTTP client used by every sub-API.
pub fn http_client(config: &ApiConfig) -> Result<Client> {
    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .user_agent(config.user_agent.as_str())
        .build()?;
    Ok(client)
}

/// Authentication and error translation for one upstream API root.
#[derive(Debug, Clone)]
pub struct ApiBase {
    /// HTTP client (cheap to clone, shares the connection pool)
    client: Client,
    /// API key sent with every request
    credential: Credential,
    /// Base URL without trailing slash
    base_url: String,
}

impl ApiBase {
    pub fn new(client: Client, credential: Credential, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            credential,
            base_url,
        }
    }

    /// Query parameters every request starts from.
    pub fn auth_params(&self) -> QueryParams {
        vec![("api-key", self.credential.expose().to_string())]
    }

    /// Full request URL for `path` with `params` form-encoded.
    pub fn endpoint_url(&self, path: &str, params: &QueryParams) -> Result<Url> {
        let url = format!("{}{}", self.base_url, path);
        Url::parse_with_params(&url, params).map_err(|source| NytError::InvalidUrl { url, source })
    }

    /// GET `path`, check the status and decode the body into `T`.
    ///
    /// `target` names the expected payload in decode errors.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &QueryParams,
        target: &'static str,
    ) -> Result<T> {
        let url = self.endpoint_url(path, params)?;

        debug!(path = %path, params = params.len(), "Making API request");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        check_error(status, &body)?;

        let data = decode(&body, target).map_err(|e| {
            warn!(path = %path, error = %e, "Failed to parse response");
            e
        })?;

        debug!(path = %path, "Request successful");
        Ok(data)
    }
}

/// Decode a JSON body, recording where in the document decoding failed.
pub fn decode<T: DeserializeOwned>(body: &str, target: &'static str) -> Result<T> {
    let deserializer = &mut serde_json::Deserializer::from_str(body);
    serde_path_to_error::deserialize(deserializer).map_err(|e| NytError::Decode {
        target,
        path: e.path().to_string(),
        source: e.into_inner(),
    })
}

/// Fail on any status other than 200.
///
/// The fault payload supplies the message and error code; a body without
/// that shape is reported verbatim.
pub fn check_error(status: StatusCode, body: &str) -> Result<()> {
    if status == StatusCode::OK {
        return Ok(());
    }

    warn!(status = %status, "Request failed");

    match serde_json::from_str::<FaultResponse>(body) {
        Ok(FaultResponse { fault }) => Err(NytError::Upstream {
            status: status.as_u16(),
            message: fault.faultstring,
            code: fault.detail.errorcode,
        }),
        Err(_) => Err(NytError::UnexpectedStatus {
            status: status.as_u16(),
            body: body.to_string(),
        }),
    }
}
