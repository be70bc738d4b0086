//! Books API (`svc/books/v3`).
//!
//! Responses are returned as raw JSON.

use crate::api::ApiBase;
use crate::Result;
use tracing::info;

#[derive(Debug, Clone)]
pub struct Books {
    base: ApiBase,
}

impl Books {
    pub fn new(base: ApiBase) -> Self {
        Self { base }
    }

    /// Names of all Best Sellers lists.
    pub async fn names(&self) -> Result<serde_json::Value> {
        let params = self.base.auth_params();

        info!("Fetching best seller list names");
        self.base
            .get_json("/lists/names.json", &params, "list names response")
            .await
    }
}
