//! Raw NYT API response types.
//!
//! These mirror the JSON exactly as the upstream sends it. Nothing outside
//! the normalizer should need them.

use serde::Deserialize;

/// Envelope for `reviews/search`, `reviews/all` and `reviews/picks`
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewsResponse {
    pub copyright: String,
    #[serde(default)]
    pub has_more: Option<bool>,
    #[serde(default)]
    pub num_results: Option<u32>,
    /// `null` when the query matched nothing
    #[serde(default)]
    pub results: Option<Vec<RawReview>>,
}

/// Envelope for `critics/{reviewer}`
#[derive(Debug, Clone, Deserialize)]
pub struct CriticsResponse {
    pub copyright: String,
    #[serde(default)]
    pub num_results: Option<u32>,
    #[serde(default)]
    pub results: Option<Vec<RawCritic>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawReview {
    pub display_title: String,
    pub mpaa_rating: String,
    /// `1` for a critic's pick; anything else is not a pick
    #[serde(default)]
    pub critics_pick: Option<serde_json::Value>,
    pub byline: String,
    pub headline: String,
    pub summary_short: String,
    pub publication_date: String,
    #[serde(default)]
    pub opening_date: Option<String>,
    pub date_updated: String,
    pub link: RawLink,
    pub multimedia: RawMultimedia,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawLink {
    #[serde(rename = "type")]
    pub link_type: String,
    pub url: String,
    pub suggested_link_text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawMultimedia {
    #[serde(rename = "type")]
    pub media_type: String,
    pub src: String,
    pub height: u32,
    pub width: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawCritic {
    pub display_name: String,
    pub sort_name: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    pub seo_name: String,
    /// Critic images sit one level deeper than review images
    #[serde(default)]
    pub multimedia: Option<RawCriticMultimedia>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawCriticMultimedia {
    pub resource: RawMultimedia,
}

/// Error body sent with every non-200 response
#[derive(Debug, Clone, Deserialize)]
pub struct FaultResponse {
    pub fault: Fault,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Fault {
    pub faultstring: String,
    pub detail: FaultDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FaultDetail {
    pub errorcode: String,
}
