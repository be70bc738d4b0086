//! Domain types returned by the movie review endpoints.

use super::Continuation;
use crate::error::NytError;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

/// A single movie review
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Review {
    pub byline: String,
    pub critics_pick: bool,
    pub date_updated: DateTime<Utc>,
    pub display_title: String,
    pub headline: String,
    pub mpaa_rating: String,
    /// `None` for films without a release date
    pub opening_date: Option<NaiveDate>,
    pub publication_date: NaiveDate,
    pub summary_short: String,
    pub link: Link,
    pub multimedia: Multimedia,
}

/// Link to the full review article
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub suggested_link_text: String,
    pub link_type: String,
    pub url: String,
}

/// Image attached to a review or critic
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Multimedia {
    pub media_type: String,
    pub height: u32,
    pub width: u32,
    pub src: String,
}

/// A movie critic
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Critic {
    pub display_name: String,
    pub sort_name: String,
    pub status: CriticStatus,
    pub bio: Option<String>,
    pub seo_name: String,
    pub multimedia: Option<Multimedia>,
}

/// Employment status of a critic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CriticStatus {
    FullTime,
    PartTime,
    None,
}

impl CriticStatus {
    /// Map the raw `status` field; anything unrecognised is `None`.
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw {
            Some("full-time") => CriticStatus::FullTime,
            Some("part-time") => CriticStatus::PartTime,
            _ => CriticStatus::None,
        }
    }
}

impl std::fmt::Display for CriticStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CriticStatus::FullTime => write!(f, "full-time"),
            CriticStatus::PartTime => write!(f, "part-time"),
            CriticStatus::None => write!(f, "none"),
        }
    }
}

/// Which critics to list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reviewer {
    All,
    FullTime,
    PartTime,
}

impl Reviewer {
    pub fn path(&self) -> &'static str {
        match self {
            Reviewer::All => "/critics/all.json",
            Reviewer::FullTime => "/critics/full-time.json",
            Reviewer::PartTime => "/critics/part-time.json",
        }
    }
}

impl std::fmt::Display for Reviewer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Reviewer::All => write!(f, "all"),
            Reviewer::FullTime => write!(f, "full-time"),
            Reviewer::PartTime => write!(f, "part-time"),
        }
    }
}

impl std::str::FromStr for Reviewer {
    type Err = NytError;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s {
            "all" => Ok(Reviewer::All),
            "full-time" => Ok(Reviewer::FullTime),
            "part-time" => Ok(Reviewer::PartTime),
            _ => Err(NytError::UnknownVariant {
                kind: "reviewer",
                value: s.to_string(),
            }),
        }
    }
}

/// One page of reviews from `search`, `all` or `picks`
#[derive(Debug, Clone)]
pub struct ReviewPage {
    pub copyright: String,
    pub reviews: Vec<Review>,
    /// Present only when the upstream reported more results
    pub next: Option<Continuation>,
}

/// Result of the critics endpoint (not paginated)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CriticPage {
    pub copyright: String,
    pub critics: Vec<Critic>,
}
