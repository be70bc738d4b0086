//! Query building for the movie review endpoints.
//!
//! `search`, `all` and `picks` share one encoder; the list endpoints accept
//! only the offset and ordering subset.

use crate::api::QueryParams;
use crate::error::NytError;
use crate::Result;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};

/// Results per page. Offsets must be a multiple of this.
pub const PAGE_SIZE: u32 = 20;

/// Result ordering accepted by the review endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    OpeningDate,
    PublicationDate,
    Title,
}

impl Order {
    /// Value of the `order` parameter.
    pub fn as_param(&self) -> &'static str {
        match self {
            Order::OpeningDate => "by-opening-date",
            Order::PublicationDate => "by-publication-date",
            Order::Title => "by-title",
        }
    }
}

impl std::fmt::Display for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Order::OpeningDate => write!(f, "opening-date"),
            Order::PublicationDate => write!(f, "publication-date"),
            Order::Title => write!(f, "title"),
        }
    }
}

impl std::str::FromStr for Order {
    type Err = NytError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "opening-date" => Ok(Order::OpeningDate),
            "publication-date" => Ok(Order::PublicationDate),
            "title" => Ok(Order::Title),
            _ => Err(NytError::UnknownVariant {
                kind: "order",
                value: s.to_string(),
            }),
        }
    }
}

/// Inclusive calendar-date range; `end` is optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    /// Range starting at `start` with no end.
    pub fn starting(start: NaiveDate) -> Self {
        Self { start, end: None }
    }

    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start,
            end: Some(end),
        }
    }

    /// Range from instants; each one is reduced to its UTC calendar date.
    pub fn from_instants<Tz: TimeZone>(start: DateTime<Tz>, end: Option<DateTime<Tz>>) -> Self {
        Self {
            start: start.with_timezone(&Utc).date_naive(),
            end: end.map(|end| end.with_timezone(&Utc).date_naive()),
        }
    }

    /// `YYYY-MM-DD` or `YYYY-MM-DD;YYYY-MM-DD`
    pub fn to_param(&self) -> String {
        match self.end {
            Some(end) => format!("{};{}", self.start.format("%Y-%m-%d"), end.format("%Y-%m-%d")),
            None => self.start.format("%Y-%m-%d").to_string(),
        }
    }
}

/// Filters for `reviews/search`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    /// Free text matched against titles and review text
    pub query: Option<String>,
    /// Reviewer name, e.g. `Manohla Dargis`
    pub reviewer: Option<String>,
    /// Only critic's picks when true
    pub critics_pick: bool,
    pub opening_date: Option<DateRange>,
    pub publication_date: Option<DateRange>,
    pub order: Option<Order>,
    /// Must be a multiple of [`PAGE_SIZE`]
    pub offset: Option<u32>,
}

/// Paging and ordering for `reviews/all` and `reviews/picks`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub offset: Option<u32>,
    pub order: Option<Order>,
}

/// Which list endpoint a [`ListQuery`] is sent to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListEndpoint {
    All,
    Picks,
}

impl ListEndpoint {
    pub fn path(&self) -> &'static str {
        match self {
            ListEndpoint::All => "/reviews/all.json",
            ListEndpoint::Picks => "/reviews/picks.json",
        }
    }
}

impl std::fmt::Display for ListEndpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListEndpoint::All => write!(f, "all"),
            ListEndpoint::Picks => write!(f, "picks"),
        }
    }
}

fn encode_offset(offset: Option<u32>, params: &mut QueryParams) -> Result<()> {
    if let Some(offset) = offset {
        if offset % PAGE_SIZE != 0 {
            return Err(NytError::InvalidOffset {
                offset,
                page_size: PAGE_SIZE,
            });
        }
        params.push(("offset", offset.to_string()));
    }
    Ok(())
}

/// `None` once the next offset no longer fits in a `u32`.
fn next_offset(offset: Option<u32>) -> Option<u32> {
    offset.unwrap_or(0).checked_add(PAGE_SIZE)
}

impl SearchQuery {
    /// Append this query's parameters to `params`.
    ///
    /// Fails with [`NytError::InvalidOffset`] without touching the network.
    pub fn encode(&self, params: &mut QueryParams) -> Result<()> {
        if self.critics_pick {
            params.push(("critics-pick", "Y".to_string()));
        }
        encode_offset(self.offset, params)?;
        if let Some(range) = &self.opening_date {
            params.push(("opening-date", range.to_param()));
        }
        if let Some(order) = self.order {
            params.push(("order", order.as_param().to_string()));
        }
        if let Some(range) = &self.publication_date {
            params.push(("publication-date", range.to_param()));
        }
        if let Some(reviewer) = &self.reviewer {
            params.push(("reviewer", reviewer.clone()));
        }
        if let Some(query) = &self.query {
            params.push(("query", query.clone()));
        }
        Ok(())
    }

    /// Same filters, one page further.
    pub fn next_page(&self) -> Option<Self> {
        Some(Self {
            offset: Some(next_offset(self.offset)?),
            ..self.clone()
        })
    }
}

impl ListQuery {
    pub fn encode(&self, params: &mut QueryParams) -> Result<()> {
        encode_offset(self.offset, params)?;
        if let Some(order) = self.order {
            params.push(("order", order.as_param().to_string()));
        }
        Ok(())
    }

    pub fn next_page(&self) -> Option<Self> {
        Some(Self {
            offset: Some(next_offset(self.offset)?),
            order: self.order,
        })
    }
}
