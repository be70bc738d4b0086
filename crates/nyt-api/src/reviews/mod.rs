//! Movie Reviews API.
//!
//! Search, list and critic endpoints of `svc/movies/v2`. Review pages carry a
//! [`Continuation`] when the upstream reports more results.

pub mod models;
pub mod normalize;
pub mod query;

pub use models::{
    Critic, CriticPage, CriticStatus, Link, Multimedia, Review, ReviewPage, Reviewer,
};
pub use query::{DateRange, ListEndpoint, ListQuery, Order, SearchQuery, PAGE_SIZE};

use crate::api::types::{CriticsResponse, ReviewsResponse};
use crate::api::ApiBase;
use crate::Result;
use tracing::{debug, info};

/// Client for the movie review endpoints
#[derive(Debug, Clone)]
pub struct MovieReviews {
    base: ApiBase,
}

/// The logical query behind a review page
#[derive(Debug, Clone, PartialEq, Eq)]
enum ReviewRequest {
    Search(SearchQuery),
    List {
        endpoint: ListEndpoint,
        query: ListQuery,
    },
}

impl ReviewRequest {
    fn next_page(&self) -> Option<Self> {
        match self {
            ReviewRequest::Search(query) => query.next_page().map(ReviewRequest::Search),
            ReviewRequest::List { endpoint, query } => {
                query.next_page().map(|query| ReviewRequest::List {
                    endpoint: *endpoint,
                    query,
                })
            }
        }
    }

    fn offset(&self) -> u32 {
        let offset = match self {
            ReviewRequest::Search(query) => query.offset,
            ReviewRequest::List { query, .. } => query.offset,
        };
        offset.unwrap_or(0)
    }
}

/// Fetches the next page of a review query.
///
/// Holds the original filters with the offset already advanced by one page.
#[derive(Debug, Clone)]
pub struct Continuation {
    reviews: MovieReviews,
    request: ReviewRequest,
}

impl Continuation {
    /// Offset the next request will be sent with.
    pub fn offset(&self) -> u32 {
        self.request.offset()
    }

    /// Issue the request for the next page.
    pub async fn fetch(&self) -> Result<ReviewPage> {
        self.reviews.fetch(self.request.clone()).await
    }
}

impl ReviewPage {
    /// Follow continuations until the results run out or `max_pages` pages
    /// (including this one) have been read.
    pub async fn collect_pages(self, max_pages: usize) -> Result<Vec<Review>> {
        let mut reviews = self.reviews;
        let mut next = self.next;
        let mut pages = 1;

        while let Some(continuation) = next {
            if pages >= max_pages {
                break;
            }
            let page = continuation.fetch().await?;
            reviews.extend(page.reviews);
            next = page.next;
            pages += 1;
        }

        debug!(pages = pages, reviews = reviews.len(), "Collected review pages");
        Ok(reviews)
    }
}

impl MovieReviews {
    pub fn new(base: ApiBase) -> Self {
        Self { base }
    }

    /// Search reviews by keyword, reviewer, dates and pick status.
    pub async fn search(&self, query: SearchQuery) -> Result<ReviewPage> {
        let mut params = self.base.auth_params();
        query.encode(&mut params)?;

        info!(offset = query.offset.unwrap_or(0), "Searching movie reviews");
        let raw: ReviewsResponse = self
            .base
            .get_json("/reviews/search.json", &params, "review search response")
            .await?;

        self.review_page(raw, ReviewRequest::Search(query))
    }

    /// All reviews, newest first unless ordered otherwise.
    pub async fn all(&self, query: ListQuery) -> Result<ReviewPage> {
        self.list(ListEndpoint::All, query).await
    }

    /// Critic's picks only.
    pub async fn picks(&self, query: ListQuery) -> Result<ReviewPage> {
        self.list(ListEndpoint::Picks, query).await
    }

    /// List critics. This endpoint is not paginated.
    pub async fn critics(&self, reviewer: Reviewer) -> Result<CriticPage> {
        let params = self.base.auth_params();

        info!(reviewer = %reviewer, "Fetching movie critics");
        let raw: CriticsResponse = self
            .base
            .get_json(reviewer.path(), &params, "critics response")
            .await?;

        let critics = normalize::critics(raw.results.unwrap_or_default());
        debug!(critics = critics.len(), "Critics fetched");

        Ok(CriticPage {
            copyright: raw.copyright,
            critics,
        })
    }

    async fn list(&self, endpoint: ListEndpoint, query: ListQuery) -> Result<ReviewPage> {
        let mut params = self.base.auth_params();
        query.encode(&mut params)?;

        info!(
            endpoint = %endpoint,
            offset = query.offset.unwrap_or(0),
            "Listing movie reviews"
        );
        let raw: ReviewsResponse = self
            .base
            .get_json(endpoint.path(), &params, "review list response")
            .await?;

        self.review_page(raw, ReviewRequest::List { endpoint, query })
    }

    async fn fetch(&self, request: ReviewRequest) -> Result<ReviewPage> {
        match request {
            ReviewRequest::Search(query) => self.search(query).await,
            ReviewRequest::List { endpoint, query } => self.list(endpoint, query).await,
        }
    }

    fn review_page(&self, raw: ReviewsResponse, request: ReviewRequest) -> Result<ReviewPage> {
        let reviews = normalize::reviews(raw.results.unwrap_or_default())?;
        let has_more = raw.has_more.unwrap_or(false);

        debug!(
            reviews = reviews.len(),
            num_results = raw.num_results.unwrap_or(0),
            has_more = has_more,
            "Reviews fetched"
        );

        // No continuation once the next offset would overflow.
        let next = if has_more {
            request.next_page().map(|request| Continuation {
                reviews: self.clone(),
                request,
            })
        } else {
            None
        };

        Ok(ReviewPage {
            copyright: raw.copyright,
            reviews,
            next,
        })
    }
}
