//! Typed client for the New York Times developer API.
//!
//! This library wraps the Movie Reviews API with typed queries, normalized
//! results and page continuations, and exposes the Books API list names as
//! raw JSON.

pub mod api;
pub mod books;
pub mod error;
pub mod nyt;
pub mod reviews;

pub use api::{ApiBase, Credential};
pub use books::Books;
pub use error::NytError;
pub use nyt::NytClient;
pub use reviews::{
    Continuation, Critic, CriticPage, CriticStatus, DateRange, Link, ListQuery, MovieReviews,
    Multimedia, Order, Review, ReviewPage, Reviewer, SearchQuery, PAGE_SIZE,
};

/// Result type used throughout the client
pub type Result<T> = std::result::Result<T, NytError>;
