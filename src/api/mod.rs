//! HTTP client and wire types for the movie database API.

pub mod client;
pub mod types;

pub use client::{ApiError, OmdbClient};
pub use types::{Movie, SearchResponse};
