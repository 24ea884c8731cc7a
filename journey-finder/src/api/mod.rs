//! Planning service client.
//!
//! This module provides an HTTP client for the content journey planning
//! service, which selects and sequences movies and shows to fill a
//! requested duration. Planning itself happens server-side; this side only
//! speaks its JSON contract:
//!
//! - `POST /api/plan-journey` returns a `{success, journey?, error?}` envelope
//! - `POST /api/search` and `POST /api/semantic-search` return content lists
//! - `GET /health` reports service status

mod client;
mod error;
mod mock;
mod types;

pub use client::{
    ApiClient, ApiConfig, BASE_URL_ENV, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, JourneyApi,
    TIMEOUT_ENV,
};
pub use error::ApiError;
pub use mock::MockJourneyApi;
pub use types::{
    DEFAULT_SEARCH_LIMIT, HealthResponse, PlanResponse, SEARCH_FALLBACK_MESSAGE, SearchRequest,
    SearchResponse,
};
