//! Wire types for the planning service's JSON API.

use serde::{Deserialize, Serialize};

use crate::domain::{Content, Journey};

/// Default number of results for content search.
pub const DEFAULT_SEARCH_LIMIT: usize = 10;

/// Response envelope for `POST /api/plan-journey`.
///
/// `success` defaults to `false` when absent, so framework-level error
/// bodies (e.g. `{"detail": "..."}`) decode as a failure without a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanResponse {
    /// Whether a journey was planned
    #[serde(default)]
    pub success: bool,

    /// The planned journey, present when `success` is true
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub journey: Option<Journey>,

    /// Human-readable failure reason
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PlanResponse {
    /// A successful envelope carrying a journey.
    pub fn success(journey: Journey) -> Self {
        Self {
            success: true,
            journey: Some(journey),
            error: None,
        }
    }

    /// A failed envelope, with or without a message.
    pub fn failure(error: Option<String>) -> Self {
        Self {
            success: false,
            journey: None,
            error,
        }
    }
}

/// Request body for `POST /api/search` and `POST /api/semantic-search`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Free-text query
    pub query: String,

    /// Maximum number of results
    pub limit: usize,
}

impl SearchRequest {
    /// Create a search request with the default limit.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            limit: DEFAULT_SEARCH_LIMIT,
        }
    }

    /// Set the result limit.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

/// Response envelope for content search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Whether the search ran
    #[serde(default)]
    pub success: bool,

    /// Matching content, best first
    #[serde(default)]
    pub contents: Vec<Content>,

    /// Human-readable failure reason
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Shown when a search fails without saying why.
pub const SEARCH_FALLBACK_MESSAGE: &str = "An error occurred while searching for content";

impl SearchResponse {
    /// The service's failure reason, or a generic one if it gave none.
    pub fn error_message(&self) -> &str {
        self.error
            .as_deref()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(SEARCH_FALLBACK_MESSAGE)
    }
}

/// Response for `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status, `"healthy"` when up
    pub status: String,
}

impl HealthResponse {
    /// Whether the service reports itself healthy.
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}
