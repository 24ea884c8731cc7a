//! Planning service HTTP client.
//!
//! Provides async methods for the planning service's JSON API and the
//! [`JourneyApi`] seam the orchestrator is written against.

use std::time::Duration;

use futures::FutureExt;
use futures::future::BoxFuture;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::validate::PlanRequest;

use super::error::ApiError;
use super::types::{HealthResponse, PlanResponse, SearchRequest, SearchResponse};

/// Default base URL for the planning service.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable overriding the base URL.
pub const BASE_URL_ENV: &str = "JOURNEY_API_URL";

/// Environment variable overriding the request timeout.
pub const TIMEOUT_ENV: &str = "JOURNEY_API_TIMEOUT_SECS";

/// Configuration for the planning service client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL for the API, without a trailing slash
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl ApiConfig {
    /// Create a config for the service at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(base_url.into()),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Build a config from `JOURNEY_API_URL` and `JOURNEY_API_TIMEOUT_SECS`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    ///
    /// Unset variables fall back to the defaults; an unparseable timeout is
    /// logged and ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(BASE_URL_ENV).filter(|u| !u.trim().is_empty()) {
            config = config.with_base_url(url);
        }

        if let Some(raw) = lookup(TIMEOUT_ENV) {
            match raw.trim().parse() {
                Ok(secs) => config = config.with_timeout(secs),
                Err(_) => warn!(value = %raw, "ignoring invalid {TIMEOUT_ENV}"),
            }
        }

        config
    }

    /// Set a custom base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = normalize_base_url(url.into());
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

fn normalize_base_url(url: String) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// The planning operation the orchestrator depends on.
///
/// This abstraction allows the orchestrator to be driven by a scripted
/// service in tests.
pub trait JourneyApi {
    /// Ask the service to plan a journey.
    ///
    /// `Ok` means an envelope was decoded, whatever its `success` flag says.
    /// `Err` means no usable envelope came back.
    fn plan_journey<'a>(
        &'a self,
        request: &'a PlanRequest,
    ) -> BoxFuture<'a, Result<PlanResponse, ApiError>>;
}

/// Planning service API client.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Plan a journey. Single attempt, no retries.
    pub async fn plan(&self, request: &PlanRequest) -> Result<PlanResponse, ApiError> {
        self.post_json("/api/plan-journey", request).await
    }

    /// Keyword search for content.
    pub async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, ApiError> {
        self.post_json("/api/search", request).await
    }

    /// Semantic (embedding) search over content the service has seen.
    pub async fn semantic_search(
        &self,
        request: &SearchRequest,
    ) -> Result<SearchResponse, ApiError> {
        self.post_json("/api/semantic-search", request).await
    }

    /// Check the service's health endpoint.
    pub async fn health(&self) -> Result<HealthResponse, ApiError> {
        let url = format!("{}/health", self.base_url);
        debug!(%url, "GET");

        let response = self.http.get(&url).send().await?;
        decode(response).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "POST");

        let response = self.http.post(&url).json(body).send().await?;
        decode(response).await
    }
}

impl JourneyApi for ApiClient {
    fn plan_journey<'a>(
        &'a self,
        request: &'a PlanRequest,
    ) -> BoxFuture<'a, Result<PlanResponse, ApiError>> {
        self.plan(request).boxed()
    }
}

/// Decode a response body.
///
/// The status code is only consulted when the body does not decode: the
/// service reports failures inside the envelope, often with a 5xx status.
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();
    let body = response.text().await?;

    match serde_json::from_str(&body) {
        Ok(value) => Ok(value),
        Err(e) if status.is_success() => Err(ApiError::Json {
            message: e.to_string(),
            body: Some(ApiError::body_excerpt(&body)),
        }),
        Err(_) => Err(ApiError::Api {
            status: status.as_u16(),
            message: ApiError::body_excerpt(&body),
        }),
    }
}
