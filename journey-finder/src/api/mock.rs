//! Scripted planning service for testing without a running server.
//!
//! Replies are queued up front and handed out in order, one per request,
//! optionally after a delay so overlapping requests can settle out of order.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use futures::FutureExt;
use futures::future::BoxFuture;

use crate::validate::PlanRequest;

use super::client::JourneyApi;
use super::error::ApiError;
use super::types::PlanResponse;

/// What a scripted request resolves to.
#[derive(Debug, Clone)]
enum Outcome {
    /// A decoded envelope
    Envelope(PlanResponse),
    /// No response at all
    TransportFailure(String),
}

#[derive(Debug, Clone)]
struct Reply {
    delay: Duration,
    outcome: Outcome,
}

#[derive(Debug, Default)]
struct Script {
    replies: VecDeque<Reply>,
    requests: Vec<PlanRequest>,
}

/// Mock planning service that serves scripted replies.
///
/// Clones share the same script, so a test can keep a handle for
/// inspecting requests after moving one into the orchestrator.
#[derive(Debug, Clone, Default)]
pub struct MockJourneyApi {
    script: Arc<Mutex<Script>>,
}

impl MockJourneyApi {
    /// Create a mock with no scripted replies.
    ///
    /// Requests beyond the script fail as if the service were unreachable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an envelope.
    pub fn with_response(self, response: PlanResponse) -> Self {
        self.with_delayed_response(Duration::ZERO, response)
    }

    /// Queue an envelope that arrives after `delay`.
    pub fn with_delayed_response(self, delay: Duration, response: PlanResponse) -> Self {
        self.push(Reply {
            delay,
            outcome: Outcome::Envelope(response),
        })
    }

    /// Queue a transport failure (no response).
    pub fn with_transport_failure(self, message: impl Into<String>) -> Self {
        self.push(Reply {
            delay: Duration::ZERO,
            outcome: Outcome::TransportFailure(message.into()),
        })
    }

    /// Requests received so far, in issue order.
    pub fn requests(&self) -> Vec<PlanRequest> {
        self.lock().requests.clone()
    }

    /// Number of requests received so far.
    pub fn request_count(&self) -> usize {
        self.lock().requests.len()
    }

    fn push(self, reply: Reply) -> Self {
        self.lock().replies.push_back(reply);
        self
    }

    fn lock(&self) -> MutexGuard<'_, Script> {
        self.script.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl JourneyApi for MockJourneyApi {
    fn plan_journey<'a>(
        &'a self,
        request: &'a PlanRequest,
    ) -> BoxFuture<'a, Result<PlanResponse, ApiError>> {
        // Record at issue time, not when the reply settles
        let reply = {
            let mut script = self.lock();
            script.requests.push(request.clone());
            script.replies.pop_front()
        };

        async move {
            let Some(reply) = reply else {
                return Err(ApiError::Unavailable("no scripted reply left".to_string()));
            };

            if !reply.delay.is_zero() {
                tokio::time::sleep(reply.delay).await;
            }

            match reply.outcome {
                Outcome::Envelope(response) => Ok(response),
                Outcome::TransportFailure(message) => Err(ApiError::Unavailable(message)),
            }
        }
        .boxed()
    }
}
