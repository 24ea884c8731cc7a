//! Request lifecycle states.

use crate::domain::Journey;
use crate::validate::ValidationError;

/// Shown when the service reports a failure without saying why.
pub const SERVER_FALLBACK_MESSAGE: &str = "An error occurred while planning your journey";

/// Shown when no usable response came back at all.
pub const TRANSPORT_FAILURE_MESSAGE: &str = "Failed to connect to the server. Please try again.";

/// Where a failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// Input rejected before any request was sent
    Validation,
    /// The service answered with `success: false`
    Server,
    /// No usable response (network error, timeout, undecodable body)
    Transport,
}

/// A failed planning attempt, with the message to show the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub kind: FailureKind,
    pub message: String,
}

impl Failure {
    /// Input validation failure.
    pub fn validation(err: ValidationError) -> Self {
        Self {
            kind: FailureKind::Validation,
            message: err.to_string(),
        }
    }

    /// Service-reported failure, falling back to a fixed message.
    pub fn server(message: Option<String>) -> Self {
        Self {
            kind: FailureKind::Server,
            message: message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| SERVER_FALLBACK_MESSAGE.to_string()),
        }
    }

    /// Transport failure. The cause is never part of the message.
    pub fn transport() -> Self {
        Self {
            kind: FailureKind::Transport,
            message: TRANSPORT_FAILURE_MESSAGE.to_string(),
        }
    }
}

/// Lifecycle of one planning attempt.
///
/// `Success` and `Failure` are stable until the next submit, which always
/// passes through `Loading` again.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RequestPhase {
    /// Nothing requested yet
    #[default]
    Idle,
    /// Request in flight
    Loading,
    /// Journey received
    Success(Journey),
    /// Attempt failed
    Failure(Failure),
}

impl RequestPhase {
    /// Whether a request is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestPhase::Loading)
    }

    /// Whether the attempt has finished, either way.
    pub fn is_settled(&self) -> bool {
        matches!(self, RequestPhase::Success(_) | RequestPhase::Failure(_))
    }

    /// The received journey, if the attempt succeeded.
    pub fn journey(&self) -> Option<&Journey> {
        match self {
            RequestPhase::Success(journey) => Some(journey),
            _ => None,
        }
    }

    /// The failure, if the attempt failed.
    pub fn failure(&self) -> Option<&Failure> {
        match self {
            RequestPhase::Failure(failure) => Some(failure),
            _ => None,
        }
    }

    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            RequestPhase::Idle => "idle",
            RequestPhase::Loading => "loading",
            RequestPhase::Success(_) => "success",
            RequestPhase::Failure(_) => "failure",
        }
    }
}
