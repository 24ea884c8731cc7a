//! Request lifecycle orchestration.
//!
//! Owns the single [`RequestPhase`] for the session and moves it through
//! Idle → Loading → Success/Failure as journeys are requested, rendering
//! each outcome through the bound views.

mod machine;
mod phase;

#[cfg(test)]
mod machine_tests;

pub use machine::RequestOrchestrator;
pub use phase::{
    Failure, FailureKind, RequestPhase, SERVER_FALLBACK_MESSAGE, TRANSPORT_FAILURE_MESSAGE,
};
