//! The request orchestrator: one planning attempt at a time, start to render.
//!
//! ```text
//! Idle/Success/Failure --submit--> Loading --envelope ok------> Success
//!                                          --envelope failed--> Failure (server)
//!                                          --no response------> Failure (transport)
//! ```
//!
//! Invalid input goes straight to `Failure` without a request.
//!
//! Everything runs on one task. The only suspension point is the API call,
//! and no borrow of the presenter is held across it. Overlapping submits
//! are not guarded against: whichever response settles last wins.

use std::cell::{Ref, RefCell};
use std::panic::AssertUnwindSafe;

use futures::FutureExt;
use tokio::sync::watch;
use tracing::{debug, error};

use crate::api::{ApiError, JourneyApi, PlanResponse};
use crate::validate::{RawInput, validate};
use crate::view::{ErrorTarget, LoadingGuard, LoadingTarget, Presenter, ResultsTarget, ViewBindings};

use super::phase::{Failure, RequestPhase};

/// Drives planning attempts and the views bound to them.
///
/// Hosts call [`submit`](Self::submit) from their own event source and
/// observe state changes through [`subscribe`](Self::subscribe).
pub struct RequestOrchestrator<A, L, R, E>
where
    L: LoadingTarget,
    R: ResultsTarget,
    E: ErrorTarget,
{
    api: A,
    presenter: RefCell<Presenter<L, R, E>>,
    phase: watch::Sender<RequestPhase>,
}

impl<A, L, R, E> RequestOrchestrator<A, L, R, E>
where
    A: JourneyApi,
    L: LoadingTarget,
    R: ResultsTarget,
    E: ErrorTarget,
{
    /// Create an idle orchestrator.
    pub fn new(api: A, bindings: ViewBindings<L, R, E>) -> Self {
        let (phase, _) = watch::channel(RequestPhase::Idle);
        Self {
            api,
            presenter: RefCell::new(Presenter::new(bindings)),
            phase,
        }
    }

    /// The current phase.
    pub fn phase(&self) -> RequestPhase {
        self.phase.borrow().clone()
    }

    /// Whether a request is in flight; hosts use this to disable the
    /// submit trigger.
    pub fn is_busy(&self) -> bool {
        self.phase.borrow().is_loading()
    }

    /// Receive every phase change from now on.
    pub fn subscribe(&self) -> watch::Receiver<RequestPhase> {
        self.phase.subscribe()
    }

    /// The bound render targets.
    ///
    /// # Panics
    ///
    /// Panics if called from inside a render target while it is rendering.
    pub fn bindings(&self) -> Ref<'_, ViewBindings<L, R, E>> {
        Ref::map(self.presenter.borrow(), Presenter::bindings)
    }

    /// Run one planning attempt and render its outcome.
    ///
    /// Side effects happen in a fixed order: hide previous results and
    /// error, show loading, send the request, hide loading, then show
    /// exactly one of results or error. Returns the settled phase.
    ///
    /// A panic inside the API call is treated like a transport failure.
    pub async fn submit(&self, input: &RawInput) -> RequestPhase {
        let request = match validate(input) {
            Ok(request) => request,
            Err(err) => {
                debug!(code = err.code(), "journey input rejected");
                let failure = Failure::validation(err);
                {
                    let mut presenter = self.presenter.borrow_mut();
                    presenter.clear();
                    presenter.show_error(&failure.message);
                }
                return self.transition(RequestPhase::Failure(failure));
            }
        };

        self.presenter.borrow_mut().clear();

        let outcome = {
            // Indicator first, so nobody observes Loading while it is hidden
            let _loading = LoadingGuard::acquire(&self.presenter);
            self.transition(RequestPhase::Loading);
            debug!(
                duration = request.duration,
                content_type = ?request.content_type,
                "requesting journey"
            );
            AssertUnwindSafe(self.api.plan_journey(&request))
                .catch_unwind()
                .await
        };

        let phase = match outcome {
            Ok(outcome) => interpret(outcome),
            Err(_) => {
                error!("journey request panicked");
                RequestPhase::Failure(Failure::transport())
            }
        };
        {
            let mut presenter = self.presenter.borrow_mut();
            match &phase {
                RequestPhase::Success(journey) => presenter.show_journey(journey),
                RequestPhase::Failure(failure) => presenter.show_error(&failure.message),
                RequestPhase::Idle | RequestPhase::Loading => {}
            }
        }
        self.transition(phase)
    }

    fn transition(&self, phase: RequestPhase) -> RequestPhase {
        debug!(
            from = self.phase.borrow().name(),
            to = phase.name(),
            "request phase"
        );
        self.phase.send_replace(phase.clone());
        phase
    }
}

/// Map what came back from the API onto a settled phase.
fn interpret(outcome: Result<PlanResponse, ApiError>) -> RequestPhase {
    match outcome {
        Ok(PlanResponse {
            success: true,
            journey: Some(journey),
            ..
        }) => RequestPhase::Success(journey),
        Ok(PlanResponse {
            success: true,
            journey: None,
            ..
        }) => {
            error!("planning service reported success without a journey");
            RequestPhase::Failure(Failure::server(None))
        }
        Ok(PlanResponse { error, .. }) => RequestPhase::Failure(Failure::server(error)),
        Err(err) => {
            // The cause is for diagnostics only; the user sees a fixed message
            error!(error = %err, "journey request failed");
            RequestPhase::Failure(Failure::transport())
        }
    }
}
