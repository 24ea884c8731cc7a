//! Unit tests for the request state machine.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use futures::FutureExt;
use futures::future::BoxFuture;
use tokio::sync::watch;

use super::*;
use crate::api::{ApiError, JourneyApi, MockJourneyApi, PlanResponse};
use crate::domain::{Content, ContentType, Journey};
use crate::validate::{PlanRequest, RawInput};
use crate::view::{JourneyView, LoadingTarget, Recorder, ScrollHint, ViewBindings, ViewEvent};

type TestOrchestrator<A> = RequestOrchestrator<A, Recorder, Recorder, Recorder>;

fn orchestrator<A: JourneyApi>(api: A) -> (TestOrchestrator<A>, Recorder) {
    let recorder = Recorder::new();
    (RequestOrchestrator::new(api, recorder.bindings()), recorder)
}

fn valid_input() -> RawInput {
    RawInput::new("90", "", None)
}

fn journey(title: &str) -> Journey {
    Journey::from_contents(vec![Content::new(title, ContentType::Movie, 95)])
}

/// API whose request panics mid-flight.
struct PanickingApi;

impl JourneyApi for PanickingApi {
    fn plan_journey<'a>(
        &'a self,
        _request: &'a PlanRequest,
    ) -> BoxFuture<'a, Result<PlanResponse, ApiError>> {
        let broken = true;
        async move {
            if broken {
                panic!("planner client bug");
            }
            Ok(PlanResponse::failure(None))
        }
        .boxed()
    }
}

/// Loading target that notes the published phase each time it is shown.
#[derive(Clone, Default)]
struct PhaseWhenShown {
    phase: Rc<RefCell<Option<watch::Receiver<RequestPhase>>>>,
    seen: Rc<RefCell<Vec<RequestPhase>>>,
}

impl LoadingTarget for PhaseWhenShown {
    fn show_loading(&mut self) {
        if let Some(rx) = self.phase.borrow().as_ref() {
            self.seen.borrow_mut().push(rx.borrow().clone());
        }
    }

    fn hide_loading(&mut self) {}
}

#[test]
fn starts_idle() {
    let (orch, recorder) = orchestrator(MockJourneyApi::new());

    assert_eq!(orch.phase(), RequestPhase::Idle);
    assert!(!orch.is_busy());
    assert!(recorder.events().is_empty());
}

#[tokio::test]
async fn success_side_effects_in_order() {
    let api = MockJourneyApi::new().with_response(PlanResponse::success(journey("X")));
    let (orch, recorder) = orchestrator(api);

    let phase = orch.submit(&valid_input()).await;

    assert_eq!(phase, RequestPhase::Success(journey("X")));
    assert_eq!(orch.phase(), phase);
    assert_eq!(
        recorder.events(),
        vec![
            ViewEvent::HideResults,
            ViewEvent::HideError,
            ViewEvent::ShowLoading,
            ViewEvent::HideLoading,
            ViewEvent::ShowResults(JourneyView::from_journey(&journey("X")), ScrollHint::Start),
        ]
    );
}

#[tokio::test]
async fn server_failure_side_effects_in_order() {
    let api = MockJourneyApi::new().with_response(PlanResponse::failure(None));
    let (orch, recorder) = orchestrator(api);

    let phase = orch.submit(&valid_input()).await;

    assert_eq!(phase, RequestPhase::Failure(Failure::server(None)));
    assert_eq!(
        recorder.events(),
        vec![
            ViewEvent::HideResults,
            ViewEvent::HideError,
            ViewEvent::ShowLoading,
            ViewEvent::HideLoading,
            ViewEvent::ShowError(SERVER_FALLBACK_MESSAGE.into(), ScrollHint::Nearest),
        ]
    );
}

#[tokio::test]
async fn validation_failure_sends_nothing() {
    let api = MockJourneyApi::new();
    let (orch, recorder) = orchestrator(api.clone());

    let phase = orch.submit(&RawInput::new("10", "", None)).await;

    let failure = phase.failure().unwrap();
    assert_eq!(failure.kind, FailureKind::Validation);
    assert_eq!(failure.message, "Journey duration must be at least 30 minutes");
    assert_eq!(api.request_count(), 0);
    assert!(!recorder.events().contains(&ViewEvent::ShowLoading));
    assert_eq!(recorder.error().as_deref(), Some(failure.message.as_str()));
}

#[tokio::test]
async fn validation_failure_hides_previous_results() {
    let api = MockJourneyApi::new().with_response(PlanResponse::success(journey("X")));
    let (orch, recorder) = orchestrator(api);

    orch.submit(&valid_input()).await;
    assert!(recorder.results().is_some());

    orch.submit(&RawInput::new("abc", "", None)).await;
    assert_eq!(recorder.results(), None);
    assert!(recorder.error().is_some());
    assert_eq!(recorder.visible_regions(), 1);
}

#[tokio::test]
async fn request_carries_normalized_input() {
    let api = MockJourneyApi::new().with_response(PlanResponse::failure(None));
    let (orch, _recorder) = orchestrator(api.clone());

    orch.submit(&RawInput::new(" 120 ", "  cosy mysteries ", Some(ContentType::TvShow)))
        .await;

    assert_eq!(
        api.requests(),
        vec![PlanRequest {
            duration: 120,
            preferences: "cosy mysteries".into(),
            content_type: Some(ContentType::TvShow),
        }]
    );
}

#[tokio::test]
async fn resubmit_after_failure_recovers() {
    let api = MockJourneyApi::new()
        .with_transport_failure("connection refused")
        .with_response(PlanResponse::success(journey("Y")));
    let (orch, recorder) = orchestrator(api);

    let first = orch.submit(&valid_input()).await;
    assert_eq!(first.failure().map(|f| f.kind), Some(FailureKind::Transport));
    assert!(recorder.error().is_some());

    let second = orch.submit(&valid_input()).await;
    assert_eq!(second.journey(), Some(&journey("Y")));
    assert_eq!(recorder.error(), None);
    assert!(recorder.results().is_some());
}

#[tokio::test]
async fn subscribers_see_settled_phase() {
    let api = MockJourneyApi::new().with_response(PlanResponse::success(journey("X")));
    let (orch, _recorder) = orchestrator(api);
    let mut rx = orch.subscribe();
    assert!(!rx.has_changed().unwrap());

    let phase = orch.submit(&valid_input()).await;

    assert!(rx.has_changed().unwrap());
    assert_eq!(*rx.borrow_and_update(), phase);
}

#[tokio::test(start_paused = true)]
async fn busy_while_request_in_flight() {
    let api = MockJourneyApi::new()
        .with_delayed_response(Duration::from_millis(100), PlanResponse::failure(None));
    let (orch, recorder) = orchestrator(api);
    let mut rx = orch.subscribe();

    let input = valid_input();
    let submit = orch.submit(&input);
    let watch = async {
        rx.changed().await.unwrap();
        let loading = rx.borrow_and_update().clone();
        (loading, orch.is_busy(), recorder.is_loading_visible())
    };

    let (settled, (observed, busy, loading_visible)) = tokio::join!(submit, watch);

    assert_eq!(observed, RequestPhase::Loading);
    assert!(busy);
    assert!(loading_visible);
    assert!(settled.is_settled());
    assert!(!orch.is_busy());
    assert!(!recorder.is_loading_visible());
}

#[tokio::test]
async fn indicator_shown_before_loading_is_published() {
    let target = PhaseWhenShown::default();
    let recorder = Recorder::new();
    let api = MockJourneyApi::new().with_response(PlanResponse::failure(None));
    let orch = RequestOrchestrator::new(
        api,
        ViewBindings::new(target.clone(), recorder.clone(), recorder),
    );
    *target.phase.borrow_mut() = Some(orch.subscribe());

    orch.submit(&valid_input()).await;

    // Watchers can only see Loading once the indicator is already up
    assert_eq!(*target.seen.borrow(), vec![RequestPhase::Idle]);
}

#[tokio::test]
async fn panic_in_request_hides_loading_and_fails() {
    let (orch, recorder) = orchestrator(PanickingApi);

    let phase = orch.submit(&valid_input()).await;

    assert_eq!(phase, RequestPhase::Failure(Failure::transport()));
    assert!(!recorder.is_loading_visible());
    assert_eq!(recorder.error().as_deref(), Some(TRANSPORT_FAILURE_MESSAGE));
}

/// Known limitation: overlapping submits are not serialized, and the
/// response that settles last determines the final state, even if it
/// belongs to the earlier submit.
#[tokio::test(start_paused = true)]
async fn overlapping_submits_last_settled_wins() {
    let api = MockJourneyApi::new()
        .with_delayed_response(Duration::from_millis(50), PlanResponse::success(journey("slow")))
        .with_delayed_response(Duration::from_millis(10), PlanResponse::success(journey("fast")));
    let (orch, recorder) = orchestrator(api.clone());

    let (a, b) = (valid_input(), valid_input());
    let (first, second) = tokio::join!(orch.submit(&a), orch.submit(&b));

    assert_eq!(api.request_count(), 2);
    assert_eq!(second.journey(), Some(&journey("fast")));
    assert_eq!(first.journey(), Some(&journey("slow")));

    // The earlier-issued request settled last, so it owns the final state
    assert_eq!(orch.phase().journey(), Some(&journey("slow")));
    let shown = recorder.results().unwrap();
    assert_eq!(shown.cards[0].title(), "slow");
    assert!(!recorder.is_loading_visible());
}
