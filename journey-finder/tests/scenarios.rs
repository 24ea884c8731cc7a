//! End-to-end planning scenarios against a scripted planning service.

use std::time::Duration;

use journey_finder::api::{MockJourneyApi, PlanResponse};
use journey_finder::domain::Journey;
use journey_finder::orchestrator::{
    FailureKind, RequestOrchestrator, RequestPhase, TRANSPORT_FAILURE_MESSAGE,
};
use journey_finder::validate::RawInput;
use journey_finder::view::html::render_results;
use journey_finder::view::{FacetKind, HtmlRegion, JourneyView, Recorder, ViewBindings};

type Orchestrator = RequestOrchestrator<
    MockJourneyApi,
    Recorder,
    (Recorder, HtmlRegion),
    (Recorder, HtmlRegion),
>;

fn orchestrator(api: MockJourneyApi) -> (Orchestrator, Recorder) {
    let recorder = Recorder::new();
    let bindings = ViewBindings::new(
        recorder.clone(),
        (recorder.clone(), HtmlRegion::new()),
        (recorder.clone(), HtmlRegion::new()),
    );
    (RequestOrchestrator::new(api, bindings), recorder)
}

fn scenario_a_journey() -> Journey {
    serde_json::from_str(
        r#"{
            "total_duration": 95,
            "contents": [{
                "title": "X",
                "content_type": "movie",
                "duration_minutes": 95,
                "rating": 88,
                "year": 2020,
                "genres": ["Action"],
                "description": "d"
            }]
        }"#,
    )
    .unwrap()
}

#[tokio::test]
async fn scenario_a_successful_journey() {
    let api = MockJourneyApi::new().with_response(PlanResponse::success(scenario_a_journey()));
    let (orch, recorder) = orchestrator(api.clone());

    let phase = orch.submit(&RawInput::new("90", "", None)).await;
    assert_eq!(phase, RequestPhase::Success(scenario_a_journey()));

    let request = &api.requests()[0];
    assert_eq!(request.duration, 90);
    assert_eq!(request.preferences, "");
    assert_eq!(request.content_type, None);

    let view = recorder.results().expect("results region shown");
    assert_eq!(
        view.summary.total_duration_line(),
        "1 hour 35 minutes (95 minutes)"
    );
    assert_eq!(view.summary.leg_count, 1);
    assert_eq!(view.cards.len(), 1);

    let card = &view.cards[0];
    let text = |kind| card.facet(kind).map(|f| f.to_string());
    assert_eq!(card.leg(), 1);
    assert_eq!(card.title(), "X");
    assert_eq!(text(FacetKind::Type).as_deref(), Some("Movie"));
    assert_eq!(text(FacetKind::Duration).as_deref(), Some("1h 35m"));
    assert_eq!(text(FacetKind::Rating).as_deref(), Some("88"));
    assert_eq!(text(FacetKind::Year).as_deref(), Some("2020"));
    assert_eq!(card.genres(), ["Action"]);
    assert_eq!(card.description(), Some("d"));

    assert!(!recorder.is_loading_visible());
    assert_eq!(recorder.error(), None);

    let bindings = orch.bindings();
    let html = bindings.results.1.html().expect("results fragment rendered");
    assert!(html.contains("1 hour 35 minutes (95 minutes)"));
    assert_eq!(bindings.error.1.html(), None);
}

#[tokio::test]
async fn scenario_b_short_duration_rejected() {
    let api = MockJourneyApi::new();
    let (orch, recorder) = orchestrator(api.clone());

    let phase = orch.submit(&RawInput::new("10", "", None)).await;

    assert_eq!(phase.failure().map(|f| f.kind), Some(FailureKind::Validation));
    assert_eq!(
        recorder.error().as_deref(),
        Some("Journey duration must be at least 30 minutes")
    );
    assert_eq!(api.request_count(), 0);
    assert_eq!(recorder.results(), None);
    assert!(!recorder.is_loading_visible());
}

#[tokio::test]
async fn scenario_c_transport_failure() {
    let api = MockJourneyApi::new().with_transport_failure("connection refused");
    let (orch, recorder) = orchestrator(api);

    let phase = orch.submit(&RawInput::new("120", "comedies", None)).await;

    assert_eq!(phase.failure().map(|f| f.kind), Some(FailureKind::Transport));
    assert_eq!(recorder.error().as_deref(), Some(TRANSPORT_FAILURE_MESSAGE));
    assert!(!recorder.is_loading_visible());
    assert_eq!(recorder.results(), None);

    let bindings = orch.bindings();
    let html = bindings.error.1.html().expect("error fragment rendered");
    assert!(html.contains("Failed to connect to the server"));
}

#[tokio::test]
async fn scenario_d_server_reported_error() {
    let api = MockJourneyApi::new()
        .with_response(PlanResponse::failure(Some("no content available".into())));
    let (orch, recorder) = orchestrator(api);

    let phase = orch.submit(&RawInput::new("60", "", None)).await;

    assert_eq!(phase.failure().map(|f| f.kind), Some(FailureKind::Server));
    assert_eq!(recorder.error().as_deref(), Some("no content available"));
    assert!(!recorder.is_loading_visible());
}

#[tokio::test]
async fn regions_stay_mutually_exclusive() {
    let api = MockJourneyApi::new()
        .with_response(PlanResponse::success(scenario_a_journey()))
        .with_response(PlanResponse::failure(None))
        .with_response(PlanResponse::success(scenario_a_journey()));
    let (orch, recorder) = orchestrator(api);

    for duration in ["90", "90", "5", "90"] {
        orch.submit(&RawInput::new(duration, "", None)).await;
        assert_eq!(recorder.visible_regions(), 1, "after submitting {duration}");
    }
}

#[tokio::test(start_paused = true)]
async fn slow_failure_overrides_fast_success() {
    let api = MockJourneyApi::new()
        .with_delayed_response(
            Duration::from_millis(40),
            PlanResponse::failure(Some("no content available".into())),
        )
        .with_delayed_response(
            Duration::from_millis(5),
            PlanResponse::success(scenario_a_journey()),
        );
    let (orch, recorder) = orchestrator(api);

    let input = RawInput::new("90", "", None);
    let (first, second) = tokio::join!(orch.submit(&input), orch.submit(&input));

    assert_eq!(second, RequestPhase::Success(scenario_a_journey()));
    assert_eq!(first.failure().map(|f| f.kind), Some(FailureKind::Server));
    assert_eq!(orch.phase(), first);
    assert!(!orch.is_busy());
    assert_eq!(recorder.error().as_deref(), Some("no content available"));
}

#[test]
fn rendering_is_idempotent() {
    let journey = scenario_a_journey();

    let first = JourneyView::from_journey(&journey);
    let second = JourneyView::from_journey(&journey);
    assert_eq!(first, second);

    assert_eq!(
        render_results(&first).unwrap(),
        render_results(&second).unwrap()
    );
}
