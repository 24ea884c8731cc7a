//! In-memory render targets that record what they were told to do.
//!
//! Useful for tests and for hosts that want to inspect the rendered state
//! instead of drawing it.

use std::cell::RefCell;
use std::rc::Rc;

use super::presenter::{ErrorTarget, LoadingTarget, ResultsTarget, ScrollHint, ViewBindings};
use super::summary::JourneyView;

/// A single call made on a render target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    ShowLoading,
    HideLoading,
    ShowResults(JourneyView, ScrollHint),
    HideResults,
    ShowError(String, ScrollHint),
    HideError,
}

#[derive(Debug, Default)]
struct Recorded {
    events: Vec<ViewEvent>,
    loading_visible: bool,
    results: Option<JourneyView>,
    error: Option<String>,
}

/// Recording target for all three regions.
///
/// Clones share one log, so the same recorder can be bound to every region
/// and inspected afterwards.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    inner: Rc<RefCell<Recorded>>,
}

impl Recorder {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind this recorder to all three regions.
    pub fn bindings(&self) -> ViewBindings<Recorder, Recorder, Recorder> {
        ViewBindings::new(self.clone(), self.clone(), self.clone())
    }

    /// Every call made so far, in order.
    pub fn events(&self) -> Vec<ViewEvent> {
        self.inner.borrow().events.clone()
    }

    /// Forget recorded events, keeping the current visible state.
    pub fn clear_events(&self) {
        self.inner.borrow_mut().events.clear();
    }

    /// Whether the Loading region is visible.
    pub fn is_loading_visible(&self) -> bool {
        self.inner.borrow().loading_visible
    }

    /// The visible Results region content, if any.
    pub fn results(&self) -> Option<JourneyView> {
        self.inner.borrow().results.clone()
    }

    /// The visible Error region message, if any.
    pub fn error(&self) -> Option<String> {
        self.inner.borrow().error.clone()
    }

    /// Number of regions currently visible.
    pub fn visible_regions(&self) -> usize {
        let recorded = self.inner.borrow();
        usize::from(recorded.loading_visible)
            + usize::from(recorded.results.is_some())
            + usize::from(recorded.error.is_some())
    }

    fn record(&self, event: ViewEvent, apply: impl FnOnce(&mut Recorded)) {
        let mut recorded = self.inner.borrow_mut();
        apply(&mut recorded);
        recorded.events.push(event);
    }
}

impl LoadingTarget for Recorder {
    fn show_loading(&mut self) {
        self.record(ViewEvent::ShowLoading, |r| r.loading_visible = true);
    }

    fn hide_loading(&mut self) {
        self.record(ViewEvent::HideLoading, |r| r.loading_visible = false);
    }
}

impl ResultsTarget for Recorder {
    fn show_results(&mut self, view: &JourneyView, scroll: ScrollHint) {
        self.record(ViewEvent::ShowResults(view.clone(), scroll), |r| {
            r.results = Some(view.clone())
        });
    }

    fn hide_results(&mut self) {
        self.record(ViewEvent::HideResults, |r| r.results = None);
    }
}

impl ErrorTarget for Recorder {
    fn show_error(&mut self, message: &str, scroll: ScrollHint) {
        self.record(ViewEvent::ShowError(message.to_string(), scroll), |r| {
            r.error = Some(message.to_string())
        });
    }

    fn hide_error(&mut self) {
        self.record(ViewEvent::HideError, |r| r.error = None);
    }
}
