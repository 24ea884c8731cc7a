//! Render targets and the presenter that drives them.
//!
//! The UI has three mutually exclusive regions: Loading, Results and
//! Error. A host binds each region to a render target and hands the set to
//! the presenter as a [`ViewBindings`]; nothing is looked up globally.

use std::cell::RefCell;

use crate::domain::Journey;

use super::summary::JourneyView;

/// How a newly shown region should be scrolled into view (always smooth).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollHint {
    /// Align the region's top with the viewport's top
    Start,
    /// Scroll the least distance that makes the region visible
    Nearest,
}

/// Target for the Loading region.
pub trait LoadingTarget {
    fn show_loading(&mut self);
    fn hide_loading(&mut self);
}

/// Target for the Results region.
pub trait ResultsTarget {
    fn show_results(&mut self, view: &JourneyView, scroll: ScrollHint);
    fn hide_results(&mut self);
}

/// Target for the Error region.
pub trait ErrorTarget {
    fn show_error(&mut self, message: &str, scroll: ScrollHint);
    fn hide_error(&mut self);
}

/// The render targets for each region.
#[derive(Debug, Clone, Default)]
pub struct ViewBindings<L, R, E> {
    pub loading: L,
    pub results: R,
    pub error: E,
}

impl<L, R, E> ViewBindings<L, R, E> {
    /// Bind the three regions.
    pub fn new(loading: L, results: R, error: E) -> Self {
        Self {
            loading,
            results,
            error,
        }
    }
}

/// Maps journeys and error messages onto the bound regions.
#[derive(Debug)]
pub struct Presenter<L, R, E> {
    bindings: ViewBindings<L, R, E>,
}

impl<L, R, E> Presenter<L, R, E>
where
    L: LoadingTarget,
    R: ResultsTarget,
    E: ErrorTarget,
{
    /// Create a presenter over the given bindings.
    pub fn new(bindings: ViewBindings<L, R, E>) -> Self {
        Self { bindings }
    }

    /// The bound targets.
    pub fn bindings(&self) -> &ViewBindings<L, R, E> {
        &self.bindings
    }

    /// Hide both the Results and Error regions.
    pub fn clear(&mut self) {
        self.bindings.results.hide_results();
        self.bindings.error.hide_error();
    }

    /// Show the Loading region.
    pub fn show_loading(&mut self) {
        self.bindings.loading.show_loading();
    }

    /// Hide the Loading region.
    pub fn hide_loading(&mut self) {
        self.bindings.loading.hide_loading();
    }

    /// Render a journey into the Results region, scrolled to its top.
    pub fn show_journey(&mut self, journey: &Journey) {
        let view = JourneyView::from_journey(journey);
        self.bindings.results.show_results(&view, ScrollHint::Start);
    }

    /// Show a message in the Error region, scrolled just into view.
    pub fn show_error(&mut self, message: &str) {
        self.bindings.error.show_error(message, ScrollHint::Nearest);
    }
}

/// Keeps the Loading region visible for as long as it lives.
///
/// Acquiring shows the region; dropping hides it. The hide therefore runs
/// on every exit path, including early returns and unwinding panics.
pub struct LoadingGuard<'a, L, R, E>
where
    L: LoadingTarget,
    R: ResultsTarget,
    E: ErrorTarget,
{
    presenter: &'a RefCell<Presenter<L, R, E>>,
}

impl<'a, L, R, E> LoadingGuard<'a, L, R, E>
where
    L: LoadingTarget,
    R: ResultsTarget,
    E: ErrorTarget,
{
    /// Show the Loading region until the guard is dropped.
    pub fn acquire(presenter: &'a RefCell<Presenter<L, R, E>>) -> Self {
        presenter.borrow_mut().show_loading();
        Self { presenter }
    }
}

impl<L, R, E> Drop for LoadingGuard<'_, L, R, E>
where
    L: LoadingTarget,
    R: ResultsTarget,
    E: ErrorTarget,
{
    fn drop(&mut self) {
        // Never panic in drop; a borrow can only be live here if the
        // presenter itself is mid-render.
        if let Ok(mut presenter) = self.presenter.try_borrow_mut() {
            presenter.hide_loading();
        }
    }
}

// No-op targets, for regions a host does not render.

impl LoadingTarget for () {
    fn show_loading(&mut self) {}
    fn hide_loading(&mut self) {}
}

impl ResultsTarget for () {
    fn show_results(&mut self, _view: &JourneyView, _scroll: ScrollHint) {}
    fn hide_results(&mut self) {}
}

impl ErrorTarget for () {
    fn show_error(&mut self, _message: &str, _scroll: ScrollHint) {}
    fn hide_error(&mut self) {}
}

// Optional targets render only when present.

impl<T: LoadingTarget> LoadingTarget for Option<T> {
    fn show_loading(&mut self) {
        if let Some(target) = self {
            target.show_loading();
        }
    }

    fn hide_loading(&mut self) {
        if let Some(target) = self {
            target.hide_loading();
        }
    }
}

impl<T: ResultsTarget> ResultsTarget for Option<T> {
    fn show_results(&mut self, view: &JourneyView, scroll: ScrollHint) {
        if let Some(target) = self {
            target.show_results(view, scroll);
        }
    }

    fn hide_results(&mut self) {
        if let Some(target) = self {
            target.hide_results();
        }
    }
}

impl<T: ErrorTarget> ErrorTarget for Option<T> {
    fn show_error(&mut self, message: &str, scroll: ScrollHint) {
        if let Some(target) = self {
            target.show_error(message, scroll);
        }
    }

    fn hide_error(&mut self) {
        if let Some(target) = self {
            target.hide_error();
        }
    }
}

// Pairs render to both targets, first then second.

impl<A: LoadingTarget, B: LoadingTarget> LoadingTarget for (A, B) {
    fn show_loading(&mut self) {
        self.0.show_loading();
        self.1.show_loading();
    }

    fn hide_loading(&mut self) {
        self.0.hide_loading();
        self.1.hide_loading();
    }
}

impl<A: ResultsTarget, B: ResultsTarget> ResultsTarget for (A, B) {
    fn show_results(&mut self, view: &JourneyView, scroll: ScrollHint) {
        self.0.show_results(view, scroll);
        self.1.show_results(view, scroll);
    }

    fn hide_results(&mut self) {
        self.0.hide_results();
        self.1.hide_results();
    }
}

impl<A: ErrorTarget, B: ErrorTarget> ErrorTarget for (A, B) {
    fn show_error(&mut self, message: &str, scroll: ScrollHint) {
        self.0.show_error(message, scroll);
        self.1.show_error(message, scroll);
    }

    fn hide_error(&mut self) {
        self.0.hide_error();
        self.1.hide_error();
    }
}
