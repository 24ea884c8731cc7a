//! Presentation layer.
//!
//! Turns journeys into renderable models and pushes them to whatever the
//! host binds to the Loading, Results and Error regions:
//!
//! - [`ContentCard`]: one content item as ordered display facets
//! - [`JourneySummary`] / [`JourneyView`]: the Results region model
//! - [`Presenter`]: drives the bound [`ViewBindings`]
//! - targets: HTML fragments ([`html`]), terminal text ([`terminal`]) and
//!   an in-memory [`Recorder`]

mod card;
pub mod html;
mod presenter;
mod recording;
mod summary;
pub mod terminal;

pub use card::{ContentCard, Facet, FacetKind, build_cards};
pub use html::HtmlRegion;
pub use presenter::{
    ErrorTarget, LoadingGuard, LoadingTarget, Presenter, ResultsTarget, ScrollHint, ViewBindings,
};
pub use recording::{Recorder, ViewEvent};
pub use summary::{JourneySummary, JourneyView};
pub use terminal::Terminal;
