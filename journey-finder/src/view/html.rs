//! Askama templates for the Results and Error regions.
//!
//! Templates render HTML fragments, not whole pages; the host page decides
//! where they go.

use askama::Template;
use tracing::error;

use crate::domain::ContentType;

use super::card::{ContentCard, Facet};
use super::presenter::{ErrorTarget, ResultsTarget, ScrollHint};
use super::summary::JourneyView;

/// Results region fragment.
#[derive(Template)]
#[template(path = "journey_results.html")]
pub struct JourneyResultsTemplate {
    pub total_duration: String,
    pub leg_count: usize,
    pub cards: Vec<CardView>,
}

impl JourneyResultsTemplate {
    /// Create from a journey presentation model.
    pub fn from_view(view: &JourneyView) -> Self {
        Self {
            total_duration: view.summary.total_duration_line(),
            leg_count: view.summary.leg_count,
            cards: view.cards.iter().map(CardView::from_card).collect(),
        }
    }
}

/// Error region fragment.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub message: String,
}

/// Content card view model for templates.
#[derive(Debug, Clone)]
pub struct CardView {
    pub leg: usize,
    pub title: String,
    pub badges: Vec<BadgeView>,
    pub genres: Vec<String>,
    pub description: Option<String>,
    pub source_url: Option<String>,
}

impl CardView {
    /// Create from a content card.
    pub fn from_card(card: &ContentCard) -> Self {
        Self {
            leg: card.leg(),
            title: card.title().to_string(),
            badges: card.badges().filter_map(BadgeView::from_facet).collect(),
            genres: card.genres().to_vec(),
            description: card.description().map(str::to_string),
            source_url: card.source_url().map(str::to_string),
        }
    }
}

/// Badge view model: CSS class plus decorated text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeView {
    pub class: &'static str,
    pub text: String,
}

impl BadgeView {
    /// Create from a badge facet; `None` for facets that are not badges.
    pub fn from_facet(facet: &Facet) -> Option<Self> {
        let (class, text) = match facet {
            Facet::Type(content_type) => {
                let icon = match content_type {
                    ContentType::Movie => "🎬",
                    ContentType::TvShow => "📺",
                };
                ("badge-type", format!("{icon} {facet}"))
            }
            Facet::Duration(_) => ("badge-duration", format!("⏱️ {facet}")),
            Facet::Rating(_) => ("badge-rating", format!("⭐ {facet}%")),
            Facet::Year(_) => ("badge-year", format!("📅 {facet}")),
            _ => return None,
        };
        Some(Self { class, text })
    }
}

/// Render the Results region fragment.
pub fn render_results(view: &JourneyView) -> Result<String, askama::Error> {
    JourneyResultsTemplate::from_view(view).render()
}

/// Render the Error region fragment.
pub fn render_error(message: &str) -> Result<String, askama::Error> {
    ErrorTemplate {
        message: message.to_string(),
    }
    .render()
}

/// A region rendered to an HTML fragment.
///
/// Bind one to the Results region and another to the Error region; the
/// fragment is `None` while the region is hidden.
#[derive(Debug, Clone, Default)]
pub struct HtmlRegion {
    html: Option<String>,
    scroll: Option<ScrollHint>,
}

impl HtmlRegion {
    /// Create a hidden region.
    pub fn new() -> Self {
        Self::default()
    }

    /// The rendered fragment, if the region is visible.
    pub fn html(&self) -> Option<&str> {
        self.html.as_deref()
    }

    /// How the region asked to be scrolled when last shown.
    pub fn scroll(&self) -> Option<ScrollHint> {
        self.scroll
    }

    fn show(&mut self, rendered: Result<String, askama::Error>, scroll: ScrollHint) {
        let html = rendered.unwrap_or_else(|e| {
            error!(error = %e, "template render failed");
            format!("Template error: {}", e)
        });
        self.html = Some(html);
        self.scroll = Some(scroll);
    }

    fn hide(&mut self) {
        self.html = None;
        self.scroll = None;
    }
}

impl ResultsTarget for HtmlRegion {
    fn show_results(&mut self, view: &JourneyView, scroll: ScrollHint) {
        self.show(render_results(view), scroll);
    }

    fn hide_results(&mut self) {
        self.hide();
    }
}

impl ErrorTarget for HtmlRegion {
    fn show_error(&mut self, message: &str, scroll: ScrollHint) {
        self.show(render_error(message), scroll);
    }

    fn hide_error(&mut self) {
        self.hide();
    }
}
