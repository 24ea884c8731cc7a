//! Plain-text render targets for the command line.
//!
//! Results go to stdout; the loading notice and errors go to stderr so
//! that piped output contains only the journey.

use std::fmt::Write;

use super::card::{ContentCard, FacetKind};
use super::presenter::{ErrorTarget, LoadingTarget, ResultsTarget, ScrollHint};
use super::summary::JourneyView;

/// Render a journey view as plain text.
pub fn render_text(view: &JourneyView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Total Duration: {}", view.summary.total_duration_line());
    let _ = writeln!(out, "Number of Legs: {}", view.summary.leg_count);
    let _ = writeln!(out, "Ready for takeoff!");

    for card in &view.cards {
        out.push('\n');
        out.push_str(&render_card_text(card));
    }
    out
}

/// Render one content card as plain text.
pub fn render_card_text(card: &ContentCard) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "[{}] {}", card.leg(), card.title());

    let badges: Vec<String> = card
        .badges()
        .map(|badge| match badge.kind() {
            FacetKind::Rating => format!("{badge}%"),
            _ => badge.to_string(),
        })
        .collect();
    let _ = writeln!(out, "    {}", badges.join(" | "));

    if !card.genres().is_empty() {
        let _ = writeln!(out, "    Genres: {}", card.genres().join(", "));
    }
    if let Some(description) = card.description() {
        let _ = writeln!(out, "    {description}");
    }
    if let Some(url) = card.source_url() {
        let _ = writeln!(out, "    Source: {url}");
    }
    out
}

/// Terminal target for all three regions.
///
/// A terminal cannot take back what it printed, so hiding is a no-op.
#[derive(Debug, Clone, Copy, Default)]
pub struct Terminal;

impl LoadingTarget for Terminal {
    fn show_loading(&mut self) {
        eprintln!("Planning your journey...");
    }

    fn hide_loading(&mut self) {}
}

impl ResultsTarget for Terminal {
    fn show_results(&mut self, view: &JourneyView, _scroll: ScrollHint) {
        print!("{}", render_text(view));
    }

    fn hide_results(&mut self) {}
}

impl ErrorTarget for Terminal {
    fn show_error(&mut self, message: &str, _scroll: ScrollHint) {
        eprintln!("Error: {message}");
    }

    fn hide_error(&mut self) {}
}
