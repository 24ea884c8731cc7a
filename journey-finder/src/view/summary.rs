//! Journey summary and the full results presentation model.

use crate::domain::{Journey, format_duration};

use super::card::{ContentCard, build_cards};

/// Headline facts about a journey.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JourneySummary {
    /// Long-form total duration, e.g. "1 hour 35 minutes"
    pub duration_text: String,
    /// Total duration in minutes
    pub total_minutes: u32,
    /// Number of legs
    pub leg_count: usize,
}

impl JourneySummary {
    /// Summarize a journey.
    pub fn from_journey(journey: &Journey) -> Self {
        Self {
            duration_text: format_duration(journey.total_duration()),
            total_minutes: journey.total_duration(),
            leg_count: journey.leg_count(),
        }
    }

    /// Duration with the raw minutes alongside, e.g.
    /// "1 hour 35 minutes (95 minutes)".
    pub fn total_duration_line(&self) -> String {
        format!("{} ({} minutes)", self.duration_text, self.total_minutes)
    }
}

/// Everything the Results region shows for one journey.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JourneyView {
    pub summary: JourneySummary,
    pub cards: Vec<ContentCard>,
}

impl JourneyView {
    /// Project a journey into its presentation model.
    ///
    /// Pure: the same journey always yields an equal view.
    pub fn from_journey(journey: &Journey) -> Self {
        Self {
            summary: JourneySummary::from_journey(journey),
            cards: build_cards(journey.contents()),
        }
    }
}
