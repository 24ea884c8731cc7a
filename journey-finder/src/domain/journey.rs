//! Journey type.
//!
//! A `Journey` is the planning service's answer to one request: an ordered
//! run of content whose runtimes add up to roughly the requested duration.

use serde::{Deserialize, Serialize};

use super::Content;

/// An ordered sequence of content plus its aggregate runtime.
///
/// # Invariants
///
/// - `contents` is in playback order; the first item is leg 1
/// - The order is never changed after the journey is received
///
/// `total_duration` is trusted as sent; it is not recomputed from the
/// contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Journey {
    total_duration: u32,
    contents: Vec<Content>,
}

impl Journey {
    /// Constructs a journey from its parts.
    pub fn new(total_duration: u32, contents: Vec<Content>) -> Self {
        Self {
            total_duration,
            contents,
        }
    }

    /// Constructs a journey whose total is the sum of its contents' runtimes.
    pub fn from_contents(contents: Vec<Content>) -> Self {
        let total_duration = contents.iter().map(|c| c.duration_minutes).sum();
        Self::new(total_duration, contents)
    }

    /// Total runtime in minutes, as reported by the planner.
    pub fn total_duration(&self) -> u32 {
        self.total_duration
    }

    /// Content in playback order.
    pub fn contents(&self) -> &[Content] {
        &self.contents
    }

    /// Number of legs.
    pub fn leg_count(&self) -> usize {
        self.contents.len()
    }

    /// Returns true if the planner found nothing to watch.
    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    /// Iterate over legs with their 1-based leg numbers.
    pub fn legs(&self) -> impl Iterator<Item = (usize, &Content)> {
        self.contents.iter().enumerate().map(|(i, c)| (i + 1, c))
    }
}
