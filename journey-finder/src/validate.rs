//! Input validation for journey requests.
//!
//! Raw form input is checked here before any request is issued. Only the
//! duration is constrained; preferences are free text and the content type
//! is a hint passed through to the planner.

use serde::{Deserialize, Serialize};

use crate::domain::{ContentType, DomainError};

/// Shortest journey the planner will be asked for, in minutes.
pub const MIN_JOURNEY_MINUTES: i64 = 30;

/// Input rejected before a request is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Duration below the minimum, or not an integer at all
    #[error("Journey duration must be at least 30 minutes")]
    DurationTooShort,
}

impl ValidationError {
    /// Stable machine-readable code for the error.
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::DurationTooShort => "duration_too_short",
        }
    }
}

/// Raw user input, as typed into the planning form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawInput {
    /// Requested duration, unparsed
    pub duration: String,

    /// Free-text preferences (e.g. "space adventures")
    pub preferences: String,

    /// Selected content type; `None` means any type
    pub content_type: Option<ContentType>,
}

impl RawInput {
    /// Create raw input from its parts.
    pub fn new(
        duration: impl Into<String>,
        preferences: impl Into<String>,
        content_type: Option<ContentType>,
    ) -> Self {
        Self {
            duration: duration.into(),
            preferences: preferences.into(),
            content_type,
        }
    }
}

/// A validated, normalized journey request.
///
/// This is exactly the JSON body sent to `POST /api/plan-journey`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanRequest {
    /// Target duration in minutes (at least [`MIN_JOURNEY_MINUTES`])
    pub duration: i64,

    /// Trimmed preferences, possibly empty
    pub preferences: String,

    /// Content type hint; `null` on the wire means any type
    pub content_type: Option<ContentType>,
}

/// Validate raw input and normalize it into a request payload.
///
/// The duration must parse as an integer (surrounding whitespace is
/// ignored) and be at least [`MIN_JOURNEY_MINUTES`]. Anything that does not
/// parse counts as too short.
///
/// # Examples
///
/// ```
/// use journey_finder::validate::{RawInput, ValidationError, validate};
///
/// let request = validate(&RawInput::new("90", "  heist films ", None)).unwrap();
/// assert_eq!(request.duration, 90);
/// assert_eq!(request.preferences, "heist films");
///
/// let err = validate(&RawInput::new("10", "", None)).unwrap_err();
/// assert_eq!(err, ValidationError::DurationTooShort);
/// ```
pub fn validate(input: &RawInput) -> Result<PlanRequest, ValidationError> {
    let duration: i64 = input
        .duration
        .trim()
        .parse()
        .map_err(|_| ValidationError::DurationTooShort)?;

    if duration < MIN_JOURNEY_MINUTES {
        return Err(ValidationError::DurationTooShort);
    }

    Ok(PlanRequest {
        duration,
        preferences: input.preferences.trim().to_string(),
        content_type: input.content_type,
    })
}

/// Parse a content type selection, where empty or `"any"` means no preference.
pub fn parse_content_type_selection(s: &str) -> Result<Option<ContentType>, DomainError> {
    let s = s.trim();
    if s.is_empty() || s.eq_ignore_ascii_case("any") {
        return Ok(None);
    }
    s.parse().map(Some)
}
