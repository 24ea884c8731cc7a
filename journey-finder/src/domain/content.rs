//! Content types: a single watchable item and its metadata.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use super::DomainError;

/// Kind of watchable item.
///
/// The planning service stores and filters TV shows as `"show"`, so that is
/// the wire name in both directions; `"tv_show"` is accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentType {
    #[serde(rename = "movie")]
    Movie,
    #[serde(rename = "show", alias = "tv_show")]
    TvShow,
}

impl ContentType {
    /// Wire name of the content type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Movie => "movie",
            ContentType::TvShow => "show",
        }
    }

    /// Human-readable label used on type badges.
    pub fn label(&self) -> &'static str {
        match self {
            ContentType::Movie => "Movie",
            ContentType::TvShow => "TV Show",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "movie" => Ok(ContentType::Movie),
            "tv_show" | "show" => Ok(ContentType::TvShow),
            other => Err(DomainError::UnknownContentType(other.to_string())),
        }
    }
}

/// An audience rating as a whole percentage (0-100).
///
/// The planning service may send fractional ratings; they are rounded to
/// the nearest whole percent on the way in.
///
/// # Examples
///
/// ```
/// use journey_finder::domain::Rating;
///
/// let rating = Rating::new(88).unwrap();
/// assert_eq!(rating.percent(), 88);
/// assert_eq!(rating.to_string(), "88");
///
/// assert!(Rating::new(101).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "u8")]
pub struct Rating(u8);

impl Rating {
    /// Create a rating from a whole percentage.
    pub fn new(percent: u8) -> Result<Self, DomainError> {
        if percent > 100 {
            return Err(DomainError::InvalidRating(i64::from(percent)));
        }
        Ok(Rating(percent))
    }

    /// The rating as a whole percentage.
    pub fn percent(&self) -> u8 {
        self.0
    }
}

impl TryFrom<f64> for Rating {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(DomainError::NonFiniteRating);
        }
        let rounded = value.round();
        if !(0.0..=100.0).contains(&rounded) {
            return Err(DomainError::InvalidRating(rounded as i64));
        }
        Ok(Rating(rounded as u8))
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single movie or TV show, as supplied by the planning service.
///
/// Content is never modified after it is received; rendering only reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    /// Display title
    pub title: String,

    /// Movie or TV show
    pub content_type: ContentType,

    /// Runtime in minutes
    pub duration_minutes: u32,

    /// Audience rating, if the planner found one
    #[serde(default)]
    pub rating: Option<Rating>,

    /// Release year
    #[serde(default)]
    pub year: Option<i32>,

    /// Genre labels, in the order they should be displayed
    #[serde(default, deserialize_with = "null_as_empty")]
    pub genres: Vec<String>,

    /// Short synopsis
    #[serde(default)]
    pub description: Option<String>,

    /// Page the metadata was taken from
    #[serde(default)]
    pub wikipedia_url: Option<String>,
}

impl Content {
    /// Create content with only the mandatory fields set.
    pub fn new(title: impl Into<String>, content_type: ContentType, duration_minutes: u32) -> Self {
        Self {
            title: title.into(),
            content_type,
            duration_minutes,
            rating: None,
            year: None,
            genres: Vec::new(),
            description: None,
            wikipedia_url: None,
        }
    }

    /// Set the rating.
    pub fn with_rating(mut self, rating: Rating) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Set the release year.
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Set the genre labels.
    pub fn with_genres<I, S>(mut self, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.genres = genres.into_iter().map(Into::into).collect();
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the source page URL.
    pub fn with_wikipedia_url(mut self, url: impl Into<String>) -> Self {
        self.wikipedia_url = Some(url.into());
        self
    }
}

/// Treat an explicit `null` the same as a missing list.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
