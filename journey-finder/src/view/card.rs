//! Content cards: one piece of content projected into display facets.

use std::fmt;

use crate::domain::{Content, ContentType, Rating, format_badge_duration};

/// What a facet shows, without its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FacetKind {
    Leg,
    Title,
    Type,
    Duration,
    Rating,
    Year,
    Genres,
    Description,
    Source,
}

/// One piece of information rendered on a content card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Facet {
    /// 1-based position in the journey
    Leg(usize),
    /// Content title
    Title(String),
    /// Movie or TV show badge
    Type(ContentType),
    /// Runtime badge, in minutes
    Duration(u32),
    /// Rating badge
    Rating(Rating),
    /// Release year badge
    Year(i32),
    /// Genre tags, in source order
    Genres(Vec<String>),
    /// Synopsis block
    Description(String),
    /// Link to the page the metadata came from
    Source(String),
}

impl Facet {
    /// The kind of this facet.
    pub fn kind(&self) -> FacetKind {
        match self {
            Facet::Leg(_) => FacetKind::Leg,
            Facet::Title(_) => FacetKind::Title,
            Facet::Type(_) => FacetKind::Type,
            Facet::Duration(_) => FacetKind::Duration,
            Facet::Rating(_) => FacetKind::Rating,
            Facet::Year(_) => FacetKind::Year,
            Facet::Genres(_) => FacetKind::Genres,
            Facet::Description(_) => FacetKind::Description,
            Facet::Source(_) => FacetKind::Source,
        }
    }

    /// Whether this facet is one of the inline badges.
    pub fn is_badge(&self) -> bool {
        matches!(
            self,
            Facet::Type(_) | Facet::Duration(_) | Facet::Rating(_) | Facet::Year(_)
        )
    }
}

/// Plain display text; genre tags are joined with ", ".
impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Facet::Leg(n) => write!(f, "{n}"),
            Facet::Title(title) => f.write_str(title),
            Facet::Type(content_type) => f.write_str(content_type.label()),
            Facet::Duration(mins) => f.write_str(&format_badge_duration(*mins)),
            Facet::Rating(rating) => write!(f, "{rating}"),
            Facet::Year(year) => write!(f, "{year}"),
            Facet::Genres(genres) => f.write_str(&genres.join(", ")),
            Facet::Description(text) => f.write_str(text),
            Facet::Source(url) => f.write_str(url),
        }
    }
}

/// A content item's display facets, in rendering order.
///
/// Leg, title, type and duration are always present. Rating, year, genres,
/// description and source appear only when the content supplies them; a
/// missing facet is simply absent, never an empty placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentCard {
    facets: Vec<Facet>,
}

impl ContentCard {
    /// Build the card for `content` at position `leg` (1-based).
    ///
    /// Presence is decided by `Option`, not by value: a rating of 0 or a
    /// year of 0 still gets a badge. Blank descriptions and genre labels are
    /// dropped, and the source only appears for http(s) links.
    pub fn from_content(content: &Content, leg: usize) -> Self {
        let mut facets = vec![
            Facet::Leg(leg),
            Facet::Title(content.title.clone()),
            Facet::Type(content.content_type),
            Facet::Duration(content.duration_minutes),
        ];

        if let Some(rating) = content.rating {
            facets.push(Facet::Rating(rating));
        }

        if let Some(year) = content.year {
            facets.push(Facet::Year(year));
        }

        let genres: Vec<String> = content
            .genres
            .iter()
            .filter(|g| !g.trim().is_empty())
            .cloned()
            .collect();
        if !genres.is_empty() {
            facets.push(Facet::Genres(genres));
        }

        if let Some(description) = non_blank(content.description.as_deref()) {
            facets.push(Facet::Description(description.to_string()));
        }

        if let Some(url) = web_link(content.wikipedia_url.as_deref()) {
            facets.push(Facet::Source(url.to_string()));
        }

        Self { facets }
    }

    /// All facets, in rendering order.
    pub fn facets(&self) -> &[Facet] {
        &self.facets
    }

    /// Kinds of the facets present, in rendering order.
    pub fn kinds(&self) -> Vec<FacetKind> {
        self.facets.iter().map(Facet::kind).collect()
    }

    /// The inline badges (type, duration, rating, year), in order.
    pub fn badges(&self) -> impl Iterator<Item = &Facet> {
        self.facets.iter().filter(|f| f.is_badge())
    }

    /// Find the facet of the given kind, if present.
    pub fn facet(&self, kind: FacetKind) -> Option<&Facet> {
        self.facets.iter().find(|f| f.kind() == kind)
    }

    /// 1-based leg number.
    pub fn leg(&self) -> usize {
        self.facets
            .iter()
            .find_map(|f| match f {
                Facet::Leg(n) => Some(*n),
                _ => None,
            })
            .unwrap_or_default()
    }

    /// Content title.
    pub fn title(&self) -> &str {
        self.facets
            .iter()
            .find_map(|f| match f {
                Facet::Title(title) => Some(title.as_str()),
                _ => None,
            })
            .unwrap_or_default()
    }

    /// Rating, if the card shows one.
    pub fn rating(&self) -> Option<Rating> {
        self.facets.iter().find_map(|f| match f {
            Facet::Rating(rating) => Some(*rating),
            _ => None,
        })
    }

    /// Genre tags; empty when the card has none.
    pub fn genres(&self) -> &[String] {
        self.facets
            .iter()
            .find_map(|f| match f {
                Facet::Genres(genres) => Some(genres.as_slice()),
                _ => None,
            })
            .unwrap_or(&[])
    }

    /// Description text, if shown.
    pub fn description(&self) -> Option<&str> {
        self.facets.iter().find_map(|f| match f {
            Facet::Description(text) => Some(text.as_str()),
            _ => None,
        })
    }

    /// Source link, if shown.
    pub fn source_url(&self) -> Option<&str> {
        self.facets.iter().find_map(|f| match f {
            Facet::Source(url) => Some(url.as_str()),
            _ => None,
        })
    }
}

/// Build cards for a list of content, numbering legs from 1.
pub fn build_cards(contents: &[Content]) -> Vec<ContentCard> {
    contents
        .iter()
        .enumerate()
        .map(|(i, content)| ContentCard::from_content(content, i + 1))
        .collect()
}

fn non_blank(text: Option<&str>) -> Option<&str> {
    text.filter(|t| !t.trim().is_empty())
}

/// Source links are clickable, so only plain web URLs are shown.
fn web_link(url: Option<&str>) -> Option<&str> {
    let url = non_blank(url)?.trim();
    let parsed = reqwest::Url::parse(url).ok()?;
    matches!(parsed.scheme(), "http" | "https").then_some(url)
}
