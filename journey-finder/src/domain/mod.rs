//! Domain types for the content journey finder.
//!
//! This module contains the content and journey types received from the
//! planning service, and the runtime formatters used when displaying them.

mod content;
mod duration;
mod error;
mod journey;

pub use content::{Content, ContentType, Rating};
pub use duration::{format_badge_duration, format_duration};
pub use error::DomainError;
pub use journey::Journey;
