//! Content journey finder.
//!
//! A client for a content journey planning service: ask for "about three
//! hours of heist films" and get back an ordered run of movies and shows
//! whose runtimes fill the time, rendered as a summary plus one card per
//! leg.

pub mod api;
pub mod domain;
pub mod orchestrator;
pub mod validate;
pub mod view;
