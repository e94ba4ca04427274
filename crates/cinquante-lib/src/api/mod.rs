//! # API Module
//!
//! Knowledge-base client layer: encyclopedia search and structured-data
//! claims, each behind a trait with Live (reqwest) and Mock (scripted,
//! call-counting) implementations.

pub mod wikidata;
pub mod wikipedia;

pub use wikidata::{LiveWikidataClient, MockWikidataClient, WikidataClient, WikidataError};
pub use wikipedia::{LiveWikipediaClient, MockWikipediaClient, WikipediaClient, WikipediaError};

/// User agent for all knowledge-base requests
pub(crate) const USER_AGENT: &str = "cinquante/0.1.0";
