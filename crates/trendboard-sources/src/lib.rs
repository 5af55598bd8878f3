//! Trend collectors for the external sources.
//!
//! Each collector fetches from one upstream and maps the payload into
//! [`Trend`](trendboard_core::types::Trend) records. A failed collector is
//! never fatal to a collection run: the caller logs the error and continues
//! with whatever the other sources produced.

pub mod client;
pub mod error;
pub mod exploding_topics;
pub mod google_trends;
pub mod reddit;

pub use client::SourceClient;
pub use error::SourceError;
