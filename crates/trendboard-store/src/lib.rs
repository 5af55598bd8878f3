//! Persistence fallback chain for trends and reports.
//!
//! Callers go through [`DataStore`], which hides where data actually lives:
//! the relational store when configured, JSON files on local disk, and a
//! static fixture set as the last resort so the dashboard is never empty on
//! first run.

pub mod facade;
pub mod file;
pub mod fixtures;

pub use facade::{DataStore, Tier, TIER_ORDER};
pub use file::{FileStore, FileStoreError};
