//! phonemap: approximate phone number location lookup.
//!
//! Parses a number, resolves its region and carrier from bundled
//! numbering-plan data, geocodes the region and renders an HTML map.

pub mod browser;
pub mod config;
pub mod geocode;
pub mod logging;
pub mod lookup;
pub mod map;
pub mod number;
pub mod pipeline;
pub mod report;

pub use pipeline::{TrackError, Tracker, TrackingResult};
