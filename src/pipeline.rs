//! The Tracker: primary public API.
//!
//! Runs parse → resolve → geocode → map as plain function calls and returns
//! a `TrackingResult`. Nothing here writes to the console.

use crate::geocode::{Coordinate, GeocodeError, Geocoder};
use crate::lookup::{self, Attributes, MetadataSource};
use crate::map::{self, MapError, MapOptions, MarkerInfo};
use crate::number::{self, NumberError};
use chrono::{Local, NaiveDateTime};
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal pipeline errors. Anything recoverable ends up in
/// `TrackingResult::warning` instead.
#[derive(Debug, Error)]
pub enum TrackError {
    #[error(transparent)]
    Number(#[from] NumberError),
    #[error("Invalid or unsupported phone number: {0}")]
    InvalidNumber(String),
    #[error(transparent)]
    Credential(GeocodeError),
    #[error(transparent)]
    Map(#[from] MapError),
}

/// Outcome of a single run.
#[derive(Debug, Clone, Serialize)]
pub struct TrackingResult {
    pub phone: String,
    /// Display form, grouped per the numbering plan.
    pub international: String,
    #[serde(flatten)]
    pub attributes: Attributes,
    #[serde(flatten)]
    pub coordinate: Option<Coordinate>,
    #[serde(serialize_with = "serialize_timestamp")]
    pub generated_at: NaiveDateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map_file: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

fn serialize_timestamp<S: serde::Serializer>(ts: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&ts.format("%Y-%m-%dT%H:%M:%S").to_string())
}

/// Wires the four stages together.
pub struct Tracker<'a> {
    metadata: &'a dyn MetadataSource,
    geocoder: &'a dyn Geocoder,
    map_options: MapOptions,
    output_dir: PathBuf,
}

impl<'a> Tracker<'a> {
    pub fn new(metadata: &'a dyn MetadataSource, geocoder: &'a dyn Geocoder) -> Self {
        Self {
            metadata,
            geocoder,
            map_options: MapOptions::default(),
            output_dir: PathBuf::from("."),
        }
    }

    pub fn with_map_options(mut self, opts: MapOptions) -> Self {
        self.map_options = opts;
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Run the pipeline stamped with the current local time.
    pub fn track(&self, raw: &str) -> Result<TrackingResult, TrackError> {
        self.track_at(raw, Local::now().naive_local())
    }

    /// Run the pipeline with an explicit timestamp (used for the file name).
    pub fn track_at(&self, raw: &str, now: NaiveDateTime) -> Result<TrackingResult, TrackError> {
        let parsed = number::parse(raw)?;
        if !parsed.is_valid {
            return Err(TrackError::InvalidNumber(parsed.normalized));
        }

        let attributes = lookup::resolve(&parsed, self.metadata);

        let outcome = if attributes.has_region() {
            self.geocoder.geocode(&attributes.region_description)
        } else {
            log::debug!("no region for {}, geocoding skipped", parsed.normalized);
            Ok(None)
        };

        let (coordinate, warning) = match outcome {
            Ok(Some(c)) => (Some(c), None),
            Ok(None) if !attributes.has_region() => (
                None,
                Some(format!(
                    "No location description for {}; skipping geocoding",
                    parsed.normalized
                )),
            ),
            Ok(None) => {
                let msg = format!(
                    "Could not geocode the location description '{}'",
                    attributes.region_description
                );
                log::warn!("{}", msg);
                (None, Some(msg))
            }
            Err(e) if e.is_fatal() => return Err(TrackError::Credential(e)),
            Err(e) => {
                log::warn!("geocoding failed: {}", e);
                (None, Some(format!("Geocoding failed: {}", e)))
            }
        };

        let map_file = match coordinate {
            Some(coord) => {
                let info = MarkerInfo {
                    phone: &parsed.normalized,
                    region: &attributes.region_description,
                    carrier: &attributes.carrier_name,
                    number_type: attributes.number_type.map(|t| t.to_string()),
                    timestamp: now,
                };
                Some(map::write_map(&self.output_dir, coord, &info, &self.map_options)?)
            }
            None => None,
        };

        Ok(TrackingResult {
            international: parsed.international(),
            phone: parsed.normalized,
            attributes,
            coordinate,
            generated_at: now,
            map_file,
            warning,
        })
    }
}
