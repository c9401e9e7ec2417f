//! Core types for the geocoding client.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A WGS84 coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Format as `"-1.292100, 36.821900"`.
    pub fn display(&self) -> String {
        format!("{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

/// Geocoding errors.
///
/// `Network` and `Service` are recoverable: the caller carries on without
/// coordinates. The credential variants are fatal.
#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("Geocoding API key is required. Pass it with --api-key or set OPENCAGE_API_KEY")]
    MissingCredential,
    #[error("Geocoding service rejected the API key (HTTP {0})")]
    CredentialRejected(u16),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Geocoding service error: {0}")]
    Service(String),
}

impl GeocodeError {
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::MissingCredential | Self::CredentialRejected(_))
    }
}

/// An API credential for the geocoding service. Never empty.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Result<Self, GeocodeError> {
        let key = key.into().trim().to_string();
        if key.is_empty() {
            return Err(GeocodeError::MissingCredential);
        }
        Ok(Self(key))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

// Keys must not end up in logs.
impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiKey(***)")
    }
}

/// Translates a free-text place description into a coordinate.
pub trait Geocoder {
    /// `Ok(None)` means the service answered with zero results.
    fn geocode(&self, query: &str) -> Result<Option<Coordinate>, GeocodeError>;
}
