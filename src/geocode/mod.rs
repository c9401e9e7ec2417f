//! Forward geocoding of free-text region descriptions.

pub mod opencage;
pub mod types;

pub use opencage::{OpenCageClient, DEFAULT_BASE_URL};
pub use types::{ApiKey, Coordinate, GeocodeError, Geocoder};
