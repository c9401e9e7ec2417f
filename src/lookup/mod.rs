//! Offline attribute lookup for parsed numbers.
//!
//! Provides region descriptions, carrier names and line-type
//! classification from bundled numbering-plan tables.

pub mod resolver;
pub mod tables;
pub mod types;

pub use resolver::{resolve, resolve_bundled, BundledMetadata, MetadataSource};
pub use tables::country_name;
pub use types::{Attributes, LineType, UNKNOWN_CARRIER, UNKNOWN_REGION};
