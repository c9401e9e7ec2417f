//! Core types for the lookup subsystem.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder used when no region data exists for a number.
pub const UNKNOWN_REGION: &str = "Unknown Location";

/// Placeholder used when no carrier data exists for a number.
pub const UNKNOWN_CARRIER: &str = "Unknown Carrier";

/// Line type of a number, as classified by the numbering-plan metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineType {
    FixedLine,
    Mobile,
    FixedLineOrMobile,
    TollFree,
    PremiumRate,
    SharedCost,
    Voip,
    PersonalNumber,
    Pager,
    Uan,
    Voicemail,
    Unknown,
}

impl fmt::Display for LineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FixedLine => write!(f, "Fixed line"),
            Self::Mobile => write!(f, "Mobile"),
            Self::FixedLineOrMobile => write!(f, "Fixed line or mobile"),
            Self::TollFree => write!(f, "Toll-free"),
            Self::PremiumRate => write!(f, "Premium rate"),
            Self::SharedCost => write!(f, "Shared cost"),
            Self::Voip => write!(f, "VoIP"),
            Self::PersonalNumber => write!(f, "Personal number"),
            Self::Pager => write!(f, "Pager"),
            Self::Uan => write!(f, "UAN"),
            Self::Voicemail => write!(f, "Voicemail"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Human-readable attributes derived from a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attributes {
    /// Approximate area, e.g. "Nairobi, Kenya". Never empty.
    pub region_description: String,
    /// Operator that was allocated the number range. Never empty.
    pub carrier_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_type: Option<LineType>,
}

impl Attributes {
    pub fn has_region(&self) -> bool {
        self.region_description != UNKNOWN_REGION
    }

    pub fn has_carrier(&self) -> bool {
        self.carrier_name != UNKNOWN_CARRIER
    }
}
