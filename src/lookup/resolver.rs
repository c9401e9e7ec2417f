//! Attribute resolver: turns a parsed number into region, carrier and
//! line type.
//!
//! Region flow:  mobile → country name; otherwise area code → country name → Unknown
//! Country name: metadata region, else the main country of the calling code
//! Carrier flow: mobile-capable ranges only → carrier table → Unknown

use super::tables;
use super::types::{Attributes, LineType, UNKNOWN_CARRIER, UNKNOWN_REGION};
use crate::number::ParsedNumber;

/// A source of offline numbering-plan metadata.
///
/// Every lookup may legitimately have no data; callers substitute
/// placeholders.
pub trait MetadataSource {
    fn region_description(&self, number: &ParsedNumber) -> Option<String>;
    fn carrier_name(&self, number: &ParsedNumber) -> Option<String>;
    fn line_type(&self, number: &ParsedNumber) -> LineType;
}

/// Metadata backed by the libphonenumber database and the bundled tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledMetadata;

impl MetadataSource for BundledMetadata {
    fn region_description(&self, number: &ParsedNumber) -> Option<String> {
        let cc = number.country_code;
        let line_type = self.line_type(number);

        // Only fixed lines keep a dependent territory's own name.
        let region = match line_type {
            LineType::FixedLine => number.region_code(),
            _ => number
                .region_code()
                .filter(|r| !tables::is_dependency(cc, r)),
        };
        let country = region
            .as_deref()
            .and_then(tables::country_name)
            .or_else(|| tables::calling_code_country(cc));

        // Mobile ranges carry no geographic information.
        if line_type == LineType::Mobile {
            return country.map(str::to_string);
        }

        tables::area_description(cc, &number.national_digits())
            .or(country)
            .map(str::to_string)
    }

    fn carrier_name(&self, number: &ParsedNumber) -> Option<String> {
        match self.line_type(number) {
            LineType::Mobile | LineType::FixedLineOrMobile | LineType::Pager => {
                tables::carrier_for(number.country_code, &number.national_digits())
                    .map(str::to_string)
            }
            _ => None,
        }
    }

    fn line_type(&self, number: &ParsedNumber) -> LineType {
        use phonenumber::Type;

        match number.phone().number_type(&phonenumber::metadata::DATABASE) {
            Type::FixedLine => LineType::FixedLine,
            Type::Mobile => LineType::Mobile,
            Type::FixedLineOrMobile => LineType::FixedLineOrMobile,
            Type::TollFree => LineType::TollFree,
            Type::PremiumRate => LineType::PremiumRate,
            Type::SharedCost => LineType::SharedCost,
            Type::Voip => LineType::Voip,
            Type::PersonalNumber => LineType::PersonalNumber,
            Type::Pager => LineType::Pager,
            Type::Uan => LineType::Uan,
            Type::Voicemail => LineType::Voicemail,
            _ => LineType::Unknown,
        }
    }
}

/// Resolve attributes through `source`, substituting placeholders for
/// missing data.
pub fn resolve(number: &ParsedNumber, source: &dyn MetadataSource) -> Attributes {
    let region_description = source
        .region_description(number)
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| UNKNOWN_REGION.to_string());

    let carrier_name = source
        .carrier_name(number)
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| UNKNOWN_CARRIER.to_string());

    let number_type = Some(source.line_type(number));

    log::debug!(
        "attributes for {}: region='{}' carrier='{}' type={:?}",
        number.normalized,
        region_description,
        carrier_name,
        number_type
    );

    Attributes {
        region_description,
        carrier_name,
        number_type,
    }
}

/// Resolve with the bundled offline metadata.
pub fn resolve_bundled(number: &ParsedNumber) -> Attributes {
    resolve(number, &BundledMetadata)
}
