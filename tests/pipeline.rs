mod common;

use chrono::NaiveDate;
use common::is_timestamped_map_name;
use phonemap::geocode::{Coordinate, GeocodeError, Geocoder};
use phonemap::lookup::{LineType, MetadataSource, UNKNOWN_CARRIER};
use phonemap::map::{AreaOverlay, MapOptions};
use phonemap::number::ParsedNumber;
use phonemap::{TrackError, Tracker};
use std::cell::RefCell;
use std::fs;
use tempfile::TempDir;

struct FixedMetadata;

impl MetadataSource for FixedMetadata {
    fn region_description(&self, _: &ParsedNumber) -> Option<String> {
        Some("Nairobi, Kenya".into())
    }
    fn carrier_name(&self, _: &ParsedNumber) -> Option<String> {
        Some("Safaricom".into())
    }
    fn line_type(&self, _: &ParsedNumber) -> LineType {
        LineType::Mobile
    }
}

enum Reply {
    Found(Coordinate),
    NoMatch,
    Down,
    Rejected,
}

struct MockGeocoder {
    reply: Reply,
    queries: RefCell<Vec<String>>,
}

impl MockGeocoder {
    fn new(reply: Reply) -> Self {
        Self { reply, queries: RefCell::new(Vec::new()) }
    }
}

impl Geocoder for MockGeocoder {
    fn geocode(&self, query: &str) -> Result<Option<Coordinate>, GeocodeError> {
        self.queries.borrow_mut().push(query.to_string());
        match self.reply {
            Reply::Found(c) => Ok(Some(c)),
            Reply::NoMatch => Ok(None),
            Reply::Down => Err(GeocodeError::Network("connection refused".into())),
            Reply::Rejected => Err(GeocodeError::CredentialRejected(403)),
        }
    }
}

fn files_in(dir: &TempDir) -> Vec<String> {
    fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect()
}

#[test]
fn test_mocked_coordinates_pass_through_exactly() {
    let dir = TempDir::new().unwrap();
    let geocoder = MockGeocoder::new(Reply::Found(Coordinate::new(-1.2921, 36.8219)));
    let tracker = Tracker::new(&FixedMetadata, &geocoder).with_output_dir(dir.path());

    let result = tracker.track("+254712345678").unwrap();
    let c = result.coordinate.unwrap();
    assert_eq!(c.latitude, -1.2921);
    assert_eq!(c.longitude, 36.8219);
    assert_eq!(result.attributes.region_description, "Nairobi, Kenya");
    assert_eq!(geocoder.queries.borrow().as_slice(), ["Nairobi, Kenya"]);
    assert!(result.warning.is_none());
}

#[test]
fn test_match_writes_timestamped_map() {
    let dir = TempDir::new().unwrap();
    let geocoder = MockGeocoder::new(Reply::Found(Coordinate::new(-1.2921, 36.8219)));
    let tracker = Tracker::new(&FixedMetadata, &geocoder).with_output_dir(dir.path());

    let result = tracker.track("254712345678").unwrap();
    let path = result.map_file.unwrap();
    assert!(path.exists());
    assert!(fs::metadata(&path).unwrap().len() > 0);

    let name = path.file_name().unwrap().to_string_lossy().into_owned();
    assert!(is_timestamped_map_name(&name, "location"), "{}", name);
    assert_eq!(files_in(&dir), vec![name]);
    assert_eq!(result.phone, "+254712345678");
    let digits: String = result
        .international
        .chars()
        .filter(char::is_ascii_digit)
        .collect();
    assert!(result.international.starts_with("+254 "));
    assert_eq!(digits, "254712345678");
}

#[test]
fn test_explicit_timestamp_and_options() {
    let dir = TempDir::new().unwrap();
    let geocoder = MockGeocoder::new(Reply::Found(Coordinate::new(-1.2921, 36.8219)));
    let opts = MapOptions {
        prefix: "phone_loc".into(),
        zoom: 11,
        overlay: AreaOverlay::Pixels(12),
        ..MapOptions::default()
    };
    let tracker = Tracker::new(&FixedMetadata, &geocoder)
        .with_output_dir(dir.path())
        .with_map_options(opts);
    let ts = NaiveDate::from_ymd_opt(2026, 10, 19)
        .unwrap()
        .and_hms_opt(14, 30, 0)
        .unwrap();

    let result = tracker.track_at("+254712345678", ts).unwrap();
    assert_eq!(
        result.map_file.unwrap(),
        dir.path().join("phone_loc_20261019_143000.html")
    );
}

#[test]
fn test_no_match_skips_map() {
    let dir = TempDir::new().unwrap();
    let geocoder = MockGeocoder::new(Reply::NoMatch);
    let tracker = Tracker::new(&FixedMetadata, &geocoder).with_output_dir(dir.path());

    let result = tracker.track("+254712345678").unwrap();
    assert!(result.coordinate.is_none());
    assert!(result.map_file.is_none());
    assert!(files_in(&dir).is_empty());
    assert_eq!(result.attributes.region_description, "Nairobi, Kenya");
    assert_eq!(result.attributes.carrier_name, "Safaricom");
    assert!(result.warning.unwrap().contains("Could not geocode"));
}

#[test]
fn test_no_match_json_omits_coordinates() {
    let dir = TempDir::new().unwrap();
    let geocoder = MockGeocoder::new(Reply::NoMatch);
    let tracker = Tracker::new(&FixedMetadata, &geocoder).with_output_dir(dir.path());

    let result = tracker.track("+254712345678").unwrap();
    let json = serde_json::to_value(&result).unwrap();
    assert!(json.get("latitude").is_none());
    assert!(json.get("longitude").is_none());
    assert!(json.get("map_file").is_none());
    assert_eq!(json["carrier_name"], "Safaricom");
}

#[test]
fn test_service_failure_is_treated_as_no_match() {
    let dir = TempDir::new().unwrap();
    let geocoder = MockGeocoder::new(Reply::Down);
    let tracker = Tracker::new(&FixedMetadata, &geocoder).with_output_dir(dir.path());

    let result = tracker.track("+254712345678").unwrap();
    assert!(result.coordinate.is_none());
    assert!(files_in(&dir).is_empty());
    assert!(result.warning.unwrap().contains("connection refused"));
}

#[test]
fn test_rejected_credential_is_fatal() {
    let dir = TempDir::new().unwrap();
    let geocoder = MockGeocoder::new(Reply::Rejected);
    let tracker = Tracker::new(&FixedMetadata, &geocoder).with_output_dir(dir.path());

    let err = tracker.track("+254712345678").unwrap_err();
    assert!(matches!(err, TrackError::Credential(GeocodeError::CredentialRejected(403))));
    assert!(files_in(&dir).is_empty());
}

#[test]
fn test_parse_error_never_reaches_geocoder() {
    let geocoder = MockGeocoder::new(Reply::NoMatch);
    let tracker = Tracker::new(&FixedMetadata, &geocoder);
    assert!(matches!(tracker.track("abc"), Err(TrackError::Number(_))));
    assert!(geocoder.queries.borrow().is_empty());
}

#[test]
fn test_bundled_metadata_end_to_end() {
    let dir = TempDir::new().unwrap();
    let geocoder = MockGeocoder::new(Reply::NoMatch);
    let tracker = Tracker::new(&phonemap::lookup::BundledMetadata, &geocoder)
        .with_output_dir(dir.path());

    let result = tracker.track("+254202222222").unwrap();
    assert_eq!(result.attributes.region_description, "Nairobi, Kenya");
    assert_eq!(result.attributes.carrier_name, UNKNOWN_CARRIER);
    assert_eq!(geocoder.queries.borrow().as_slice(), ["Nairobi, Kenya"]);
}
