//! Standalone HTML map rendering.
//!
//! Produces a single Leaflet document centered on the resolved coordinate,
//! with a marker popup and an approximate-area overlay. Tiles and scripts are
//! referenced from public CDNs, everything else is inline.

use crate::geocode::Coordinate;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_PREFIX: &str = "location";
pub const DEFAULT_ZOOM: u8 = 10;
pub const DEFAULT_RADIUS_M: f64 = 5000.0;

const OVERLAY_COLOR: &str = "#FF4444";
const LEAFLET_CSS: &str = "https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.9.4/leaflet.css";
const LEAFLET_JS: &str = "https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.9.4/leaflet.js";

#[derive(Debug, Error)]
pub enum MapError {
    #[error("Cannot write map file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Approximate-area indicator drawn around the marker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AreaOverlay {
    /// Geographic circle, scales with zoom.
    Meters(f64),
    /// Fixed on-screen circle.
    Pixels(u32),
}

impl Default for AreaOverlay {
    fn default() -> Self {
        Self::Meters(DEFAULT_RADIUS_M)
    }
}

/// Base tile layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileLayer {
    #[default]
    OpenStreetMap,
    Positron,
}

impl TileLayer {
    fn url(&self) -> &'static str {
        match self {
            Self::OpenStreetMap => "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png",
            Self::Positron => "https://{s}.basemaps.cartocdn.com/light_all/{z}/{x}/{y}{r}.png",
        }
    }

    fn attribution(&self) -> &'static str {
        match self {
            Self::OpenStreetMap => "&copy; OpenStreetMap contributors",
            Self::Positron => "&copy; OpenStreetMap contributors &copy; CARTO",
        }
    }
}

impl fmt::Display for TileLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OpenStreetMap => write!(f, "openstreetmap"),
            Self::Positron => write!(f, "positron"),
        }
    }
}

impl std::str::FromStr for TileLayer {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "openstreetmap" | "osm" => Ok(Self::OpenStreetMap),
            "positron" | "cartodb" | "cartodb-positron" => Ok(Self::Positron),
            _ => Err(format!("Unknown tile layer '{}'. Use 'openstreetmap' or 'positron'.", s)),
        }
    }
}

/// Rendering options.
#[derive(Debug, Clone, PartialEq)]
pub struct MapOptions {
    pub prefix: String,
    pub zoom: u8,
    pub overlay: AreaOverlay,
    pub tiles: TileLayer,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            zoom: DEFAULT_ZOOM,
            overlay: AreaOverlay::default(),
            tiles: TileLayer::default(),
        }
    }
}

/// Text shown in the marker popup and tooltip.
#[derive(Debug, Clone)]
pub struct MarkerInfo<'a> {
    pub phone: &'a str,
    pub region: &'a str,
    pub carrier: &'a str,
    pub number_type: Option<String>,
    pub timestamp: NaiveDateTime,
}

/// `<prefix>_<YYYYMMDD_HHMMSS>.html`
pub fn map_filename(prefix: &str, timestamp: NaiveDateTime) -> String {
    format!("{}_{}.html", prefix, timestamp.format("%Y%m%d_%H%M%S"))
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// JSON string literal, safe to embed inside a `<script>` block.
fn js_string(s: &str) -> String {
    serde_json::Value::String(s.to_string())
        .to_string()
        .replace("</", "<\\/")
}

fn popup_html(coord: Coordinate, info: &MarkerInfo<'_>) -> String {
    let mut html = String::from("<b>Phone Location</b><br><br>");
    html.push_str(&format!("<b>Number:</b> {}<br>", escape_html(info.phone)));
    html.push_str(&format!("<b>Location:</b> {}<br>", escape_html(info.region)));
    html.push_str(&format!("<b>Carrier:</b> {}<br>", escape_html(info.carrier)));
    if let Some(ref t) = info.number_type {
        html.push_str(&format!("<b>Type:</b> {}<br>", escape_html(t)));
    }
    html.push_str(&format!("<b>Coordinates:</b> {}<br>", coord.display()));
    html.push_str(&format!(
        "<b>Time:</b> {}",
        info.timestamp.format("%Y-%m-%d %H:%M:%S")
    ));
    html
}

fn overlay_js(coord: Coordinate, overlay: AreaOverlay) -> String {
    let center = format!("[{}, {}]", coord.latitude, coord.longitude);
    match overlay {
        AreaOverlay::Meters(radius) => format!(
            "L.circle({}, {{radius: {}, {}}}){}",
            center, radius, overlay_style(), OVERLAY_POPUP
        ),
        AreaOverlay::Pixels(radius) => format!(
            "L.circleMarker({}, {{radius: {}, {}}}){}",
            center, radius, overlay_style(), OVERLAY_POPUP
        ),
    }
}

const OVERLAY_POPUP: &str = "\n      .bindPopup('Approximate Area').addTo(map);";

fn overlay_style() -> String {
    format!("color: '{}', fill: true, fillOpacity: 0.2", OVERLAY_COLOR)
}

/// Render the complete HTML document.
pub fn render_html(coord: Coordinate, info: &MarkerInfo<'_>, opts: &MapOptions) -> String {
    let title = format!("Phone location: {}", info.phone);
    format!(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{title}</title>
  <link rel="stylesheet" href="{css}" crossorigin="anonymous" referrerpolicy="no-referrer" />
  <script src="{js}" crossorigin="anonymous" referrerpolicy="no-referrer"></script>
  <style>
    html, body {{ height: 100%; margin: 0; }}
    #map {{ position: absolute; inset: 0; }}
    .note {{ position: absolute; bottom: 12px; left: 12px; z-index: 1000; padding: 6px 10px;
             background: rgba(255, 255, 255, .9); border-radius: 6px; font: 12px sans-serif; }}
  </style>
</head>
<body>
  <div id="map"></div>
  <div class="note">Approximate area derived from numbering-plan data. Not a device location.</div>
  <script>
    var map = L.map('map').setView([{lat}, {lng}], {zoom});
    L.tileLayer({tiles}, {{
      maxZoom: 19,
      attribution: {attribution}
    }}).addTo(map);
    L.marker([{lat}, {lng}])
      .bindPopup({popup}, {{maxWidth: 300}})
      .bindTooltip({tooltip})
      .addTo(map);
    {overlay}
  </script>
</body>
</html>
"#,
        title = escape_html(&title),
        css = LEAFLET_CSS,
        js = LEAFLET_JS,
        lat = coord.latitude,
        lng = coord.longitude,
        zoom = opts.zoom,
        tiles = js_string(opts.tiles.url()),
        attribution = js_string(opts.tiles.attribution()),
        popup = js_string(&popup_html(coord, info)),
        tooltip = js_string(&escape_html(info.region)),
        overlay = overlay_js(coord, opts.overlay),
    )
}

/// Render and write the map into `dir`. Returns the written path.
pub fn write_map(
    dir: &Path,
    coord: Coordinate,
    info: &MarkerInfo<'_>,
    opts: &MapOptions,
) -> Result<PathBuf, MapError> {
    let path = dir.join(map_filename(&opts.prefix, info.timestamp));
    let html = render_html(coord, info, opts);
    fs::write(&path, html).map_err(|source| MapError::Write {
        path: path.clone(),
        source,
    })?;
    log::info!("map written to {}", path.display());
    Ok(path)
}
