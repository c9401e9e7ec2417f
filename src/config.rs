//! Layered configuration.
//!
//! Precedence (lowest first): built-in defaults, `~/.phonemap/config.json`
//! (or `--config`), environment, command-line flags. There is no built-in
//! API key: one layer must supply it.

use crate::geocode::{ApiKey, DEFAULT_BASE_URL};
use crate::map::{
    AreaOverlay, MapOptions, TileLayer, DEFAULT_PREFIX, DEFAULT_RADIUS_M, DEFAULT_ZOOM,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

pub const API_KEY_ENV: &str = "OPENCAGE_API_KEY";
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const MAX_ZOOM: u8 = 19;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "OpenCage API key is required. \
         Pass it with --api-key or set environment variable OPENCAGE_API_KEY"
    )]
    MissingCredential,
    #[error("Cannot read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// One configuration layer. Every field is optional; higher layers
/// override lower ones field by field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigLayer {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub output_dir: Option<PathBuf>,
    pub prefix: Option<String>,
    pub zoom: Option<u8>,
    pub radius_m: Option<f64>,
    pub pixel_radius: Option<u32>,
    pub tiles: Option<TileLayer>,
    pub quiet: Option<bool>,
    pub color: Option<bool>,
    pub auto_open: Option<bool>,
}

impl ConfigLayer {
    /// Load the config file. An explicit path must exist; the default
    /// path is optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load_from(path),
            None => {
                let path = Self::default_path();
                if path.exists() {
                    Self::load_from(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let layer = serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loaded config from {}", path.display());
        Ok(layer)
    }

    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".phonemap")
            .join("config.json")
    }

    /// The environment layer: `OPENCAGE_API_KEY` and `NO_COLOR`.
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var(API_KEY_ENV).ok(),
            std::env::var_os("NO_COLOR").is_some(),
        )
    }

    fn from_vars(api_key: Option<String>, no_color: bool) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            color: if no_color { Some(false) } else { None },
            ..Self::default()
        }
    }

    /// Overlay `higher` on top of `self`.
    pub fn merge(self, higher: ConfigLayer) -> ConfigLayer {
        ConfigLayer {
            api_key: higher.api_key.or(self.api_key),
            base_url: higher.base_url.or(self.base_url),
            timeout_secs: higher.timeout_secs.or(self.timeout_secs),
            output_dir: higher.output_dir.or(self.output_dir),
            prefix: higher.prefix.or(self.prefix),
            zoom: higher.zoom.or(self.zoom),
            // The two overlay kinds are exclusive: a layer choosing one
            // discards the other from lower layers.
            radius_m: if higher.pixel_radius.is_some() {
                higher.radius_m
            } else {
                higher.radius_m.or(self.radius_m)
            },
            pixel_radius: if higher.radius_m.is_some() {
                higher.pixel_radius
            } else {
                higher.pixel_radius.or(self.pixel_radius)
            },
            tiles: higher.tiles.or(self.tiles),
            quiet: higher.quiet.or(self.quiet),
            color: higher.color.or(self.color),
            auto_open: higher.auto_open.or(self.auto_open),
        }
    }
}

/// Presentation switches shared by every run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Presentation {
    /// Suppress the banner.
    pub quiet: bool,
    pub color: bool,
    /// Open the generated map in the default browser.
    pub auto_open: bool,
}

impl Default for Presentation {
    fn default() -> Self {
        Self {
            quiet: false,
            color: true,
            auto_open: false,
        }
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone)]
pub struct Settings {
    pub api_key: ApiKey,
    pub base_url: String,
    pub timeout: Duration,
    pub output_dir: PathBuf,
    pub map: MapOptions,
    pub presentation: Presentation,
}

impl Settings {
    /// Build settings from a merged layer. Fails before anything else
    /// happens when no API key is available.
    pub fn from_layer(layer: ConfigLayer) -> Result<Self, ConfigError> {
        let api_key = layer
            .api_key
            .as_deref()
            .and_then(|k| ApiKey::new(k).ok())
            .ok_or(ConfigError::MissingCredential)?;

        let zoom = layer.zoom.unwrap_or(DEFAULT_ZOOM);
        if zoom > MAX_ZOOM {
            return Err(ConfigError::Invalid(format!(
                "zoom must be 0..={}, got {}",
                MAX_ZOOM, zoom
            )));
        }

        let overlay = match (layer.radius_m, layer.pixel_radius) {
            (Some(_), Some(_)) => {
                return Err(ConfigError::Invalid(
                    "radius_m and pixel_radius are mutually exclusive".into(),
                ))
            }
            (Some(r), None) if !(r.is_finite() && r > 0.0) => {
                return Err(ConfigError::Invalid(format!("radius_m must be positive, got {}", r)))
            }
            (Some(r), None) => AreaOverlay::Meters(r),
            (None, Some(0)) => {
                return Err(ConfigError::Invalid("pixel_radius must be positive".into()))
            }
            (None, Some(px)) => AreaOverlay::Pixels(px),
            (None, None) => AreaOverlay::Meters(DEFAULT_RADIUS_M),
        };

        let prefix = layer.prefix.unwrap_or_else(|| DEFAULT_PREFIX.to_string());
        if prefix.is_empty() || prefix.contains(['/', '\\']) {
            return Err(ConfigError::Invalid(format!("invalid file prefix '{}'", prefix)));
        }

        Ok(Self {
            api_key,
            base_url: layer.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            timeout: Duration::from_secs(layer.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)),
            output_dir: layer.output_dir.unwrap_or_else(|| PathBuf::from(".")),
            map: MapOptions {
                prefix,
                zoom,
                overlay,
                tiles: layer.tiles.unwrap_or_default(),
            },
            presentation: Presentation {
                quiet: layer.quiet.unwrap_or(false),
                color: layer.color.unwrap_or(true),
                auto_open: layer.auto_open.unwrap_or(false),
            },
        })
    }
}
