//! Runtime configuration for assembling the earthquake map.
//!
//! The access credential for the base imagery is read once and handed to the
//! assembler explicitly; nothing reads the environment after start-up.

use crate::{
    core::{
        constants::{DEFAULT_CENTER, DEFAULT_ZOOM, EARTHQUAKE_FEED_URL, TECTONIC_PLATES_URL},
        geo::LatLng,
    },
    MapError, Result,
};

/// Environment variable holding the Mapbox access token.
pub const API_KEY_VAR: &str = "API_KEY";
/// Optional override for the earthquake feed endpoint.
pub const EARTHQUAKE_URL_VAR: &str = "QUAKEMAP_EARTHQUAKE_URL";
/// Optional override for the plate boundary endpoint.
pub const PLATES_URL_VAR: &str = "QUAKEMAP_PLATES_URL";

#[derive(Debug, Clone, PartialEq)]
pub struct QuakeMapConfig {
    /// Access token substituted into every base imagery URL
    pub api_key: String,
    pub earthquake_url: String,
    pub plates_url: String,
    /// Initial view
    pub center: LatLng,
    pub zoom: f64,
}

impl QuakeMapConfig {
    /// Configuration with the default feeds and view
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            earthquake_url: EARTHQUAKE_FEED_URL.to_string(),
            plates_url: TECTONIC_PLATES_URL.to_string(),
            center: LatLng::new(DEFAULT_CENTER.0, DEFAULT_CENTER.1),
            zoom: DEFAULT_ZOOM,
        }
    }

    /// Reads the configuration through a variable lookup keyed by
    /// [`API_KEY_VAR`], [`EARTHQUAKE_URL_VAR`] and [`PLATES_URL_VAR`]
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| MapError::Config(format!("{} is not set", API_KEY_VAR)))?;

        let mut config = Self::new(api_key);
        if let Some(url) = lookup(EARTHQUAKE_URL_VAR) {
            config.earthquake_url = url;
        }
        if let Some(url) = lookup(PLATES_URL_VAR) {
            config.plates_url = url;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn with_earthquake_url(mut self, url: impl Into<String>) -> Self {
        self.earthquake_url = url.into();
        self
    }

    pub fn with_plates_url(mut self, url: impl Into<String>) -> Self {
        self.plates_url = url.into();
        self
    }

    /// Rejects configurations the map cannot be built from
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(MapError::Config("api key must not be empty".to_string()).into());
        }
        if self.earthquake_url.is_empty() || self.plates_url.is_empty() {
            return Err(MapError::Config("feed urls must not be empty".to_string()).into());
        }
        if !self.center.is_valid() {
            return Err(MapError::InvalidCoordinates(format!(
                "center ({}, {}) is out of range",
                self.center.lat, self.center.lng
            ))
            .into());
        }
        if !self.zoom.is_finite() || self.zoom < 0.0 {
            return Err(MapError::Config(format!("invalid zoom level {}", self.zoom)).into());
        }
        Ok(())
    }
}
