//! # quakemap
//!
//! Earthquake map assembly in the style of a Leaflet page.
//!
//! The library fetches a live earthquake feed and a tectonic plate boundary
//! dataset, turns earthquakes into circle markers sized by magnitude and
//! colored by depth, overlays the plate boundaries and attaches a layer
//! switcher plus a depth legend. Everything is composed against the
//! [`MapSurface`] abstraction so the pure pieces can be tested without a
//! real map widget; [`Map`] is the in-memory implementation and
//! [`ui::document`] exports it as a standalone Leaflet page.

pub mod core;
pub mod data;
pub mod layers;
pub mod prelude;
pub mod quake;
pub mod tiles;
pub mod traits;
pub mod ui;
pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    config::QuakeMapConfig,
    geo::LatLng,
    map::Map,
};

pub use layers::{base::LayerTrait, manager::LayerManager, tile::TileLayer, vector::VectorLayer};

pub use data::{
    feed::{FeedSource, HttpFeedSource, StaticFeedSource},
    geojson::GeoJson,
};

pub use quake::{
    assembler::{LoadReport, MapAssembler},
    depth::{classify, DepthColorBand, DEPTH_BANDS},
    feature::EarthquakeFeature,
    legend::{build_legend, Legend},
    render::{render, CircleMarkerSpec, RenderedFeature},
};

pub use traits::MapSurface;

pub use ui::{controls::Control, popup::Popup};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Layer error: {0}")]
    Layer(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Error type alias for convenience
pub type Error = MapError;
