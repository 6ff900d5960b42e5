//! Prelude module for common quakemap types and traits
//!
//! Re-exports the most commonly used types, traits and functions for easy
//! importing with `use quakemap::prelude::*;`

pub use crate::core::{
    config::QuakeMapConfig,
    geo::LatLng,
    map::{Map, OverlayKind},
};

pub use crate::layers::{
    base::{LayerTrait, LayerType},
    manager::LayerManager,
    tile::TileLayer,
    vector::{LineStyle, PointStyle, VectorFeature, VectorLayer},
};

pub use crate::data::{
    feed::{FeedSource, HttpFeedSource, StaticFeedSource},
    geojson::{GeoJson, GeoJsonFeature, GeoJsonGeometry},
};

pub use crate::quake::{
    assembler::{FeedKind, LoadReport, MapAssembler},
    depth::{classify, DepthColorBand, DEPTH_BANDS},
    feature::EarthquakeFeature,
    legend::{build_legend, Legend, LegendEntry},
    render::{render, CircleMarkerSpec, RenderedFeature},
};

pub use crate::tiles::source::{MapboxStyleSource, TileSource};

pub use crate::traits::MapSurface;

pub use crate::ui::{
    controls::{Control, ControlPosition},
    popup::Popup,
};

pub use crate::{Error as MapError, Result};

pub use std::sync::Arc;

pub use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet};
