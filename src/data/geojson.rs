use crate::{
    core::geo::LatLng,
    layers::vector::{LineStyle, VectorFeature},
    prelude::HashMap,
    MapError,
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A GeoJSON position: `[lon, lat]` or `[lon, lat, altitude]`.
/// Earthquake feeds store the hypocenter depth in kilometers as the third value.
pub type Position = Vec<f64>;

/// GeoJSON geometry types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GeoJsonGeometry {
    Point {
        coordinates: Position,
    },
    LineString {
        coordinates: Vec<Position>,
    },
    Polygon {
        coordinates: Vec<Vec<Position>>,
    },
    MultiPoint {
        coordinates: Vec<Position>,
    },
    MultiLineString {
        coordinates: Vec<Vec<Position>>,
    },
    MultiPolygon {
        coordinates: Vec<Vec<Vec<Position>>>,
    },
    GeometryCollection {
        geometries: Vec<GeoJsonGeometry>,
    },
}

/// GeoJSON feature with geometry and properties
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoJsonFeature {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<serde_json::Value>,
    #[serde(default)]
    pub geometry: Option<GeoJsonGeometry>,
    #[serde(default)]
    pub properties: Option<HashMap<String, serde_json::Value>>,
}

/// Root GeoJSON object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GeoJson {
    Feature(GeoJsonFeature),
    FeatureCollection { features: Vec<GeoJsonFeature> },
}

impl GeoJson {
    /// All features, a lone Feature counts as a collection of one
    pub fn features(&self) -> &[GeoJsonFeature] {
        match self {
            GeoJson::Feature(feature) => std::slice::from_ref(feature),
            GeoJson::FeatureCollection { features } => features,
        }
    }
}

impl FromStr for GeoJson {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s).map_err(|e| MapError::ParseError(format!("Invalid GeoJSON: {}", e)))
    }
}

impl GeoJsonFeature {
    pub fn property(&self, key: &str) -> Option<&serde_json::Value> {
        self.properties.as_ref().and_then(|p| p.get(key))
    }

    pub fn property_f64(&self, key: &str) -> Option<f64> {
        self.property(key).and_then(serde_json::Value::as_f64)
    }

    pub fn property_i64(&self, key: &str) -> Option<i64> {
        self.property(key).and_then(serde_json::Value::as_i64)
    }

    pub fn property_str(&self, key: &str) -> Option<&str> {
        self.property(key).and_then(serde_json::Value::as_str)
    }
}

impl GeoJsonGeometry {
    /// Converts line and polygon geometries into styled vector features.
    /// Point geometries carry no outline and produce nothing.
    pub fn to_vector_features(&self, style: &LineStyle) -> Vec<VectorFeature> {
        match self {
            GeoJsonGeometry::Point { .. } | GeoJsonGeometry::MultiPoint { .. } => Vec::new(),
            GeoJsonGeometry::LineString { coordinates } => vec![VectorFeature::LineString {
                points: to_lat_lngs(coordinates),
                style: style.clone(),
            }],
            GeoJsonGeometry::MultiLineString { coordinates } => coordinates
                .iter()
                .map(|line| VectorFeature::LineString {
                    points: to_lat_lngs(line),
                    style: style.clone(),
                })
                .collect(),
            GeoJsonGeometry::Polygon { coordinates } => vec![VectorFeature::Polygon {
                rings: coordinates.iter().map(|ring| to_lat_lngs(ring)).collect(),
                style: style.clone(),
            }],
            GeoJsonGeometry::MultiPolygon { coordinates } => coordinates
                .iter()
                .map(|polygon| VectorFeature::Polygon {
                    rings: polygon.iter().map(|ring| to_lat_lngs(ring)).collect(),
                    style: style.clone(),
                })
                .collect(),
            GeoJsonGeometry::GeometryCollection { geometries } => geometries
                .iter()
                .flat_map(|g| g.to_vector_features(style))
                .collect(),
        }
    }
}

fn to_lat_lngs(positions: &[Position]) -> Vec<LatLng> {
    positions
        .iter()
        .filter_map(|p| LatLng::from_position(p))
        .collect()
}
