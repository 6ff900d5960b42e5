use crate::{
    core::geo::LatLng,
    layers::base::{LayerProperties, LayerTrait, LayerType},
    ui::popup::Popup,
};
use serde::Serialize;

/// Style for circle markers
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PointStyle {
    /// Fill color (any CSS color)
    pub fill_color: String,
    /// Fill opacity (0.0 to 1.0)
    pub fill_opacity: f64,
    /// Border color
    #[serde(rename = "color")]
    pub stroke_color: String,
    /// Border width in pixels
    #[serde(rename = "weight")]
    pub stroke_weight: f64,
}

impl Default for PointStyle {
    fn default() -> Self {
        Self {
            fill_color: "#3388ff".to_string(),
            fill_opacity: 0.2,
            stroke_color: "#3388ff".to_string(),
            stroke_weight: 3.0,
        }
    }
}

/// Style for line and polygon outlines
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineStyle {
    /// Line color
    pub color: String,
    /// Line width in pixels
    pub weight: f64,
    /// Opacity (0.0 to 1.0)
    pub opacity: f64,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: "#3388ff".to_string(),
            weight: 3.0,
            opacity: 1.0,
        }
    }
}

/// Different types of vector features
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum VectorFeature {
    /// A circle with a radius in meters, scaling with the map
    Circle {
        center: LatLng,
        radius: f64,
        style: PointStyle,
    },
    /// A line string (path)
    LineString {
        points: Vec<LatLng>,
        style: LineStyle,
    },
    /// A polygon; the first ring is the exterior, the rest are holes
    Polygon {
        rings: Vec<Vec<LatLng>>,
        style: LineStyle,
    },
}

/// A feature with its identifier and optional popup
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VectorFeatureData {
    /// Unique identifier within the layer
    pub id: String,
    /// The geometric feature
    pub feature: VectorFeature,
    /// Popup opened when the feature is clicked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub popup: Option<Popup>,
}

impl VectorFeatureData {
    pub fn new(id: String, feature: VectorFeature) -> Self {
        Self {
            id,
            feature,
            popup: None,
        }
    }

    pub fn with_popup(mut self, popup: Popup) -> Self {
        self.popup = Some(popup);
        self
    }
}

/// Vector layer for displaying geometric features
pub struct VectorLayer {
    /// Base layer properties
    properties: LayerProperties,
    /// Features in insertion order
    features: Vec<VectorFeatureData>,
}

impl VectorLayer {
    /// Create a new vector layer
    pub fn new(id: String, name: String) -> Self {
        Self {
            properties: LayerProperties::new(id, name, LayerType::Vector),
            features: Vec::new(),
        }
    }

    /// Add a feature to the layer
    pub fn add_feature(&mut self, feature: VectorFeatureData) {
        self.features.push(feature);
    }

    /// Get a feature by ID
    pub fn get_feature(&self, id: &str) -> Option<&VectorFeatureData> {
        self.features.iter().find(|f| f.id == id)
    }

    /// Get all features
    pub fn features(&self) -> &[VectorFeatureData] {
        &self.features
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

impl LayerTrait for VectorLayer {
    crate::impl_layer_trait!(properties);

    fn options(&self) -> serde_json::Value {
        serde_json::json!({
            "id": self.properties.id,
            "name": self.properties.name,
            "z_index": self.properties.z_index,
            "opacity": self.properties.opacity,
            "visible": self.properties.visible,
            "features": self.features.len(),
        })
    }
}
