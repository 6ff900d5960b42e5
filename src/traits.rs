//! Shared trait abstractions
//!
//! `MapSurface` is the seam between map assembly and whatever actually draws
//! the map. `LayerOperations` is the common interface of every layer kind.

use crate::{
    core::geo::LatLng,
    layers::{base::LayerType, tile::TileLayer, vector::VectorLayer},
    ui::controls::Control,
    Result,
};

/// The declarative configuration surface of a map view.
///
/// Assembly code only ever talks to a map through this trait, so the
/// classifier, renderer and legend stay testable without a real widget.
pub trait MapSurface {
    /// Set the initial center and zoom
    fn set_view(&mut self, center: LatLng, zoom: f64);

    /// Register a selectable base imagery layer; `active` marks the one shown on load
    fn add_base_layer(&mut self, layer: TileLayer, active: bool) -> Result<()>;

    /// Add an overlay made of point features
    fn add_point_layer(&mut self, layer: VectorLayer) -> Result<()>;

    /// Add an overlay made of line or polygon features
    fn add_line_layer(&mut self, layer: VectorLayer) -> Result<()>;

    /// Attach a control widget
    fn add_control(&mut self, control: Control) -> Result<()>;
}

/// Trait for layer-like objects
pub trait LayerOperations: Send + Sync {
    /// Get layer ID
    fn id(&self) -> &str;

    /// Get layer name
    fn name(&self) -> &str;

    /// Get layer type
    fn layer_type(&self) -> LayerType;

    /// Check if layer is visible
    fn is_visible(&self) -> bool;

    /// Set layer visibility
    fn set_visible(&mut self, visible: bool);

    /// Get layer opacity (0.0 to 1.0)
    fn opacity(&self) -> f32;

    /// Get layer z-index for ordering
    fn z_index(&self) -> i32;

    /// Set layer z-index
    fn set_z_index(&mut self, z_index: i32);

    /// Get layer options
    fn options(&self) -> serde_json::Value;

    /// Dynamic casting support
    fn as_any(&self) -> &dyn std::any::Any;
}
