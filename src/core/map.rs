use crate::{
    core::{
        constants::{DEFAULT_CENTER, DEFAULT_ZOOM},
        geo::LatLng,
    },
    layers::{base::LayerTrait, manager::LayerManager, tile::TileLayer, vector::VectorLayer},
    prelude::HashMap,
    traits::MapSurface,
    ui::controls::{Control, ControlManager},
    MapError, Result,
};
use log::debug;

/// Point overlays draw above line overlays regardless of arrival order,
/// so markers stay clickable over boundaries.
const LINE_OVERLAY_Z: i32 = 0;
const POINT_OVERLAY_Z: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKind {
    Points,
    Lines,
}

/// Names listed by the layer switch control
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LayerSwitchEntries {
    pub base_layers: Vec<String>,
    pub overlays: Vec<String>,
}

/// In-memory map view: initial view, selectable base layers,
/// toggleable overlays and attached controls.
pub struct Map {
    center: LatLng,
    zoom: f64,
    base_layers: Vec<TileLayer>,
    active_base: Option<usize>,
    overlays: LayerManager,
    overlay_kinds: HashMap<String, OverlayKind>,
    /// Overlay ids in the order they were added
    overlay_arrivals: Vec<String>,
    controls: ControlManager,
}

impl Map {
    pub fn new(center: LatLng, zoom: f64) -> Self {
        Self {
            center,
            zoom,
            base_layers: Vec::new(),
            active_base: None,
            overlays: LayerManager::new(),
            overlay_kinds: HashMap::default(),
            overlay_arrivals: Vec::new(),
            controls: ControlManager::new(),
        }
    }

    pub fn center(&self) -> LatLng {
        self.center
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn base_layers(&self) -> &[TileLayer] {
        &self.base_layers
    }

    /// The base layer shown on load; the first one when none was marked active
    pub fn active_base_layer(&self) -> Option<&TileLayer> {
        self.base_layers.get(self.active_base.unwrap_or(0))
    }

    /// Switch the displayed base layer by name
    pub fn select_base_layer(&mut self, name: &str) -> Result<()> {
        let index = self
            .base_layers
            .iter()
            .position(|l| l.name() == name)
            .ok_or_else(|| MapError::Layer(format!("no base layer named '{}'", name)))?;
        self.active_base = Some(index);
        Ok(())
    }

    pub fn overlays(&self) -> &LayerManager {
        &self.overlays
    }

    /// Overlay by id, downcast to its vector layer
    pub fn overlay(&self, id: &str) -> Option<&VectorLayer> {
        self.overlays
            .get_layer(id)
            .and_then(|l| l.as_any().downcast_ref::<VectorLayer>())
    }

    pub fn overlay_kind(&self, id: &str) -> Option<OverlayKind> {
        self.overlay_kinds.get(id).copied()
    }

    /// Overlay ids in arrival order
    pub fn overlay_arrivals(&self) -> &[String] {
        &self.overlay_arrivals
    }

    /// Toggle an overlay the way the layer switch checkbox does
    pub fn set_overlay_visible(&mut self, id: &str, visible: bool) -> Result<()> {
        self.overlays
            .with_layer_mut(id, |l| l.set_visible(visible))
            .ok_or_else(|| MapError::Layer(format!("no overlay with id '{}'", id)).into())
    }

    pub fn controls(&self) -> &ControlManager {
        &self.controls
    }

    /// Overlay ids as the layer switch lists them: point overlays first,
    /// then line overlays, each group in arrival order. Drawing order is
    /// [`LayerManager::render_order`] instead.
    pub fn layer_switch_order(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.overlay_arrivals.iter().map(String::as_str).collect();
        ids.sort_by_key(|id| match self.overlay_kind(id) {
            Some(OverlayKind::Points) => 0,
            _ => 1,
        });
        ids
    }

    pub fn layer_switch_entries(&self) -> LayerSwitchEntries {
        LayerSwitchEntries {
            base_layers: self.base_layers.iter().map(|l| l.name().to_string()).collect(),
            overlays: self
                .layer_switch_order()
                .into_iter()
                .filter_map(|id| self.overlays.get_layer(id))
                .map(|l| l.name().to_string())
                .collect(),
        }
    }

    fn add_overlay(&mut self, mut layer: VectorLayer, kind: OverlayKind) -> Result<()> {
        layer.set_z_index(match kind {
            OverlayKind::Points => POINT_OVERLAY_Z,
            OverlayKind::Lines => LINE_OVERLAY_Z,
        });
        let id = layer.id().to_string();
        debug!(
            "Adding {:?} overlay '{}' with {} features",
            kind,
            id,
            layer.len()
        );
        self.overlays.add_layer(Box::new(layer))?;
        self.overlay_kinds.insert(id.clone(), kind);
        self.overlay_arrivals.push(id);
        Ok(())
    }
}

impl Default for Map {
    fn default() -> Self {
        Self::new(LatLng::new(DEFAULT_CENTER.0, DEFAULT_CENTER.1), DEFAULT_ZOOM)
    }
}

impl MapSurface for Map {
    fn set_view(&mut self, center: LatLng, zoom: f64) {
        self.center = center;
        self.zoom = zoom;
    }

    fn add_base_layer(&mut self, layer: TileLayer, active: bool) -> Result<()> {
        if self.base_layers.iter().any(|l| l.id() == layer.id()) {
            return Err(MapError::Layer(format!("base layer '{}' already exists", layer.id())).into());
        }
        self.base_layers.push(layer);
        if active {
            self.active_base = Some(self.base_layers.len() - 1);
        }
        Ok(())
    }

    fn add_point_layer(&mut self, layer: VectorLayer) -> Result<()> {
        self.add_overlay(layer, OverlayKind::Points)
    }

    fn add_line_layer(&mut self, layer: VectorLayer) -> Result<()> {
        self.add_overlay(layer, OverlayKind::Lines)
    }

    fn add_control(&mut self, control: Control) -> Result<()> {
        self.controls.add(control)
    }
}
