use crate::{quake::legend::Legend, MapError, Result};
use serde::Serialize;

/// Corner of the map a control is anchored to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlPosition {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Default for ControlPosition {
    fn default() -> Self {
        Self::TopRight
    }
}

/// Widgets drawn on top of the map
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Control {
    /// Radio list of base layers plus checkboxes for overlays
    LayerSwitch {
        collapsed: bool,
        position: ControlPosition,
    },
    /// Static legend box
    Legend {
        legend: Legend,
        position: ControlPosition,
    },
}

impl Control {
    pub fn layer_switch(collapsed: bool) -> Self {
        Control::LayerSwitch {
            collapsed,
            position: ControlPosition::TopRight,
        }
    }

    pub fn legend(legend: Legend, position: ControlPosition) -> Self {
        Control::Legend { legend, position }
    }

    pub fn position(&self) -> ControlPosition {
        match self {
            Control::LayerSwitch { position, .. } | Control::Legend { position, .. } => *position,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Control::LayerSwitch { .. } => "layer switch",
            Control::Legend { .. } => "legend",
        }
    }
}

/// Holds the controls attached to a map, at most one of each kind
#[derive(Debug, Default)]
pub struct ControlManager {
    controls: Vec<Control>,
}

impl ControlManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, control: Control) -> Result<()> {
        if self
            .controls
            .iter()
            .any(|c| std::mem::discriminant(c) == std::mem::discriminant(&control))
        {
            return Err(MapError::Layer(format!("{} control already attached", control.kind())).into());
        }
        self.controls.push(control);
        Ok(())
    }

    pub fn controls(&self) -> &[Control] {
        &self.controls
    }

    pub fn layer_switch(&self) -> Option<&Control> {
        self.controls
            .iter()
            .find(|c| matches!(c, Control::LayerSwitch { .. }))
    }

    pub fn legend(&self) -> Option<&Legend> {
        self.controls.iter().find_map(|c| match c {
            Control::Legend { legend, .. } => Some(legend),
            _ => None,
        })
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }
}
