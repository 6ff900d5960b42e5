use crate::core::geo::LatLng;
use serde::Serialize;

/// Popup bound to a map feature
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Popup {
    pub position: LatLng,
    /// Trusted HTML; every untrusted fragment has already been escaped
    pub content: String,
}

impl Popup {
    pub fn new(position: LatLng, content: String) -> Self {
        Self { position, content }
    }
}
