use crate::core::constants::MAPBOX_TILE_URL;

/// Anything that can describe where a base layer's raster tiles live.
pub trait TileSource: Send + Sync {
    /// URL template in Leaflet placeholder syntax, with every
    /// non-coordinate placeholder already substituted.
    fn url_template(&self) -> String;
}

/// A Mapbox hosted style (`satellite-v9`, `light-v10`, ...) served as raster tiles.
#[derive(Debug, Clone, PartialEq)]
pub struct MapboxStyleSource {
    style_id: String,
    access_token: String,
}

impl MapboxStyleSource {
    pub fn new(style_id: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            style_id: style_id.into(),
            access_token: access_token.into(),
        }
    }
}

impl TileSource for MapboxStyleSource {
    fn url_template(&self) -> String {
        MAPBOX_TILE_URL
            .replace("{id}", &self.style_id)
            .replace("{accessToken}", &self.access_token)
    }
}
