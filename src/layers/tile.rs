use crate::{
    core::constants::{MAPBOX_ATTRIBUTION, MAPBOX_MAX_ZOOM, TILE_SIZE},
    layers::base::{LayerProperties, LayerTrait, LayerType},
    tiles::source::{MapboxStyleSource, TileSource},
};

/// Configuration for a tile layer
#[derive(Debug, Clone, PartialEq)]
pub struct TileLayerOptions {
    /// Attribution text (trusted HTML)
    pub attribution: String,
    /// Tile size in pixels
    pub tile_size: u32,
    /// Maximum zoom level for this tile source
    pub max_zoom: u8,
    /// Minimum zoom level for this tile source
    pub min_zoom: u8,
}

impl Default for TileLayerOptions {
    fn default() -> Self {
        Self {
            attribution: MAPBOX_ATTRIBUTION.to_string(),
            tile_size: TILE_SIZE,
            max_zoom: MAPBOX_MAX_ZOOM,
            min_zoom: 0,
        }
    }
}

/// A base imagery layer that displays raster tiles from a tile server
pub struct TileLayer {
    properties: LayerProperties,
    options: TileLayerOptions,
    tile_source: Box<dyn TileSource>,
}

impl TileLayer {
    pub fn new(id: String, name: String, tile_source: Box<dyn TileSource>) -> Self {
        Self {
            properties: LayerProperties::new(id, name, LayerType::Tile),
            options: TileLayerOptions::default(),
            tile_source,
        }
    }

    /// Tile layer backed by a Mapbox hosted style
    pub fn mapbox(id: String, name: String, style_id: &str, access_token: &str) -> Self {
        Self::new(
            id,
            name,
            Box::new(MapboxStyleSource::new(style_id, access_token)),
        )
    }

    /// URL template with `{z}/{x}/{y}` placeholders left in place
    pub fn url_template(&self) -> String {
        self.tile_source.url_template()
    }
}

impl LayerTrait for TileLayer {
    crate::impl_layer_trait!(properties);

    fn options(&self) -> serde_json::Value {
        serde_json::json!({
            "url": self.url_template(),
            "attribution": self.options.attribution,
            "tileSize": self.options.tile_size,
            "maxZoom": self.options.max_zoom,
            "minZoom": self.options.min_zoom,
            "opacity": self.properties.opacity,
        })
    }
}
