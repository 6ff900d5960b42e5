//! Composes the earthquake map onto a [`MapSurface`].
//!
//! Base layers and controls are attached synchronously. The two feeds are
//! fetched concurrently and each overlay is added as soon as its response
//! arrives; a feed that fails simply leaves its overlay out.

use crate::{
    core::{
        config::QuakeMapConfig,
        constants::{PLATE_STROKE_COLOR, PLATE_STROKE_WEIGHT, TECTONIC_PLATES_LAYER_NAME},
    },
    data::{feed::FeedSource, geojson::GeoJson},
    layers::{
        tile::TileLayer,
        vector::{LineStyle, VectorFeatureData, VectorLayer},
    },
    quake::{legend::build_legend, render::render_collection},
    traits::MapSurface,
    ui::controls::{Control, ControlPosition},
    Result,
};
use futures::stream::{FuturesUnordered, StreamExt};
use log::{debug, info, warn};

/// Identifier of the plate boundary overlay
pub const TECTONIC_PLATES_LAYER_ID: &str = "tectonic-plates";

/// `(id, display name, Mapbox style)` of each selectable base layer.
/// The first one is shown on load.
pub const BASE_LAYER_STYLES: [(&str, &str, &str); 3] = [
    ("satellite", "Satellite Map", "satellite-v9"),
    ("grayscale", "Grayscale Map", "light-v10"),
    ("outdoors", "Outdoors Map", "outdoors-v11"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedKind {
    Earthquakes,
    TectonicPlates,
}

/// Outcome of the two feed fetches, in arrival order
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Feeds whose overlay was added
    pub loaded: Vec<FeedKind>,
    /// Feeds that failed, with the reason
    pub failed: Vec<(FeedKind, String)>,
}

impl LoadReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty() && self.loaded.len() == 2
    }

    pub fn is_loaded(&self, kind: FeedKind) -> bool {
        self.loaded.contains(&kind)
    }
}

pub struct MapAssembler {
    config: QuakeMapConfig,
}

impl MapAssembler {
    pub fn new(config: QuakeMapConfig) -> Self {
        Self { config }
    }

    /// The three Mapbox base layers, all keyed by the configured access token
    pub fn base_layers(&self) -> Vec<TileLayer> {
        BASE_LAYER_STYLES
            .iter()
            .map(|(id, name, style)| {
                TileLayer::mapbox(id.to_string(), name.to_string(), style, &self.config.api_key)
            })
            .collect()
    }

    /// Sets the view and attaches base layers, the layer switch and the legend
    pub fn initialize<S: MapSurface + ?Sized>(&self, surface: &mut S) -> Result<()> {
        surface.set_view(self.config.center, self.config.zoom);

        for (index, layer) in self.base_layers().into_iter().enumerate() {
            surface.add_base_layer(layer, index == 0)?;
        }

        surface.add_control(Control::layer_switch(false))?;
        surface.add_control(Control::legend(build_legend(), ControlPosition::BottomRight))?;
        debug!("Map initialized at {:?} zoom {}", self.config.center, self.config.zoom);
        Ok(())
    }

    /// Earthquake overlay for a fetched feed
    pub fn earthquake_overlay(&self, geojson: &GeoJson) -> VectorLayer {
        render_collection(geojson)
    }

    /// Plate boundary overlay: geometry untouched, fixed orange stroke
    pub fn plate_overlay(&self, geojson: &GeoJson) -> VectorLayer {
        let style = LineStyle {
            color: PLATE_STROKE_COLOR.to_string(),
            weight: PLATE_STROKE_WEIGHT,
            opacity: 1.0,
        };
        let mut layer = VectorLayer::new(
            TECTONIC_PLATES_LAYER_ID.to_string(),
            TECTONIC_PLATES_LAYER_NAME.to_string(),
        );

        let geometries = geojson
            .features()
            .iter()
            .filter_map(|f| f.geometry.as_ref());
        for (index, geometry) in geometries.enumerate() {
            for (part, feature) in geometry.to_vector_features(&style).into_iter().enumerate() {
                layer.add_feature(VectorFeatureData::new(
                    format!("plate-{}-{}", index, part),
                    feature,
                ));
            }
        }

        debug!("Built plate overlay with {} boundaries", layer.len());
        layer
    }

    /// Fetches both feeds concurrently and adds each overlay as it arrives
    pub async fn load_overlays<S, F>(&self, surface: &mut S, source: &F) -> LoadReport
    where
        S: MapSurface + ?Sized,
        F: FeedSource + ?Sized,
    {
        self.load_overlays_with(surface, source, |_, _| {}).await
    }

    /// Like [`load_overlays`](Self::load_overlays), calling `on_arrival`
    /// after each feed settles with the surface and the report so far.
    /// The first overlay can be shown while the second is still in flight.
    pub async fn load_overlays_with<S, F, H>(
        &self,
        surface: &mut S,
        source: &F,
        mut on_arrival: H,
    ) -> LoadReport
    where
        S: MapSurface + ?Sized,
        F: FeedSource + ?Sized,
        H: FnMut(&S, &LoadReport),
    {
        let mut pending = FuturesUnordered::new();
        for (kind, url) in [
            (FeedKind::Earthquakes, self.config.earthquake_url.as_str()),
            (FeedKind::TectonicPlates, self.config.plates_url.as_str()),
        ] {
            pending.push(async move { (kind, url, source.fetch(url).await) });
        }

        let mut report = LoadReport::default();
        while let Some((kind, url, result)) = pending.next().await {
            let applied = result.and_then(|geojson| self.apply_feed(surface, kind, &geojson));
            match applied {
                Ok(()) => {
                    info!("{:?} overlay added from {}", kind, url);
                    report.loaded.push(kind);
                }
                Err(e) => {
                    warn!("{:?} overlay unavailable ({}): {}", kind, url, e);
                    report.failed.push((kind, e.to_string()));
                }
            }
            on_arrival(&*surface, &report);
        }
        report
    }

    /// Full assembly: initialize, then load both overlays
    pub async fn assemble<S, F>(&self, surface: &mut S, source: &F) -> Result<LoadReport>
    where
        S: MapSurface + ?Sized,
        F: FeedSource + ?Sized,
    {
        self.initialize(surface)?;
        Ok(self.load_overlays(surface, source).await)
    }

    fn apply_feed<S: MapSurface + ?Sized>(
        &self,
        surface: &mut S,
        kind: FeedKind,
        geojson: &GeoJson,
    ) -> Result<()> {
        match kind {
            FeedKind::Earthquakes => surface.add_point_layer(self.earthquake_overlay(geojson)),
            FeedKind::TectonicPlates => surface.add_line_layer(self.plate_overlay(geojson)),
        }
    }
}
