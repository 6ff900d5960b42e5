use crate::{
    core::geo::LatLng,
    data::geojson::{GeoJson, GeoJsonFeature, GeoJsonGeometry},
};
use log::warn;
use serde::Serialize;

/// One earthquake record, as read from the feed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EarthquakeFeature {
    pub magnitude: f64,
    pub depth_km: f64,
    pub longitude: f64,
    pub latitude: f64,
    pub place: String,
    pub time_epoch_ms: i64,
}

impl EarthquakeFeature {
    /// Reads `properties.mag`, `properties.place`, `properties.time` and the
    /// `[lon, lat, depth]` point geometry.
    ///
    /// Returns `None` without a point geometry. Absent properties are not
    /// validated: magnitude and time default to zero, place to empty, and a
    /// two-value position yields depth zero.
    pub fn from_geojson(feature: &GeoJsonFeature) -> Option<Self> {
        let coordinates = match feature.geometry.as_ref()? {
            GeoJsonGeometry::Point { coordinates } => coordinates,
            _ => return None,
        };
        let position = LatLng::from_position(coordinates)?;

        Some(Self {
            magnitude: feature.property_f64("mag").unwrap_or(0.0),
            depth_km: coordinates.get(2).copied().unwrap_or(0.0),
            longitude: position.lng,
            latitude: position.lat,
            place: feature.property_str("place").unwrap_or_default().to_string(),
            time_epoch_ms: feature.property_i64("time").unwrap_or(0),
        })
    }

    /// Every placeable earthquake in the collection, in feed order
    pub fn from_collection(geojson: &GeoJson) -> Vec<Self> {
        geojson
            .features()
            .iter()
            .filter_map(|feature| {
                let quake = Self::from_geojson(feature);
                if quake.is_none() {
                    warn!(
                        "Skipping earthquake {} without a point geometry",
                        feature
                            .id
                            .as_ref()
                            .map(|id| id.to_string())
                            .unwrap_or_else(|| "<no id>".to_string())
                    );
                }
                quake
            })
            .collect()
    }

    pub fn position(&self) -> LatLng {
        LatLng::new(self.latitude, self.longitude)
    }
}
