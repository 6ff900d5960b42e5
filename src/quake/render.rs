//! Earthquake to marker rendering.
//!
//! Circle radius scales linearly with magnitude, fill color follows depth,
//! and every marker carries a popup describing the event. Feed text is
//! escaped before it reaches the popup markup.

use crate::{
    core::{
        constants::{
            EARTHQUAKE_LAYER_NAME, MAGNITUDE_RADIUS_SCALE, MARKER_FILL_OPACITY,
            MARKER_STROKE_COLOR, MARKER_STROKE_WEIGHT,
        },
        geo::LatLng,
    },
    data::geojson::GeoJson,
    layers::vector::{PointStyle, VectorFeature, VectorFeatureData, VectorLayer},
    quake::{depth::classify, feature::EarthquakeFeature},
    ui::{html::escape, popup::Popup},
};
use chrono::{TimeZone, Utc};
use log::debug;

/// Identifier of the earthquake overlay
pub const EARTHQUAKE_LAYER_ID: &str = "earthquakes";

/// Display format for event times, e.g. `Tue Nov 14 2023 22:13:20 GMT+0000`
const TIME_FORMAT: &str = "%a %b %d %Y %H:%M:%S GMT%z";

/// A circle marker ready to be handed to a map
#[derive(Debug, Clone, PartialEq)]
pub struct CircleMarkerSpec {
    pub center: LatLng,
    /// Radius in meters
    pub radius: f64,
    pub fill_color: &'static str,
    pub fill_opacity: f64,
    /// Stroke width in pixels
    pub weight: f64,
    /// Stroke color
    pub color: &'static str,
}

impl CircleMarkerSpec {
    pub fn style(&self) -> PointStyle {
        PointStyle {
            fill_color: self.fill_color.to_string(),
            fill_opacity: self.fill_opacity,
            stroke_color: self.color.to_string(),
            stroke_weight: self.weight,
        }
    }

    pub fn to_vector_feature(&self) -> VectorFeature {
        VectorFeature::Circle {
            center: self.center,
            radius: self.radius,
            style: self.style(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedFeature {
    pub marker: CircleMarkerSpec,
    pub popup_html: String,
}

/// Renders one earthquake into its marker and popup
pub fn render(feature: &EarthquakeFeature) -> RenderedFeature {
    let marker = CircleMarkerSpec {
        center: feature.position(),
        radius: feature.magnitude * MAGNITUDE_RADIUS_SCALE,
        fill_color: classify(feature.depth_km),
        fill_opacity: MARKER_FILL_OPACITY,
        weight: MARKER_STROKE_WEIGHT,
        color: MARKER_STROKE_COLOR,
    };

    RenderedFeature {
        marker,
        popup_html: popup_html(feature),
    }
}

/// The time element carries the raw epoch so the page can reformat it in
/// the viewer's time zone; its text is the UTC rendering.
fn popup_html(feature: &EarthquakeFeature) -> String {
    format!(
        "<h3>{}</h3><hr>\
         <p><strong>Time: </strong><time data-epoch-ms=\"{}\">{}</time></p>\
         <p><strong>Magnitude: </strong>{}</p>\
         <p><strong>Depth: </strong>{} km</p>",
        escape(&feature.place),
        feature.time_epoch_ms,
        escape(&format_timestamp(feature.time_epoch_ms)),
        feature.magnitude,
        feature.depth_km,
    )
}

/// Human readable UTC time for an epoch-milliseconds timestamp
pub fn format_timestamp(epoch_ms: i64) -> String {
    match Utc.timestamp_millis_opt(epoch_ms).single() {
        Some(time) => time.format(TIME_FORMAT).to_string(),
        None => "Invalid Date".to_string(),
    }
}

/// Builds the earthquake overlay: one circle marker with a popup per placeable feature
pub fn render_collection(geojson: &GeoJson) -> VectorLayer {
    let mut layer = VectorLayer::new(
        EARTHQUAKE_LAYER_ID.to_string(),
        EARTHQUAKE_LAYER_NAME.to_string(),
    );

    for (index, quake) in EarthquakeFeature::from_collection(geojson).iter().enumerate() {
        let rendered = render(quake);
        let popup = Popup::new(rendered.marker.center, rendered.popup_html);
        layer.add_feature(
            VectorFeatureData::new(
                format!("earthquake-{}", index),
                rendered.marker.to_vector_feature(),
            )
            .with_popup(popup),
        );
    }

    debug!("Rendered {} earthquake markers", layer.len());
    layer
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quake::depth::DEPTH_BANDS;

    fn quake(magnitude: f64, depth_km: f64, place: &str) -> EarthquakeFeature {
        EarthquakeFeature {
            magnitude,
            depth_km,
            longitude: -117.5,
            latitude: 35.7,
            place: place.to_string(),
            time_epoch_ms: 1_700_000_000_000,
        }
    }

    #[test]
    fn test_example_scenario() {
        let rendered = render(&quake(4.5, 12.0, "10km NE of Example"));

        assert_eq!(rendered.marker.radius, 180_000.0);
        assert_eq!(rendered.marker.fill_color, DEPTH_BANDS[1].color);
        assert!(rendered.popup_html.contains("10km NE of Example"));
        assert!(rendered.popup_html.contains("4.5"));
        assert!(rendered.popup_html.contains("12 km"));
    }

    #[test]
    fn test_fixed_marker_style() {
        let marker = render(&quake(2.0, 5.0, "x")).marker;
        assert_eq!(marker.fill_opacity, 0.75);
        assert_eq!(marker.weight, 0.75);
        assert_eq!(marker.color, "black");
        assert_eq!(marker.center, LatLng::new(35.7, -117.5));
    }

    #[test]
    fn test_radius_and_color_follow_feature() {
        for (magnitude, depth) in [(1.0, -2.0), (3.3, 33.0), (7.9, 650.0), (0.0, 90.0)] {
            let rendered = render(&quake(magnitude, depth, "x"));
            assert_eq!(rendered.marker.radius, magnitude * 40000.0);
            assert_eq!(rendered.marker.fill_color, classify(depth));
        }
    }

    #[test]
    fn test_deep_event_uses_terminal_color() {
        for magnitude in [1.0, 5.0, 9.0] {
            let rendered = render(&quake(magnitude, 95.0, "deep"));
            assert_eq!(rendered.marker.fill_color, DEPTH_BANDS[5].color);
        }
    }

    #[test]
    fn test_popup_escapes_place() {
        let rendered = render(&quake(3.0, 10.0, "<script>alert(1)</script> & co"));
        assert!(!rendered.popup_html.contains("<script>"));
        assert!(rendered
            .popup_html
            .contains("&lt;script&gt;alert(1)&lt;/script&gt; &amp; co"));
    }

    #[test]
    fn test_popup_layout() {
        let rendered = render(&quake(4.5, 12.0, "Somewhere"));
        assert_eq!(
            rendered.popup_html,
            "<h3>Somewhere</h3><hr>\
             <p><strong>Time: </strong><time data-epoch-ms=\"1700000000000\">Tue Nov 14 2023 22:13:20 GMT+0000</time></p>\
             <p><strong>Magnitude: </strong>4.5</p>\
             <p><strong>Depth: </strong>12 km</p>"
        );
    }

    #[test]
    fn test_out_of_range_timestamp() {
        assert_eq!(format_timestamp(i64::MAX), "Invalid Date");
    }

    #[test]
    fn test_render_collection() {
        let geojson: GeoJson = r#"{
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "properties": {"mag": 4.5, "place": "A", "time": 0},
                 "geometry": {"type": "Point", "coordinates": [1, 2, 12]}},
                {"type": "Feature", "properties": {"mag": 2.0, "place": "B", "time": 0},
                 "geometry": {"type": "Point", "coordinates": [3, 4, 95]}}
            ]
        }"#
        .parse()
        .unwrap();

        let layer = render_collection(&geojson);
        assert_eq!(layer.len(), 2);

        let first = layer.get_feature("earthquake-0").unwrap();
        match &first.feature {
            VectorFeature::Circle { radius, style, .. } => {
                assert_eq!(*radius, 180_000.0);
                assert_eq!(style.fill_color, DEPTH_BANDS[1].color);
            }
            other => panic!("unexpected feature {:?}", other),
        }
        assert!(first.popup.as_ref().unwrap().content.contains("<h3>A</h3>"));

        assert!(render_collection(&GeoJson::FeatureCollection { features: Vec::new() }).is_empty());
    }
}
