//! Engine-wide constants for the earthquake map.
//! Feed endpoints, the initial view and the fixed marker styling live here.

/// USGS summary feed of every earthquake recorded during the past week.
pub const EARTHQUAKE_FEED_URL: &str =
    "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/all_week.geojson";

/// PB2002 plate boundary model, published as GeoJSON.
pub const TECTONIC_PLATES_URL: &str =
    "https://raw.githubusercontent.com/fraxen/tectonicplates/master/GeoJSON/PB2002_boundaries.json";

/// Initial map center `[lat, lng]`.
pub const DEFAULT_CENTER: (f64, f64) = (42.713956, -89.070507);

/// Initial zoom level.
pub const DEFAULT_ZOOM: f64 = 3.5;

/// Circle radius in meters per unit of magnitude.
pub const MAGNITUDE_RADIUS_SCALE: f64 = 40_000.0;

pub const MARKER_FILL_OPACITY: f64 = 0.75;
pub const MARKER_STROKE_WEIGHT: f64 = 0.75;
pub const MARKER_STROKE_COLOR: &str = "black";

pub const PLATE_STROKE_COLOR: &str = "orange";
pub const PLATE_STROKE_WEIGHT: f64 = 2.0;

/// Mapbox static styles endpoint; `{id}` is the style, `{accessToken}` the API key.
pub const MAPBOX_TILE_URL: &str =
    "https://api.mapbox.com/styles/v1/mapbox/{id}/tiles/{z}/{x}/{y}?access_token={accessToken}";

pub const MAPBOX_ATTRIBUTION: &str = "Map data &copy; <a href=\"https://www.openstreetmap.org/\">OpenStreetMap</a> contributors, <a href=\"https://creativecommons.org/licenses/by-sa/2.0/\">CC-BY-SA</a>, Imagery \u{a9} <a href=\"https://www.mapbox.com/\">Mapbox</a>";

/// Highest zoom served by the Mapbox styles.
pub const MAPBOX_MAX_ZOOM: u8 = 18;

/// Default square tile size in pixels.
pub const TILE_SIZE: u32 = 256;

pub const EARTHQUAKE_LAYER_NAME: &str = "Earthquakes";
pub const TECTONIC_PLATES_LAYER_NAME: &str = "Tectonic Plates";
