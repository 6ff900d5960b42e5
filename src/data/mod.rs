pub mod feed;
pub mod geojson;

pub use feed::{FeedSource, HttpFeedSource, StaticFeedSource};
pub use geojson::{GeoJson, GeoJsonFeature, GeoJsonGeometry};
