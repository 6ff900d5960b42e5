//! Earthquake specific pieces: depth classification, marker rendering,
//! the depth legend and map assembly.

pub mod assembler;
pub mod depth;
pub mod feature;
pub mod legend;
pub mod render;

pub use assembler::{FeedKind, LoadReport, MapAssembler};
pub use depth::{classify, DepthColorBand, DEPTH_BANDS};
pub use feature::EarthquakeFeature;
pub use legend::{build_legend, Legend, LegendEntry};
pub use render::{render, CircleMarkerSpec, RenderedFeature};
