//! Depth to color classification.
//!
//! Six fixed bands partition the real line:
//! (−∞,10], (10,30], (30,50], (50,70], (70,90], (90,+∞).
//! A depth exactly on a boundary belongs to the shallower band.

/// One row of the depth color table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthColorBand {
    /// Lower bound shown in the legend; the first band is open below
    pub lower_bound_km: f64,
    /// CSS hex color
    pub color: &'static str,
}

/// The band table, ordered by depth. Each band ends where the next one starts.
pub const DEPTH_BANDS: [DepthColorBand; 6] = [
    DepthColorBand {
        lower_bound_km: -10.0,
        color: "#AAFC2C",
    },
    DepthColorBand {
        lower_bound_km: 10.0,
        color: "#82AD2A",
    },
    DepthColorBand {
        lower_bound_km: 30.0,
        color: "#FFFF00",
    },
    DepthColorBand {
        lower_bound_km: 50.0,
        color: "#FFD700",
    },
    DepthColorBand {
        lower_bound_km: 70.0,
        color: "#FFA500",
    },
    DepthColorBand {
        lower_bound_km: 90.0,
        color: "#FF0000",
    },
];

impl DepthColorBand {
    /// Inclusive upper bound of the band at `index`, `None` for the terminal band
    pub fn upper_bound_km(index: usize) -> Option<f64> {
        DEPTH_BANDS.get(index + 1).map(|next| next.lower_bound_km)
    }
}

/// Index into [`DEPTH_BANDS`] of the band containing `depth_km`.
///
/// Scans the bands in ascending order and stops at the first whose upper
/// bound is `>= depth_km`. Anything deeper than the last boundary, and NaN,
/// lands in the terminal band.
pub fn band_index(depth_km: f64) -> usize {
    (0..DEPTH_BANDS.len())
        .find(|&i| match DepthColorBand::upper_bound_km(i) {
            Some(upper) => depth_km <= upper,
            None => true,
        })
        .unwrap_or(DEPTH_BANDS.len() - 1)
}

/// Color for an earthquake at `depth_km` kilometers
pub fn classify(depth_km: f64) -> &'static str {
    DEPTH_BANDS[band_index(depth_km)].color
}
