use crate::{
    quake::depth::{classify, DEPTH_BANDS},
    ui::html::escape,
};
use serde::Serialize;

pub const LEGEND_TITLE: &str = "Depth (km)";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    /// Swatch background color
    pub color: &'static str,
    /// Depth range label, e.g. `10–30` or `90+`
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub title: String,
    pub entries: Vec<LegendEntry>,
}

/// Builds the depth legend: one row per band, swatch colored by
/// classifying one kilometer past the band's lower bound.
pub fn build_legend() -> Legend {
    let entries = DEPTH_BANDS
        .iter()
        .enumerate()
        .map(|(i, band)| {
            let label = match DEPTH_BANDS.get(i + 1) {
                Some(next) => format!("{}\u{2013}{}", band.lower_bound_km, next.lower_bound_km),
                None => format!("{}+", band.lower_bound_km),
            };
            LegendEntry {
                color: classify(band.lower_bound_km + 1.0),
                label,
            }
        })
        .collect();

    Legend {
        title: LEGEND_TITLE.to_string(),
        entries,
    }
}

impl Legend {
    /// HTML fragment placed inside the legend control
    pub fn to_html(&self) -> String {
        let mut html = format!("<h2>{}</h2>", escape(&self.title));
        for entry in &self.entries {
            html.push_str(&format!(
                "<i style=\"background:{}\"></i>{}<br>",
                escape(entry.color),
                escape(&entry.label)
            ));
        }
        html
    }
}
