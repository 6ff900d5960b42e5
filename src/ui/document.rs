//! Standalone Leaflet page for an assembled [`Map`].
//!
//! The page loads Leaflet from a CDN, embeds the map state as JSON and
//! rebuilds base layers, overlays and controls from it in the browser.
//! Popup times are rewritten in the viewer's time zone when a popup opens.

use crate::{
    core::map::Map,
    layers::{base::LayerTrait, vector::VectorFeatureData},
    ui::{controls::Control, html::escape},
    Result,
};
use serde::Serialize;

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{{TITLE}}</title>
<link rel="stylesheet" href="{{LEAFLET_CSS}}">
<style>
html, body, #map { height: 100%; width: 100%; margin: 0; padding: 0; }
.legend { background: white; padding: 6px 10px; line-height: 18px; color: #555; border-radius: 5px; box-shadow: 0 0 15px rgba(0, 0, 0, 0.2); }
.legend h2 { font-size: 14px; margin: 0 0 6px; }
.legend i { width: 18px; height: 18px; float: left; margin-right: 8px; opacity: 0.9; }
</style>
</head>
<body>
<div id="map"></div>
<script type="application/json" id="map-state">{{STATE}}</script>
<script src="{{LEAFLET_JS}}"></script>
<script>
{{SCRIPT}}
</script>
</body>
</html>
"#;

const MAP_SCRIPT: &str = r#"(function () {
  var state = JSON.parse(document.getElementById("map-state").textContent);
  var toLatLng = function (p) { return [p.lat, p.lng]; };
  var initial = [];

  var baseMaps = {};
  state.baseLayers.forEach(function (b) {
    var layer = L.tileLayer(b.url, b.options);
    baseMaps[b.name] = layer;
    if (b.active) { initial.push(layer); }
  });

  var groups = {};
  state.overlays.forEach(function (o) {
    var group = L.layerGroup();
    o.features.forEach(function (f) {
      var g = f.feature;
      var shape = null;
      if (g.kind === "circle") {
        shape = L.circle(toLatLng(g.center), Object.assign({ radius: g.radius }, g.style));
      } else if (g.kind === "lineString") {
        shape = L.polyline(g.points.map(toLatLng), g.style);
      } else if (g.kind === "polygon") {
        shape = L.polygon(g.rings.map(function (r) { return r.map(toLatLng); }), g.style);
      }
      if (shape === null) { return; }
      if (f.popup) { shape.bindPopup(f.popup.content); }
      shape.addTo(group);
    });
    groups[o.id] = { name: o.name, layer: group };
    if (o.visible) { initial.push(group); }
  });

  var overlayMaps = {};
  state.layerSwitchOrder.forEach(function (id) {
    overlayMaps[groups[id].name] = groups[id].layer;
  });

  var map = L.map("map", { center: state.center, zoom: state.zoom, layers: initial });

  map.on("popupopen", function (e) {
    e.popup.getElement().querySelectorAll("time[data-epoch-ms]").forEach(function (t) {
      t.textContent = new Date(Number(t.getAttribute("data-epoch-ms"))).toString();
    });
  });

  state.controls.forEach(function (c) {
    if (c.kind === "layerSwitch") {
      L.control.layers(baseMaps, overlayMaps, { collapsed: c.collapsed, position: c.position }).addTo(map);
    } else if (c.kind === "legend") {
      var legend = L.control({ position: c.position });
      legend.onAdd = function () {
        var div = L.DomUtil.create("div", "legend");
        div.innerHTML = state.legendHtml;
        return div;
      };
      legend.addTo(map);
    }
  });
})();"#;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BaseLayerState {
    name: String,
    url: String,
    options: serde_json::Value,
    active: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OverlayState<'a> {
    id: &'a str,
    /// Leaflet's layer control inserts names as HTML
    name: String,
    visible: bool,
    features: &'a [VectorFeatureData],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DocumentState<'a> {
    center: [f64; 2],
    zoom: f64,
    base_layers: Vec<BaseLayerState>,
    /// Overlays in drawing order
    overlays: Vec<OverlayState<'a>>,
    /// Overlay ids in the order the layer control lists them
    layer_switch_order: Vec<&'a str>,
    controls: &'a [Control],
    #[serde(skip_serializing_if = "Option::is_none")]
    legend_html: Option<String>,
}

fn document_state(map: &Map) -> DocumentState<'_> {
    let active_id = map.active_base_layer().map(|l| l.id().to_string());

    let base_layers = map
        .base_layers()
        .iter()
        .map(|layer| {
            let mut options = layer.options();
            if let Some(fields) = options.as_object_mut() {
                fields.remove("url");
            }
            BaseLayerState {
                name: escape(layer.name()),
                url: layer.url_template(),
                options,
                active: active_id.as_deref() == Some(layer.id()),
            }
        })
        .collect();

    let overlays = map
        .overlays()
        .render_order()
        .iter()
        .filter_map(|id| map.overlay(id))
        .map(|layer| OverlayState {
            id: layer.id(),
            name: escape(layer.name()),
            visible: layer.is_visible(),
            features: layer.features(),
        })
        .collect();

    DocumentState {
        center: [map.center().lat, map.center().lng],
        zoom: map.zoom(),
        base_layers,
        overlays,
        layer_switch_order: map.layer_switch_order(),
        controls: map.controls().controls(),
        legend_html: map.controls().legend().map(|legend| legend.to_html()),
    }
}

/// JSON for a `<script>` element: `</` may not appear inside it
fn script_safe_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}

/// Renders the assembled map as a self-contained HTML page
pub fn render_document(map: &Map, title: &str) -> Result<String> {
    let state = script_safe_json(&document_state(map))?;

    Ok(PAGE_TEMPLATE
        .replace("{{TITLE}}", &escape(title))
        .replace("{{LEAFLET_CSS}}", LEAFLET_CSS)
        .replace("{{LEAFLET_JS}}", LEAFLET_JS)
        .replace("{{SCRIPT}}", MAP_SCRIPT)
        .replace("{{STATE}}", &state))
}
