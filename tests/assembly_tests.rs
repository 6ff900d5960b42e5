use quakemap::{
    core::map::OverlayKind,
    layers::vector::VectorFeature,
    quake::{
        assembler::{FeedKind, TECTONIC_PLATES_LAYER_ID},
        render::EARTHQUAKE_LAYER_ID,
    },
    Control, LayerTrait, Map, MapAssembler, QuakeMapConfig, StaticFeedSource, DEPTH_BANDS,
};
use std::time::Duration;

const QUAKES_URL: &str = "memory://quakes";
const PLATES_URL: &str = "memory://plates";

const QUAKES: &str = r#"{
    "type": "FeatureCollection",
    "metadata": {"title": "USGS All Earthquakes, Past Week"},
    "features": [
        {"type": "Feature", "id": "ak1",
         "properties": {"mag": 4.5, "place": "10km NE of Example", "time": 1700000000000},
         "geometry": {"type": "Point", "coordinates": [-117.5, 35.7, 12.0]}},
        {"type": "Feature", "id": "us2",
         "properties": {"mag": 6.1, "place": "Deep Trench", "time": 1700000100000},
         "geometry": {"type": "Point", "coordinates": [142.1, 38.3, 95.0]}},
        {"type": "Feature", "id": "nc3",
         "properties": {"mag": 1.2, "place": "Shallow", "time": 1700000200000},
         "geometry": {"type": "Point", "coordinates": [-122.8, 38.8, -1.5]}}
    ]
}"#;

const PLATES: &str = r#"{
    "type": "FeatureCollection",
    "features": [
        {"type": "Feature", "properties": {"Name": "AF-AN"},
         "geometry": {"type": "LineString", "coordinates": [[-0.4, -54.8], [0.0, -54.6], [1.2, -54.3]]}},
        {"type": "Feature", "properties": {"Name": "AN-AU"},
         "geometry": {"type": "LineString", "coordinates": [[139.0, -65.0], [140.5, -64.2]]}}
    ]
}"#;

const EMPTY: &str = r#"{"type": "FeatureCollection", "features": []}"#;

fn assembler() -> MapAssembler {
    MapAssembler::new(
        QuakeMapConfig::new("pk.test")
            .with_earthquake_url(QUAKES_URL)
            .with_plates_url(PLATES_URL),
    )
}

fn assert_base_and_controls(map: &Map) {
    let entries = map.layer_switch_entries();
    assert_eq!(
        entries.base_layers,
        ["Satellite Map", "Grayscale Map", "Outdoors Map"]
    );
    assert_eq!(map.active_base_layer().unwrap().name(), "Satellite Map");
    assert!(matches!(
        map.controls().layer_switch(),
        Some(Control::LayerSwitch { collapsed: false, .. })
    ));
    assert_eq!(map.controls().legend().unwrap().entries.len(), 6);
}

#[tokio::test]
async fn test_full_assembly() {
    let source = StaticFeedSource::new()
        .with_body(QUAKES_URL, QUAKES)
        .with_body(PLATES_URL, PLATES);
    let mut map = Map::default();

    let report = assembler().assemble(&mut map, &source).await.unwrap();

    assert!(report.is_complete());
    assert_base_and_controls(&map);
    assert_eq!(map.center().lat, 42.713956);
    assert_eq!(map.zoom(), 3.5);

    let quakes = map.overlay(EARTHQUAKE_LAYER_ID).unwrap();
    assert_eq!(quakes.name(), "Earthquakes");
    assert_eq!(quakes.len(), 3);
    assert!(quakes.is_visible());
    assert_eq!(map.overlay_kind(EARTHQUAKE_LAYER_ID), Some(OverlayKind::Points));

    let plates = map.overlay(TECTONIC_PLATES_LAYER_ID).unwrap();
    assert_eq!(plates.name(), "Tectonic Plates");
    assert_eq!(plates.len(), 2);
    assert_eq!(
        map.overlay_kind(TECTONIC_PLATES_LAYER_ID),
        Some(OverlayKind::Lines)
    );

    let entries = map.layer_switch_entries();
    assert_eq!(entries.overlays, ["Earthquakes", "Tectonic Plates"]);
}

#[tokio::test]
async fn test_scenario_marker() {
    let source = StaticFeedSource::new()
        .with_body(QUAKES_URL, QUAKES)
        .with_body(PLATES_URL, PLATES);
    let mut map = Map::default();
    assembler().assemble(&mut map, &source).await.unwrap();

    let feature = map
        .overlay(EARTHQUAKE_LAYER_ID)
        .and_then(|layer| layer.get_feature("earthquake-0"))
        .unwrap();

    match &feature.feature {
        VectorFeature::Circle { center, radius, style } => {
            assert_eq!(center.lat, 35.7);
            assert_eq!(center.lng, -117.5);
            assert_eq!(*radius, 180_000.0);
            assert_eq!(style.fill_color, DEPTH_BANDS[1].color);
            assert_eq!(style.fill_opacity, 0.75);
            assert_eq!(style.stroke_color, "black");
        }
        other => panic!("expected a circle, got {:?}", other),
    }

    let popup = feature.popup.as_ref().unwrap();
    assert!(popup.content.starts_with("<h3>10km NE of Example</h3><hr>"));
    assert!(popup.content.contains("<p><strong>Magnitude: </strong>4.5</p>"));
    assert!(popup.content.contains("<p><strong>Depth: </strong>12 km</p>"));
}

#[tokio::test]
async fn test_deep_and_shallow_colors() {
    let source = StaticFeedSource::new()
        .with_body(QUAKES_URL, QUAKES)
        .with_body(PLATES_URL, PLATES);
    let mut map = Map::default();
    assembler().assemble(&mut map, &source).await.unwrap();
    let quakes = map.overlay(EARTHQUAKE_LAYER_ID).unwrap();

    let fill = |id: &str| match &quakes.get_feature(id).unwrap().feature {
        VectorFeature::Circle { style, .. } => style.fill_color.clone(),
        other => panic!("expected a circle, got {:?}", other),
    };
    assert_eq!(fill("earthquake-1"), DEPTH_BANDS[5].color);
    assert_eq!(fill("earthquake-2"), DEPTH_BANDS[0].color);
}

#[tokio::test]
async fn test_empty_feed_still_builds_map() {
    let source = StaticFeedSource::new()
        .with_body(QUAKES_URL, EMPTY)
        .with_body(PLATES_URL, PLATES);
    let mut map = Map::default();

    let report = assembler().assemble(&mut map, &source).await.unwrap();

    assert!(report.is_complete());
    assert_base_and_controls(&map);
    assert!(map.overlay(EARTHQUAKE_LAYER_ID).unwrap().is_empty());
}

#[tokio::test]
async fn test_failed_plate_feed_is_omitted() {
    let source = StaticFeedSource::new()
        .with_body(QUAKES_URL, QUAKES)
        .with_failure(PLATES_URL, "connection reset");
    let mut map = Map::default();

    let report = assembler().assemble(&mut map, &source).await.unwrap();

    assert!(!report.is_complete());
    assert!(report.is_loaded(FeedKind::Earthquakes));
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].0, FeedKind::TectonicPlates);
    assert!(report.failed[0].1.contains("connection reset"));

    assert!(map.overlay(TECTONIC_PLATES_LAYER_ID).is_none());
    assert_eq!(map.overlay(EARTHQUAKE_LAYER_ID).unwrap().len(), 3);
    assert_base_and_controls(&map);
}

#[tokio::test]
async fn test_malformed_feed_is_omitted() {
    let source = StaticFeedSource::new()
        .with_body(QUAKES_URL, "<html>503</html>")
        .with_body(PLATES_URL, PLATES);
    let mut map = Map::default();

    let report = assembler().assemble(&mut map, &source).await.unwrap();

    assert_eq!(report.loaded, [FeedKind::TectonicPlates]);
    assert!(map.overlay(EARTHQUAKE_LAYER_ID).is_none());
    assert!(map.overlay(TECTONIC_PLATES_LAYER_ID).is_some());
}

#[tokio::test(start_paused = true)]
async fn test_overlays_added_in_arrival_order() {
    let source = StaticFeedSource::new()
        .with_delayed_body(QUAKES_URL, QUAKES, Duration::from_millis(200))
        .with_delayed_body(PLATES_URL, PLATES, Duration::from_millis(20));
    let mut map = Map::default();

    let report = assembler().assemble(&mut map, &source).await.unwrap();

    assert_eq!(
        report.loaded,
        [FeedKind::TectonicPlates, FeedKind::Earthquakes]
    );
    assert_eq!(
        map.overlay_arrivals(),
        [TECTONIC_PLATES_LAYER_ID, EARTHQUAKE_LAYER_ID]
    );
    // markers stay above boundaries whichever arrives first
    assert_eq!(
        map.overlays().render_order(),
        [TECTONIC_PLATES_LAYER_ID, EARTHQUAKE_LAYER_ID]
    );
}

#[tokio::test(start_paused = true)]
async fn test_fetches_run_concurrently() {
    let source = StaticFeedSource::new()
        .with_delayed_body(QUAKES_URL, QUAKES, Duration::from_secs(2))
        .with_delayed_body(PLATES_URL, PLATES, Duration::from_secs(2));
    let mut map = Map::default();
    let started = tokio::time::Instant::now();

    assembler().assemble(&mut map, &source).await.unwrap();

    assert!(started.elapsed() < Duration::from_secs(3));
    assert_eq!(map.overlays().len(), 2);
}
