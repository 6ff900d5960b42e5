use quakemap::{ui::render_document, Map, MapAssembler, QuakeMapConfig, StaticFeedSource};
use std::time::Duration;
use tokio::time::Instant;

const QUAKES: &str = r#"{
    "type": "FeatureCollection",
    "features": [
        {"type": "Feature",
         "properties": {"mag": 5.2, "place": "Off the coast of <Nowhere>", "time": 1700000000000},
         "geometry": {"type": "Point", "coordinates": [10.0, -5.0, 33.0]}}
    ]
}"#;

async fn assembled() -> Map {
    let assembler = MapAssembler::new(
        QuakeMapConfig::new("pk.page")
            .with_earthquake_url("memory://quakes")
            .with_plates_url("memory://plates"),
    );
    let source = StaticFeedSource::new()
        .with_body("memory://quakes", QUAKES)
        .with_failure("memory://plates", "offline");
    let mut map = Map::default();
    assembler.assemble(&mut map, &source).await.unwrap();
    map
}

#[tokio::test]
async fn test_page_embeds_map_state() {
    let page = render_document(&assembled().await, "Earthquakes").unwrap();

    assert!(page.starts_with("<!DOCTYPE html>"));
    assert!(page.contains("<div id=\"map\"></div>"));
    for name in ["Satellite Map", "Grayscale Map", "Outdoors Map", "Earthquakes"] {
        assert!(page.contains(name), "missing {}", name);
    }
    assert!(page.contains("access_token=pk.page"));
    assert!(page.contains("Depth (km)"));
    assert!(page.contains("bottomright"));
    assert!(!page.contains("Tectonic Plates"));
}

#[tokio::test]
async fn test_page_keeps_feed_text_escaped() {
    let page = render_document(&assembled().await, "Earthquakes").unwrap();

    assert!(page.contains("Off the coast of &lt;Nowhere&gt;"));
    assert!(!page.contains("<Nowhere>"));
}

#[tokio::test(start_paused = true)]
async fn test_first_page_does_not_wait_for_slow_feed() {
    let plates = r#"{"type": "FeatureCollection", "features": [
        {"type": "Feature", "properties": {},
         "geometry": {"type": "LineString", "coordinates": [[0, 0], [1, 1]]}}
    ]}"#;
    let assembler = MapAssembler::new(
        QuakeMapConfig::new("pk.page")
            .with_earthquake_url("memory://quakes")
            .with_plates_url("memory://plates"),
    );
    let source = StaticFeedSource::new()
        .with_body("memory://quakes", QUAKES)
        .with_delayed_body("memory://plates", plates, Duration::from_secs(60));
    let mut map = Map::default();
    assembler.initialize(&mut map).unwrap();

    let started = Instant::now();
    let mut pages = Vec::new();
    assembler
        .load_overlays_with(&mut map, &source, |map: &Map, _| {
            pages.push((started.elapsed(), render_document(map, "Earthquakes").unwrap()));
        })
        .await;

    assert_eq!(pages.len(), 2);
    let (first_at, first_page) = &pages[0];
    assert!(*first_at < Duration::from_secs(1));
    assert!(first_page.contains("Off the coast of &lt;Nowhere&gt;"));
    assert!(!first_page.contains("Tectonic Plates"));

    let (second_at, second_page) = &pages[1];
    assert!(*second_at >= Duration::from_secs(60));
    assert!(second_page.contains("Tectonic Plates"));
}
