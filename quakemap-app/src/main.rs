//! Fetches the weekly earthquake feed and the plate boundaries, assembles
//! the map and writes it out as a standalone Leaflet page.
//!
//! The page is written once the base layers and legend are in place and
//! rewritten each time a feed settles, so a slow feed never holds back the
//! other overlay. Popup times are shown in the viewer's time zone.
//!
//! ```bash
//! API_KEY=pk.xxx quakemap-app --output quakes.html
//! ```

use anyhow::Context;
use clap::Parser;
use log::{error, info, warn};
use quakemap::{
    core::config::{QuakeMapConfig, API_KEY_VAR, EARTHQUAKE_URL_VAR, PLATES_URL_VAR},
    ui::render_document,
    HttpFeedSource, Map, MapAssembler,
};
use std::path::{Path, PathBuf};

const PAGE_TITLE: &str = "Earthquakes of the Past Week";

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// Where to write the generated page
    #[clap(long, short, default_value = "index.html")]
    output: PathBuf,

    /// Mapbox access token used by every base layer [env: API_KEY]
    #[clap(long)]
    api_key: Option<String>,

    /// Earthquake GeoJSON feed [env: QUAKEMAP_EARTHQUAKE_URL]
    #[clap(long)]
    earthquake_url: Option<String>,

    /// Tectonic plate boundary GeoJSON [env: QUAKEMAP_PLATES_URL]
    #[clap(long)]
    plates_url: Option<String>,
}

impl Args {
    /// Command-line value for a configuration variable
    fn setting(&self, key: &str) -> Option<String> {
        match key {
            API_KEY_VAR => self.api_key.clone(),
            EARTHQUAKE_URL_VAR => self.earthquake_url.clone(),
            PLATES_URL_VAR => self.plates_url.clone(),
            _ => None,
        }
    }

    /// Flags win over the environment; anything unset falls back to defaults
    fn config(&self) -> anyhow::Result<QuakeMapConfig> {
        QuakeMapConfig::from_lookup(|key| self.setting(key).or_else(|| std::env::var(key).ok()))
            .map_err(anyhow::Error::msg)
    }
}

fn write_page(map: &Map, output: &Path) -> anyhow::Result<()> {
    let page = render_document(map, PAGE_TITLE).map_err(anyhow::Error::msg)?;
    std::fs::write(output, page).with_context(|| format!("writing {}", output.display()))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let assembler = MapAssembler::new(args.config()?);

    let mut map = Map::default();
    assembler.initialize(&mut map).map_err(anyhow::Error::msg)?;
    write_page(&map, &args.output)?;
    info!("Wrote {} without overlays", args.output.display());

    let mut write_failure = None;
    let report = assembler
        .load_overlays_with(&mut map, &HttpFeedSource::new(), |map, _| {
            match write_page(map, &args.output) {
                Ok(()) => info!(
                    "Rewrote {} with overlays {:?}",
                    args.output.display(),
                    map.overlay_arrivals()
                ),
                Err(e) => {
                    error!("{:#}", e);
                    write_failure.get_or_insert(e);
                }
            }
        })
        .await;

    if report.is_complete() {
        info!("Both overlays loaded");
    }
    for (kind, reason) in &report.failed {
        warn!("{:?} feed failed, overlay omitted: {}", kind, reason);
    }

    match write_failure {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
