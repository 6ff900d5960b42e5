//! Feed sources the map pulls its GeoJSON from.

use crate::{data::geojson::GeoJson, prelude::HashMap, MapError, Result};
use async_trait::async_trait;
use log::debug;
use once_cell::sync::Lazy;
use reqwest::Client;
use std::time::Duration;

/// Shared async HTTP client, built on first use
pub(crate) static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .user_agent(concat!("quakemap/", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("failed to build reqwest client")
});

/// Anything that can produce a GeoJSON document for a URL
#[async_trait]
pub trait FeedSource: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<GeoJson>;
}

/// Fetches feeds over HTTP(S) with a single GET per call
#[derive(Debug, Clone, Default)]
pub struct HttpFeedSource;

impl HttpFeedSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FeedSource for HttpFeedSource {
    async fn fetch(&self, url: &str) -> Result<GeoJson> {
        debug!("GET {}", url);
        let response = HTTP_CLIENT
            .get(url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(MapError::Network)?;
        let body = response.text().await.map_err(MapError::Network)?;
        debug!("Downloaded {} bytes from {}", body.len(), url);

        // Plate boundary files run to megabytes; parse off the async workers
        let parsed = tokio::task::spawn_blocking(move || body.parse::<GeoJson>())
            .await
            .map_err(|e| MapError::ParseError(format!("parse task failed: {}", e)))??;
        Ok(parsed)
    }
}

#[derive(Debug, Clone)]
enum StaticResponse {
    Body(String),
    Failure(String),
}

/// Serves canned responses from memory, optionally after a delay
#[derive(Debug, Clone, Default)]
pub struct StaticFeedSource {
    responses: HashMap<String, (StaticResponse, Duration)>,
}

impl StaticFeedSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Respond to `url` with `body`
    pub fn with_body(self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.with_delayed_body(url, body, Duration::ZERO)
    }

    /// Respond to `url` with `body` once `delay` has elapsed
    pub fn with_delayed_body(
        mut self,
        url: impl Into<String>,
        body: impl Into<String>,
        delay: Duration,
    ) -> Self {
        self.responses
            .insert(url.into(), (StaticResponse::Body(body.into()), delay));
        self
    }

    /// Fail every request for `url`
    pub fn with_failure(mut self, url: impl Into<String>, message: impl Into<String>) -> Self {
        self.responses.insert(
            url.into(),
            (StaticResponse::Failure(message.into()), Duration::ZERO),
        );
        self
    }
}

#[async_trait]
impl FeedSource for StaticFeedSource {
    async fn fetch(&self, url: &str) -> Result<GeoJson> {
        let (response, delay) = self
            .responses
            .get(url)
            .ok_or_else(|| MapError::Config(format!("no canned response for {}", url)))?;

        if !delay.is_zero() {
            tokio::time::sleep(*delay).await;
        }

        match response {
            StaticResponse::Body(body) => Ok(body.parse::<GeoJson>()?),
            StaticResponse::Failure(message) => Err(MapError::Layer(message.clone()).into()),
        }
    }
}
