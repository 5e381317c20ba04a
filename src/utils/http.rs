use std::time::Duration;

use log::info;
use reqwest::{Client, Proxy, StatusCode};

use crate::error::{FeedError, Result};
use crate::models::VpnServer;
use crate::parser::{parse_feed_report, ParsedFeed};
use crate::settings::Settings;

/// Makes an HTTP GET request and returns the raw response body
///
/// # Arguments
/// * `url` - The URL to request
/// * `settings` - Timeout, user agent and optional proxy to use
pub async fn web_get_async(url: &str, settings: &Settings) -> Result<Vec<u8>> {
    let mut client_builder = Client::builder()
        .timeout(Duration::from_secs(settings.timeout_secs))
        .user_agent(settings.user_agent.as_str());

    if let Some(proxy) = settings.proxy.as_deref().filter(|p| !p.is_empty()) {
        let proxy = Proxy::all(proxy)
            .map_err(|e| FeedError::Http(format!("Failed to set proxy: {}", e)))?;
        client_builder = client_builder.proxy(proxy);
    }

    let client = client_builder
        .build()
        .map_err(|e| FeedError::Http(format!("Failed to build HTTP client: {}", e)))?;

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| FeedError::Http(format!("Failed to send request: {}", e)))?;

    if response.status() != StatusCode::OK {
        return Err(FeedError::Http(format!("HTTP error: {}", response.status())));
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| FeedError::Http(format!("Failed to read response body: {}", e)))?;
    Ok(body.to_vec())
}

/// Synchronous version of web_get_async that runs it on a current thread runtime
pub fn web_get(url: &str, settings: &Settings) -> Result<Vec<u8>> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| FeedError::Http(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(web_get_async(url, settings))
}

/// Downloads the configured feed and parses it.
///
/// A parse failure is returned as is, so callers never get a partial list.
pub fn fetch_feed_report(settings: &Settings) -> Result<ParsedFeed> {
    info!("Fetching server list from {}", settings.feed_url);
    let body = web_get(&settings.feed_url, settings)?;
    let parsed = parse_feed_report(body.as_slice())?;
    info!(
        "Fetched {} server(s), {} dropped",
        parsed.servers.len(),
        parsed.dropped
    );
    Ok(parsed)
}

/// Downloads the configured feed and returns its usable servers.
pub fn fetch_feed(settings: &Settings) -> Result<Vec<VpnServer>> {
    fetch_feed_report(settings).map(|parsed| parsed.servers)
}
