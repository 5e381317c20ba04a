use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::SettingsError;

/// Feed published by the VPN Gate project.
pub const DEFAULT_FEED_URL: &str = "http://www.vpngate.net/api/iphone/";

fn default_feed_url() -> String {
    DEFAULT_FEED_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    15
}

fn default_user_agent() -> String {
    "vpngate-rs".to_string()
}

/// Settings for fetching the feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_feed_url")]
    pub feed_url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Outbound proxy, e.g. `http://127.0.0.1:8080`.
    #[serde(default)]
    pub proxy: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            feed_url: default_feed_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            proxy: None,
        }
    }
}

impl Settings {
    /// Parse settings from TOML text. Missing keys keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, SettingsError> {
        let settings: Settings = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a TOML file, or the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        match path {
            Some(path) => {
                log::info!("Loading settings from {}", path.display());
                Self::from_toml_str(&fs::read_to_string(path)?)
            }
            None => Ok(Settings::default()),
        }
    }

    /// Replace the feed URL, checking that it is a valid http(s) URL.
    pub fn set_feed_url(&mut self, feed_url: &str) -> Result<(), SettingsError> {
        check_feed_url(feed_url)?;
        self.feed_url = feed_url.to_string();
        Ok(())
    }

    fn validate(&self) -> Result<(), SettingsError> {
        check_feed_url(&self.feed_url)?;
        if let Some(proxy) = &self.proxy {
            if Url::parse(proxy).is_err() {
                return Err(SettingsError::InvalidUrl(proxy.clone()));
            }
        }
        Ok(())
    }
}

fn check_feed_url(feed_url: &str) -> Result<(), SettingsError> {
    match Url::parse(feed_url) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => Ok(()),
        _ => Err(SettingsError::InvalidUrl(feed_url.to_string())),
    }
}
