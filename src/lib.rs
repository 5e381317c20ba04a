//! Parser for the VPN Gate relay server feed.
//!
//! The feed is a CSV table framed by `*` lines whose last column carries a
//! Base64 OpenVPN client config. [`parse_feed`] turns one snapshot into the
//! list of servers whose config is complete, ready to be rendered with
//! [`generator::to_openvpn`].

pub mod error;
pub mod generator;
pub mod models;
pub mod parser;
pub mod settings;
pub mod utils;

// Re-export the main types for easier access
pub use error::{FeedError, SettingsError};
pub use models::VpnServer;
pub use parser::{parse_feed, parse_feed_report, ParsedFeed};
pub use settings::Settings;

#[cfg(feature = "fetch")]
pub use utils::http::{fetch_feed, fetch_feed_report};
