//! Settings module
//!
//! Configuration for the feed fetch, loaded from TOML

pub mod config;

pub use config::{Settings, DEFAULT_FEED_URL};
