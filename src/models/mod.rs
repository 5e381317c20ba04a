//! Core data models for the application
//!
//! This module contains the server record produced by the feed parser,
//! separated from the logic that builds and renders it.
//!
//! # Usage
//!
//! ```rust
//! use vpngate::models::VpnServer;
//!
//! let mut server = VpnServer::default();
//! server.hostname = "public-vpn-1".to_string();
//! server.ip = "1.2.3.4".to_string();
//! assert!(!server.is_complete());
//! ```

mod server;

pub use server::*;
