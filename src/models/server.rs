//! Relay server model
//!
//! Contains the record produced for every usable row of the feed.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// One relay server listed in the feed, together with everything needed to
/// connect to it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VpnServer {
    pub hostname: String,
    pub ip: String,
    pub score: i64,
    #[serde(with = "duration_ms")]
    pub ping: Duration,
    /// Line speed in bits per second.
    pub speed: u64,
    /// e.g. Japan
    pub country: String,
    /// e.g. JP
    pub country_short: String,
    /// Currently active sessions.
    pub sessions: u64,
    #[serde(with = "duration_ms")]
    pub uptime: Duration,
    /// Total users served.
    pub users: u64,
    /// Total traffic in bytes.
    pub traffic: u64,
    pub log_type: String,
    pub operator: String,
    pub message: String,

    // Extracted from the embedded OpenVPN config.
    pub proto: String,
    pub port: u16,
    pub cipher: String,
    pub auth: String,
    pub ca: String,
    pub cert: String,
    pub key: String,
}

impl VpnServer {
    /// Returns true when every field required to build a client config is set.
    pub fn is_complete(&self) -> bool {
        !(self.proto.is_empty()
            || self.ip.is_empty()
            || self.port == 0
            || self.cipher.is_empty()
            || self.auth.is_empty()
            || self.ca.is_empty()
            || self.cert.is_empty()
            || self.key.is_empty())
    }
}

/// Sorts servers by score, highest first. Equal scores keep feed order.
pub fn sort_by_score(servers: &mut [VpnServer]) {
    servers.sort_by(|a, b| b.score.cmp(&a.score));
}

/// Finds the first server with exactly this hostname.
pub fn find_by_hostname<'a>(servers: &'a [VpnServer], hostname: &str) -> Option<&'a VpnServer> {
    servers.iter().find(|s| s.hostname == hostname)
}

/// Keeps the servers whose short country code matches, ignoring case.
pub fn filter_by_country(servers: &[VpnServer], country_short: &str) -> Vec<VpnServer> {
    servers
        .iter()
        .filter(|s| s.country_short.eq_ignore_ascii_case(country_short))
        .cloned()
        .collect()
}

mod duration_ms {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_millis)
    }
}
