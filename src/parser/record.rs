use std::str::FromStr;
use std::time::Duration;

use crate::error::{FeedError, Result, FEED_COLUMNS};
use crate::models::VpnServer;
use crate::parser::embedded::decode_embedded_config;

/// Parses an integer column, falling back to zero on anything unparsable.
pub fn parse_or_zero<T: FromStr + Default>(value: &str) -> T {
    value.parse().unwrap_or_default()
}

/// Parses a millisecond count column into a `Duration`.
pub fn parse_millis(value: &str) -> Duration {
    Duration::from_millis(parse_or_zero(value))
}

/// Builds a server from one feed row.
///
/// Column layout: hostname, IP, score, ping, speed, country, country code,
/// sessions, uptime, users, traffic, log type, operator, message, config.
///
/// # Errors
/// * `FeedError::ColumnCount` if the row does not have exactly 15 columns
/// * any error from [`decode_embedded_config`] for the config column
pub fn decode_record<S: AsRef<str>>(fields: &[S]) -> Result<VpnServer> {
    if fields.len() != FEED_COLUMNS {
        return Err(FeedError::ColumnCount {
            got: fields.len(),
            want: FEED_COLUMNS,
        });
    }
    let d: Vec<&str> = fields.iter().map(|f| f.as_ref()).collect();

    let ip = d[1];
    let config = decode_embedded_config(d[14], ip)?;

    Ok(VpnServer {
        hostname: d[0].to_string(),
        ip: ip.to_string(),
        score: parse_or_zero(d[2]),
        ping: parse_millis(d[3]),
        speed: parse_or_zero(d[4]),
        country: d[5].to_string(),
        country_short: d[6].to_string(),
        sessions: parse_or_zero(d[7]),
        uptime: parse_millis(d[8]),
        users: parse_or_zero(d[9]),
        traffic: parse_or_zero(d[10]),
        log_type: d[11].to_string(),
        operator: d[12].to_string(),
        message: d[13].to_string(),
        proto: config.proto,
        port: config.port,
        cipher: config.cipher,
        auth: config.auth,
        ca: config.ca,
        cert: config.cert,
        key: config.key,
    })
}
