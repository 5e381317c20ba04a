//! Feed parsing
//!
//! The feed is decoded in layers: sentinel line filtering, the CSV table, one
//! row per server, and finally the Base64 OpenVPN config of each row.

pub mod embedded;
pub mod feed;
pub mod record;

pub use embedded::{decode_embedded_config, scan_embedded_config, BlockKind, EmbeddedConfig};
pub use feed::{filter_lines, parse_feed, parse_feed_report, ParsedFeed};
pub use record::decode_record;
