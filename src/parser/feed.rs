use std::io::{BufRead, BufReader, Read};

use csv::ReaderBuilder;
use log::debug;

use crate::error::{FeedError, Result};
use crate::models::VpnServer;
use crate::parser::record::decode_record;

/// Lines starting with this byte frame the table and are not part of it.
pub const SENTINEL: u8 = b'*';

/// Result of parsing one feed snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedFeed {
    /// Usable servers, in feed order.
    pub servers: Vec<VpnServer>,
    /// Rows skipped because their embedded config was incomplete.
    pub dropped: usize,
}

/// Copies `reader` line by line, leaving out sentinel lines.
///
/// A last line without a terminator is kept.
pub fn filter_lines<R: BufRead>(mut reader: R) -> Result<Vec<u8>> {
    let mut filtered = Vec::new();
    let mut line = Vec::new();
    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        if line.first() == Some(&SENTINEL) {
            continue;
        }
        filtered.extend_from_slice(&line);
    }
    Ok(filtered)
}

/// Decodes one field as UTF-8, or as ISO-8859-1 when it is not valid UTF-8.
pub fn decode_field(field: &[u8]) -> String {
    match std::str::from_utf8(field) {
        Ok(text) => text.to_string(),
        Err(_) => field.iter().map(|&b| b as char).collect(),
    }
}

/// Parses a whole feed and reports how many rows were dropped.
///
/// The first table row is a header and is skipped. Structural problems
/// (unreadable input, wrong column count, bad Base64, a `remote` that
/// disagrees with the IP column) abort the parse. Rows whose config lacks a
/// required value are dropped and counted.
///
/// The table is read from the already buffered input as flexible byte
/// records, so `FeedError::Csv` only carries failures the `csv` reader
/// itself reports; read errors surface as `FeedError::Io` while filtering.
pub fn parse_feed_report<R: Read>(reader: R) -> Result<ParsedFeed> {
    let filtered = filter_lines(BufReader::new(reader))?;

    let mut table = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(filtered.as_slice());
    let mut rows = table.byte_records();

    match rows.next() {
        Some(header) => {
            header?;
        }
        None => return Err(FeedError::MissingHeader),
    }

    let mut parsed = ParsedFeed::default();
    for row in rows {
        let row = row?;
        let fields: Vec<String> = row.iter().map(decode_field).collect();

        match decode_record(&fields) {
            Ok(server) => parsed.servers.push(server),
            Err(e) if e.is_record_local() => {
                debug!("Skipping server {}: {}", fields[0], e);
                parsed.dropped += 1;
            }
            Err(e) => return Err(e),
        }
    }

    debug!(
        "Parsed {} server(s), dropped {}",
        parsed.servers.len(),
        parsed.dropped
    );
    Ok(parsed)
}

/// Parses a whole feed into the list of usable servers.
///
/// # Example
///
/// ```rust
/// let feed = "*vpn_servers\n#HostName,IP\n*\n";
/// // Header only: no servers, and no error.
/// assert!(vpngate::parse_feed(feed.as_bytes()).unwrap().is_empty());
/// ```
pub fn parse_feed<R: Read>(reader: R) -> Result<Vec<VpnServer>> {
    parse_feed_report(reader).map(|parsed| parsed.servers)
}
