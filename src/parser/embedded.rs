//! Decoder for the OpenVPN config embedded in the last feed column.
//!
//! The column holds a Base64 blob. Once decoded it is a line oriented list of
//! directives with `<ca>`, `<cert>` and `<key>` blocks whose bodies are kept
//! verbatim.

use crate::error::{FeedError, Result};
use crate::utils::base64::base64_decode_lossy;

/// The three literal blocks carried by the embedded config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Ca,
    Cert,
    Key,
}

impl BlockKind {
    pub fn open_tag(self) -> &'static str {
        match self {
            BlockKind::Ca => "<ca>",
            BlockKind::Cert => "<cert>",
            BlockKind::Key => "<key>",
        }
    }

    pub fn close_tag(self) -> &'static str {
        match self {
            BlockKind::Ca => "</ca>",
            BlockKind::Cert => "</cert>",
            BlockKind::Key => "</key>",
        }
    }

    fn from_open_tag(line: &str) -> Option<Self> {
        match line {
            "<ca>" => Some(BlockKind::Ca),
            "<cert>" => Some(BlockKind::Cert),
            "<key>" => Some(BlockKind::Key),
            _ => None,
        }
    }

    fn from_close_tag(line: &str) -> Option<Self> {
        match line {
            "</ca>" => Some(BlockKind::Ca),
            "</cert>" => Some(BlockKind::Cert),
            "</key>" => Some(BlockKind::Key),
            _ => None,
        }
    }
}

/// Scanner state: reading directives, or copying the body of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanMode {
    Directive,
    Literal(BlockKind),
}

/// Connection parameters extracted from one embedded config.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmbeddedConfig {
    pub proto: String,
    pub port: u16,
    pub cipher: String,
    pub auth: String,
    pub ca: String,
    pub cert: String,
    pub key: String,
}

impl EmbeddedConfig {
    /// Name of the first required value that is missing, if any.
    pub fn missing_field(&self, ip: &str) -> Option<&'static str> {
        if self.proto.is_empty() {
            Some("proto")
        } else if ip.is_empty() {
            Some("ip")
        } else if self.port == 0 {
            Some("port")
        } else if self.cipher.is_empty() {
            Some("cipher")
        } else if self.auth.is_empty() {
            Some("auth")
        } else if self.ca.is_empty() {
            Some("ca")
        } else if self.cert.is_empty() {
            Some("cert")
        } else if self.key.is_empty() {
            Some("key")
        } else {
            None
        }
    }

    fn set_block(&mut self, kind: BlockKind, text: &str) {
        let text = text.trim().to_string();
        match kind {
            BlockKind::Ca => self.ca = text,
            BlockKind::Cert => self.cert = text,
            BlockKind::Key => self.key = text,
        }
    }
}

/// Line scanner over a decoded embedded config.
///
/// `remote` directives are checked against the IP column of the row being
/// decoded.
pub struct ConfigScanner<'a> {
    ip: &'a str,
    mode: ScanMode,
    block: String,
    config: EmbeddedConfig,
}

impl<'a> ConfigScanner<'a> {
    pub fn new(ip: &'a str) -> Self {
        ConfigScanner {
            ip,
            mode: ScanMode::Directive,
            block: String::new(),
            config: EmbeddedConfig::default(),
        }
    }

    pub fn mode(&self) -> ScanMode {
        self.mode
    }

    /// Feeds one raw line, line terminator included.
    pub fn feed_line(&mut self, line: &str) -> Result<()> {
        let trimmed = line.trim();

        if let ScanMode::Literal(kind) = self.mode {
            if BlockKind::from_close_tag(trimmed) == Some(kind) {
                self.config.set_block(kind, &self.block);
                self.block.clear();
                self.mode = ScanMode::Directive;
            } else {
                // Anything else, blank lines and foreign tags included, is body.
                self.block.push_str(line);
            }
            return Ok(());
        }

        if trimmed.is_empty() {
            return Ok(());
        }
        if let Some(kind) = BlockKind::from_open_tag(trimmed) {
            self.mode = ScanMode::Literal(kind);
            self.block.clear();
            return Ok(());
        }

        let words: Vec<&str> = trimmed.split(' ').collect();
        match words.as_slice() {
            ["proto", value, ..] => self.config.proto = value.to_string(),
            ["cipher", value, ..] => self.config.cipher = value.to_string(),
            ["auth", value, ..] => self.config.auth = value.to_string(),
            ["remote", address, port, ..] => {
                if *address != self.ip {
                    return Err(FeedError::InconsistentIp {
                        got: address.to_string(),
                        want: self.ip.to_string(),
                    });
                }
                self.config.port = port.parse().unwrap_or(0);
            }
            _ => {}
        }
        Ok(())
    }

    /// Ends the scan. An unterminated block keeps what was accumulated.
    pub fn finish(mut self) -> EmbeddedConfig {
        if let ScanMode::Literal(kind) = self.mode {
            self.config.set_block(kind, &self.block);
        }
        self.config
    }
}

/// Scans decoded config text without validating completeness.
pub fn scan_embedded_config(text: &str, ip: &str) -> Result<EmbeddedConfig> {
    let mut scanner = ConfigScanner::new(ip);
    for line in text.split_inclusive('\n') {
        scanner.feed_line(line)?;
    }
    Ok(scanner.finish())
}

/// Decodes the Base64 config column of a row whose IP column is `ip`.
///
/// # Errors
/// * `FeedError::Base64` if the column is not valid Base64
/// * `FeedError::InconsistentIp` if a `remote` directive names another host
/// * `FeedError::IncompleteConfig` if a required value is missing
pub fn decode_embedded_config(field: &str, ip: &str) -> Result<EmbeddedConfig> {
    let text = base64_decode_lossy(field)?;
    let config = scan_embedded_config(&text, ip)?;
    match config.missing_field(ip) {
        Some(missing) => Err(FeedError::IncompleteConfig { missing }),
        None => Ok(config),
    }
}
