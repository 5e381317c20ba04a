use thiserror::Error;

/// Number of columns every feed row must carry.
pub const FEED_COLUMNS: usize = 15;

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("feed has no header row")]
    MissingHeader,

    #[error("got {got} columns, want {want}")]
    ColumnCount { got: usize, want: usize },

    #[error("invalid embedded config encoding: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("inconsistent IP: got {got}, want {want}")]
    InconsistentIp { got: String, want: String },

    #[error("invalid config or parsing: missing {missing}")]
    IncompleteConfig { missing: &'static str },

    #[error("fetch failed: {0}")]
    Http(String),
}

impl FeedError {
    /// Whether the failure only concerns the row being decoded.
    ///
    /// Record-local failures drop that row; every other variant ends the parse.
    pub fn is_record_local(&self) -> bool {
        matches!(self, FeedError::IncompleteConfig { .. })
    }
}

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid feed URL: {0}")]
    InvalidUrl(String),
}

pub type Result<T, E = FeedError> = std::result::Result<T, E>;
