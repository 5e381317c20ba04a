pub mod base64;
pub mod format;
#[cfg(feature = "fetch")]
pub mod http;

// Re-export common utilities
pub use format::{format_number, format_uptime};
