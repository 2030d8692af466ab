//! Depth-Crawler: a breadth-first, depth-bounded web crawler
//!
//! This crate walks a single host starting from a seed URL, following links
//! breadth-first up to a maximum depth. It normalizes every discovered link,
//! keeps the crawl on the seed's host and never enqueues a URL twice.

pub mod config;
pub mod crawler;
pub mod output;
pub mod url;

use thiserror::Error;

/// Main error type for crawl operations
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("Invalid seed URL '{url}': {source}")]
    InvalidSeed {
        url: String,
        #[source]
        source: NormalizeError,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Errors produced while turning a raw href into a canonical URL
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    #[error("Empty URL reference")]
    Empty,

    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Unsupported URL scheme: {0}")]
    UnsupportedScheme(String),

    #[error("Missing host in URL")]
    MissingHost,
}

/// Result type alias for crawl operations
pub type Result<T> = std::result::Result<T, CrawlError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL normalization
pub type NormalizeResult<T> = std::result::Result<T, NormalizeError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{CrawlResult, Crawler};
pub use crate::url::{in_scope, normalize, CanonicalUrl};
