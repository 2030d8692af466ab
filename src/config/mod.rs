//! Configuration module for Depth-Crawler
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file. Every key has a default, so an empty file (or no file
//! at all) is a valid configuration; command-line flags override file values.
//!
//! # Example
//!
//! ```no_run
//! use depth_crawler::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("crawler.toml")).unwrap();
//! println!("Crawler will use max depth: {}", config.crawler.max_depth);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, CrawlerConfig, OutputConfig, DEFAULT_MAX_DEPTH, DEFAULT_REQUEST_DELAY_MS,
    DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};

// Re-export parser functions
pub use parser::{load_config, parse_config, read_config};
pub use validation::validate;
