use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Default maximum crawl depth
pub const DEFAULT_MAX_DEPTH: u32 = 3;

/// Default pause before each request (milliseconds)
pub const DEFAULT_REQUEST_DELAY_MS: u64 = 100;

/// Default per-request timeout (seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default User-Agent header
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (compatible; DepthCrawler/1.0)";

/// Main configuration structure for Depth-Crawler
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub crawler: CrawlerConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CrawlerConfig {
    /// Maximum link distance from the seed that will still be fetched
    #[serde(rename = "max-depth")]
    pub max_depth: u32,

    /// Pause before each request (milliseconds)
    #[serde(rename = "request-delay-ms")]
    pub request_delay_ms: u64,

    /// Per-request timeout (seconds)
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// User-Agent header sent with every request
    #[serde(rename = "user-agent")]
    pub user_agent: String,
}

impl CrawlerConfig {
    /// The politeness delay as a `Duration`
    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }

    /// The request timeout as a `Duration`
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            request_delay_ms: DEFAULT_REQUEST_DELAY_MS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// File that receives the discovered URLs, one per line
    pub path: Option<PathBuf>,
}
