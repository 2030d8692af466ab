//! URL handling module for Depth-Crawler
//!
//! This module provides the canonical URL type used for deduplication,
//! reference resolution and normalization, and the same-host scoping rule.

mod domain;
mod normalize;

use crate::NormalizeError;
use std::fmt;
use std::str::FromStr;
use url::Url;

// Re-export main functions
pub use domain::in_scope;
pub use normalize::normalize;

/// A normalized, comparison-stable URL
///
/// Values are only produced by [`normalize`] or [`CanonicalUrl::parse`], so
/// every instance has an `http` or `https` scheme, a lowercase host, a
/// non-empty path and no fragment. Two inputs that agree on
/// (scheme, host, path, query) always compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalUrl(Url);

impl CanonicalUrl {
    /// Parses an absolute URL string into its canonical form
    ///
    /// This is how the seed is normalized "relative to itself": it must be
    /// absolute, since there is no base to resolve against.
    ///
    /// # Examples
    ///
    /// ```
    /// use depth_crawler::url::CanonicalUrl;
    ///
    /// let url = CanonicalUrl::parse("HTTPS://Example.COM#top").unwrap();
    /// assert_eq!(url.as_str(), "https://example.com/");
    /// ```
    pub fn parse(raw: &str) -> Result<Self, NormalizeError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(NormalizeError::Empty);
        }

        let url = Url::parse(trimmed).map_err(|e| NormalizeError::Parse(e.to_string()))?;
        normalize::canonicalize(url)
    }

    /// The URL scheme (`http` or `https`)
    pub fn scheme(&self) -> &str {
        self.0.scheme()
    }

    /// The lowercase host, without port
    pub fn host(&self) -> &str {
        // canonicalize rejects host-less URLs
        self.0.host_str().unwrap_or_default()
    }

    /// The port, if one was given explicitly and differs from the scheme default
    pub fn port(&self) -> Option<u16> {
        self.0.port()
    }

    pub fn path(&self) -> &str {
        self.0.path()
    }

    pub fn query(&self) -> Option<&str> {
        self.0.query()
    }

    /// The serialized URL
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Borrows the underlying parsed URL
    pub fn as_url(&self) -> &Url {
        &self.0
    }
}

impl fmt::Display for CanonicalUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

impl AsRef<str> for CanonicalUrl {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl FromStr for CanonicalUrl {
    type Err = NormalizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
