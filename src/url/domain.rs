use crate::url::CanonicalUrl;

/// Decides whether a URL belongs to the crawl
///
/// A URL is in scope when its host is exactly the seed's host. Subdomains
/// (including `www.`) count as different hosts, and neither the scheme nor
/// the port is compared. Both sides come out of the same canonicalization,
/// so hosts are already lowercase.
///
/// # Examples
///
/// ```
/// use depth_crawler::url::{in_scope, CanonicalUrl};
///
/// let url = CanonicalUrl::parse("http://example.com/about").unwrap();
/// assert!(in_scope(&url, "example.com"));
///
/// let url = CanonicalUrl::parse("https://blog.example.com/").unwrap();
/// assert!(!in_scope(&url, "example.com"));
/// ```
pub fn in_scope(url: &CanonicalUrl, seed_host: &str) -> bool {
    url.host() == seed_host
}
