use crate::url::CanonicalUrl;
use crate::NormalizeError;
use url::Url;

/// Schemes a crawlable link may use
const SUPPORTED_SCHEMES: &[&str] = &["http", "https"];

/// Resolves a raw href against a base URL and canonicalizes the result
///
/// # Normalization Steps
///
/// 1. Trim surrounding whitespace; reject if nothing is left
/// 2. Resolve against `base` using standard relative-reference resolution
///    (absolute, scheme-relative, path-relative and query-only forms),
///    which also removes `.` and `..` path segments
/// 3. Reject schemes other than `http` and `https`
/// 4. Lowercase the host
/// 5. Empty path becomes `/`
/// 6. Remove fragment (everything after `#`)
///
/// The query string is kept verbatim, including parameter order. The `www.`
/// prefix and trailing slashes are significant.
///
/// # Arguments
///
/// * `raw` - The href as it appeared in the page markup
/// * `base` - The URL of the page the href was found on
///
/// # Returns
///
/// * `Ok(CanonicalUrl)` - Normalized URL
/// * `Err(NormalizeError)` - Blank, unparseable or non-HTTP reference
///
/// # Examples
///
/// ```
/// use depth_crawler::url::{normalize, CanonicalUrl};
///
/// let base = CanonicalUrl::parse("https://example.com/docs/intro").unwrap();
/// let url = normalize("../about#team", &base).unwrap();
/// assert_eq!(url.as_str(), "https://example.com/about");
/// ```
pub fn normalize(raw: &str, base: &CanonicalUrl) -> Result<CanonicalUrl, NormalizeError> {
    let href = raw.trim();
    if href.is_empty() {
        return Err(NormalizeError::Empty);
    }

    let resolved = base
        .as_url()
        .join(href)
        .map_err(|e| NormalizeError::Parse(e.to_string()))?;

    canonicalize(resolved)
}

/// Applies the canonicalization policy to an already-absolute URL
pub(crate) fn canonicalize(mut url: Url) -> Result<CanonicalUrl, NormalizeError> {
    if !SUPPORTED_SCHEMES.contains(&url.scheme()) {
        return Err(NormalizeError::UnsupportedScheme(url.scheme().to_string()));
    }

    let host = match url.host_str() {
        Some(host) if !host.is_empty() => host.to_string(),
        _ => return Err(NormalizeError::MissingHost),
    };

    let lowered = host.to_lowercase();
    if lowered != host {
        url.set_host(Some(&lowered))
            .map_err(|e| NormalizeError::Parse(format!("Failed to set host: {}", e)))?;
    }

    if url.path().is_empty() {
        url.set_path("/");
    }

    url.set_fragment(None);

    Ok(CanonicalUrl(url))
}
