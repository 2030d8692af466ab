//! Persisting the discovered-URL list

use crate::url::CanonicalUrl;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure to persist the results file
///
/// Reported once; it never invalidates the crawl itself.
#[derive(Debug, Error)]
#[error("Error saving results to {}: {source}", .path.display())]
pub struct WriteError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Writes URLs to `path`, one per line, in the given order
///
/// An existing file is truncated.
///
/// # Returns
///
/// * `Ok(usize)` - Number of URLs written
/// * `Err(WriteError)` - The file could not be created or written
pub fn save_results(urls: &[CanonicalUrl], path: &Path) -> Result<usize, WriteError> {
    write_lines(urls, path).map_err(|source| WriteError {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!("Wrote {} URLs to {}", urls.len(), path.display());
    Ok(urls.len())
}

fn write_lines(urls: &[CanonicalUrl], path: &Path) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for url in urls {
        writeln!(writer, "{}", url)?;
    }
    writer.flush()
}
