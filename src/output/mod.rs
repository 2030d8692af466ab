//! Output module for crawl progress and results
//!
//! This module handles:
//! - Per-page progress lines while the crawl runs
//! - The end-of-crawl summary block
//! - Saving the discovered URLs to a file
//! - The closing report and process exit status

mod report;
mod summary;
mod traits;
mod writer;

pub use report::{exit_status, render_report, report, saved_line, INTERRUPTED_NOTICE};
pub use summary::render_summary;
pub use traits::{progress_line, ConsoleOutput, NullOutput, OutputHandler};
pub use writer::{save_results, WriteError};
