//! Build error types.

use std::path::PathBuf;

use crate::renderer::RenderError;
use crate::title::ParseError;

/// Error returned by the documentation builder.
///
/// Every variant aborts the run. Pages written before the failure are left
/// on disk and the index is not written.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Failed to read schema directory {}: {source}", path.display())]
    Discover {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "{} and {} both map to output file {output}",
        first.display(),
        second.display()
    )]
    DuplicateOutput {
        first: PathBuf,
        second: PathBuf,
        output: String,
    },

    #[error("{} would be overwritten by the index page {output}", path.display())]
    ReservedOutput { path: PathBuf, output: String },

    #[error("Failed to create output directory {}: {source}", path.display())]
    CreateOutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Parse(#[from] ParseError),

    #[error("{0}")]
    Render(#[from] RenderError),

    #[error("Failed to write index {}: {source}", path.display())]
    WriteIndex {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
