//! Build configuration.

use std::path::{Path, PathBuf};

use crate::renderer::RenderConfig;

/// Schema source directory, relative to the project root.
pub const SOURCE_DIR: &str = "src";

/// Generated documentation directory, relative to the project root.
pub const OUTPUT_DIR: &str = "docs";

/// File name of the generated index page.
pub const INDEX_FILENAME: &str = "index.html";

/// Heading used for the index page unless overridden.
pub const DEFAULT_SITE_TITLE: &str = "Schema Documentation";

/// Configuration for a documentation build.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Directory scanned for `*.yaml` schema files.
    pub source_dir: PathBuf,
    /// Directory receiving the generated pages and the index.
    pub output_dir: PathBuf,
    /// Title and heading of the index page.
    pub site_title: String,
    /// Options passed to the page generator for every schema.
    pub render: RenderConfig,
}

impl BuildConfig {
    /// Create a configuration with explicit source and output directories.
    pub fn new(source_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            output_dir: output_dir.into(),
            site_title: DEFAULT_SITE_TITLE.to_owned(),
            render: RenderConfig::default(),
        }
    }

    /// Create the standard layout for a project root: `src/` in, `docs/` out.
    pub fn for_project(root: &Path) -> Self {
        Self::new(root.join(SOURCE_DIR), root.join(OUTPUT_DIR))
    }

    /// Path of the index page inside the output directory.
    #[must_use]
    pub fn index_path(&self) -> PathBuf {
        self.output_dir.join(INDEX_FILENAME)
    }
}
