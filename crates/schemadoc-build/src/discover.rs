//! Schema discovery.
//!
//! Only files directly inside the source directory are considered.
//! Subdirectories hold shared fragments (`parts/` and the like) and are
//! never descended into.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::BuildError;

/// Extension identifying schema files.
const SCHEMA_EXTENSION: &str = "yaml";

/// A discovered schema file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaFile {
    /// Full path to the schema.
    pub path: PathBuf,
    /// File name including extension (e.g., "person.yaml").
    pub file_name: String,
    /// File name without extension (e.g., "person").
    pub stem: String,
}

impl SchemaFile {
    /// Describe a schema at the given path.
    pub fn new(path: PathBuf) -> Self {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let stem = path
            .file_stem()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            path,
            file_name,
            stem,
        }
    }

    /// File name of the page generated for this schema.
    #[must_use]
    pub fn output_filename(&self) -> String {
        format!("{}.html", self.stem)
    }
}

/// List the schema files directly inside `source_dir`, sorted by path.
///
/// # Errors
///
/// Returns [`BuildError::Discover`] if the directory is missing or unreadable.
pub fn discover_schemas(source_dir: &Path) -> Result<Vec<SchemaFile>, BuildError> {
    let discover_error = |source| BuildError::Discover {
        path: source_dir.to_path_buf(),
        source,
    };

    let mut paths = Vec::new();
    for entry in fs::read_dir(source_dir).map_err(discover_error)? {
        let path = entry.map_err(discover_error)?.path();
        // `is_file` follows symlinks, so linked schemas are picked up too.
        if path.extension().is_some_and(|e| e == SCHEMA_EXTENSION) && path.is_file() {
            paths.push(path);
        }
    }
    paths.sort();

    for path in &paths {
        tracing::debug!(path = %path.display(), "Discovered schema");
    }

    Ok(paths.into_iter().map(SchemaFile::new).collect())
}
