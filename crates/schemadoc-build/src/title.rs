//! Schema title extraction.

use std::fs;
use std::path::{Path, PathBuf};

use serde_yaml::Value;

use crate::discover::SchemaFile;

/// Error reading or parsing a schema file.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Failed to read schema {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid YAML in {}: {source}", path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Reads the top-level fields of a schema document.
pub trait SchemaParser {
    /// Return the document's top-level `title` if it is a string.
    ///
    /// `Ok(None)` means the document parsed but declares no usable title.
    fn title(&self, path: &Path) -> Result<Option<String>, ParseError>;
}

/// [`SchemaParser`] backed by `serde_yaml`.
#[derive(Debug, Default, Clone, Copy)]
pub struct YamlSchemaParser;

impl SchemaParser for YamlSchemaParser {
    fn title(&self, path: &Path) -> Result<Option<String>, ParseError> {
        let content = fs::read_to_string(path).map_err(|source| ParseError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        parse_title(&content).map_err(|source| ParseError::Yaml {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Extract a string `title` from YAML content.
///
/// Empty documents, non-mapping roots and non-string titles yield `None`.
fn parse_title(content: &str) -> Result<Option<String>, serde_yaml::Error> {
    if content.trim().is_empty() {
        return Ok(None);
    }
    let document: Value = serde_yaml::from_str(content)?;
    Ok(document
        .get("title")
        .and_then(Value::as_str)
        .map(str::to_owned))
}

/// Resolve the display title of a schema, falling back to its stem.
///
/// # Errors
///
/// Propagates the parser's error; a malformed schema is never skipped.
pub fn resolve_title(
    parser: &dyn SchemaParser,
    schema: &SchemaFile,
) -> Result<String, ParseError> {
    let title = parser.title(&schema.path)?;
    if title.is_none() {
        tracing::debug!(path = %schema.path.display(), "No title field, using file stem");
    }
    Ok(title.unwrap_or_else(|| schema.stem.clone()))
}
