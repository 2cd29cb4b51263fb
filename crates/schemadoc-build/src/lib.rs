//! Schema documentation builder.
//!
//! Turns a directory of YAML schema files into a static documentation site:
//!
//! - Discovers top-level `*.yaml` files in the source directory
//! - Resolves each schema's display title from its `title` field
//! - Renders one HTML page per schema through an external generator
//! - Writes an `index.html` listing every generated page
//!
//! The generator and the YAML parser sit behind the [`SchemaRenderer`] and
//! [`SchemaParser`] traits so the build can run against fakes.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use schemadoc_build::{BuildConfig, DocsBuilder};
//!
//! let config = BuildConfig::for_project(Path::new("."));
//! let report = DocsBuilder::new(config).build()?;
//! println!("{} page(s)", report.entries.len());
//! ```

mod builder;
mod config;
mod discover;
mod error;
mod index;
mod renderer;
mod title;

pub use builder::{BuildProgress, BuildReport, DocsBuilder};
pub use config::{BuildConfig, DEFAULT_SITE_TITLE, INDEX_FILENAME, OUTPUT_DIR, SOURCE_DIR};
pub use discover::{SchemaFile, discover_schemas};
pub use error::BuildError;
pub use index::{DocEntry, render_index};
pub use renderer::{GenerateSchemaDoc, RenderConfig, RenderError, SchemaRenderer};
pub use title::{ParseError, SchemaParser, YamlSchemaParser, resolve_title};
