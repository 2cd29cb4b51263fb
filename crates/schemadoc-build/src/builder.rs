//! Documentation site builder.
//!
//! A build is one linear pass: discover schemas, render each page while
//! collecting [`DocEntry`] records, then write the index.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{BuildConfig, INDEX_FILENAME};
use crate::discover::{SchemaFile, discover_schemas};
use crate::error::BuildError;
use crate::index::{DocEntry, render_index};
use crate::renderer::{GenerateSchemaDoc, SchemaRenderer};
use crate::title::{SchemaParser, YamlSchemaParser, resolve_title};

/// Receives progress notifications during a build.
///
/// All methods default to doing nothing.
pub trait BuildProgress {
    /// Schemas were discovered, in processing order.
    fn discovered(&self, _schemas: &[SchemaFile]) {}

    /// A schema page was written.
    fn page_written(&self, _path: &Path) {}

    /// The index page was written.
    fn index_written(&self, _path: &Path) {}
}

/// Progress sink that ignores every notification.
struct Silent;

impl BuildProgress for Silent {}

/// Result of a successful build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    /// Entries listed on the index, in discovery order.
    pub entries: Vec<DocEntry>,
    /// Path of the written index page.
    pub index_path: PathBuf,
}

/// Builds schema documentation from a source directory.
pub struct DocsBuilder {
    config: BuildConfig,
    parser: Box<dyn SchemaParser>,
    renderer: Box<dyn SchemaRenderer>,
    progress: Box<dyn BuildProgress>,
}

impl DocsBuilder {
    /// Create a builder using the YAML parser and the command line generator.
    pub fn new(config: BuildConfig) -> Self {
        Self {
            config,
            parser: Box::new(YamlSchemaParser),
            renderer: Box::new(GenerateSchemaDoc::new()),
            progress: Box::new(Silent),
        }
    }

    /// Replace the schema parser.
    #[must_use]
    pub fn with_parser(mut self, parser: impl SchemaParser + 'static) -> Self {
        self.parser = Box::new(parser);
        self
    }

    /// Replace the page generator.
    #[must_use]
    pub fn with_renderer(mut self, renderer: impl SchemaRenderer + 'static) -> Self {
        self.renderer = Box::new(renderer);
        self
    }

    /// Report progress to the given sink.
    #[must_use]
    pub fn with_progress(mut self, progress: impl BuildProgress + 'static) -> Self {
        self.progress = Box::new(progress);
        self
    }

    /// Run the build.
    ///
    /// Nothing is written if discovery or output name checks fail. Any later
    /// failure leaves already generated pages in place and skips the index.
    pub fn build(&self) -> Result<BuildReport, BuildError> {
        let schemas = discover_schemas(&self.config.source_dir)?;
        check_output_names(&schemas)?;
        self.progress.discovered(&schemas);

        let output_dir = &self.config.output_dir;
        fs::create_dir_all(output_dir).map_err(|source| BuildError::CreateOutputDir {
            path: output_dir.clone(),
            source,
        })?;

        let mut entries = Vec::with_capacity(schemas.len());
        for schema in &schemas {
            entries.push(self.build_page(schema)?);
        }

        let index_path = self.config.index_path();
        let html = render_index(&self.config.site_title, &entries);
        fs::write(&index_path, html).map_err(|source| BuildError::WriteIndex {
            path: index_path.clone(),
            source,
        })?;
        tracing::info!(path = %index_path.display(), pages = entries.len(), "Wrote index");
        self.progress.index_written(&index_path);

        Ok(BuildReport {
            entries,
            index_path,
        })
    }

    /// Resolve the title and render the page for one schema.
    fn build_page(&self, schema: &SchemaFile) -> Result<DocEntry, BuildError> {
        let title = resolve_title(self.parser.as_ref(), schema)?;
        let output_filename = schema.output_filename();
        let output_path = self.config.output_dir.join(&output_filename);

        self.renderer
            .render(&schema.path, &output_path, &self.config.render)?;
        tracing::info!(
            schema = %schema.path.display(),
            path = %output_path.display(),
            title = %title,
            "Wrote schema page"
        );
        self.progress.page_written(&output_path);

        Ok(DocEntry {
            title,
            output_filename,
            source_filename: schema.file_name.clone(),
        })
    }
}

/// Reject schemas whose pages would overwrite each other or the index.
///
/// Names are compared ignoring ASCII case so the check holds on
/// case-insensitive filesystems too.
fn check_output_names(schemas: &[SchemaFile]) -> Result<(), BuildError> {
    let mut seen: HashMap<String, &SchemaFile> = HashMap::with_capacity(schemas.len());
    for schema in schemas {
        let output = schema.output_filename();
        let key = output.to_ascii_lowercase();
        if key == INDEX_FILENAME {
            return Err(BuildError::ReservedOutput {
                path: schema.path.clone(),
                output,
            });
        }
        if let Some(first) = seen.insert(key, schema) {
            return Err(BuildError::DuplicateOutput {
                first: first.path.clone(),
                second: schema.path.clone(),
                output,
            });
        }
    }
    Ok(())
}
