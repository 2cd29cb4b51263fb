//! Per-schema page generation.
//!
//! Rendering a schema to HTML is delegated to an external generator. The
//! default [`GenerateSchemaDoc`] runs the json-schema-for-humans command line
//! tool; tests plug in their own [`SchemaRenderer`].

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

/// Default generator executable, looked up on `PATH`.
const DEFAULT_PROGRAM: &str = "generate-schema-doc";

/// Generator options applied to every schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Generator template name. `js` is the interactive HTML template.
    pub template_name: String,
    /// Show breadcrumb navigation on generated pages.
    pub show_breadcrumbs: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            template_name: "js".to_owned(),
            show_breadcrumbs: true,
        }
    }
}

impl RenderConfig {
    /// Options as `key=value` pairs understood by the generator.
    fn options(&self) -> Vec<String> {
        vec![
            format!("template_name={}", self.template_name),
            format!("show_breadcrumbs={}", self.show_breadcrumbs),
        ]
    }
}

/// Error produced while generating a schema page.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Failed to launch {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Generator failed for {} ({status}): {stderr}", schema.display())]
    Failed {
        schema: PathBuf,
        status: ExitStatus,
        stderr: String,
    },
}

/// Renders one schema file to one HTML page.
pub trait SchemaRenderer {
    /// Write the page for `schema` to `output`.
    ///
    /// The parent directory of `output` already exists.
    fn render(&self, schema: &Path, output: &Path, config: &RenderConfig)
    -> Result<(), RenderError>;
}

/// [`SchemaRenderer`] that shells out to json-schema-for-humans.
#[derive(Debug, Clone)]
pub struct GenerateSchemaDoc {
    program: PathBuf,
}

impl Default for GenerateSchemaDoc {
    fn default() -> Self {
        Self::with_program(DEFAULT_PROGRAM)
    }
}

impl GenerateSchemaDoc {
    /// Use the `generate-schema-doc` executable found on `PATH`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a specific generator executable.
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Command line arguments for one invocation.
    fn args(schema: &Path, output: &Path, config: &RenderConfig) -> Vec<OsString> {
        let mut args = Vec::new();
        for option in config.options() {
            args.push(OsString::from("--config"));
            args.push(OsString::from(option));
        }
        args.push(schema.as_os_str().to_owned());
        args.push(output.as_os_str().to_owned());
        args
    }
}

impl SchemaRenderer for GenerateSchemaDoc {
    fn render(
        &self,
        schema: &Path,
        output: &Path,
        config: &RenderConfig,
    ) -> Result<(), RenderError> {
        tracing::debug!(
            program = %self.program.display(),
            schema = %schema.display(),
            output = %output.display(),
            "Running schema generator"
        );

        let result = Command::new(&self.program)
            .args(Self::args(schema, output, config))
            .output()
            .map_err(|source| RenderError::Spawn {
                program: self.program.display().to_string(),
                source,
            })?;

        if !result.status.success() {
            return Err(RenderError::Failed {
                schema: schema.to_path_buf(),
                status: result.status,
                stderr: String::from_utf8_lossy(&result.stderr).trim().to_owned(),
            });
        }
        Ok(())
    }
}
