//! Build progress printed to the terminal.

use std::path::{Path, PathBuf};

use schemadoc_build::{BuildProgress, SchemaFile};

use crate::output::Output;

/// Prints build progress with paths shown relative to the project root.
pub(crate) struct ConsoleProgress {
    output: Output,
    root: PathBuf,
}

impl ConsoleProgress {
    pub(crate) fn new(root: PathBuf) -> Self {
        Self {
            output: Output::new(),
            root,
        }
    }

    fn display(&self, path: &Path) -> String {
        path.strip_prefix(&self.root)
            .unwrap_or(path)
            .display()
            .to_string()
    }
}

impl BuildProgress for ConsoleProgress {
    fn discovered(&self, schemas: &[SchemaFile]) {
        self.output.info(&found_line(schemas));
    }

    fn page_written(&self, path: &Path) {
        self.output
            .info(&format!("  docs -> {}", self.display(path)));
    }

    fn index_written(&self, path: &Path) {
        self.output
            .info(&format!("  index -> {}", self.display(path)));
    }
}

/// Summary line for the discovered schemas.
fn found_line(schemas: &[SchemaFile]) -> String {
    let names: Vec<&str> = schemas.iter().map(|s| s.file_name.as_str()).collect();
    format!("Found {} schema(s): {}", schemas.len(), names.join(", "))
}
