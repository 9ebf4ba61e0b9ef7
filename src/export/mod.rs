//! Export driver.
//!
//! Renders every registered [`ArtifactFormat`] with one shared timestamp and
//! writes the results into a destination directory. The directory is created
//! on demand. Files already written stay in place when a later write fails,
//! and nothing is retried.

mod error;

pub use error::{ExportError, ExportResult};

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::model::{AutomationWorkflow, CodeArtifacts, SetupGuide};
use crate::render::{ArtifactFormat, MarkdownPlaybook, StructuredExport};

/// One artifact written by the driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenArtifact {
    /// Format name (e.g., "json")
    pub format: String,

    /// Where the file was written
    pub path: PathBuf,

    /// Size in bytes
    pub bytes: usize,
}

/// Outcome of a successful export.
#[derive(Debug, Clone)]
pub struct ExportReport {
    /// Timestamp stamped into the artifacts
    pub generated_at: DateTime<Utc>,

    /// Written files, in registration order
    pub files: Vec<WrittenArtifact>,
}

impl ExportReport {
    /// Get the paths of every written file.
    pub fn paths(&self) -> Vec<&Path> {
        self.files.iter().map(|f| f.path.as_path()).collect()
    }

    /// Get the path written for a format.
    pub fn path_of(&self, format: &str) -> Option<&Path> {
        self.files.iter().find(|f| f.format == format).map(|f| f.path.as_path())
    }
}

/// Writes rendered artifacts to a directory.
pub struct Exporter {
    dir: PathBuf,
    formats: Vec<Box<dyn ArtifactFormat>>,
}

impl Exporter {
    /// Create an exporter with no formats registered.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into(), formats: Vec::new() }
    }

    /// Create an exporter writing the JSON blueprint and the Markdown playbook.
    pub fn with_default_formats(dir: impl Into<PathBuf>) -> Self {
        Self::with_playbook(dir, MarkdownPlaybook::new())
    }

    /// Like [`Exporter::with_default_formats`], with the setup checklist and
    /// sheet header sections appended to the playbook.
    pub fn with_setup(dir: impl Into<PathBuf>, setup: SetupGuide) -> Self {
        Self::with_playbook(dir, MarkdownPlaybook::new().with_setup(setup))
    }

    fn with_playbook(dir: impl Into<PathBuf>, playbook: MarkdownPlaybook) -> Self {
        let mut exporter = Self::new(dir);
        exporter.register(Box::new(StructuredExport));
        exporter.register(Box::new(playbook));
        exporter
    }

    /// Register an output format.
    pub fn register(&mut self, format: Box<dyn ArtifactFormat>) {
        self.formats.push(format);
    }

    /// Get the destination directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Get all registered formats.
    pub fn formats(&self) -> &[Box<dyn ArtifactFormat>] {
        &self.formats
    }

    /// Export using the current time.
    pub fn export(
        &self,
        workflow: &AutomationWorkflow,
        artifacts: &CodeArtifacts,
    ) -> ExportResult<ExportReport> {
        self.export_at(workflow, artifacts, Utc::now())
    }

    /// Export with a fixed timestamp.
    pub fn export_at(
        &self,
        workflow: &AutomationWorkflow,
        artifacts: &CodeArtifacts,
        generated_at: DateTime<Utc>,
    ) -> ExportResult<ExportReport> {
        std::fs::create_dir_all(&self.dir)
            .map_err(|source| ExportError::CreateDir { path: self.dir.clone(), source })?;

        let rendered = self
            .formats
            .iter()
            .map(|format| Ok((format, format.render(workflow, artifacts, generated_at)?)))
            .collect::<ExportResult<Vec<_>>>()?;

        let mut files = Vec::with_capacity(rendered.len());
        for (format, content) in rendered {
            let path = self.dir.join(format.file_name());
            std::fs::write(&path, &content)
                .map_err(|source| ExportError::Write { path: path.clone(), source })?;

            tracing::info!(format = format.name(), path = %path.display(), "Wrote artifact");
            files.push(WrittenArtifact {
                format: format.name().to_string(),
                path,
                bytes: content.len(),
            });
        }

        Ok(ExportReport { generated_at, files })
    }
}
