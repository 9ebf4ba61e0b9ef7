//! Dual-format rendering of the workflow model.
//!
//! Two pure renderers read the same [`AutomationWorkflow`] and
//! [`CodeArtifacts`]:
//!
//! - [`render_structured`]: a JSON tree mirroring the model, stamped with a
//!   caller-supplied timestamp
//! - [`render_document`]: a Markdown playbook for people to follow
//!
//! The [`ArtifactFormat`] trait wraps each renderer with the file name it is
//! written to, so the export driver can treat both the same way.

mod document;
mod markdown;
mod structured;

pub use document::{render_document, PlaybookDocument};
pub use markdown::MarkdownWriter;
pub use structured::{format_timestamp, render_structured, CodeSnippets, StructuredDocument};

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::{AutomationWorkflow, CodeArtifacts, SetupGuide};

/// File name of the structured export.
pub const STRUCTURED_FILE: &str = "workflow-blueprint.json";

/// File name of the Markdown playbook.
pub const DOCUMENT_FILE: &str = "workflow-playbook.md";

/// Errors produced while encoding a rendered artifact.
#[derive(Debug, Error)]
pub enum RenderError {
    /// JSON encoding failed.
    #[error("Failed to encode structured export: {0}")]
    Encode(#[from] serde_json::Error),
}

/// An output format the export driver can write.
pub trait ArtifactFormat: Send + Sync {
    /// Short name of the format (e.g., "json").
    fn name(&self) -> &str;

    /// File name the artifact is written to.
    fn file_name(&self) -> &str;

    /// Render the artifact contents.
    fn render(
        &self,
        workflow: &AutomationWorkflow,
        artifacts: &CodeArtifacts,
        generated_at: DateTime<Utc>,
    ) -> Result<String, RenderError>;
}

/// The JSON blueprint export.
#[derive(Debug, Clone, Copy, Default)]
pub struct StructuredExport;

impl ArtifactFormat for StructuredExport {
    fn name(&self) -> &str {
        "json"
    }

    fn file_name(&self) -> &str {
        STRUCTURED_FILE
    }

    fn render(
        &self,
        workflow: &AutomationWorkflow,
        artifacts: &CodeArtifacts,
        generated_at: DateTime<Utc>,
    ) -> Result<String, RenderError> {
        render_structured(workflow, artifacts, generated_at).to_json()
    }
}

/// The Markdown playbook, optionally carrying a setup guide.
#[derive(Debug, Clone, Default)]
pub struct MarkdownPlaybook {
    setup: Option<SetupGuide>,
}

impl MarkdownPlaybook {
    /// Create the format without a setup guide.
    pub fn new() -> Self {
        Self::default()
    }

    /// Include the setup checklist and sheet header sections.
    pub fn with_setup(mut self, setup: SetupGuide) -> Self {
        self.setup = Some(setup);
        self
    }
}

impl ArtifactFormat for MarkdownPlaybook {
    fn name(&self) -> &str {
        "markdown"
    }

    fn file_name(&self) -> &str {
        DOCUMENT_FILE
    }

    fn render(
        &self,
        workflow: &AutomationWorkflow,
        artifacts: &CodeArtifacts,
        _generated_at: DateTime<Utc>,
    ) -> Result<String, RenderError> {
        let doc = PlaybookDocument::new(workflow, artifacts);
        Ok(match &self.setup {
            Some(setup) => doc.with_setup(setup).render(),
            None => doc.render(),
        })
    }
}
