//! Structured (JSON) export of the workflow.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::ser::{Serialize, Serializer};

use super::RenderError;
use crate::model::{AutomationWorkflow, CodeArtifacts};

/// The structured export tree.
///
/// Serializes to `generatedAt`, `workflow` and `codeSnippets`, in that
/// order. The workflow is serialized as-is, so its field names and order
/// match the model.
#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredDocument<'a> {
    pub generated_at: String,
    pub workflow: &'a AutomationWorkflow,
    pub code_snippets: CodeSnippets<'a>,
}

/// Maps artifact names to their literal source, in artifact order.
#[derive(Debug, Clone, Copy)]
pub struct CodeSnippets<'a>(&'a CodeArtifacts);

impl Serialize for CodeSnippets<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|a| (a.name.as_str(), a.source.as_str())))
    }
}

impl StructuredDocument<'_> {
    /// Encode as pretty-printed JSON with two-space indentation.
    pub fn to_json(&self) -> Result<String, RenderError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Encode as a JSON value tree.
    pub fn to_value(&self) -> Result<serde_json::Value, RenderError> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Format a timestamp the way the export records it.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Build the structured export for a workflow and its artifacts.
pub fn render_structured<'a>(
    workflow: &'a AutomationWorkflow,
    artifacts: &'a CodeArtifacts,
    generated_at: DateTime<Utc>,
) -> StructuredDocument<'a> {
    StructuredDocument {
        generated_at: format_timestamp(generated_at),
        workflow,
        code_snippets: CodeSnippets(artifacts),
    }
}
