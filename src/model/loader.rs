//! Workflow file loader.
//!
//! Parses JSON, YAML or TOML workflow files into a validated
//! [`AutomationWorkflow`].

use std::path::Path;

use anyhow::Context;

use super::AutomationWorkflow;

/// Supported workflow file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowFormat {
    Json,
    Yaml,
    Toml,
}

impl WorkflowFormat {
    /// Detect the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }
}

/// Load and validate a workflow from a file.
pub fn load_workflow(path: &Path) -> anyhow::Result<AutomationWorkflow> {
    let format = WorkflowFormat::from_path(path).with_context(|| {
        format!(
            "Unsupported workflow file extension: {} (use .json, .yaml or .toml)",
            path.display()
        )
    })?;

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read workflow file: {}", path.display()))?;

    let workflow = parse_workflow_str(&content, format)
        .with_context(|| format!("Failed to load workflow file: {}", path.display()))?;

    tracing::debug!(
        path = %path.display(),
        modules = workflow.modules.len(),
        steps = workflow.step_count(),
        "Loaded workflow"
    );

    Ok(workflow)
}

/// Parse and validate a workflow from a string.
pub fn parse_workflow_str(
    content: &str,
    format: WorkflowFormat,
) -> anyhow::Result<AutomationWorkflow> {
    let workflow = match format {
        WorkflowFormat::Json => serde_json::from_str(content)?,
        WorkflowFormat::Yaml => serde_yaml::from_str(content)?,
        WorkflowFormat::Toml => toml::from_str(content)?,
    };
    Ok(workflow)
}
