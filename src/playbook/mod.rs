//! The built-in TikTok Wattpad imagines playbook.
//!
//! Bundles the workflow definition, the two code snippets and the setup
//! guide. Any of the three content pieces can be replaced from files via
//! [`SourceConfig`].

mod setup;
mod snippets;
mod workflow;

pub use setup::{guide as setup_guide, SHEET_HEADERS};
pub use snippets::{artifacts as builtin_artifacts, DIGEST_SOURCE, SCORING_SOURCE};
pub use workflow::definition as builtin_definition;

use std::path::Path;

use anyhow::Context;

use crate::config::SourceConfig;
use crate::model::{load_workflow, AutomationWorkflow, CodeArtifacts, SetupGuide};

/// Everything needed to render the artifacts.
#[derive(Debug, Clone)]
pub struct Playbook {
    /// The validated workflow
    pub workflow: AutomationWorkflow,

    /// Scoring and digest snippets
    pub artifacts: CodeArtifacts,

    /// Setup checklist and sheet headers
    pub setup: SetupGuide,
}

impl Playbook {
    /// Build the built-in playbook.
    pub fn builtin() -> anyhow::Result<Self> {
        let workflow = AutomationWorkflow::new(builtin_definition())
            .context("Built-in workflow failed validation")?;
        let artifacts = builtin_artifacts().context("Built-in code artifacts are invalid")?;
        Ok(Self { workflow, artifacts, setup: setup_guide() })
    }

    /// Build the playbook, replacing built-in pieces with the configured files.
    pub fn load(source: &SourceConfig) -> anyhow::Result<Self> {
        let mut playbook = Self::builtin()?;

        if let Some(path) = &source.workflow {
            playbook.workflow = load_workflow(path)?;
        }
        if let Some(path) = &source.scoring {
            playbook.artifacts = playbook.artifacts.with_scoring_source(read_snippet(path)?);
        }
        if let Some(path) = &source.digest {
            playbook.artifacts = playbook.artifacts.with_digest_source(read_snippet(path)?);
        }

        tracing::debug!(
            title = %playbook.workflow.title,
            modules = playbook.workflow.modules.len(),
            steps = playbook.workflow.step_count(),
            "Playbook ready"
        );
        Ok(playbook)
    }
}

fn read_snippet(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read code snippet {}", path.display()))
}
