//! The workflow aggregate and its validated construction.

use std::collections::HashSet;
use std::ops::Deref;

use serde::{Deserialize, Serialize, Serializer};

use super::error::{Collection, ValidationError};
use super::types::{
    CaptionTemplate, HashtagGroup, ModuleStep, PostingSchedule, ToolReference, WorkflowAsset,
    WorkflowModule,
};

/// Unvalidated workflow shape.
///
/// This is what workflow files deserialize into and what the built-in
/// playbook assembles. It becomes usable by the renderers only after
/// passing through [`AutomationWorkflow::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowDefinition {
    pub title: String,
    pub narrative: String,
    pub goal: String,
    pub key_tools: Vec<ToolReference>,
    pub modules: Vec<WorkflowModule>,
    pub assets: Vec<WorkflowAsset>,
    pub posting: PostingSchedule,
    pub caption_template: CaptionTemplate,
    pub hashtags: Vec<HashtagGroup>,
}

/// A validated, read-only automation workflow.
///
/// Construction checks that tool names, module ids, step ids (across all
/// modules), field labels (within a step), asset types and hashtag
/// categories are unique. Once built the workflow is never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "WorkflowDefinition")]
pub struct AutomationWorkflow(WorkflowDefinition);

impl AutomationWorkflow {
    /// Validate a definition and wrap it.
    pub fn new(definition: WorkflowDefinition) -> Result<Self, ValidationError> {
        validate(&definition)?;

        if !definition.modules.iter().any(|m| m.trigger) {
            tracing::warn!(workflow = %definition.title, "Workflow has no trigger module");
        }

        Ok(Self(definition))
    }

    /// Get the underlying definition.
    pub fn definition(&self) -> &WorkflowDefinition {
        &self.0
    }

    /// Unwrap into the underlying definition.
    pub fn into_definition(self) -> WorkflowDefinition {
        self.0
    }

    /// Total number of steps across all modules.
    pub fn step_count(&self) -> usize {
        self.0.modules.iter().map(|m| m.steps.len()).sum()
    }

    /// Iterate over every step in execution order.
    pub fn steps(&self) -> impl Iterator<Item = &ModuleStep> {
        self.0.modules.iter().flat_map(|m| m.steps.iter())
    }

    /// Find a step by its identifier.
    pub fn find_step(&self, id: &str) -> Option<&ModuleStep> {
        self.steps().find(|s| s.id == id)
    }

    /// Get the modules that start the pipeline.
    pub fn trigger_modules(&self) -> Vec<&WorkflowModule> {
        self.0.modules.iter().filter(|m| m.trigger).collect()
    }
}

impl Deref for AutomationWorkflow {
    type Target = WorkflowDefinition;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl TryFrom<WorkflowDefinition> for AutomationWorkflow {
    type Error = ValidationError;

    fn try_from(definition: WorkflowDefinition) -> Result<Self, Self::Error> {
        Self::new(definition)
    }
}

impl Serialize for AutomationWorkflow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

fn validate(definition: &WorkflowDefinition) -> Result<(), ValidationError> {
    ensure_unique(Collection::Tools, definition.key_tools.iter().map(|t| t.name.as_str()))?;
    ensure_unique(Collection::Modules, definition.modules.iter().map(|m| m.id.as_str()))?;
    ensure_unique(
        Collection::Steps,
        definition.modules.iter().flat_map(|m| m.steps.iter()).map(|s| s.id.as_str()),
    )?;

    for step in definition.modules.iter().flat_map(|m| m.steps.iter()) {
        let mut seen = HashSet::new();
        for field in &step.fields {
            if !seen.insert(field.label.as_str()) {
                return Err(ValidationError::DuplicateField {
                    step: step.id.clone(),
                    label: field.label.clone(),
                });
            }
        }
    }

    ensure_unique(Collection::Assets, definition.assets.iter().map(|a| a.kind.as_str()))?;
    ensure_unique(
        Collection::HashtagGroups,
        definition.hashtags.iter().map(|g| g.category.as_str()),
    )?;

    Ok(())
}

/// Fail on the first identifier that was already seen.
pub(crate) fn ensure_unique<'a>(
    collection: Collection,
    ids: impl IntoIterator<Item = &'a str>,
) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ValidationError::Duplicate { collection, id: id.to_string() });
        }
    }
    Ok(())
}
