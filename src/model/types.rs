//! Entity types for the automation workflow model.
//!
//! Every type here mirrors one entity of the playbook. Field names are
//! serialized in camelCase so the structured export matches the model
//! shape consumed by the display surface.

use serde::{Deserialize, Serialize};

/// Cost tier of a tool in the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CostTier {
    Free,
    Freemium,
}

impl CostTier {
    /// Get the tag used in rendered output.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Free => "free",
            Self::Freemium => "freemium",
        }
    }
}

/// A third-party tool the playbook relies on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolReference {
    /// Tool name (unique within the tool list)
    pub name: String,

    /// Landing page
    pub url: String,

    /// One-line description
    pub description: String,

    /// Cost tier
    pub cost: CostTier,
}

impl ToolReference {
    /// Create a new tool reference.
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        description: impl Into<String>,
        cost: CostTier,
    ) -> Self {
        Self { name: name.into(), url: url.into(), description: description.into(), cost }
    }
}

/// A key/value configuration entry attached to a step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleField {
    /// Field label as shown in the automation platform
    pub label: String,

    /// Value to enter
    pub value: String,

    /// Optional note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ModuleField {
    /// Create a field without a note.
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self { label: label.into(), value: value.into(), notes: None }
    }

    /// Attach a note.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// One configured unit of work in the automation platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleStep {
    /// Identifier, unique across the whole workflow
    pub id: String,

    /// Step title
    pub title: String,

    /// Target service (e.g. "Google Sheets")
    pub service: String,

    /// Target action (e.g. "Add New Row")
    pub action: String,

    /// What the step does
    pub description: String,

    /// Configuration fields in entry order
    #[serde(default)]
    pub fields: Vec<ModuleField>,

    /// Optional free-text note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ModuleStep {
    /// Create a step with no fields.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        service: impl Into<String>,
        action: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            service: service.into(),
            action: action.into(),
            description: description.into(),
            fields: Vec::new(),
            notes: None,
        }
    }

    /// Add a field.
    pub fn with_field(mut self, field: ModuleField) -> Self {
        self.fields.push(field);
        self
    }

    /// Attach a note.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// A named stage of the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowModule {
    /// Identifier, unique across the workflow
    pub id: String,

    /// Module title
    pub title: String,

    /// Why this module exists
    pub purpose: String,

    /// Whether this module is a pipeline entry point
    pub trigger: bool,

    /// Steps in execution order
    pub steps: Vec<ModuleStep>,
}

impl WorkflowModule {
    /// Create a trigger module.
    pub fn trigger(
        id: impl Into<String>,
        title: impl Into<String>,
        purpose: impl Into<String>,
    ) -> Self {
        Self::new(id, title, purpose, true)
    }

    /// Create an action module.
    pub fn action(
        id: impl Into<String>,
        title: impl Into<String>,
        purpose: impl Into<String>,
    ) -> Self {
        Self::new(id, title, purpose, false)
    }

    fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        purpose: impl Into<String>,
        trigger: bool,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            purpose: purpose.into(),
            trigger,
            steps: Vec::new(),
        }
    }

    /// Add a step.
    pub fn with_step(mut self, step: ModuleStep) -> Self {
        self.steps.push(step);
        self
    }

    /// Label used wherever the module kind is displayed.
    pub fn kind_label(&self) -> &str {
        if self.trigger {
            "Trigger"
        } else {
            "Action"
        }
    }
}

/// When and why to publish.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostingSchedule {
    pub timing_label: String,
    pub timezone: String,
    pub recommended_slots: Vec<String>,
    pub rationale: String,
}

/// Guidance for writing captions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptionTemplate {
    /// Overall approach
    pub approach: String,

    /// Prompt for optional AI assistance
    pub prompt: String,

    /// Structural guideline lines, in order
    pub structure: Vec<String>,
}

/// A named pack of hashtags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashtagGroup {
    /// Category name (unique)
    pub category: String,

    /// Tags in order
    pub items: Vec<String>,
}

impl HashtagGroup {
    /// Create a hashtag group.
    pub fn new<I, S>(category: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { category: category.into(), items: items.into_iter().map(Into::into).collect() }
    }
}

/// Kind of output the workflow produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    Video,
    Caption,
    Schedule,
}

impl AssetType {
    /// Get the identifier used in rendered output.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Video => "video",
            Self::Caption => "caption",
            Self::Schedule => "schedule",
        }
    }

    /// Get a capitalized display name.
    pub fn display_name(&self) -> &str {
        match self {
            Self::Video => "Video",
            Self::Caption => "Caption",
            Self::Schedule => "Schedule",
        }
    }
}

/// An output asset delivered by the workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowAsset {
    /// Asset type (unique)
    #[serde(rename = "type")]
    pub kind: AssetType,

    /// What the asset is
    pub description: String,

    /// Format label
    pub format: String,

    /// Delivery mechanism label
    pub delivery: String,
}

impl WorkflowAsset {
    /// Create an asset.
    pub fn new(
        kind: AssetType,
        description: impl Into<String>,
        format: impl Into<String>,
        delivery: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            description: description.into(),
            format: format.into(),
            delivery: delivery.into(),
        }
    }
}
