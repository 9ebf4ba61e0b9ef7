//! Workflow description model.
//!
//! The model is an immutable, validated description of a multi-module
//! automation pipeline together with the two code artifacts that ship
//! alongside it. Build it once with [`AutomationWorkflow::new`] and
//! [`CodeArtifacts::new`], then hand out shared references.

pub mod artifact;
mod error;
mod loader;
mod setup;
mod types;
mod workflow;

pub use artifact::{CodeArtifact, CodeArtifacts, DIGEST, SCORING};
pub use error::{Collection, ValidationError};
pub use loader::{load_workflow, parse_workflow_str, WorkflowFormat};
pub use setup::{ChecklistSection, SetupGuide};
pub use types::{
    AssetType, CaptionTemplate, CostTier, HashtagGroup, ModuleField, ModuleStep, PostingSchedule,
    ToolReference, WorkflowAsset, WorkflowModule,
};
pub use workflow::{AutomationWorkflow, WorkflowDefinition};
