//! # Imagines Blueprint
//!
//! Generates the artifacts for a no-code automation that curates Wattpad
//! "imagines" videos from YouTube and queues them for TikTok.
//!
//! The crate models the workflow as a validated aggregate, then renders it
//! twice: a lossless JSON blueprint and a human-readable Markdown playbook.
//!
//! ## Quick Start
//!
//! ```bash
//! # Write out/workflow-blueprint.json and out/workflow-playbook.md
//! blueprint
//!
//! # Print the playbook without touching the filesystem
//! blueprint render --format markdown
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
// Allow common patterns that are intentional in this codebase
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::option_if_let_else)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::format_push_string)]

pub mod config;
pub mod export;
pub mod model;
pub mod playbook;
pub mod render;

pub use config::Config;
pub use export::{ExportError, ExportReport, Exporter};
pub use model::{AutomationWorkflow, CodeArtifacts, ValidationError, WorkflowDefinition};
pub use playbook::Playbook;
pub use render::{render_document, render_structured, ArtifactFormat, RenderError};

/// Version of the blueprint generator.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name, used for the binary and the config directory.
pub const APP_NAME: &str = "blueprint";
