//! Setup guide that accompanies a playbook.
//!
//! The guide is presentation material for the document only; it is not part
//! of the workflow aggregate and does not appear in the structured export.

use serde::{Deserialize, Serialize};

/// A titled group of setup instructions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistSection {
    pub title: String,
    pub details: Vec<String>,
}

impl ChecklistSection {
    /// Create a checklist section.
    pub fn new<I, S>(title: impl Into<String>, details: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { title: title.into(), details: details.into_iter().map(Into::into).collect() }
    }
}

/// Implementation checklist plus the spreadsheet header row the workflow
/// appends to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetupGuide {
    /// Checklist sections, in the order they should be worked through
    pub checklist: Vec<ChecklistSection>,

    /// Name of the sheet tab rows are appended to
    pub sheet_tab: String,

    /// Header row for that tab
    pub sheet_headers: Vec<String>,
}
