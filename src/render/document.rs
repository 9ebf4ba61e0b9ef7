//! Markdown playbook document.
//!
//! Section order is fixed: overview, tool stack, modules, the two code
//! snippets, then deliverables, posting schedule, caption framework and
//! hashtag packs. When a [`SetupGuide`] is attached the checklist and the
//! sheet header table follow at the end.
//!
//! Steps are numbered `<module>.<step>` from 1. The numbers are for
//! reading only; the step id printed beside each title is the stable
//! reference.

use super::markdown::MarkdownWriter;
use crate::model::{AutomationWorkflow, CodeArtifacts, ModuleStep, SetupGuide, WorkflowModule};

/// A renderable playbook document.
#[derive(Debug, Clone, Copy)]
pub struct PlaybookDocument<'a> {
    workflow: &'a AutomationWorkflow,
    artifacts: &'a CodeArtifacts,
    setup: Option<&'a SetupGuide>,
}

impl<'a> PlaybookDocument<'a> {
    /// Create a document for a workflow and its artifacts.
    pub fn new(workflow: &'a AutomationWorkflow, artifacts: &'a CodeArtifacts) -> Self {
        Self { workflow, artifacts, setup: None }
    }

    /// Append the setup checklist and sheet header sections.
    pub fn with_setup(mut self, setup: &'a SetupGuide) -> Self {
        self.setup = Some(setup);
        self
    }

    /// Render the document.
    pub fn render(&self) -> String {
        let mut md = MarkdownWriter::new();

        self.write_overview(&mut md);
        self.write_tools(&mut md);
        self.write_modules(&mut md);
        self.write_snippets(&mut md);
        self.write_deliverables(&mut md);
        self.write_posting(&mut md);
        self.write_caption(&mut md);
        self.write_hashtags(&mut md);

        if let Some(setup) = self.setup {
            write_setup(&mut md, setup);
        }

        let out = md.finish();
        tracing::debug!(bytes = out.len(), "Rendered playbook document");
        out
    }

    fn write_overview(&self, md: &mut MarkdownWriter) {
        let wf = self.workflow;
        md.heading(1, &wf.title);
        md.heading(2, "Overview");
        md.item(0, &format!("**Goal:** {}", wf.goal));
        md.item(0, &format!("**Narrative:** {}", wf.narrative));
        md.item(0, &format!("**Posting Timezone:** {}", wf.posting.timezone));
        md.item(0, &format!("**Recommended Slots:** {}", wf.posting.recommended_slots.join(", ")));
        md.end_block();
    }

    fn write_tools(&self, md: &mut MarkdownWriter) {
        md.heading(2, "Tool Stack");
        for tool in &self.workflow.key_tools {
            md.item(
                0,
                &format!(
                    "[{}]({}) — {} _(Cost: {})_",
                    tool.name,
                    tool.url,
                    tool.description,
                    tool.cost.as_str()
                ),
            );
        }
        md.end_block();
    }

    fn write_modules(&self, md: &mut MarkdownWriter) {
        md.heading(2, "Modules");
        for (idx, module) in self.workflow.modules.iter().enumerate() {
            write_module(md, idx + 1, module);
        }
    }

    fn write_snippets(&self, md: &mut MarkdownWriter) {
        for artifact in self.artifacts.iter() {
            md.heading(2, &format!("Code Snippet · {}", artifact.title));
            md.fence(&artifact.language, &artifact.source);
        }
    }

    fn write_deliverables(&self, md: &mut MarkdownWriter) {
        md.heading(2, "Deliverables");
        for asset in &self.workflow.assets {
            md.item(
                0,
                &format!(
                    "**{}:** {} (Format: {} · Delivery: {})",
                    asset.kind.display_name(),
                    asset.description,
                    asset.format,
                    asset.delivery
                ),
            );
        }
        md.end_block();
    }

    fn write_posting(&self, md: &mut MarkdownWriter) {
        let posting = &self.workflow.posting;
        md.heading(2, "Posting Schedule");
        md.paragraph(&format!("**Timing:** {}", posting.timing_label));
        md.paragraph(&posting.rationale);
    }

    fn write_caption(&self, md: &mut MarkdownWriter) {
        let caption = &self.workflow.caption_template;
        md.heading(2, "Caption Framework");
        md.paragraph(&caption.approach);
        md.paragraph(&format!("**Prompt for AI (optional):** {}", caption.prompt));
        for line in &caption.structure {
            md.item(0, line);
        }
        md.end_block();
    }

    fn write_hashtags(&self, md: &mut MarkdownWriter) {
        md.heading(2, "Hashtag Packs");
        for group in &self.workflow.hashtags {
            md.item(0, &format!("**{}:** {}", group.category, group.items.join(" ")));
        }
        md.end_block();
    }
}

fn write_module(md: &mut MarkdownWriter, number: usize, module: &WorkflowModule) {
    md.heading(3, &format!("{number}. {}", module.title));
    md.paragraph(&format!("**{}**", module.kind_label()));
    md.paragraph(&module.purpose);

    for (idx, step) in module.steps.iter().enumerate() {
        write_step(md, &format!("{number}.{}", idx + 1), step);
    }
}

fn write_step(md: &mut MarkdownWriter, label: &str, step: &ModuleStep) {
    md.hard_break(&format!(
        "{label}. **{}** ({} → {}) · `{}`",
        step.title, step.service, step.action, step.id
    ));
    md.paragraph(&step.description);

    let step_notes = non_empty(step.notes.as_deref());
    if step.fields.is_empty() && step_notes.is_none() {
        return;
    }

    for field in &step.fields {
        md.item(0, &format!("{}: `{}`", field.label, field.value));
        if let Some(notes) = non_empty(field.notes.as_deref()) {
            md.item(1, &format!("_Note:_ {notes}"));
        }
    }
    if let Some(notes) = step_notes {
        md.item(0, &format!("_Note:_ {notes}"));
    }
    md.end_block();
}

/// Blank notes count as absent.
fn non_empty(notes: Option<&str>) -> Option<&str> {
    notes.filter(|n| !n.trim().is_empty())
}

fn write_setup(md: &mut MarkdownWriter, setup: &SetupGuide) {
    if !setup.checklist.is_empty() {
        md.heading(2, "Setup Checklist");
        for section in &setup.checklist {
            md.heading(3, &section.title);
            for detail in &section.details {
                md.task(detail);
            }
            md.end_block();
        }
    }

    if !setup.sheet_headers.is_empty() {
        md.heading(2, "Sheet Header Template");
        md.paragraph(&format!(
            "Create the `{}` tab with this header row so rows append without mapping errors:",
            setup.sheet_tab
        ));
        md.table(&setup.sheet_headers, &[]);
    }
}

/// Render the Markdown document for a workflow and its artifacts.
pub fn render_document(workflow: &AutomationWorkflow, artifacts: &CodeArtifacts) -> String {
    PlaybookDocument::new(workflow, artifacts).render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ChecklistSection;
    use crate::render::fixtures;

    fn document() -> String {
        render_document(&fixtures::workflow(), &fixtures::artifacts())
    }

    #[test]
    fn test_section_order() {
        let doc = document();
        let sections = [
            "# Fixture Flow",
            "## Overview",
            "## Tool Stack",
            "## Modules",
            "## Code Snippet · Scoring Builder",
            "## Code Snippet · Digest Formatter",
            "## Deliverables",
            "## Posting Schedule",
            "## Caption Framework",
            "## Hashtag Packs",
        ];
        let positions: Vec<_> = sections.iter().map(|s| doc.find(s).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_overview_block() {
        let doc = document();
        assert!(doc.contains("- **Goal:** Collect clips\n"));
        assert!(doc.contains("- **Narrative:** A fixture narrative\n"));
        assert!(doc.contains("- **Posting Timezone:** America/New_York\n"));
        assert!(doc.contains("- **Recommended Slots:** 09:00 EST, 18:00 EST\n"));
    }

    #[test]
    fn test_tool_line() {
        let doc = document();
        assert!(doc.contains(
            "- [Pabbly Connect](https://www.pabbly.com/connect/) — Automation hub _(Cost: freemium)_\n"
        ));
        assert!(doc.contains("_(Cost: free)_"));
    }

    #[test]
    fn test_step_numbering() {
        let doc = document();
        let labels = ["1.1. **", "1.2. **", "1.3. **", "2.1. **"];
        let positions: Vec<_> = labels.iter().map(|l| doc.find(l).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(!doc.contains("1.4. **"));
        assert!(!doc.contains("2.2. **"));
    }

    #[test]
    fn test_step_line_format() {
        let doc = document();
        assert!(doc.contains(
            "1.1. **Run Schedule** (Scheduler by Pabbly → Specific Times) · `run-schedule`  \n\
             Fires the pipeline.\n"
        ));
    }

    #[test]
    fn test_module_order_and_kind() {
        let doc = document();
        let first = doc.find("### 1. Discover").unwrap();
        let second = doc.find("### 2. Deliver").unwrap();
        assert!(first < second);
        assert!(doc.contains("### 1. Discover\n\n**Trigger**\n\n"));
        assert!(doc.contains("### 2. Deliver\n\n**Action**\n\n"));
    }

    #[test]
    fn test_field_notes_only_when_present() {
        let doc = document();
        assert!(doc.contains("- Times: `09:00, 18:00`\n  - _Note:_ Eastern time\n"));
        assert!(doc.contains("- Method: `GET`\n- URL: `https://example.com/search`\n"));

        let workflow = fixtures::workflow();
        let notes = workflow.steps().flat_map(|s| s.fields.iter()).filter(|f| f.notes.is_some());
        let step_notes = workflow.steps().filter(|s| s.notes.is_some());
        assert_eq!(doc.matches("_Note:_").count(), notes.count() + step_notes.count());
    }

    #[test]
    fn test_step_without_fields_or_notes_has_no_list() {
        let doc = document();
        assert!(doc.contains("· `score`  \nScores each candidate.\n\n### 2. Deliver"));
    }

    #[test]
    fn test_step_notes_follow_fields() {
        let doc = document();
        assert!(doc.contains("- Sheet: `Queue`\n- _Note:_ Share the sheet first.\n"));
    }

    #[test]
    fn test_snippets_are_fenced_verbatim() {
        let artifacts = fixtures::artifacts();
        let doc = render_document(&fixtures::workflow(), &artifacts);
        for artifact in artifacts.iter() {
            let fenced = format!("```{}\n{}\n```", artifact.language, artifact.source);
            assert!(doc.contains(&fenced), "missing verbatim fence for {}", artifact.name);
        }
    }

    #[test]
    fn test_values_are_not_escaped() {
        let doc = document();
        assert!(doc.contains("- Query: `q=a|b*c_d`\n"));
    }

    #[test]
    fn test_every_item_appears_once() {
        let doc = document();
        let workflow = fixtures::workflow();

        for module in &workflow.modules {
            assert_eq!(doc.matches(&format!(". {}\n", module.title)).count(), 1);
        }
        for step in workflow.steps() {
            assert_eq!(doc.matches(&format!("`{}`  \n", step.id)).count(), 1, "{}", step.id);
            for field in &step.fields {
                assert_eq!(doc.matches(&format!("- {}: ", field.label)).count(), 1);
            }
        }
        for tool in &workflow.key_tools {
            assert_eq!(doc.matches(&format!("[{}]", tool.name)).count(), 1);
        }
        for asset in &workflow.assets {
            assert_eq!(doc.matches(&asset.description).count(), 1);
        }
        for slot in &workflow.posting.recommended_slots {
            assert_eq!(doc.matches(slot.as_str()).count(), 1);
        }
        for line in &workflow.caption_template.structure {
            assert_eq!(doc.matches(&format!("- {line}\n")).count(), 1);
        }
        for group in &workflow.hashtags {
            assert_eq!(doc.matches(&format!("**{}:**", group.category)).count(), 1);
            for tag in &group.items {
                assert_eq!(doc.matches(tag.as_str()).count(), 1);
            }
        }
    }

    #[test]
    fn test_blank_notes_are_omitted() {
        let mut def = fixtures::workflow().into_definition();
        def.modules[0].steps[0].fields[0].notes = Some(String::new());
        def.modules[1].steps[0].notes = Some(String::new());
        let workflow = AutomationWorkflow::new(def).unwrap();

        let doc = render_document(&workflow, &fixtures::artifacts());
        assert!(!doc.contains("_Note:_"));
        assert!(doc.contains("- Times: `09:00, 18:00`\n"));
        assert!(doc.contains("- Sheet: `Queue`\n"));
    }

    #[test]
    fn test_empty_description_leaves_single_blank_line() {
        let mut def = fixtures::workflow().into_definition();
        def.modules[0].steps[0].description = String::new();
        def.modules[0].steps[2].description = String::new();
        let workflow = AutomationWorkflow::new(def).unwrap();
        let artifacts = fixtures::artifacts();

        let doc = render_document(&workflow, &artifacts);
        assert!(doc.contains("· `run-schedule`  \n\n- Times:"));
        assert!(doc.contains("· `score`  \n\n### 2. Deliver"));

        let without_code =
            artifacts.iter().fold(doc.clone(), |acc, a| acc.replace(a.source.as_str(), ""));
        assert!(!without_code.contains("\n\n\n"));
    }

    #[test]
    fn test_no_blank_line_runs() {
        let artifacts = fixtures::artifacts();
        let doc = render_document(&fixtures::workflow(), &artifacts);
        let without_code =
            artifacts.iter().fold(doc.clone(), |acc, a| acc.replace(a.source.as_str(), ""));
        assert!(!without_code.contains("\n\n\n"));
        assert!(doc.ends_with('\n') && !doc.ends_with("\n\n"));
    }

    #[test]
    fn test_setup_sections_only_when_attached() {
        let workflow = fixtures::workflow();
        let artifacts = fixtures::artifacts();
        assert!(!render_document(&workflow, &artifacts).contains("## Setup Checklist"));

        let setup = SetupGuide {
            checklist: vec![ChecklistSection::new("Prepare", ["Create the sheet", "Share it"])],
            sheet_tab: "Queue".to_string(),
            sheet_headers: vec!["Timestamp".to_string(), "Video Title".to_string()],
        };
        let doc = PlaybookDocument::new(&workflow, &artifacts).with_setup(&setup).render();

        assert!(doc.contains("## Setup Checklist\n\n### Prepare\n\n- [ ] Create the sheet\n"));
        assert!(doc.contains("| Timestamp | Video Title |\n| --- | --- |\n"));
        assert!(doc.find("## Hashtag Packs").unwrap() < doc.find("## Setup Checklist").unwrap());
    }
}
