//! Append-only Markdown builder.
//!
//! The writer never escapes anything. Text handed to it lands in the
//! output exactly as given, and fenced code bodies are copied verbatim.
//! A value containing Markdown syntax (backticks, fence delimiters, pipes)
//! therefore renders as that syntax. This matches how the playbook content
//! is authored: values are meant to be pasted into the automation platform
//! as-is, so rewriting them would corrupt what the reader copies.

/// Builds a Markdown document one block at a time.
#[derive(Debug, Default)]
pub struct MarkdownWriter {
    buf: String,
}

impl MarkdownWriter {
    /// Create an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Write an ATX heading followed by a blank line.
    pub fn heading(&mut self, level: usize, text: &str) -> &mut Self {
        self.buf.push_str(&"#".repeat(level.clamp(1, 6)));
        self.buf.push(' ');
        self.buf.push_str(text);
        self.buf.push_str("\n\n");
        self
    }

    /// Write a paragraph followed by a blank line. Empty text only closes
    /// the current block.
    pub fn paragraph(&mut self, text: &str) -> &mut Self {
        if text.is_empty() {
            return self.end_block();
        }
        self.buf.push_str(text);
        self.buf.push_str("\n\n");
        self
    }

    /// Write a single line with a hard line break, continuing the paragraph.
    pub fn hard_break(&mut self, text: &str) -> &mut Self {
        self.buf.push_str(text);
        self.buf.push_str("  \n");
        self
    }

    /// Write a bullet item nested `depth` levels deep.
    pub fn item(&mut self, depth: usize, text: &str) -> &mut Self {
        self.buf.push_str(&"  ".repeat(depth));
        self.buf.push_str("- ");
        self.buf.push_str(text);
        self.buf.push('\n');
        self
    }

    /// Write a task-list item.
    pub fn task(&mut self, text: &str) -> &mut Self {
        self.item(0, &format!("[ ] {text}"))
    }

    /// Write a table row.
    pub fn row<I, S>(&mut self, cells: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.buf.push('|');
        for cell in cells {
            self.buf.push(' ');
            self.buf.push_str(cell.as_ref());
            self.buf.push_str(" |");
        }
        self.buf.push('\n');
        self
    }

    /// Write a table: header row, delimiter row, then each body row.
    pub fn table(&mut self, header: &[String], rows: &[Vec<String>]) -> &mut Self {
        self.row(header);
        self.row(header.iter().map(|_| "---"));
        for row in rows {
            self.row(row);
        }
        self.end_block()
    }

    /// Write a fenced code block. The body is copied without modification.
    pub fn fence(&mut self, language: &str, body: &str) -> &mut Self {
        self.buf.push_str("```");
        self.buf.push_str(language);
        self.buf.push('\n');
        self.buf.push_str(body);
        self.buf.push_str("\n```\n\n");
        self
    }

    /// Close a list or table with a blank line.
    ///
    /// Does nothing when the previous block already ended with one, so an
    /// empty list leaves no extra gap.
    pub fn end_block(&mut self) -> &mut Self {
        if !self.buf.ends_with("\n\n") {
            self.buf.push('\n');
        }
        self
    }

    /// Finish the document, leaving exactly one trailing newline.
    pub fn finish(mut self) -> String {
        let len = self.buf.trim_end_matches('\n').len();
        self.buf.truncate(len);
        self.buf.push('\n');
        self.buf
    }
}
