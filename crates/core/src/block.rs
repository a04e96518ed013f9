//! Block state machine.
//!
//! Consumes classified lines in order and emits block wrapper fragments.
//! Code blocks and lists span several lines, so the currently open one is
//! kept on a [`BlockStack`] until the line that ends the run: a blank line,
//! a header, plain text, or a line that belongs to a different block.

use crate::classify::{LineKind, classify};
use crate::convert::Conversion;
use crate::error::ParseDiagnostics;
use crate::inline::render_spans_at;
use crate::markup;
use crate::options::ConvertOptions;

/// A block wrapper that can be open in the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockContext {
    /// `<p>`; always opened and closed on the same line.
    Paragraph,
    /// `<h1>`..`<h6>`; always opened and closed on the same line.
    Heading {
        /// Heading level (1-6).
        level: u8,
    },
    /// `<pre>` block built from indented lines.
    Preformatted,
    /// `<ul>` built from `- ` items.
    UnorderedList,
    /// `<ol>` built from `1. ` items.
    OrderedList,
}

/// Stack of open multi-line blocks.
///
/// The grammar has no nesting, so depth never exceeds one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockStack {
    contexts: Vec<BlockContext>,
}

impl BlockStack {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens `context`.
    pub fn push(&mut self, context: BlockContext) {
        debug_assert!(
            self.contexts.is_empty(),
            "block {:?} opened inside {:?}",
            context,
            self.contexts
        );
        self.contexts.push(context);
    }

    /// Closes the innermost block.
    pub fn pop(&mut self) -> Option<BlockContext> {
        self.contexts.pop()
    }

    /// The innermost open block.
    pub fn top(&self) -> Option<BlockContext> {
        self.contexts.last().copied()
    }

    /// Number of open blocks.
    pub fn depth(&self) -> usize {
        self.contexts.len()
    }

    /// Returns true when no block is open.
    pub fn is_empty(&self) -> bool {
        self.contexts.is_empty()
    }
}

/// Line-at-a-time converter state.
///
/// ```
/// use blockmark_core::{BlockMachine, ConvertOptions};
///
/// let mut machine = BlockMachine::new(ConvertOptions::default());
/// machine.push_line("- one\n");
/// machine.push_line("- two\n");
/// let conversion = machine.finish();
/// assert!(conversion.to_html().ends_with("</ul>\n<!-- /wp:list -->\n"));
/// ```
#[derive(Debug)]
pub struct BlockMachine<'a> {
    options: ConvertOptions,
    stack: BlockStack,
    previous: Option<LineKind<'a>>,
    line_number: usize,
    fragments: Vec<String>,
    diagnostics: ParseDiagnostics,
}

impl<'a> BlockMachine<'a> {
    /// Creates a machine with nothing open.
    pub fn new(options: ConvertOptions) -> Self {
        Self {
            options,
            stack: BlockStack::new(),
            previous: None,
            line_number: 0,
            fragments: Vec::new(),
            diagnostics: ParseDiagnostics::new(),
        }
    }

    /// Classifies and processes one raw line.
    pub fn push_line(&mut self, line: &'a str) {
        self.step(classify(line));
    }

    /// Processes one already classified line.
    pub fn step(&mut self, kind: LineKind<'a>) {
        self.line_number += 1;

        match kind {
            LineKind::Header { level, text } => {
                self.close_open_blocks();
                let html = self.render_inline(text);
                self.emit_wrapped(BlockContext::Heading { level }, &html);
            }
            LineKind::Preformatted { text } => {
                let after_break = self
                    .previous
                    .is_none_or(|previous| previous.is_blank() || previous.is_header());
                if after_break || self.stack.top() != Some(BlockContext::Preformatted) {
                    self.close_open_blocks();
                    self.open_block(BlockContext::Preformatted);
                }
                self.fragments.push(markup::preformatted_line(text));
            }
            LineKind::ListItem { text, .. } => {
                let list = kind.list_context().unwrap_or(BlockContext::UnorderedList);
                if self.stack.top() != Some(list) {
                    self.close_open_blocks();
                    self.open_block(list);
                }
                let html = self.render_inline(text);
                self.fragments.push(markup::list_item(&html));
            }
            LineKind::Blank => self.close_open_blocks(),
            LineKind::PlainText { text } => {
                self.close_open_blocks();
                let html = self.render_inline(text);
                self.emit_wrapped(BlockContext::Paragraph, &html);
            }
        }

        self.previous = Some(kind);
    }

    /// Closes whatever is still open and returns the accumulated output.
    pub fn finish(mut self) -> Conversion {
        self.close_open_blocks();
        Conversion {
            fragments: self.fragments,
            diagnostics: self.diagnostics,
        }
    }

    /// Currently open blocks.
    pub fn stack(&self) -> &BlockStack {
        &self.stack
    }

    /// Kind of the most recently processed line.
    pub fn previous(&self) -> Option<&LineKind<'a>> {
        self.previous.as_ref()
    }

    /// Fragments emitted so far.
    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    fn open_block(&mut self, context: BlockContext) {
        log::debug!("line {}: open {:?}", self.line_number, context);
        self.stack.push(context);
        self.fragments
            .push(markup::open_fragment(context, self.options.preformatted));
    }

    fn close_open_blocks(&mut self) {
        while let Some(context) = self.stack.pop() {
            log::debug!("line {}: close {:?}", self.line_number, context);
            self.fragments
                .push(markup::close_fragment(context, self.options.preformatted));
        }
    }

    fn emit_wrapped(&mut self, context: BlockContext, html: &str) {
        self.fragments
            .push(markup::wrap_block(context, html, self.options.preformatted));
    }

    fn render_inline(&mut self, text: &str) -> String {
        let output = render_spans_at(text, self.line_number, self.options.unclosed_spans);
        for warning in output.warnings {
            self.diagnostics.add_warning(warning);
        }
        output.html
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(lines: &[&'static str]) -> Vec<String> {
        let mut machine = BlockMachine::new(ConvertOptions::default());
        for line in lines {
            machine.push_line(line);
        }
        machine.finish().fragments
    }

    #[test]
    fn heading_is_never_pushed() {
        let mut machine = BlockMachine::new(ConvertOptions::default());
        machine.push_line("### Deep\n");
        assert!(machine.stack().is_empty());
        assert_eq!(machine.fragments().len(), 1);
        assert!(machine.previous().is_some_and(LineKind::is_header));
    }

    #[test]
    fn list_stays_open_across_items() {
        let mut machine = BlockMachine::new(ConvertOptions::default());
        machine.push_line("- a\n");
        machine.push_line("- b\n");
        assert_eq!(machine.stack().top(), Some(BlockContext::UnorderedList));
        assert_eq!(machine.stack().depth(), 1);
        assert_eq!(
            machine.fragments(),
            ["<!-- wp:list -->\n<ul>\n", "<li>a</li>\n", "<li>b</li>\n"]
        );
    }

    #[test]
    fn blank_line_closes_list_without_output() {
        let fragments = run(&["1. a\n", "\n", "\n"]);
        assert_eq!(
            fragments,
            [
                "<!-- wp:list {\"ordered\":true} -->\n<ol>\n",
                "<li>a</li>\n",
                "</ol>\n<!-- /wp:list -->\n",
            ]
        );
    }

    #[test]
    fn switching_list_family_reopens() {
        let fragments = run(&["- a\n", "1. b\n"]);
        assert_eq!(
            fragments,
            [
                "<!-- wp:list -->\n<ul>\n",
                "<li>a</li>\n",
                "</ul>\n<!-- /wp:list -->\n",
                "<!-- wp:list {\"ordered\":true} -->\n<ol>\n",
                "<li>b</li>\n",
                "</ol>\n<!-- /wp:list -->\n",
            ]
        );
    }

    #[test]
    fn preformatted_lines_are_verbatim() {
        let fragments = run(&["\n", "    let *x* = 1;\n", "\tnext();\n"]);
        assert_eq!(
            fragments,
            [
                "<!-- wp:code -->\n<pre class=\"wp-block-code\"><code>",
                "let *x* = 1;\n",
                "next();\n",
                "</code></pre>\n<!-- /wp:code -->\n",
            ]
        );
    }

    #[test]
    fn indented_line_after_list_closes_list() {
        let fragments = run(&["- a\n", "    code\n"]);
        assert_eq!(
            fragments,
            [
                "<!-- wp:list -->\n<ul>\n",
                "<li>a</li>\n",
                "</ul>\n<!-- /wp:list -->\n",
                "<!-- wp:code -->\n<pre class=\"wp-block-code\"><code>",
                "code\n",
                "</code></pre>\n<!-- /wp:code -->\n",
            ]
        );
    }

    #[test]
    fn plain_text_closes_code_block() {
        let fragments = run(&["    code\n", "text\n"]);
        assert_eq!(fragments[2], "</code></pre>\n<!-- /wp:code -->\n");
        assert_eq!(
            fragments[3],
            "<!-- wp:paragraph -->\n<p>text</p>\n<!-- /wp:paragraph -->\n"
        );
        assert_eq!(fragments.len(), 4);
    }

    #[test]
    fn header_closes_code_block() {
        let fragments = run(&["    code\n", "## Next\n"]);
        assert_eq!(fragments[2], "</code></pre>\n<!-- /wp:code -->\n");
        assert!(fragments[3].contains("<h2>Next</h2>"));
    }

    #[test]
    fn code_after_header_opens_code_block() {
        let mut machine = BlockMachine::new(ConvertOptions::default());
        machine.push_line("# Title\n");
        machine.push_line("    code\n");
        assert_eq!(machine.stack().top(), Some(BlockContext::Preformatted));
        assert_eq!(
            &machine.fragments()[1..],
            ["<!-- wp:code -->\n<pre class=\"wp-block-code\"><code>", "code\n"]
        );
    }

    #[test]
    fn each_plain_line_is_its_own_paragraph() {
        let fragments = run(&["one\n", "two\n"]);
        assert_eq!(fragments.len(), 2);
        assert!(fragments[1].contains("<p>two</p>"));
    }

    #[test]
    fn inline_warnings_carry_line_numbers() {
        let mut machine = BlockMachine::new(ConvertOptions::default());
        machine.push_line("fine\n");
        machine.push_line("- an *open item\n");
        let conversion = machine.finish();
        assert_eq!(conversion.diagnostics.count(), 1);
        assert_eq!(conversion.diagnostics.warnings[0].location().line, 2);
    }
}
