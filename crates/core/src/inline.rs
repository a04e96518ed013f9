//! Inline span tokenizer for emphasis, strong emphasis, and inline code.
//!
//! A single left-to-right pass over one line of content text. Open spans are
//! tracked on an explicit tag stack; a closing delimiter only ever pops the
//! innermost span. Inside an inline code span every character other than a
//! backtick is copied verbatim.

use crate::error::{ParseWarning, SourceLocation};
use crate::options::UnclosedSpans;

/// Inline span kinds tracked on the tag stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineTag {
    /// `` `code` ``
    Code,
    /// `*emphasis*`
    Emphasis,
    /// `**strong**`
    Strong,
}

impl InlineTag {
    /// HTML opening tag for this span.
    pub fn open_tag(self) -> &'static str {
        match self {
            InlineTag::Code => "<code>",
            InlineTag::Emphasis => "<em>",
            InlineTag::Strong => "<strong>",
        }
    }

    /// HTML closing tag for this span.
    pub fn close_tag(self) -> &'static str {
        match self {
            InlineTag::Code => "</code>",
            InlineTag::Emphasis => "</em>",
            InlineTag::Strong => "</strong>",
        }
    }

    /// Markdown delimiter that opens and closes this span.
    pub fn delimiter(self) -> &'static str {
        match self {
            InlineTag::Code => "`",
            InlineTag::Emphasis => "*",
            InlineTag::Strong => "**",
        }
    }
}

impl std::fmt::Display for InlineTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            InlineTag::Code => "code",
            InlineTag::Emphasis => "emphasis",
            InlineTag::Strong => "strong",
        };
        f.write_str(name)
    }
}

/// Result of rendering one line of content text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanOutput {
    /// Rendered text with spans replaced by HTML tags.
    pub html: String,
    /// Spans still open at end of line, outermost first.
    pub unclosed: Vec<InlineTag>,
    /// Warnings raised while scanning the line.
    pub warnings: Vec<ParseWarning>,
}

/// Renders inline spans in `text`, leaving unterminated spans open.
///
/// ```
/// use blockmark_core::inline::render_spans;
///
/// assert_eq!(
///     render_spans("**bold *and* more**"),
///     "<strong>bold <em>and</em> more</strong>"
/// );
/// ```
pub fn render_spans(text: &str) -> String {
    render_spans_at(text, 1, UnclosedSpans::Leave).html
}

/// Renders inline spans in `text`, attributing warnings to `line`.
pub fn render_spans_at(text: &str, line: usize, unclosed: UnclosedSpans) -> SpanOutput {
    if !text.contains(['`', '*']) {
        return SpanOutput {
            html: text.to_string(),
            unclosed: Vec::new(),
            warnings: Vec::new(),
        };
    }

    let mut tokenizer = SpanTokenizer::new(line, text.len());
    for (index, ch) in text.chars().enumerate() {
        tokenizer.feed(ch, index + 1);
    }
    tokenizer.finish(unclosed)
}

/// What a single `*` did to the output, kept so it can be undone when the
/// next character turns it into half of a `**` delimiter.
#[derive(Debug, Clone, Copy)]
struct SingleStar {
    out_len: usize,
    column: usize,
    effect: DelimiterEffect,
}

#[derive(Debug, Clone, Copy)]
enum DelimiterEffect {
    Opened,
    /// Opened emphasis around a strong span that had just been opened; the
    /// `<em>` tag was inserted at the given byte offset.
    OpenedOutside(usize),
    /// Closed a span that had been opened at the given column.
    Closed(usize),
    Literal,
}

struct SpanTokenizer {
    line: usize,
    out: String,
    /// Open spans with the column where each was opened.
    stack: Vec<(InlineTag, usize)>,
    pending_star: Option<SingleStar>,
    /// Output offset of a `<strong>` opened by the previous character.
    strong_opened_at: Option<usize>,
    warnings: Vec<ParseWarning>,
}

impl SpanTokenizer {
    fn new(line: usize, capacity: usize) -> Self {
        Self {
            line,
            out: String::with_capacity(capacity + 16),
            stack: Vec::new(),
            pending_star: None,
            strong_opened_at: None,
            warnings: Vec::new(),
        }
    }

    fn top(&self) -> Option<InlineTag> {
        self.stack.last().map(|(tag, _)| *tag)
    }

    fn feed(&mut self, ch: char, column: usize) {
        let pending = self.pending_star.take();
        let strong_opened_at = self.strong_opened_at.take();

        if self.top() == Some(InlineTag::Code) && ch != '`' {
            self.out.push(ch);
            return;
        }

        match ch {
            '`' => {
                self.delimiter(InlineTag::Code, column);
            }
            '*' => match pending {
                Some(star) => {
                    self.retract(star);
                    let effect = self.delimiter(InlineTag::Strong, star.column);
                    if let DelimiterEffect::Opened = effect {
                        self.strong_opened_at = Some(star.out_len);
                    }
                }
                None => {
                    let (effect, out_len) = match strong_opened_at {
                        Some(offset) if !self.is_open(InlineTag::Emphasis) => {
                            let effect = self.open_outside_strong(offset, column);
                            (effect, self.out.len())
                        }
                        _ => {
                            let out_len = self.out.len();
                            (self.delimiter(InlineTag::Emphasis, column), out_len)
                        }
                    };
                    self.pending_star = Some(SingleStar {
                        out_len,
                        column,
                        effect,
                    });
                }
            },
            _ => self.out.push(ch),
        }
    }

    /// Applies an opening or closing delimiter for `tag`.
    fn delimiter(&mut self, tag: InlineTag, column: usize) -> DelimiterEffect {
        if self.top() == Some(tag) {
            let (_, opened_at) = self.stack.pop().unwrap_or((tag, column));
            self.out.push_str(tag.close_tag());
            return DelimiterEffect::Closed(opened_at);
        }

        if let Some(innermost) = self.top()
            && self.is_open(tag)
        {
            self.out.push_str(tag.delimiter());
            self.warnings.push(ParseWarning::MismatchedDelimiter {
                location: SourceLocation::new(self.line, column),
                delimiter: tag.delimiter(),
                innermost,
            });
            return DelimiterEffect::Literal;
        }

        self.stack.push((tag, column));
        self.out.push_str(tag.open_tag());
        DelimiterEffect::Opened
    }

    fn is_open(&self, tag: InlineTag) -> bool {
        self.stack.iter().any(|(open, _)| *open == tag)
    }

    /// Opens emphasis outside the strong span that was just opened at
    /// `offset`, so `***x` nests as `<em><strong>x`.
    fn open_outside_strong(&mut self, offset: usize, column: usize) -> DelimiterEffect {
        self.out.insert_str(offset, InlineTag::Emphasis.open_tag());
        let strong = self.stack.len().saturating_sub(1);
        self.stack.insert(strong, (InlineTag::Emphasis, column));
        DelimiterEffect::OpenedOutside(offset)
    }

    /// Undoes the output and stack effect of a single `*`.
    fn retract(&mut self, star: SingleStar) {
        self.out.truncate(star.out_len);
        match star.effect {
            DelimiterEffect::Opened => {
                self.stack.pop();
            }
            DelimiterEffect::OpenedOutside(offset) => {
                let open_tag = InlineTag::Emphasis.open_tag();
                self.out.replace_range(offset..offset + open_tag.len(), "");
                let strong = self.stack.len().saturating_sub(1);
                self.stack.remove(strong.saturating_sub(1));
            }
            DelimiterEffect::Closed(opened_at) => {
                self.stack.push((InlineTag::Emphasis, opened_at));
            }
            DelimiterEffect::Literal => {
                self.warnings.pop();
            }
        }
    }

    fn finish(mut self, policy: UnclosedSpans) -> SpanOutput {
        for (tag, column) in &self.stack {
            self.warnings.push(ParseWarning::UnclosedSpan {
                location: SourceLocation::new(self.line, *column),
                tag: *tag,
            });
        }

        if policy == UnclosedSpans::AutoClose {
            for (tag, _) in self.stack.iter().rev() {
                self.out.push_str(tag.close_tag());
            }
        }

        SpanOutput {
            html: self.out,
            unclosed: self.stack.into_iter().map(|(tag, _)| tag).collect(),
            warnings: self.warnings,
        }
    }
}
