//! Line classification.
//!
//! Every line maps to exactly one [`LineKind`]. The checks run in a fixed
//! order because the patterns overlap: a header wins over an indented line,
//! and an indented line wins over a list marker.

use crate::block::BlockContext;

/// Structural kind of a single input line.
///
/// Text payloads borrow from the line with the block syntax and the line
/// terminator removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `#` through `######` followed by a space.
    Header {
        /// Number of leading `#` characters (1-6).
        level: u8,
        /// Heading text.
        text: &'a str,
    },
    /// A line holding nothing but its terminator.
    Blank,
    /// A line starting with a tab or four spaces.
    Preformatted {
        /// Line content after the indent.
        text: &'a str,
    },
    /// `- item` or `1. item`.
    ListItem {
        /// `true` for `\d+. ` markers, `false` for `- `.
        ordered: bool,
        /// Item text after the marker.
        text: &'a str,
    },
    /// Anything else.
    PlainText {
        /// Line content.
        text: &'a str,
    },
}

impl<'a> LineKind<'a> {
    /// Returns true for [`LineKind::Blank`].
    pub fn is_blank(&self) -> bool {
        matches!(self, LineKind::Blank)
    }

    /// Returns true for [`LineKind::Header`].
    pub fn is_header(&self) -> bool {
        matches!(self, LineKind::Header { .. })
    }

    /// The list block a list item belongs to.
    pub fn list_context(&self) -> Option<BlockContext> {
        match self {
            LineKind::ListItem { ordered: true, .. } => Some(BlockContext::OrderedList),
            LineKind::ListItem { ordered: false, .. } => Some(BlockContext::UnorderedList),
            _ => None,
        }
    }

}

/// Classify a single raw line (terminator included or not).
pub fn classify(line: &str) -> LineKind<'_> {
    let body = strip_line_ending(line);

    if let Some((level, text)) = header(body) {
        return LineKind::Header { level, text };
    }
    if let Some(text) = preformatted(body) {
        return LineKind::Preformatted { text };
    }
    if let Some((ordered, text)) = list_item(body) {
        return LineKind::ListItem { ordered, text };
    }
    if body.is_empty() {
        return LineKind::Blank;
    }
    LineKind::PlainText { text: body }
}

/// Removes one trailing `\r\n`, `\n`, or `\r`.
pub fn strip_line_ending(line: &str) -> &str {
    line.strip_suffix("\r\n")
        .or_else(|| line.strip_suffix('\n'))
        .or_else(|| line.strip_suffix('\r'))
        .unwrap_or(line)
}

fn header(body: &str) -> Option<(u8, &str)> {
    let hashes = body.bytes().take_while(|b| *b == b'#').count();
    if !(1..=6).contains(&hashes) {
        return None;
    }
    let text = body[hashes..].strip_prefix(' ')?;
    Some((hashes as u8, text))
}

fn preformatted(body: &str) -> Option<&str> {
    body.strip_prefix('\t')
        .or_else(|| body.strip_prefix("    "))
}

fn list_item(body: &str) -> Option<(bool, &str)> {
    if let Some(text) = body.strip_prefix("- ") {
        return Some((false, text));
    }

    let digits = body.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    body[digits..].strip_prefix(". ").map(|text| (true, text))
}
