use thiserror::Error;

use crate::inline::InlineTag;

/// Source location information for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed, counted in characters of the span text)
    pub column: usize,
}

impl SourceLocation {
    /// Create a new source location
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Errors that can occur while reading or writing a document.
///
/// Conversion itself is total; only the I/O edges can fail.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// IO error while reading input or writing output.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Input was not valid UTF-8.
    #[error("Encoding error: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Non-fatal warnings that don't prevent rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseWarning {
    /// An inline span was still open when its line ended.
    UnclosedSpan {
        /// Where the span was opened
        location: SourceLocation,
        /// The span that was left open
        tag: InlineTag,
    },
    /// A closing delimiter did not match the innermost open span and was
    /// kept as literal text.
    MismatchedDelimiter {
        /// Where the delimiter appeared
        location: SourceLocation,
        /// The delimiter text (`*` or `**`)
        delimiter: &'static str,
        /// The span that was innermost at that point
        innermost: InlineTag,
    },
}

impl ParseWarning {
    /// Get the location of this warning
    pub fn location(&self) -> &SourceLocation {
        match self {
            ParseWarning::UnclosedSpan { location, .. } => location,
            ParseWarning::MismatchedDelimiter { location, .. } => location,
        }
    }
}

impl std::fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseWarning::UnclosedSpan { location, tag } => {
                write!(f, "{}: unclosed {} span", location, tag)
            }
            ParseWarning::MismatchedDelimiter {
                location,
                delimiter,
                innermost,
            } => {
                write!(
                    f,
                    "{}: '{}' does not close the innermost {} span, kept as text",
                    location, delimiter, innermost
                )
            }
        }
    }
}

/// Collection of parse diagnostics
#[derive(Debug, Clone, Default)]
pub struct ParseDiagnostics {
    /// List of non-fatal warnings
    pub warnings: Vec<ParseWarning>,
}

impl ParseDiagnostics {
    /// Create a new empty diagnostics collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a warning to the diagnostics collection
    pub fn add_warning(&mut self, warning: ParseWarning) {
        log::warn!("{}", warning);
        self.warnings.push(warning);
    }

    /// Check if there are any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Get total count of all diagnostics
    pub fn count(&self) -> usize {
        self.warnings.len()
    }
}
