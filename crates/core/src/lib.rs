#![deny(missing_docs)]
//! blockmark core: converts line-oriented Markdown into WordPress block markup.

/// Block state machine and block contexts.
pub mod block;
/// Line classification.
pub mod classify;
/// Whole-document conversion entry points.
pub mod convert;
/// Core error and diagnostic types.
pub mod error;
/// Inline span tokenizer.
pub mod inline;
/// Block wrapper markup.
pub mod markup;
/// Conversion options.
pub mod options;

pub use block::{BlockContext, BlockMachine, BlockStack};
pub use classify::{LineKind, classify};
pub use convert::{
    Conversion, Lines, convert, convert_reader, convert_with_options, split_lines, to_html,
};
pub use error::{ConvertError, ParseDiagnostics, ParseWarning, SourceLocation};
pub use inline::{InlineTag, SpanOutput, render_spans, render_spans_at};
pub use options::{ConvertOptions, PreformattedStyle, UnclosedSpans};
