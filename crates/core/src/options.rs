//! Conversion options.

use serde::{Deserialize, Serialize};

/// Which block wraps indented (tab or four-space) lines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PreformattedStyle {
    /// `wp:code` block with `<pre><code>` markup.
    #[default]
    Code,
    /// `wp:preformatted` block with bare `<pre>` markup.
    Preformatted,
}

/// What happens to inline spans still open at the end of a line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UnclosedSpans {
    /// Emit the opening tag and nothing else.
    #[default]
    Leave,
    /// Append closing tags, innermost first.
    AutoClose,
}

/// Options controlling block and inline rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConvertOptions {
    /// Wrapper used for indented blocks.
    pub preformatted: PreformattedStyle,
    /// Handling of unterminated inline spans.
    pub unclosed_spans: UnclosedSpans,
}

impl ConvertOptions {
    /// Output as produced by the original converter: indented blocks become
    /// code blocks and unterminated spans stay open.
    pub const fn gutenberg() -> Self {
        Self {
            preformatted: PreformattedStyle::Code,
            unclosed_spans: UnclosedSpans::Leave,
        }
    }

    /// Like [`ConvertOptions::gutenberg`], but every inline span is closed
    /// by the end of its line.
    pub const fn balanced() -> Self {
        Self {
            preformatted: PreformattedStyle::Code,
            unclosed_spans: UnclosedSpans::AutoClose,
        }
    }

    /// Returns these options with a different preformatted wrapper.
    pub const fn with_preformatted(mut self, style: PreformattedStyle) -> Self {
        self.preformatted = style;
        self
    }
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self::gutenberg()
    }
}
