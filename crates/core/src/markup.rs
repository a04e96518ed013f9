//! Block wrapper markup.
//!
//! Every block is framed by a `<!-- wp:name {attrs} -->` comment pair around
//! its HTML element. Attribute payloads are JSON objects and are omitted when
//! they would only restate the editor's defaults.

use serde_json::{Value as JsonValue, json};

use crate::block::BlockContext;
use crate::options::PreformattedStyle;

/// Headings at or below this level carry no `level` attribute.
const IMPLICIT_HEADING_LEVEL: u8 = 2;

/// Opening fragment for `context`: comment delimiter plus opening element.
pub fn open_fragment(context: BlockContext, style: PreformattedStyle) -> String {
    let (name, attrs) = block_name(context, style);
    let mut out = block_comment(name, attrs.as_ref(), false);
    out.push('\n');
    match context {
        BlockContext::Paragraph => out.push_str("<p>"),
        BlockContext::Heading { level } => out.push_str(&format!("<h{}>", level)),
        BlockContext::Preformatted => match style {
            PreformattedStyle::Code => out.push_str(r#"<pre class="wp-block-code"><code>"#),
            PreformattedStyle::Preformatted => {
                out.push_str(r#"<pre class="wp-block-preformatted">"#)
            }
        },
        BlockContext::UnorderedList => out.push_str("<ul>\n"),
        BlockContext::OrderedList => out.push_str("<ol>\n"),
    }
    out
}

/// Closing fragment for `context`: closing element plus comment delimiter.
pub fn close_fragment(context: BlockContext, style: PreformattedStyle) -> String {
    let mut out = match context {
        BlockContext::Paragraph => "</p>".to_string(),
        BlockContext::Heading { level } => format!("</h{}>", level),
        BlockContext::Preformatted => match style {
            PreformattedStyle::Code => "</code></pre>".to_string(),
            PreformattedStyle::Preformatted => "</pre>".to_string(),
        },
        BlockContext::UnorderedList => "</ul>".to_string(),
        BlockContext::OrderedList => "</ol>".to_string(),
    };
    out.push('\n');
    let (name, _) = block_name(context, style);
    out.push_str(&block_comment(name, None, true));
    out.push('\n');
    out
}

/// A self-contained block (heading or paragraph) around rendered content.
pub fn wrap_block(context: BlockContext, html: &str, style: PreformattedStyle) -> String {
    let mut out = open_fragment(context, style);
    out.push_str(html);
    out.push_str(&close_fragment(context, style));
    out
}

/// One `<li>` inside an open list block.
pub fn list_item(html: &str) -> String {
    format!("<li>{}</li>\n", html)
}

/// One dedented line inside an open preformatted block.
pub fn preformatted_line(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 1);
    out.push_str(text);
    out.push('\n');
    out
}

fn block_name(
    context: BlockContext,
    style: PreformattedStyle,
) -> (&'static str, Option<JsonValue>) {
    match context {
        BlockContext::Paragraph => ("paragraph", None),
        BlockContext::Heading { level } if level <= IMPLICIT_HEADING_LEVEL => ("heading", None),
        BlockContext::Heading { level } => ("heading", Some(json!({ "level": level }))),
        BlockContext::Preformatted => match style {
            PreformattedStyle::Code => ("code", None),
            PreformattedStyle::Preformatted => ("preformatted", None),
        },
        BlockContext::UnorderedList => ("list", None),
        BlockContext::OrderedList => ("list", Some(json!({ "ordered": true }))),
    }
}

fn block_comment(name: &str, attrs: Option<&JsonValue>, closing: bool) -> String {
    let slash = if closing { "/" } else { "" };
    match attrs {
        Some(attrs) => format!("<!-- {}wp:{} {} -->", slash, name, attrs),
        None => format!("<!-- {}wp:{} -->", slash, name),
    }
}
