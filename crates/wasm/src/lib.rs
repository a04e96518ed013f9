use blockmark_core::{ConvertOptions, PreformattedStyle, UnclosedSpans, convert_with_options};
use serde::Serialize;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::*;

// ============================================================================
// Converter Config
// ============================================================================

/// Configuration accepted by the WASM convert functions.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct WasmConvertConfig {
    #[serde(default, alias = "preformattedStyle")]
    pub preformatted: Option<PreformattedStyle>,
    #[serde(default, alias = "unclosedSpans")]
    pub unclosed_spans: Option<UnclosedSpans>,
}

fn parse_config(config: JsValue) -> WasmConvertConfig {
    if config.is_undefined() || config.is_null() {
        return WasmConvertConfig::default();
    }
    serde_wasm_bindgen::from_value(config).unwrap_or_default()
}

fn build_options(cfg: &WasmConvertConfig) -> ConvertOptions {
    let defaults = ConvertOptions::default();
    ConvertOptions {
        preformatted: cfg.preformatted.unwrap_or(defaults.preformatted),
        unclosed_spans: cfg.unclosed_spans.unwrap_or(defaults.unclosed_spans),
    }
}

// ============================================================================
// Convert API Types
// ============================================================================

/// A warning raised while rendering inline spans.
#[derive(Debug, Clone, Serialize)]
pub struct WarningEntry {
    /// Line number (1-indexed).
    pub line: usize,
    /// Column within the line's content text (1-indexed).
    pub column: usize,
    /// Human-readable description.
    pub message: String,
}

/// Result of a detailed conversion.
#[derive(Debug, Clone, Serialize)]
pub struct ConvertResult {
    /// Concatenated block markup.
    pub html: String,
    /// Individual fragments in emission order.
    pub fragments: Vec<String>,
    /// Inline warnings.
    pub warnings: Vec<WarningEntry>,
}

// ============================================================================
// Convert API
// ============================================================================

/// Converts Markdown source into WordPress block markup.
///
/// # Arguments
///
/// * `source` - The Markdown source text
/// * `config` - Optional configuration object (`{ preformatted, unclosedSpans }`)
#[wasm_bindgen]
pub fn convert(source: &str, config: JsValue) -> String {
    let options = build_options(&parse_config(config));
    convert_with_options(source, &options).to_html()
}

/// Converts Markdown source and returns fragments and warnings alongside the
/// HTML.
///
/// # Example (JavaScript)
///
/// ```javascript
/// import { convert_detailed } from './blockmark_wasm';
///
/// const result = convert_detailed("an *open span", { unclosedSpans: "autoClose" });
/// // result = {
/// //   html: "<!-- wp:paragraph -->\n<p>an <em>open span</em></p>\n<!-- /wp:paragraph -->\n",
/// //   fragments: [ ... ],
/// //   warnings: [{ line: 1, column: 4, message: "1:4: unclosed emphasis span" }]
/// // }
/// ```
#[wasm_bindgen(js_name = convert_detailed)]
pub fn convert_detailed(source: &str, config: JsValue) -> Result<JsValue, JsError> {
    let options = build_options(&parse_config(config));
    let conversion = convert_with_options(source, &options);

    let warnings = conversion
        .diagnostics
        .warnings
        .iter()
        .map(|warning| WarningEntry {
            line: warning.location().line,
            column: warning.location().column,
            message: warning.to_string(),
        })
        .collect();

    let result = ConvertResult {
        html: conversion.to_html(),
        fragments: conversion.fragments,
        warnings,
    };

    serde_wasm_bindgen::to_value(&result)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}
