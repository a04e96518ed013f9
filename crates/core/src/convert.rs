//! Whole-document conversion.

use std::io::{Read, Write};

use crate::block::BlockMachine;
use crate::error::{ConvertError, ParseDiagnostics};
use crate::options::ConvertOptions;

/// Output of converting one document.
#[derive(Debug, Clone, Default)]
pub struct Conversion {
    /// HTML fragments in emission order.
    pub fragments: Vec<String>,
    /// Warnings collected while rendering inline spans.
    pub diagnostics: ParseDiagnostics,
}

impl Conversion {
    /// Concatenates all fragments.
    pub fn to_html(&self) -> String {
        self.fragments.concat()
    }

    /// Writes every fragment, in order, to `writer`.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<(), ConvertError> {
        for fragment in &self.fragments {
            writer.write_all(fragment.as_bytes())?;
        }
        writer.flush()?;
        Ok(())
    }
}

/// Converts a document with default options.
pub fn convert(input: &str) -> Conversion {
    convert_with_options(input, &ConvertOptions::default())
}

/// Converts a document.
pub fn convert_with_options(input: &str, options: &ConvertOptions) -> Conversion {
    let mut machine = BlockMachine::new(*options);
    for line in split_lines(input) {
        machine.push_line(line);
    }
    let conversion = machine.finish();
    log::debug!(
        "converted {} bytes into {} fragments ({} warnings)",
        input.len(),
        conversion.fragments.len(),
        conversion.diagnostics.count()
    );
    conversion
}

/// Converts a document and returns the concatenated HTML.
pub fn to_html(input: &str) -> String {
    convert(input).to_html()
}

/// Reads a whole UTF-8 document from `reader` and converts it.
pub fn convert_reader<R: Read>(
    mut reader: R,
    options: &ConvertOptions,
) -> Result<Conversion, ConvertError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    let text = String::from_utf8(bytes)?;
    Ok(convert_with_options(&text, options))
}

/// Splits `input` into lines, keeping each line's terminator.
///
/// `\n`, `\r\n`, and a lone `\r` all end a line. A final line without a
/// terminator is still yielded; an empty input yields nothing.
pub fn split_lines(input: &str) -> Lines<'_> {
    Lines { rest: input }
}

/// Iterator returned by [`split_lines`].
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }

        let bytes = self.rest.as_bytes();
        let end = match bytes.iter().position(|b| *b == b'\n' || *b == b'\r') {
            Some(pos) if bytes[pos] == b'\r' && bytes.get(pos + 1) == Some(&b'\n') => pos + 2,
            Some(pos) => pos + 1,
            None => bytes.len(),
        };

        let (line, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_mixed_line_endings() {
        let lines: Vec<_> = split_lines("a\nb\r\nc\rd").collect();
        assert_eq!(lines, ["a\n", "b\r\n", "c\r", "d"]);
    }

    #[test]
    fn empty_input_has_no_lines() {
        assert_eq!(split_lines("").count(), 0);
        assert!(convert("").fragments.is_empty());
    }

    #[test]
    fn blank_lines_are_kept() {
        let lines: Vec<_> = split_lines("\n\n").collect();
        assert_eq!(lines, ["\n", "\n"]);
    }

    #[test]
    fn reader_rejects_invalid_utf8() {
        let err = convert_reader(&b"f\xff\n"[..], &ConvertOptions::default()).unwrap_err();
        assert!(matches!(err, ConvertError::Encoding(_)));
    }

    #[test]
    fn writes_fragments_in_order() {
        let conversion = convert("# A\nb\n");
        let mut out = Vec::new();
        conversion.write_to(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), conversion.to_html());
    }
}
