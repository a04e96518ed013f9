//! Command-line interface for blockmark.
//!
//! Usage:
//!   blockmark `<input>` [`<output>`]
//!
//! Converts a Markdown file into WordPress block markup. When no output path
//! is given the input's extension is replaced with `gutenberg.html`.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use blockmark_core::{ConvertOptions, convert_reader};
use clap::Parser;

/// Extension given to derived output files.
const OUTPUT_EXTENSION: &str = "gutenberg.html";

#[derive(Parser, Debug)]
#[command(name = "blockmark", version, about = "Convert Markdown into WordPress block markup")]
struct Args {
    /// Markdown file to convert
    input: PathBuf,

    /// Output file (default: input with a .gutenberg.html extension)
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let output = args.output.unwrap_or_else(|| output_path_for(&args.input));

    run(&args.input, &output)?;
    println!("{} -> {}", args.input.display(), output.display());
    Ok(())
}

/// Converts `input` and writes the result to `output`.
///
/// The output file is only created once the whole input has been converted.
fn run(input: &Path, output: &Path) -> Result<()> {
    let source = File::open(input).with_context(|| format!("failed to read {}", input.display()))?;
    let conversion = convert_reader(source, &ConvertOptions::default())
        .with_context(|| format!("failed to read {}", input.display()))?;

    let file =
        File::create(output).with_context(|| format!("failed to write {}", output.display()))?;
    conversion
        .write_to(BufWriter::new(file))
        .with_context(|| format!("failed to write {}", output.display()))?;
    Ok(())
}

/// Derives the default output path by swapping the input's extension.
fn output_path_for(input: &Path) -> PathBuf {
    input.with_extension(OUTPUT_EXTENSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_extension() {
        assert_eq!(
            output_path_for(Path::new("notes.md")),
            PathBuf::from("notes.gutenberg.html")
        );
        assert_eq!(
            output_path_for(Path::new("docs/guide.markdown")),
            PathBuf::from("docs/guide.gutenberg.html")
        );
    }

    #[test]
    fn adds_extension_when_missing() {
        assert_eq!(
            output_path_for(Path::new("README")),
            PathBuf::from("README.gutenberg.html")
        );
    }

    #[test]
    fn only_last_extension_is_replaced() {
        assert_eq!(
            output_path_for(Path::new("./drafts/post.v2.md")),
            PathBuf::from("./drafts/post.v2.gutenberg.html")
        );
    }

    #[test]
    fn parses_optional_output() {
        let args = Args::try_parse_from(["blockmark", "in.md"]).unwrap();
        assert_eq!(args.input, PathBuf::from("in.md"));
        assert!(args.output.is_none());

        let args = Args::try_parse_from(["blockmark", "in.md", "out.html"]).unwrap();
        assert_eq!(args.output, Some(PathBuf::from("out.html")));
    }

    #[test]
    fn missing_input_is_a_usage_error() {
        let err = Args::try_parse_from(["blockmark"]).unwrap_err();
        assert_eq!(
            err.kind(),
            clap::error::ErrorKind::MissingRequiredArgument
        );
    }
}
