//! # mdpress
//!
//! Markdown-subset report renderer for Rust.
//!
//! This library classifies a restricted markdown-like report format into
//! an ordered sequence of document blocks and presses them into a
//! paginated PDF through a layout engine.
//!
//! ## Quick Start
//!
//! ```no_run
//! use mdpress::{parse_file, render};
//!
//! fn main() -> mdpress::Result<()> {
//!     // Classify a report
//!     let outcome = parse_file("report.md")?;
//!
//!     // Press it into a PDF
//!     let options = render::RenderOptions::default();
//!     let result = render::to_pdf_file(&outcome.document, "report.pdf", &options)?;
//!     println!("{} blocks rendered", result.stats.content_blocks());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Line classification**: headings, bullets, numbered lists, tables,
//!   images, rules, front-matter title/subtitle
//! - **Inline markup**: bold, italic, inline code, link labels
//! - **Partial-failure tolerance**: a missing chart never aborts the
//!   report; problems surface on an explicit warning channel
//! - **Debug output**: JSON and plain-text views of the block sequence

pub mod error;
pub mod model;
pub mod parser;
pub mod render;
pub mod warning;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{Block, Document, Metadata, SpanStyle, StyledText, Table, TableRow, TextSpan};
pub use parser::{InlineFormatter, MarkdownParser, ParseOptions, ParseOutcome};
pub use render::{JsonFormat, RenderOptions, RenderResult, RenderStats, StyleSheet};
pub use warning::Warning;

use std::path::Path;

/// Classify report text into a document.
///
/// Classification cannot fail; recoverable problems come back on the
/// warning channel of the returned [`ParseOutcome`].
///
/// # Example
///
/// ```
/// let outcome = mdpress::parse_str("# Title\nSome text.\n");
/// assert_eq!(outcome.document.block_count(), 2);
/// ```
pub fn parse_str(input: &str) -> ParseOutcome {
    MarkdownParser::new().parse(input)
}

/// Classify report text with custom options.
///
/// # Example
///
/// ```
/// use mdpress::ParseOptions;
///
/// let options = ParseOptions::new().with_page_break_min_line(0);
/// let outcome = mdpress::parse_str_with_options("text\n", options);
/// assert_eq!(outcome.document.block_count(), 1);
/// ```
pub fn parse_str_with_options(input: &str, options: ParseOptions) -> ParseOutcome {
    MarkdownParser::with_options(options).parse(input)
}

/// Read and classify a report file.
///
/// A missing or unreadable input file is fatal.
///
/// # Example
///
/// ```no_run
/// let outcome = mdpress::parse_file("report.md").unwrap();
/// println!("Blocks: {}", outcome.document.block_count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<ParseOutcome> {
    let input = std::fs::read_to_string(path)?;
    Ok(parse_str(&input))
}

/// Read and classify a report file with custom options.
pub fn parse_file_with_options<P: AsRef<Path>>(
    path: P,
    options: ParseOptions,
) -> Result<ParseOutcome> {
    let input = std::fs::read_to_string(path)?;
    Ok(parse_str_with_options(&input, options))
}

/// Convert a report file straight to a PDF file.
///
/// Parse-time and render-time warnings are merged into the returned
/// result.
///
/// # Example
///
/// ```no_run
/// let result = mdpress::render_file("report.md", "report.pdf").unwrap();
/// for warning in &result.warnings {
///     eprintln!("warning: {}", warning);
/// }
/// ```
pub fn render_file<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<RenderResult> {
    Mdpress::new().parse(input)?.to_pdf_file(output)
}

/// Builder for classifying and rendering reports.
///
/// # Example
///
/// ```no_run
/// use mdpress::Mdpress;
///
/// let result = Mdpress::new()
///     .with_fonts_dir("./fonts")
///     .with_image_dir("./figures")
///     .parse("report.md")?
///     .to_pdf_file("report.pdf")?;
/// # Ok::<(), mdpress::Error>(())
/// ```
pub struct Mdpress {
    parse_options: ParseOptions,
    render_options: RenderOptions,
}

impl Mdpress {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            parse_options: ParseOptions::default(),
            render_options: RenderOptions::default(),
        }
    }

    /// Set the front-matter window.
    pub fn with_front_matter_window(mut self, lines: usize) -> Self {
        self.parse_options = self.parse_options.with_front_matter_window(lines);
        self
    }

    /// Set the page-break threshold.
    pub fn with_page_break_min_line(mut self, line: usize) -> Self {
        self.parse_options = self.parse_options.with_page_break_min_line(line);
        self
    }

    /// Set the font directory.
    pub fn with_fonts_dir(mut self, dir: impl Into<std::path::PathBuf>) -> Self {
        self.render_options = self.render_options.with_fonts_dir(dir);
        self
    }

    /// Set the font family name.
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.render_options = self.render_options.with_font_family(family);
        self
    }

    /// Set the base directory for image references.
    pub fn with_image_dir(mut self, dir: impl Into<std::path::PathBuf>) -> Self {
        self.render_options = self.render_options.with_image_dir(dir);
        self
    }

    /// Set the style palette.
    pub fn with_styles(mut self, styles: StyleSheet) -> Self {
        self.render_options = self.render_options.with_styles(styles);
        self
    }

    /// Read and classify a report file.
    pub fn parse<P: AsRef<Path>>(self, path: P) -> Result<MdpressResult> {
        let input = std::fs::read_to_string(path)?;
        Ok(self.parse_str(&input))
    }

    /// Classify report text.
    pub fn parse_str(self, input: &str) -> MdpressResult {
        let outcome = MarkdownParser::with_options(self.parse_options).parse(input);
        MdpressResult {
            document: outcome.document,
            warnings: outcome.warnings,
            render_options: self.render_options,
        }
    }
}

impl Default for Mdpress {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of classifying a report, ready for rendering.
pub struct MdpressResult {
    /// The classified document
    pub document: Document,
    /// Warnings raised while classifying
    pub warnings: Vec<Warning>,
    render_options: RenderOptions,
}

impl MdpressResult {
    /// Render to PDF bytes.
    ///
    /// Parse-time warnings are merged into the result's warning list.
    pub fn to_pdf(&self) -> Result<RenderResult> {
        let mut result = render::to_pdf(&self.document, &self.render_options)?;
        self.merge_warnings(&mut result);
        Ok(result)
    }

    /// Render to a PDF file.
    pub fn to_pdf_file<P: AsRef<Path>>(&self, path: P) -> Result<RenderResult> {
        let mut result = render::to_pdf_file(&self.document, path, &self.render_options)?;
        self.merge_warnings(&mut result);
        Ok(result)
    }

    /// Render the block sequence to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Render the block sequence to plain text.
    pub fn to_text(&self) -> String {
        render::to_text(&self.document)
    }

    /// Get the classified document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    fn merge_warnings(&self, result: &mut RenderResult) {
        result.warnings.splice(0..0, self.warnings.iter().cloned());
    }
}
