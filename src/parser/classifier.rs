//! The line classifier: one forward pass over the report text, emitting
//! document blocks.
//!
//! The classifier is a two-state machine. In `Scanning` it matches one
//! block rule per line; in `InTable` it accumulates `|`-prefixed rows
//! until a non-table line arrives, at which point the buffered table is
//! flushed and the same line is classified again without being consumed
//! from the cursor.

use crate::model::{Block, Document, StyledText, Table, TableRow};
use crate::parser::table::{is_separator_row, split_cells};
use crate::parser::{InlineFormatter, ParseOptions};
use crate::warning::Warning;
use chrono::Utc;
use regex::Regex;
use std::path::PathBuf;

/// Classifies report text into a [`Document`].
pub struct MarkdownParser {
    options: ParseOptions,
    formatter: InlineFormatter,
    numbered: Regex,
    image: Regex,
}

/// Result of classifying a report: the block sequence plus the warning
/// channel, kept separate so callers can assert on either independently.
#[derive(Debug, Clone)]
pub struct ParseOutcome {
    /// The classified document
    pub document: Document,

    /// Recoverable problems encountered while classifying
    pub warnings: Vec<Warning>,
}

impl MarkdownParser {
    /// Create a parser with default options.
    pub fn new() -> Self {
        Self::with_options(ParseOptions::default())
    }

    /// Create a parser with the given options.
    pub fn with_options(options: ParseOptions) -> Self {
        Self {
            options,
            formatter: InlineFormatter::new(),
            numbered: Regex::new(r"^(\d+)\.\s*(.*)$").unwrap(),
            image: Regex::new(r"^!\[([^\]]*)\]\(([^)]+)\)").unwrap(),
        }
    }

    /// Classify `input` into a document.
    ///
    /// Classification itself cannot fail; malformed lines either fall
    /// through to the paragraph rule or are dropped, and repairable
    /// problems surface on the warning channel.
    pub fn parse(&self, input: &str) -> ParseOutcome {
        let mut run = ClassifierRun::new(self);
        run.consume(input);
        run.finish()
    }
}

impl Default for MarkdownParser {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Scanning,
    InTable,
}

/// Whether a line was consumed or must be classified again after a
/// state transition.
enum LineStep {
    Consumed,
    Reclassify,
}

struct ClassifierRun<'a> {
    parser: &'a MarkdownParser,
    state: ScanState,
    pending_rows: Vec<TableRow>,
    saw_title: bool,
    saw_subtitle: bool,
    document: Document,
    warnings: Vec<Warning>,
}

impl<'a> ClassifierRun<'a> {
    fn new(parser: &'a MarkdownParser) -> Self {
        Self {
            parser,
            state: ScanState::Scanning,
            pending_rows: Vec::new(),
            saw_title: false,
            saw_subtitle: false,
            document: Document::new(),
            warnings: Vec::new(),
        }
    }

    fn consume(&mut self, input: &str) {
        let mut cursor = input.lines().enumerate().peekable();
        while let Some(&(index, raw)) = cursor.peek() {
            let line = raw.trim();
            match self.step(index, line) {
                LineStep::Consumed => {
                    cursor.next();
                }
                LineStep::Reclassify => {}
            }
        }
        // Input that ends mid-table still yields the table.
        if self.state == ScanState::InTable {
            self.flush_table();
        }
    }

    fn finish(mut self) -> ParseOutcome {
        self.document.metadata.generated = Some(Utc::now());
        ParseOutcome {
            document: self.document,
            warnings: self.warnings,
        }
    }

    fn step(&mut self, index: usize, line: &str) -> LineStep {
        match self.state {
            ScanState::InTable => self.step_in_table(index, line),
            ScanState::Scanning => {
                self.step_scanning(index, line);
                LineStep::Consumed
            }
        }
    }

    fn step_in_table(&mut self, index: usize, line: &str) -> LineStep {
        if !line.starts_with('|') {
            self.flush_table();
            return LineStep::Reclassify;
        }

        let mut cells = split_cells(line);
        if is_separator_row(&cells) {
            return LineStep::Consumed;
        }

        let expected = self.pending_rows[0].cells.len();
        if cells.len() != expected {
            log::warn!(
                "table row at line {} has {} cells, expected {}; normalizing",
                index + 1,
                cells.len(),
                expected
            );
            self.warnings.push(Warning::RaggedTableRow {
                line: index,
                expected,
                found: cells.len(),
            });
            cells.resize(expected, String::new());
        }
        self.pending_rows.push(TableRow::new(cells));
        LineStep::Consumed
    }

    fn flush_table(&mut self) {
        self.state = ScanState::Scanning;
        let rows = std::mem::take(&mut self.pending_rows);
        match rows.first() {
            Some(header) if !header.cells.is_empty() => {
                self.document.add_block(Block::Table(Table { rows }));
            }
            _ => log::debug!("dropping table with empty header row"),
        }
    }

    fn step_scanning(&mut self, index: usize, line: &str) {
        let window = self.parser.options.front_matter_window;

        // Front matter: title and subtitle, each at most once.
        if index < window && !self.saw_title {
            if let Some(rest) = line.strip_prefix("# ") {
                let text = rest.trim().to_string();
                self.saw_title = true;
                self.document.metadata.title = Some(text.clone());
                self.document.add_block(Block::Title { text });
                return;
            }
        }
        if index < window && !self.saw_subtitle {
            if let Some(rest) = line.strip_prefix("## ") {
                let text = rest.trim().to_string();
                self.saw_subtitle = true;
                self.document.metadata.subtitle = Some(text.clone());
                self.document.add_block(Block::Subtitle { text });
                return;
            }
        }

        // Section headings; each major section after the opening page
        // starts on a fresh page.
        if let Some(rest) = line.strip_prefix("## ") {
            if index > self.parser.options.page_break_min_line {
                self.document.add_block(Block::PageBreak);
            }
            self.document.add_block(Block::heading(rest.trim(), 1));
            return;
        }
        if let Some(rest) = line.strip_prefix("### ") {
            self.document.add_block(Block::heading(rest.trim(), 2));
            return;
        }

        // List items.
        if let Some(rest) = line
            .strip_prefix("- ")
            .or_else(|| line.strip_prefix("* "))
        {
            let text = self.parser.formatter.format(rest.trim());
            self.document.add_block(Block::Bullet { text });
            return;
        }
        if let Some(caps) = self.parser.numbered.captures(line) {
            let text = self.parser.formatter.format(caps[2].trim());
            self.document.add_block(Block::NumberedItem { text });
            return;
        }

        // Table opener: this line is the header row.
        if line.starts_with('|') {
            self.state = ScanState::InTable;
            self.pending_rows = vec![TableRow::new(split_cells(line))];
            return;
        }

        // Horizontal rules.
        if line.starts_with("---") || line.starts_with("***") {
            self.document.add_block(Block::Rule);
            return;
        }

        // Emphasized metadata line: one bold run, no inline formatting.
        if line.len() >= 4 && line.starts_with("**") && line.ends_with("**") {
            let text = line.replace("**", "").trim().to_string();
            self.document
                .add_block(Block::Paragraph {
                    text: StyledText::bold(text),
                });
            return;
        }

        // Image reference; a line that fails the pattern is dropped
        // without a warning (indistinguishable from prose).
        if line.starts_with("![") {
            if let Some(caps) = self.parser.image.captures(line) {
                self.document.add_block(Block::Image {
                    alt_text: caps[1].to_string(),
                    path: PathBuf::from(&caps[2]),
                });
            } else {
                log::debug!("dropping malformed image line {}", index + 1);
            }
            return;
        }

        // Everything else that still looks like prose.
        if !line.is_empty() && !line.starts_with('#') && !line.starts_with('|') {
            let text = self.parser.formatter.format(line);
            self.document.add_block(Block::Paragraph { text });
        }
        // Blank lines and stray markup produce no block.
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> ParseOutcome {
        MarkdownParser::new().parse(input)
    }

    #[test]
    fn test_front_matter_window() {
        let outcome = parse("# Title\n## Subtitle\n## Section One\nSome text.\n");
        let blocks = &outcome.document.blocks;

        assert_eq!(blocks.len(), 4);
        assert!(matches!(&blocks[0], Block::Title { text } if text == "Title"));
        assert!(matches!(&blocks[1], Block::Subtitle { text } if text == "Subtitle"));
        assert!(
            matches!(&blocks[2], Block::Heading { text, level: 1 } if text == "Section One")
        );
        assert!(matches!(&blocks[3], Block::Paragraph { .. }));
        assert_eq!(outcome.document.metadata.title.as_deref(), Some("Title"));
        assert_eq!(
            outcome.document.metadata.subtitle.as_deref(),
            Some("Subtitle")
        );
    }

    #[test]
    fn test_title_outside_window_dropped() {
        let input = "a\nb\nc\nd\ne\n# Late Title\n";
        let outcome = parse(input);
        assert!(outcome
            .document
            .blocks
            .iter()
            .all(|b| !matches!(b, Block::Title { .. })));
        assert!(outcome.document.metadata.title.is_none());
    }

    #[test]
    fn test_page_break_threshold() {
        let parser = MarkdownParser::with_options(
            ParseOptions::new().with_page_break_min_line(2),
        );
        let outcome = parser.parse("# T\n## S\nx\n## Early\nx\n## Late\n");
        let blocks = &outcome.document.blocks;

        // Indices 3 and 5 both exceed the shrunken threshold; with the
        // default threshold of 10 neither heading would get a break.
        let breaks = blocks
            .iter()
            .filter(|b| matches!(b, Block::PageBreak))
            .count();
        assert_eq!(breaks, 2);
        assert!(matches!(blocks[3], Block::PageBreak));
    }

    #[test]
    fn test_table_accumulation_and_reentry() {
        let input = "| A | B |\n|---|---|\n| 1 | 2 |\n### After\n";
        let outcome = parse(input);
        let blocks = &outcome.document.blocks;

        assert_eq!(blocks.len(), 2);
        let Block::Table(table) = &blocks[0] else {
            panic!("expected table, got {:?}", blocks[0]);
        };
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.header().unwrap().cells, vec!["A", "B"]);
        assert!(matches!(&blocks[1], Block::Heading { level: 2, .. }));
        assert!(outcome.warnings.is_empty());
    }

    #[test]
    fn test_table_closed_by_blank_line() {
        let input = "| A |\n| 1 |\n\n| B |\n| 2 |\n";
        let outcome = parse(input);
        assert_eq!(outcome.document.table_count(), 2);
    }

    #[test]
    fn test_table_flushed_at_end_of_input() {
        let outcome = parse("| A | B |\n| 1 | 2 |");
        assert_eq!(outcome.document.table_count(), 1);
    }

    #[test]
    fn test_ragged_row_normalized() {
        let outcome = parse("| A | B | C |\n| 1 | 2 |\n| 1 | 2 | 3 | 4 |\n");
        let Block::Table(table) = &outcome.document.blocks[0] else {
            panic!("expected table");
        };
        assert!(table.rows.iter().all(|r| r.cells.len() == 3));
        assert_eq!(outcome.warnings.len(), 2);
        assert!(matches!(
            outcome.warnings[0],
            Warning::RaggedTableRow {
                line: 1,
                expected: 3,
                found: 2
            }
        ));
    }

    #[test]
    fn test_numbered_items_strip_numerals() {
        let outcome = parse("1. First item\n2. Second item\n");
        let blocks = &outcome.document.blocks;
        assert_eq!(blocks.len(), 2);
        let texts: Vec<_> = blocks
            .iter()
            .map(|b| match b {
                Block::NumberedItem { text } => text.plain_text(),
                other => panic!("expected numbered item, got {:?}", other),
            })
            .collect();
        assert_eq!(texts, vec!["First item", "Second item"]);
    }

    #[test]
    fn test_bullets_both_markers() {
        let outcome = parse("- dash item\n* star item\n");
        assert_eq!(outcome.document.blocks.len(), 2);
        assert!(outcome
            .document
            .blocks
            .iter()
            .all(|b| matches!(b, Block::Bullet { .. })));
    }

    #[test]
    fn test_bold_metadata_line() {
        let outcome = parse("**Prepared by the research team**\n");
        let Block::Paragraph { text } = &outcome.document.blocks[0] else {
            panic!("expected paragraph");
        };
        assert_eq!(text.spans.len(), 1);
        assert!(text.spans[0].style.bold);
        assert_eq!(text.plain_text(), "Prepared by the research team");
    }

    #[test]
    fn test_malformed_image_silently_dropped() {
        let outcome = parse("![unclosed alt\nStill a paragraph.\n");
        let blocks = &outcome.document.blocks;
        assert_eq!(blocks.len(), 1);
        assert!(matches!(&blocks[0], Block::Paragraph { .. }));
        assert!(outcome.warnings.is_empty());
    }

    #[test]
    fn test_image_reference_captured() {
        let outcome = parse("![Figure 1: Trust by tenure](figures/trust.png)\n");
        let Block::Image { alt_text, path } = &outcome.document.blocks[0] else {
            panic!("expected image");
        };
        assert_eq!(alt_text, "Figure 1: Trust by tenure");
        assert_eq!(path.to_str(), Some("figures/trust.png"));
    }

    #[test]
    fn test_rule_lines() {
        let outcome = parse("---\n***\n");
        assert_eq!(outcome.document.blocks.len(), 2);
        assert!(outcome
            .document
            .blocks
            .iter()
            .all(|b| matches!(b, Block::Rule)));
    }

    #[test]
    fn test_blank_and_stray_lines_ignored() {
        let outcome = parse("\n   \n#stray\n#### too deep\n");
        assert!(outcome.document.is_empty());
    }
}
