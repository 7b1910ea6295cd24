//! Integration tests for line classification.

use mdpress::parser::{MarkdownParser, ParseOptions};
use mdpress::{parse_str, Block, InlineFormatter, Warning};

/// Count the table blocks in classified input.
fn table_count(input: &str) -> usize {
    parse_str(input).document.table_count()
}

#[test]
fn test_table_blocks_match_pipe_runs() {
    // One maximal run of pipe lines -> one table.
    assert_eq!(table_count("| a |\n| 1 |\n| 2 |\n"), 1);

    // A separator row does not split the run.
    assert_eq!(table_count("| a | b |\n|---|---|\n| 1 | 2 |\n"), 1);

    // Two runs separated by prose -> two tables.
    assert_eq!(
        table_count("| a |\n| 1 |\nbetween tables\n| b |\n| 2 |\n"),
        2
    );

    // Two runs separated by a blank line -> two tables.
    assert_eq!(table_count("| a |\n| 1 |\n\n| b |\n| 2 |\n"), 2);

    // No pipe lines -> no tables.
    assert_eq!(table_count("just a paragraph\n- and a bullet\n"), 0);
}

#[test]
fn test_format_inline_ordering_and_idempotence() {
    let formatter = InlineFormatter::new();
    let text = formatter.format("**a** *b* `c`");

    let styled: Vec<_> = text
        .spans
        .iter()
        .filter(|s| s.style.has_styling())
        .collect();
    assert_eq!(styled.len(), 3);
    assert!(styled[0].style.bold && !styled[0].style.italic);
    assert_eq!(styled[0].text, "a");
    assert!(styled[1].style.italic && !styled[1].style.bold);
    assert_eq!(styled[1].text, "b");
    assert!(styled[2].style.bold);
    assert_eq!(styled[2].text, "c");

    // All delimiters consumed: re-formatting the plain text is a no-op.
    let plain = text.plain_text();
    let again = formatter.format(&plain);
    assert_eq!(again.plain_text(), plain);
    assert!(!again.has_styling());
}

#[test]
fn test_table_rows_and_header() {
    // With a separator row.
    let outcome = parse_str("| A | B |\n|---|---|\n| 1 | 2 |\n| 3 | 4 |\n");
    let Block::Table(table) = &outcome.document.blocks[0] else {
        panic!("expected a table");
    };
    assert_eq!(table.row_count(), 3);
    assert_eq!(table.header().unwrap().cells, vec!["A", "B"]);

    // Without a separator row the header is still row 0.
    let outcome = parse_str("| A | B |\n| 1 | 2 |\n| 3 | 4 |\n");
    let Block::Table(table) = &outcome.document.blocks[0] else {
        panic!("expected a table");
    };
    assert_eq!(table.row_count(), 3);
    assert_eq!(table.header().unwrap().cells, vec!["A", "B"]);
}

#[test]
fn test_missing_image_never_aborts() {
    // The classifier captures the reference; resolution happens at
    // render time, so the following paragraph is still classified.
    let outcome = parse_str("![Chart](missing.png)\nStill here.\n");
    let blocks = &outcome.document.blocks;
    assert_eq!(blocks.len(), 2);
    assert!(blocks[0].is_image());
    assert!(matches!(&blocks[1], Block::Paragraph { .. }));

    // Render-time resolution turns the dangling reference into a
    // warning, never an Image element.
    let options = mdpress::render::RenderOptions::default();
    let result =
        mdpress::render::resolve_image(std::path::Path::new("missing.png"), &options);
    assert!(matches!(result, Err(Warning::MissingImage { .. })));
}

#[test]
fn test_front_matter_example() {
    let outcome = parse_str("# Title\n## Subtitle\n## Section One\nSome text.\n");
    let blocks = &outcome.document.blocks;

    assert_eq!(blocks.len(), 4);
    assert!(matches!(&blocks[0], Block::Title { text } if text == "Title"));
    assert!(matches!(&blocks[1], Block::Subtitle { text } if text == "Subtitle"));
    // Line index 2 is below the page-break threshold: no leading break.
    assert!(matches!(&blocks[2], Block::Heading { text, level: 1 } if text == "Section One"));
    assert!(
        matches!(&blocks[3], Block::Paragraph { text } if text.plain_text() == "Some text.")
    );
}

#[test]
fn test_numbered_items_discard_numerals() {
    let outcome = parse_str("1. First item\n2. Second item\n");
    let texts: Vec<_> = outcome
        .document
        .blocks
        .iter()
        .map(|b| match b {
            Block::NumberedItem { text } => text.plain_text(),
            other => panic!("expected a numbered item, got {:?}", other),
        })
        .collect();
    assert_eq!(texts, vec!["First item", "Second item"]);
}

#[test]
fn test_ragged_table_warning_channel() {
    let outcome = parse_str("| A | B | C |\n| 1 | 2 |\n");
    assert_eq!(outcome.warnings.len(), 1);
    assert!(matches!(
        outcome.warnings[0],
        Warning::RaggedTableRow {
            line: 1,
            expected: 3,
            found: 2
        }
    ));

    // The block stream is unaffected apart from the normalized row.
    let Block::Table(table) = &outcome.document.blocks[0] else {
        panic!("expected a table");
    };
    assert!(table.rows.iter().all(|r| r.cells.len() == 3));
}

#[test]
fn test_shrunken_front_matter_window() {
    let parser = MarkdownParser::with_options(ParseOptions::new().with_front_matter_window(1));
    let outcome = parser.parse("# Title\n## Not a subtitle anymore\n");
    let blocks = &outcome.document.blocks;

    assert!(matches!(&blocks[0], Block::Title { .. }));
    assert!(matches!(&blocks[1], Block::Heading { level: 1, .. }));
}

#[test]
fn test_page_break_per_major_section() {
    let mut input = String::from("# Title\n## Subtitle\n");
    for _ in 0..12 {
        input.push_str("filler paragraph\n");
    }
    input.push_str("## Late Section\n");

    let outcome = parse_str(&input);
    let blocks = &outcome.document.blocks;
    let heading_pos = blocks
        .iter()
        .position(|b| matches!(b, Block::Heading { level: 1, .. }))
        .unwrap();
    assert!(matches!(blocks[heading_pos - 1], Block::PageBreak));
}
