//! Plain text rendering of the classified block sequence.
//!
//! Used for inspection and for tests that must not depend on fonts being
//! installed; numbered items are renumbered here exactly as the PDF
//! renderer numbers them.

use crate::model::{Block, Document};

/// Convert a classified document to plain text.
pub fn to_text(doc: &Document) -> String {
    let mut output = String::new();
    let mut list_counter = 0u32;

    for block in &doc.blocks {
        if !matches!(block, Block::NumberedItem { .. }) {
            list_counter = 0;
        }
        match block {
            Block::Title { text } | Block::Subtitle { text } | Block::Heading { text, .. } => {
                output.push_str(text);
                output.push_str("\n\n");
            }
            Block::Bullet { text } => {
                output.push_str("\u{2022} ");
                output.push_str(&text.plain_text());
                output.push('\n');
            }
            Block::NumberedItem { text } => {
                list_counter += 1;
                output.push_str(&format!("{}. {}\n", list_counter, text.plain_text()));
            }
            Block::Paragraph { text } => {
                output.push_str(&text.plain_text());
                output.push_str("\n\n");
            }
            Block::Table(table) => {
                output.push_str(&table.plain_text());
                output.push_str("\n\n");
            }
            Block::Image { alt_text, .. } => {
                output.push_str(&format!("[Image: {}]\n\n", alt_text));
            }
            Block::PageBreak | Block::Spacer { .. } | Block::Rule => {
                if !output.ends_with("\n\n") && !output.is_empty() {
                    output.push('\n');
                }
            }
        }
    }

    output.trim().to_string()
}
