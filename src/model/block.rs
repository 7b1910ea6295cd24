//! Block-level document content.

use super::{StyledText, Table};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One discrete unit of document content produced by the line classifier.
///
/// Blocks are self-contained and order-preserving: the layout stage
/// renders them one after another without any inter-block negotiation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// The report title, only produced inside the front-matter window
    Title {
        /// Title text, markup-free
        text: String,
    },

    /// The report subtitle, only produced inside the front-matter window
    Subtitle {
        /// Subtitle text, markup-free
        text: String,
    },

    /// A section (`##`, level 1) or subsection (`###`, level 2) heading
    Heading {
        /// Heading text, markup-free
        text: String,
        /// Heading level, 1 or 2
        level: u8,
    },

    /// A bulleted list item
    Bullet {
        /// Inline-formatted item text
        text: StyledText,
    },

    /// A numbered list item; the source numeral is stripped and
    /// renumbering happens at render time
    NumberedItem {
        /// Inline-formatted item text
        text: StyledText,
    },

    /// A body paragraph
    Paragraph {
        /// Inline-formatted paragraph text
        text: StyledText,
    },

    /// A table; row 0 is the header
    Table(Table),

    /// A referenced image, resolved against the filesystem at render time
    Image {
        /// Caption text (may be empty)
        alt_text: String,
        /// Path as written in the source
        path: PathBuf,
    },

    /// Start a new page before the next block
    PageBreak,

    /// Vertical whitespace, in line heights
    Spacer {
        /// Height in line heights
        height: f64,
    },

    /// A horizontal rule / thematic break
    Rule,
}

impl Block {
    /// Create a heading block; the level is clamped to 1..=2.
    pub fn heading(text: impl Into<String>, level: u8) -> Self {
        Block::Heading {
            text: text.into(),
            level: level.clamp(1, 2),
        }
    }

    /// Create a paragraph block from already-formatted text.
    pub fn paragraph(text: StyledText) -> Self {
        Block::Paragraph { text }
    }

    /// Create an image block.
    pub fn image(alt_text: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Block::Image {
            alt_text: alt_text.into(),
            path: path.into(),
        }
    }

    /// Check if this block is a table.
    pub fn is_table(&self) -> bool {
        matches!(self, Block::Table(_))
    }

    /// Check if this block is an image reference.
    pub fn is_image(&self) -> bool {
        matches!(self, Block::Image { .. })
    }

    /// Check if this block carries no text (layout-only).
    pub fn is_layout_only(&self) -> bool {
        matches!(
            self,
            Block::PageBreak | Block::Spacer { .. } | Block::Rule
        )
    }

    /// Get the text content with styling stripped, if the block has any.
    pub fn plain_text(&self) -> Option<String> {
        match self {
            Block::Title { text } | Block::Subtitle { text } | Block::Heading { text, .. } => {
                Some(text.clone())
            }
            Block::Bullet { text } | Block::NumberedItem { text } | Block::Paragraph { text } => {
                Some(text.plain_text())
            }
            Block::Table(table) => Some(table.plain_text()),
            Block::Image { alt_text, .. } => Some(alt_text.clone()),
            Block::PageBreak | Block::Spacer { .. } | Block::Rule => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_level_clamped() {
        assert!(matches!(
            Block::heading("Methods", 7),
            Block::Heading { level: 2, .. }
        ));
        assert!(matches!(
            Block::heading("Methods", 0),
            Block::Heading { level: 1, .. }
        ));
    }

    #[test]
    fn test_block_kinds() {
        let img = Block::image("Figure 1", "fig1.png");
        assert!(img.is_image());
        assert!(!img.is_table());
        assert!(!img.is_layout_only());
        assert!(Block::PageBreak.is_layout_only());
        assert_eq!(Block::Rule.plain_text(), None);
    }

    #[test]
    fn test_serde_tag() {
        let json = serde_json::to_string(&Block::PageBreak).unwrap();
        assert!(json.contains("\"page_break\""));

        let json = serde_json::to_string(&Block::heading("Results", 1)).unwrap();
        assert!(json.contains("\"heading\""));
        assert!(json.contains("\"Results\""));

        let spacer: Block = serde_json::from_str(r#"{"type":"spacer","height":0.5}"#).unwrap();
        assert!(matches!(spacer, Block::Spacer { height } if height == 0.5));
    }
}
