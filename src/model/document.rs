//! Document-level types.

use super::Block;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A classified report: an ordered sequence of blocks plus metadata.
///
/// Built in one forward pass over the input lines and handed to the
/// layout stage in full; never mutated after handoff.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Document metadata (title, subtitle, generation time)
    pub metadata: Metadata,

    /// Blocks in source order
    pub blocks: Vec<Block>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a block to the document.
    pub fn add_block(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Get the number of blocks.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Check if the document has any blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Count the table blocks.
    pub fn table_count(&self) -> usize {
        self.blocks.iter().filter(|b| b.is_table()).count()
    }

    /// Count the image reference blocks.
    pub fn image_count(&self) -> usize {
        self.blocks.iter().filter(|b| b.is_image()).count()
    }

    /// Get plain text content of the whole document.
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .filter_map(|b| b.plain_text())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// Document metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Report title, taken from the front-matter `#` line
    pub title: Option<String>,

    /// Report subtitle, taken from the front-matter `##` line
    pub subtitle: Option<String>,

    /// When the document was classified
    pub generated: Option<DateTime<Utc>>,
}

impl Metadata {
    /// Title to hand to the layout engine, falling back to a fixed name.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("Report")
    }
}
