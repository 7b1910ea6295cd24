//! Rendering result with metadata and statistics.

use crate::model::Metadata;
use crate::warning::Warning;
use serde::{Deserialize, Serialize};

/// Result of rendering a document to PDF.
#[derive(Debug, Clone)]
pub struct RenderResult {
    /// The rendered PDF bytes
    pub bytes: Vec<u8>,

    /// Document metadata (copied from the source document)
    pub metadata: Metadata,

    /// Rendering statistics
    pub stats: RenderStats,

    /// Recoverable problems encountered while rendering
    pub warnings: Vec<Warning>,
}

impl RenderResult {
    /// Get the output length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Check if no output was produced.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Statistics collected while rendering a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderStats {
    /// Number of body paragraphs rendered
    pub paragraph_count: u32,

    /// Number of headings rendered (title and subtitle excluded)
    pub heading_count: u32,

    /// Number of bulleted items rendered
    pub bullet_count: u32,

    /// Number of numbered items rendered
    pub numbered_item_count: u32,

    /// Number of tables rendered
    pub table_count: u32,

    /// Number of images embedded
    pub images_embedded: u32,

    /// Number of image references skipped (missing or unreadable)
    pub images_skipped: u32,

    /// Number of page breaks emitted
    pub page_break_count: u32,
}

impl RenderStats {
    /// Create empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total count of content-bearing blocks rendered.
    pub fn content_blocks(&self) -> u32 {
        self.paragraph_count
            + self.heading_count
            + self.bullet_count
            + self.numbered_item_count
            + self.table_count
            + self.images_embedded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_totals() {
        let stats = RenderStats {
            paragraph_count: 3,
            heading_count: 2,
            table_count: 1,
            images_embedded: 1,
            images_skipped: 2,
            ..Default::default()
        };
        assert_eq!(stats.content_blocks(), 7);
    }
}
