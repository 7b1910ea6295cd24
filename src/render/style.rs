//! Style palette for rendered blocks.
//!
//! Kept engine-agnostic: sizes in points, spacing in line heights,
//! colors as RGB triples. The PDF renderer maps these onto the layout
//! engine's style type.

/// Horizontal alignment of a rendered block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Align {
    /// Left alignment (default)
    #[default]
    Left,
    /// Center alignment
    Center,
    /// Right alignment
    Right,
}

/// Visual treatment of one block kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockStyle {
    /// Font size in points
    pub font_size: u8,

    /// Bold text
    pub bold: bool,

    /// Italic text
    pub italic: bool,

    /// Text color, or the engine default when `None`
    pub color: Option<(u8, u8, u8)>,

    /// Block alignment
    pub align: Align,

    /// Vertical space before the block, in line heights
    pub space_before: f64,

    /// Vertical space after the block, in line heights
    pub space_after: f64,
}

impl BlockStyle {
    /// A plain body style at the given size.
    pub fn body(font_size: u8) -> Self {
        Self {
            font_size,
            bold: false,
            italic: false,
            color: Some((0x33, 0x33, 0x33)),
            align: Align::Left,
            space_before: 0.0,
            space_after: 0.6,
        }
    }
}

/// The full style palette, one entry per rendered block kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleSheet {
    /// Report title
    pub title: BlockStyle,
    /// Report subtitle
    pub subtitle: BlockStyle,
    /// Level-1 section heading
    pub heading1: BlockStyle,
    /// Level-2 subsection heading
    pub heading2: BlockStyle,
    /// Body paragraphs
    pub body: BlockStyle,
    /// Bulleted and numbered list items
    pub list_item: BlockStyle,
    /// Image captions
    pub caption: BlockStyle,
    /// Table header row
    pub table_header: BlockStyle,
    /// Table data cells
    pub table_cell: BlockStyle,
}

impl StyleSheet {
    /// The style for a heading of the given level.
    pub fn heading(&self, level: u8) -> &BlockStyle {
        if level <= 1 {
            &self.heading1
        } else {
            &self.heading2
        }
    }
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self {
            title: BlockStyle {
                font_size: 22,
                bold: true,
                italic: false,
                color: Some((0x1a, 0x1a, 0x1a)),
                align: Align::Center,
                space_before: 4.0,
                space_after: 1.5,
            },
            subtitle: BlockStyle {
                font_size: 13,
                bold: false,
                italic: true,
                color: Some((0x55, 0x55, 0x55)),
                align: Align::Center,
                space_before: 0.0,
                space_after: 2.0,
            },
            heading1: BlockStyle {
                font_size: 14,
                bold: true,
                italic: false,
                color: Some((0x2c, 0x3e, 0x50)),
                align: Align::Left,
                space_before: 1.0,
                space_after: 0.8,
            },
            heading2: BlockStyle {
                font_size: 12,
                bold: true,
                italic: false,
                color: Some((0x34, 0x49, 0x5e)),
                align: Align::Left,
                space_before: 0.8,
                space_after: 0.6,
            },
            body: BlockStyle::body(9),
            list_item: BlockStyle {
                space_after: 0.4,
                ..BlockStyle::body(9)
            },
            caption: BlockStyle {
                font_size: 9,
                bold: true,
                italic: false,
                color: Some((0x55, 0x55, 0x55)),
                align: Align::Center,
                space_before: 0.4,
                space_after: 0.2,
            },
            table_header: BlockStyle {
                font_size: 8,
                bold: true,
                italic: false,
                color: Some((0x2c, 0x3e, 0x50)),
                align: Align::Left,
                space_before: 0.0,
                space_after: 0.0,
            },
            table_cell: BlockStyle {
                font_size: 7,
                bold: false,
                italic: false,
                color: Some((0x33, 0x33, 0x33)),
                align: Align::Left,
                space_before: 0.0,
                space_after: 0.0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_lookup() {
        let styles = StyleSheet::default();
        assert_eq!(styles.heading(1).font_size, 14);
        assert_eq!(styles.heading(2).font_size, 12);
        // Clamped levels resolve to the nearest entry.
        assert_eq!(styles.heading(0).font_size, 14);
        assert_eq!(styles.heading(5).font_size, 12);
    }

    #[test]
    fn test_default_palette() {
        let styles = StyleSheet::default();
        assert!(styles.title.bold);
        assert_eq!(styles.title.align, Align::Center);
        assert!(styles.subtitle.italic);
        assert_eq!(styles.table_cell.font_size, 7);
    }
}
