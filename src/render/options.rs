//! Rendering options and configuration.

use super::StyleSheet;
use std::path::PathBuf;

/// Default font family name; the discovery search looks for
/// `{family}-Regular.ttf` and friends.
pub const DEFAULT_FONT_FAMILY: &str = "LiberationSans";

/// Page margin in millimeters (one inch, as the original report used).
const DEFAULT_MARGIN_MM: f64 = 25.4;

/// Maximum embedded-image box: 5.5 in wide, 4 in tall, in millimeters.
const DEFAULT_IMAGE_MAX_WIDTH_MM: f64 = 139.7;
const DEFAULT_IMAGE_MAX_HEIGHT_MM: f64 = 101.6;

/// Options for rendering a classified document to PDF.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Directory holding the font family; when `None`, conventional
    /// locations are searched
    pub fonts_dir: Option<PathBuf>,

    /// Font family name
    pub font_family: String,

    /// Base directory for resolving relative image paths; the working
    /// directory when `None`
    pub image_dir: Option<PathBuf>,

    /// Page margin in millimeters
    pub margin_mm: f64,

    /// Maximum embedded-image width in millimeters
    pub image_max_width: f64,

    /// Maximum embedded-image height in millimeters
    pub image_max_height: f64,

    /// Style palette
    pub styles: StyleSheet,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the font directory.
    pub fn with_fonts_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.fonts_dir = Some(dir.into());
        self
    }

    /// Set the font family name.
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    /// Set the base directory for image references.
    pub fn with_image_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.image_dir = Some(dir.into());
        self
    }

    /// Set the page margin in millimeters.
    pub fn with_margin(mut self, mm: f64) -> Self {
        self.margin_mm = mm;
        self
    }

    /// Set the maximum embedded-image box in millimeters.
    pub fn with_image_box(mut self, width_mm: f64, height_mm: f64) -> Self {
        self.image_max_width = width_mm;
        self.image_max_height = height_mm;
        self
    }

    /// Set the style palette.
    pub fn with_styles(mut self, styles: StyleSheet) -> Self {
        self.styles = styles;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            fonts_dir: None,
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            image_dir: None,
            margin_mm: DEFAULT_MARGIN_MM,
            image_max_width: DEFAULT_IMAGE_MAX_WIDTH_MM,
            image_max_height: DEFAULT_IMAGE_MAX_HEIGHT_MM,
            styles: StyleSheet::default(),
        }
    }
}
