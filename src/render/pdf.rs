//! PDF rendering via the genpdf layout engine.
//!
//! The renderer walks the block sequence once, mapping each block onto a
//! layout element. Blocks are self-contained, so rendering is a single
//! forward pass with no inter-block negotiation; the layout engine does
//! the page flow and binary encoding.

use crate::error::Result;
use crate::model::{Block, Document, StyledText, Table};
use crate::render::fonts::load_font_family;
use crate::render::style::{Align, BlockStyle};
use crate::render::{RenderOptions, RenderResult, RenderStats};
use crate::warning::Warning;
use genpdf::elements::{Break, FrameCellDecorator, Image, PageBreak, Paragraph, TableLayout};
use genpdf::style::{Color, Style};
use genpdf::{Alignment, Element, Margins, Scale, SimplePageDecorator};
use std::path::{Path, PathBuf};

/// Pixel density the layout engine assumes when sizing raster images.
const IMAGE_DPI: f64 = 300.0;

const MM_PER_INCH: f64 = 25.4;

/// Render a classified document to PDF bytes.
pub fn to_pdf(doc: &Document, options: &RenderOptions) -> Result<RenderResult> {
    PdfRenderer::new(options.clone()).render(doc)
}

/// Render a classified document and write the PDF to `path`.
///
/// The write is a single plain write: on failure the state of the output
/// file is undefined.
pub fn to_pdf_file<P: AsRef<Path>>(
    doc: &Document,
    path: P,
    options: &RenderOptions,
) -> Result<RenderResult> {
    let result = to_pdf(doc, options)?;
    std::fs::write(path, &result.bytes)?;
    Ok(result)
}

/// PDF renderer.
pub struct PdfRenderer {
    options: RenderOptions,
    stats: RenderStats,
    warnings: Vec<Warning>,
    list_counter: u32,
}

impl PdfRenderer {
    /// Create a new PDF renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            stats: RenderStats::new(),
            warnings: Vec::new(),
            list_counter: 0,
        }
    }

    /// Render a document to PDF bytes.
    pub fn render(mut self, doc: &Document) -> Result<RenderResult> {
        let family = load_font_family(&self.options)?;
        let mut pdf = genpdf::Document::new(family);
        pdf.set_title(doc.metadata.display_title());
        pdf.set_font_size(self.options.styles.body.font_size);

        let mut decorator = SimplePageDecorator::new();
        let margin = self.options.margin_mm;
        decorator.set_margins(Margins::trbl(margin, margin, margin, margin));
        pdf.set_page_decorator(decorator);

        for block in &doc.blocks {
            self.render_block(&mut pdf, block);
        }

        let mut bytes = Vec::new();
        pdf.render(&mut bytes)?;

        Ok(RenderResult {
            bytes,
            metadata: doc.metadata.clone(),
            stats: self.stats,
            warnings: self.warnings,
        })
    }

    fn render_block(&mut self, pdf: &mut genpdf::Document, block: &Block) {
        // Numbered runs restart whenever another block kind intervenes.
        if !matches!(block, Block::NumberedItem { .. }) {
            self.list_counter = 0;
        }

        match block {
            Block::Title { text } => {
                let style = self.options.styles.title;
                self.push_plain(pdf, text, style);
            }
            Block::Subtitle { text } => {
                let style = self.options.styles.subtitle;
                self.push_plain(pdf, text, style);
            }
            Block::Heading { text, level } => {
                let style = *self.options.styles.heading(*level);
                self.push_plain(pdf, text, style);
                self.stats.heading_count += 1;
            }
            Block::Bullet { text } => {
                let style = self.options.styles.list_item;
                self.push_styled_text(pdf, text, style, Some("\u{2022} ".to_string()));
                self.stats.bullet_count += 1;
            }
            Block::NumberedItem { text } => {
                self.list_counter += 1;
                let style = self.options.styles.list_item;
                let prefix = format!("{}. ", self.list_counter);
                self.push_styled_text(pdf, text, style, Some(prefix));
                self.stats.numbered_item_count += 1;
            }
            Block::Paragraph { text } => {
                let style = self.options.styles.body;
                self.push_styled_text(pdf, text, style, None);
                self.stats.paragraph_count += 1;
            }
            Block::Table(table) => self.render_table(pdf, table),
            Block::Image { alt_text, path } => self.render_image(pdf, alt_text, path),
            Block::PageBreak => {
                pdf.push(PageBreak::new());
                self.stats.page_break_count += 1;
            }
            Block::Spacer { height } => pdf.push(Break::new(*height)),
            // No line primitive in the engine; a rule becomes a gap, as
            // the original report layout rendered it.
            Block::Rule => pdf.push(Break::new(0.5)),
        }
    }

    fn push_plain(&mut self, pdf: &mut genpdf::Document, text: &str, style: BlockStyle) {
        let text = StyledText::plain(text);
        self.push_styled_text(pdf, &text, style, None);
    }

    fn push_styled_text(
        &mut self,
        pdf: &mut genpdf::Document,
        text: &StyledText,
        style: BlockStyle,
        prefix: Option<String>,
    ) {
        if style.space_before > 0.0 {
            pdf.push(Break::new(style.space_before));
        }

        let mut para = Paragraph::default();
        para.set_alignment(map_alignment(style.align));
        let base = text_style(&style);
        if let Some(prefix) = prefix {
            para.push_styled(prefix, base.clone());
        }
        for span in &text.spans {
            let mut run = base.clone();
            if span.style.bold {
                run = run.bold();
            }
            if span.style.italic {
                run = run.italic();
            }
            para.push_styled(span.text.clone(), run);
        }
        pdf.push(para);

        if style.space_after > 0.0 {
            pdf.push(Break::new(style.space_after));
        }
    }

    fn render_table(&mut self, pdf: &mut genpdf::Document, table: &Table) {
        let columns = table.column_count();
        if columns == 0 {
            return;
        }

        // Fixed total width split evenly: equal weight per header column.
        let mut layout = TableLayout::new(vec![1; columns]);
        layout.set_cell_decorator(FrameCellDecorator::new(true, true, false));

        for (i, row) in table.rows.iter().enumerate() {
            let style = if i == 0 {
                self.options.styles.table_header
            } else {
                self.options.styles.table_cell
            };
            let base = text_style(&style);

            let mut layout_row = layout.row();
            for cell in &row.cells {
                let mut para = Paragraph::default();
                para.push_styled(cell.clone(), base.clone());
                layout_row.push_element(para.padded(Margins::trbl(0.5, 1.0, 0.5, 1.0)));
            }
            if let Err(e) = layout_row.push() {
                log::warn!("failed to lay out table row {}: {}", i + 1, e);
            }
        }

        pdf.push(layout);
        pdf.push(Break::new(0.8));
        self.stats.table_count += 1;
    }

    fn render_image(&mut self, pdf: &mut genpdf::Document, alt_text: &str, path: &Path) {
        let placement = match resolve_image(path, &self.options) {
            Ok(placement) => placement,
            Err(warning) => {
                log::warn!("{}", warning);
                self.warnings.push(warning);
                self.stats.images_skipped += 1;
                return;
            }
        };

        let element = match Image::from_path(&placement.path) {
            Ok(image) => image
                .with_alignment(Alignment::Center)
                .with_scale(Scale::new(placement.scale, placement.scale)),
            Err(e) => {
                let warning = Warning::UnreadableImage {
                    path: placement.path.clone(),
                    reason: e.to_string(),
                };
                log::warn!("{}", warning);
                self.warnings.push(warning);
                self.stats.images_skipped += 1;
                return;
            }
        };

        // The caption sits directly above its image and is dropped with
        // it when the image cannot be embedded.
        if !alt_text.is_empty() {
            let style = self.options.styles.caption;
            self.push_plain(pdf, alt_text, style);
        }
        pdf.push(element);
        pdf.push(Break::new(1.0));
        self.stats.images_embedded += 1;
    }
}

/// A resolved image reference: the on-disk path and the uniform scale
/// factor that fits it inside the configured box without upscaling.
#[derive(Debug, Clone, PartialEq)]
pub struct ImagePlacement {
    /// Path after resolution against the image base directory
    pub path: PathBuf,

    /// Uniform scale factor, at most 1.0
    pub scale: f64,
}

/// Resolve an image reference against the filesystem at render time.
///
/// Relative paths resolve against the configured image directory (the
/// working directory when unset). A missing or undecodable file comes
/// back as a [`Warning`], never an error: one bad chart must not abort
/// the report.
pub fn resolve_image(
    path: &Path,
    options: &RenderOptions,
) -> std::result::Result<ImagePlacement, Warning> {
    let resolved = match &options.image_dir {
        Some(dir) if path.is_relative() => dir.join(path),
        _ => path.to_path_buf(),
    };

    if !resolved.exists() {
        return Err(Warning::MissingImage { path: resolved });
    }

    let (width, height) =
        image::image_dimensions(&resolved).map_err(|e| Warning::UnreadableImage {
            path: resolved.clone(),
            reason: e.to_string(),
        })?;

    let scale = fit_scale(
        width,
        height,
        options.image_max_width,
        options.image_max_height,
    );
    Ok(ImagePlacement {
        path: resolved,
        scale,
    })
}

/// Uniform scale that fits a `width`×`height` pixel image inside the
/// given box, never upscaling past native size.
fn fit_scale(px_width: u32, px_height: u32, max_width_mm: f64, max_height_mm: f64) -> f64 {
    let natural_width = px_width.max(1) as f64 * MM_PER_INCH / IMAGE_DPI;
    let natural_height = px_height.max(1) as f64 * MM_PER_INCH / IMAGE_DPI;
    (max_width_mm / natural_width)
        .min(max_height_mm / natural_height)
        .min(1.0)
}

fn text_style(block: &BlockStyle) -> Style {
    let mut style = Style::new().with_font_size(block.font_size);
    if block.bold {
        style = style.bold();
    }
    if block.italic {
        style = style.italic();
    }
    if let Some((r, g, b)) = block.color {
        style = style.with_color(Color::Rgb(r, g, b));
    }
    style
}

fn map_alignment(align: Align) -> Alignment {
    match align {
        Align::Left => Alignment::Left,
        Align::Center => Alignment::Center,
        Align::Right => Alignment::Right,
    }
}
