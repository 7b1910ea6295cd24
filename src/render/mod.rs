//! Rendering module: turns a classified [`Document`](crate::model::Document)
//! into output artifacts — a paginated PDF via the layout engine, plus
//! JSON and plain-text debug representations.

mod fonts;
mod json;
mod options;
mod pdf;
mod result;
mod style;
mod text;

pub use fonts::load_font_family;
pub use json::{to_json, JsonFormat};
pub use options::RenderOptions;
pub use pdf::{resolve_image, to_pdf, to_pdf_file, ImagePlacement, PdfRenderer};
pub use result::{RenderResult, RenderStats};
pub use style::{Align, BlockStyle, StyleSheet};
pub use text::to_text;
