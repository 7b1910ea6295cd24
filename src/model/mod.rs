//! Document model for classified report content.
//!
//! This module defines the intermediate representation that bridges line
//! classification and rendering: an ordered sequence of self-contained
//! blocks. The model is layout-agnostic — each block's rendering is
//! independent of its neighbours — and fully serde-serializable.

mod block;
mod document;
mod inline;
mod table;

pub use block::Block;
pub use document::{Document, Metadata};
pub use inline::{SpanStyle, StyledText, TextSpan};
pub use table::{Table, TableRow};
