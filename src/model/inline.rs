//! Inline text with resolved styling.

use serde::{Deserialize, Serialize};

/// A run of inline-formatted text: the output of the inline markup
/// formatter, with all delimiters consumed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyledText {
    /// Styled runs in source order
    pub spans: Vec<TextSpan>,
}

impl StyledText {
    /// Create an empty styled text.
    pub fn new() -> Self {
        Self { spans: Vec::new() }
    }

    /// Create styled text consisting of a single unstyled span.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            spans: vec![TextSpan::new(text)],
        }
    }

    /// Create styled text consisting of a single bold span.
    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            spans: vec![TextSpan::bold(text)],
        }
    }

    /// Append a span.
    pub fn push(&mut self, span: TextSpan) {
        if !span.text.is_empty() {
            self.spans.push(span);
        }
    }

    /// Concatenated text content with all styling stripped.
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    /// Check if there is no visible text.
    pub fn is_empty(&self) -> bool {
        self.spans.iter().all(|s| s.text.trim().is_empty())
    }

    /// Check if any span carries styling.
    pub fn has_styling(&self) -> bool {
        self.spans.iter().any(|s| s.style.has_styling())
    }
}

/// A span of text with consistent styling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSpan {
    /// The text content
    pub text: String,

    /// Span styling
    pub style: SpanStyle,
}

impl TextSpan {
    /// Create an unstyled span.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: SpanStyle::default(),
        }
    }

    /// Create a bold span.
    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: SpanStyle {
                bold: true,
                ..Default::default()
            },
        }
    }

    /// Create an italic span.
    pub fn italic(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: SpanStyle {
                italic: true,
                ..Default::default()
            },
        }
    }

    /// Create a span with an existing style.
    pub fn styled(text: impl Into<String>, style: SpanStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// Styling applied to a text span.
///
/// Inline code is represented as bold (the renderer has no distinct
/// monospace treatment), so two flags cover the whole inline grammar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpanStyle {
    /// Bold text
    pub bold: bool,

    /// Italic text
    pub italic: bool,
}

impl SpanStyle {
    /// Check if any styling is applied.
    pub fn has_styling(&self) -> bool {
        self.bold || self.italic
    }
}
