//! Inline markup resolution.
//!
//! Turns bold/italic/code/link spans inside one line of text into
//! [`StyledText`] runs. Rules are applied in a fixed order: bold before
//! italic, because both use `*` and the two-character delimiter must be
//! consumed first; then inline code (rendered bold, no monospace
//! treatment); then links, which are reduced to their label.

use crate::model::{SpanStyle, StyledText, TextSpan};
use regex::Regex;

/// Resolves inline markup into styled spans.
pub struct InlineFormatter {
    bold: Regex,
    italic: Regex,
    code: Regex,
    link: Regex,
}

impl InlineFormatter {
    /// Create a formatter with the inline-span patterns compiled.
    pub fn new() -> Self {
        Self {
            bold: Regex::new(r"\*\*([^*]+)\*\*").unwrap(),
            italic: Regex::new(r"\*([^*]+)\*").unwrap(),
            code: Regex::new(r"`([^`]+)`").unwrap(),
            link: Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap(),
        }
    }

    /// Resolve the inline markup in `text`.
    ///
    /// Re-applying `format` to the plain text of its own output is a
    /// no-op: every delimiter is consumed by the first pass.
    pub fn format(&self, text: &str) -> StyledText {
        let mut spans = vec![TextSpan::new(text)];

        // Delimiter-consuming passes split only still-unstyled spans.
        spans = split_matches(spans, &self.bold, true, |style| SpanStyle {
            bold: true,
            ..style
        });
        spans = split_matches(spans, &self.italic, true, |style| SpanStyle {
            italic: true,
            ..style
        });
        // Code can appear inside an already-emphasized run.
        spans = split_matches(spans, &self.code, false, |style| SpanStyle {
            bold: true,
            ..style
        });

        // Links keep their label, drop the target.
        let mut out = StyledText::new();
        for span in spans {
            let text = self.link.replace_all(&span.text, "$1").into_owned();
            out.push(TextSpan::styled(text, span.style));
        }
        out
    }
}

impl Default for InlineFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Split every matching region of `re` (capture group 1) out of the
/// spans into a new span with `restyle` applied. With `unstyled_only`,
/// spans that already carry styling pass through untouched.
fn split_matches(
    spans: Vec<TextSpan>,
    re: &Regex,
    unstyled_only: bool,
    restyle: impl Fn(SpanStyle) -> SpanStyle,
) -> Vec<TextSpan> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if unstyled_only && span.style.has_styling() {
            out.push(span);
            continue;
        }
        let mut last = 0;
        for caps in re.captures_iter(&span.text) {
            let whole = caps.get(0).unwrap();
            let inner = caps.get(1).unwrap();
            if whole.start() > last {
                out.push(TextSpan::styled(&span.text[last..whole.start()], span.style));
            }
            out.push(TextSpan::styled(inner.as_str(), restyle(span.style)));
            last = whole.end();
        }
        if last < span.text.len() {
            out.push(TextSpan::styled(&span.text[last..], span.style));
        }
    }
    out.retain(|s| !s.text.is_empty());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(text: &str) -> StyledText {
        InlineFormatter::new().format(text)
    }

    #[test]
    fn test_bold() {
        let text = fmt("scores were **significantly** higher");
        assert_eq!(text.spans.len(), 3);
        assert_eq!(text.spans[1].text, "significantly");
        assert!(text.spans[1].style.bold);
        assert!(!text.spans[0].style.has_styling());
    }

    #[test]
    fn test_bold_before_italic() {
        let text = fmt("**a** *b* `c`");
        let styled: Vec<_> = text
            .spans
            .iter()
            .filter(|s| s.style.has_styling())
            .collect();
        assert_eq!(styled.len(), 3);
        assert_eq!(styled[0].text, "a");
        assert!(styled[0].style.bold && !styled[0].style.italic);
        assert_eq!(styled[1].text, "b");
        assert!(styled[1].style.italic && !styled[1].style.bold);
        assert_eq!(styled[2].text, "c");
        assert!(styled[2].style.bold);
    }

    #[test]
    fn test_idempotent() {
        let first = fmt("**a** *b* `c` [d](http://e)");
        let plain = first.plain_text();
        let second = fmt(&plain);
        assert_eq!(second.plain_text(), plain);
        assert!(!second.has_styling());
    }

    #[test]
    fn test_link_label_kept() {
        let text = fmt("see [the appendix](appendix.md) for details");
        assert_eq!(text.plain_text(), "see the appendix for details");
        assert!(!text.has_styling());
    }

    #[test]
    fn test_code_inside_bold() {
        let text = fmt("**run `analysis` first**");
        assert_eq!(text.plain_text(), "run analysis first");
        assert!(text.spans.iter().all(|s| s.style.bold));
    }

    #[test]
    fn test_plain_passthrough() {
        let text = fmt("no markup here");
        assert_eq!(text.spans.len(), 1);
        assert!(!text.has_styling());
    }
}
