//! Parsing options and configuration.

/// Default front-matter window: `#`/`##` lines at offsets below this are
/// the title and subtitle rather than section headings.
pub const DEFAULT_FRONT_MATTER_WINDOW: usize = 5;

/// Default page-break threshold: a level-1 heading gets a leading page
/// break only when its line index exceeds this, so the first couple of
/// sections stay on the opening page.
pub const DEFAULT_PAGE_BREAK_MIN_LINE: usize = 10;

/// Options for classifying report text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Line offset below which `#`/`##` lines are title/subtitle
    pub front_matter_window: usize,

    /// Line offset a level-1 heading must exceed to get a leading
    /// page break
    pub page_break_min_line: usize,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the front-matter window.
    pub fn with_front_matter_window(mut self, lines: usize) -> Self {
        self.front_matter_window = lines;
        self
    }

    /// Set the page-break threshold.
    pub fn with_page_break_min_line(mut self, line: usize) -> Self {
        self.page_break_min_line = line;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            front_matter_window: DEFAULT_FRONT_MATTER_WINDOW,
            page_break_min_line: DEFAULT_PAGE_BREAK_MIN_LINE,
        }
    }
}
