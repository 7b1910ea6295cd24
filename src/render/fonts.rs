//! Font discovery for the layout engine.
//!
//! The layout engine needs a TTF family on disk. When no directory is
//! configured, a few conventional locations are probed for
//! `{family}-Regular.ttf`; built-in Helvetica metrics serve as the
//! fallback for glyphs the family lacks.

use crate::error::{Error, Result};
use crate::render::RenderOptions;
use genpdf::fonts::{self, Builtin, FontData, FontFamily};
use std::path::Path;

/// Directories probed when no font directory is configured.
const SEARCH_DIRS: &[&str] = &[
    "./fonts",
    "./assets/fonts",
    "/usr/share/fonts/truetype/liberation",
    "/usr/share/fonts/liberation",
    "/usr/share/fonts/liberation-sans",
    "/usr/local/share/fonts",
];

/// Load the configured font family, searching conventional directories
/// when none is set.
pub fn load_font_family(options: &RenderOptions) -> Result<FontFamily<FontData>> {
    if let Some(dir) = &options.fonts_dir {
        return load_from(dir, &options.font_family);
    }

    for dir in SEARCH_DIRS {
        let probe = Path::new(dir).join(format!("{}-Regular.ttf", options.font_family));
        if probe.exists() {
            log::debug!("using font family {} from {}", options.font_family, dir);
            return load_from(Path::new(dir), &options.font_family);
        }
    }

    Err(Error::Font(format!(
        "font family {} not found in any of {:?}; set an explicit font directory",
        options.font_family, SEARCH_DIRS
    )))
}

fn load_from(dir: &Path, family: &str) -> Result<FontFamily<FontData>> {
    fonts::from_files(dir, family, Some(Builtin::Helvetica)).map_err(|e| {
        Error::Font(format!(
            "loading family {} from {}: {}",
            family,
            dir.display(),
            e
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RenderOptions;

    #[test]
    fn test_missing_fonts_dir_is_fatal() {
        let options = RenderOptions::new().with_fonts_dir("/nonexistent/fonts");
        let result = load_font_family(&options);
        assert!(matches!(result, Err(Error::Font(_))));
    }

    #[test]
    fn test_unknown_family_not_found() {
        let options = RenderOptions::new().with_font_family("NoSuchFamily12345");
        // Discovery probes only; an unknown family never resolves.
        assert!(load_font_family(&options).is_err());
    }
}
