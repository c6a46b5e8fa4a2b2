//! Font registration for chart text
//!
//! Text is rasterized with `ab_glyph`, which needs TrueType bytes
//! registered under a family name before anything is drawn. The first
//! successful registration holds for the rest of the process.

use crate::error::{PlotError, Result};
use ab_glyph::FontRef;
use once_cell::sync::OnceCell;
use plotters::style::{register_font, FontStyle};
use std::path::{Path, PathBuf};

/// Family name every chart text style uses
pub const FAMILY: &str = "sans-serif";

/// Well-known system font locations, tried in order
const SYSTEM_FONTS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSans.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

const INVALID_FONT: &str = "invalid TrueType data";

static REGISTERED: OnceCell<Option<PathBuf>> = OnceCell::new();

/// Make sure a text font is registered
///
/// An explicit path must be readable and valid TrueType data, and must match
/// any font already registered by this process. Without one, the first
/// system font found is used. Returns the registered font's path, or `None`
/// when no font is available and text has to be skipped.
pub fn ensure_registered(explicit: Option<&Path>) -> Result<Option<&'static Path>> {
    let explicit = match explicit {
        Some(path) => Some((path.to_path_buf(), read_font(path)?)),
        None => None,
    };
    let wanted = explicit.as_ref().map(|(path, _)| path.clone());

    let registered = REGISTERED.get_or_try_init(|| -> Result<Option<PathBuf>> {
        let Some((path, bytes)) = explicit.or_else(discover) else {
            tracing::warn!("no TrueType font found, chart text will be omitted");
            return Ok(None);
        };
        // ab_glyph keeps a reference for the lifetime of the process
        let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
        register_font(FAMILY, FontStyle::Normal, bytes).map_err(|_| PlotError::Font {
            path: path.clone(),
            message: INVALID_FONT.to_owned(),
        })?;
        tracing::debug!(font = %path.display(), "registered chart font");
        Ok(Some(path))
    })?;

    if let Some(path) = wanted {
        if registered.as_deref() != Some(path.as_path()) {
            let current = registered
                .as_deref()
                .map_or_else(|| "no font".to_owned(), |p| p.display().to_string());
            return Err(PlotError::Font {
                path,
                message: format!("another font is already in use by this process ({current})"),
            });
        }
    }

    Ok(registered.as_deref())
}

/// Read a font file and check that it parses as TrueType
fn read_font(path: &Path) -> Result<Vec<u8>> {
    let bytes = std::fs::read(path).map_err(|e| PlotError::Font {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    if FontRef::try_from_slice(&bytes).is_err() {
        return Err(PlotError::Font {
            path: path.to_path_buf(),
            message: INVALID_FONT.to_owned(),
        });
    }
    Ok(bytes)
}

fn discover() -> Option<(PathBuf, Vec<u8>)> {
    SYSTEM_FONTS.iter().map(PathBuf::from).find_map(|path| {
        let bytes = read_font(&path).ok()?;
        Some((path, bytes))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_explicit_font_is_an_error() {
        let err = ensure_registered(Some(Path::new("/nonexistent/font.ttf"))).unwrap_err();
        assert!(matches!(err, PlotError::Font { .. }));
    }

    #[test]
    fn non_font_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.ttf");
        std::fs::write(&path, "plain text, not a font\n").unwrap();

        // rejected whether or not a font was registered earlier
        for _ in 0..2 {
            match ensure_registered(Some(&path)).unwrap_err() {
                PlotError::Font { path: reported, message } => {
                    assert_eq!(reported, path);
                    assert_eq!(message, INVALID_FONT);
                }
                other => panic!("unexpected error: {other}"),
            }
            ensure_registered(None).unwrap();
        }
    }

    #[test]
    fn explicit_font_must_match_registered_one() {
        let Some(current) = ensure_registered(None).unwrap() else {
            return;
        };
        assert_eq!(ensure_registered(Some(current)).unwrap(), Some(current));

        let Some((other, _)) = SYSTEM_FONTS
            .iter()
            .map(PathBuf::from)
            .filter(|p| p != current)
            .find_map(|p| read_font(&p).ok().map(|bytes| (p, bytes)))
        else {
            return;
        };
        let err = ensure_registered(Some(&other)).unwrap_err();
        assert!(matches!(err, PlotError::Font { path, .. } if path == other));
    }

    #[test]
    fn registration_is_idempotent() {
        let first = ensure_registered(None).unwrap();
        let second = ensure_registered(None).unwrap();
        assert_eq!(first, second);
    }
}
