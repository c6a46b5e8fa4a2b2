//! Interactive display of a saved figure
//!
//! The figure is handed to the platform's image viewer. Whether that is
//! attempted at all is a policy decision ([`DisplayMode`]), since headless
//! environments have nothing to show it on.

use crate::error::{PlotError, Result};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Display policy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// Show when a display is available, warn and skip otherwise
    #[default]
    Auto,
    /// Always try to show; failing to do so is an error
    Always,
    /// Never show
    Never,
}

impl DisplayMode {
    /// All modes, in CLI order
    pub const ALL: [Self; 3] = [Self::Auto, Self::Always, Self::Never];

    /// Lowercase name
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Always => "always",
            Self::Never => "never",
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DisplayMode {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| PlotError::Config(format!("unknown display mode '{s}'")))
    }
}

/// What `show` ended up doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shown {
    /// The viewer launcher ran and returned
    Opened,
    /// Display was disabled by policy
    Disabled,
    /// No display available
    Headless,
}

/// Open a saved figure in the platform image viewer
///
/// Blocks until the launcher (`xdg-open`, `open`, `start`) returns. Most
/// launchers hand off to the viewer and exit at once, so the call does not
/// wait for the viewer window to close.
pub fn show(path: impl AsRef<Path>, mode: DisplayMode) -> Result<Shown> {
    show_with_env(path.as_ref(), mode, |key| std::env::var_os(key))
}

/// [`show`] with an injectable environment lookup
pub fn show_with_env<F>(path: &Path, mode: DisplayMode, env: F) -> Result<Shown>
where
    F: Fn(&str) -> Option<OsString>,
{
    match mode {
        DisplayMode::Never => {
            tracing::debug!("display disabled");
            return Ok(Shown::Disabled);
        }
        DisplayMode::Auto if is_headless(env) => {
            tracing::warn!(
                path = %path.display(),
                "no display available, figure saved but not shown"
            );
            return Ok(Shown::Headless);
        }
        DisplayMode::Auto | DisplayMode::Always => {}
    }

    if !path.exists() {
        return Err(PlotError::Display {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "figure not found"),
        });
    }

    tracing::info!(path = %path.display(), "opening figure");
    open::that(path).map_err(|source| PlotError::Display {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Shown::Opened)
}

/// Check whether the environment lacks a display server
///
/// Only X11/Wayland systems are detected; macOS and Windows always have one.
pub fn is_headless<F>(env: F) -> bool
where
    F: Fn(&str) -> Option<OsString>,
{
    if cfg!(any(target_os = "macos", target_os = "windows")) {
        return false;
    }
    let set = |key: &str| env(key).is_some_and(|v| !v.is_empty());
    !set("DISPLAY") && !set("WAYLAND_DISPLAY")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<OsString> {
        None
    }

    #[test]
    fn parses_modes() {
        assert_eq!("auto".parse::<DisplayMode>().unwrap(), DisplayMode::Auto);
        assert_eq!("ALWAYS".parse::<DisplayMode>().unwrap(), DisplayMode::Always);
        assert_eq!("never".parse::<DisplayMode>().unwrap(), DisplayMode::Never);
        assert!("sometimes".parse::<DisplayMode>().is_err());
    }

    #[test]
    fn never_skips_without_touching_the_file() {
        let shown = show_with_env(Path::new("/nonexistent.png"), DisplayMode::Never, no_env);
        assert_eq!(shown.unwrap(), Shown::Disabled);
    }

    #[cfg(all(unix, not(target_os = "macos")))]
    #[test]
    fn auto_is_a_warning_when_headless() {
        let shown = show_with_env(Path::new("/nonexistent.png"), DisplayMode::Auto, no_env);
        assert_eq!(shown.unwrap(), Shown::Headless);
    }

    #[cfg(all(unix, not(target_os = "macos")))]
    #[test]
    fn headless_detection() {
        assert!(is_headless(no_env));
        assert!(is_headless(|_| Some(OsString::new())));
        assert!(!is_headless(|k| (k == "DISPLAY").then(|| OsString::from(":0"))));
        assert!(!is_headless(|k| {
            (k == "WAYLAND_DISPLAY").then(|| OsString::from("wayland-0"))
        }));
    }

    #[test]
    fn always_fails_for_missing_figure() {
        let err = show_with_env(Path::new("/nonexistent.png"), DisplayMode::Always, no_env)
            .unwrap_err();
        assert!(matches!(err, PlotError::Display { .. }));
    }
}
