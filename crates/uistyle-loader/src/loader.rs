//! Style file loading for the tree binder.
//!
//! Reads a TOML style document from disk, parses it with the `toml` crate,
//! and binds every root-level entry into a [`Style`] via
//! [`uistyle_core::bind_node`]. The platform-appropriate location for an
//! application's style file is:
//!
//! - Windows:  `%APPDATA%\<App>\style.toml`
//! - Linux:    `~/.config/<app>/style.toml`
//! - macOS:    `~/Library/Application Support/<App>/style.toml`
//!
//! # Partial updates
//!
//! Binding has no transaction: a failing document leaves the target style
//! updated for every path processed before the failure. [`load_into`]
//! exposes that behavior directly; [`load`] wraps it in the staging
//! discipline (bind into a fresh default, hand it over only on success) for
//! callers that want all-or-nothing semantics.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use uistyle_core::{bind_node, BindError, Style};

/// Error type for style file operations.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,

    /// A file system I/O error occurred.
    #[error("I/O error reading style file at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The style TOML could not be parsed.
    #[error("failed to parse style TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// A parsed node failed to bind against the schema.
    #[error(transparent)]
    Bind(#[from] BindError),

    /// A style document could not be serialized back to TOML.
    #[error("failed to serialize style document: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Parses `text` as a style document and binds it into `style`.
///
/// Root-level entries are bound in the parsed table's native order; every
/// entry is independent, so the order never affects the outcome of a valid
/// document. Binding stops at the first failure, leaving `style` updated
/// for everything processed before it.
///
/// # Errors
///
/// Returns [`LoadError::Parse`] for malformed TOML and [`LoadError::Bind`]
/// for structural or value-type errors against the schema.
pub fn apply_str(text: &str, style: &mut Style) -> Result<(), LoadError> {
    let root: toml::Table = text.parse()?;

    for (name, node) in root.iter() {
        bind_node(name, node, style)?;
    }

    debug!("bound {} root style entries", root.len());
    Ok(())
}

/// Loads the style file at `path` into an existing `style` instance.
///
/// # Errors
///
/// Returns [`LoadError::Io`] when the file cannot be read, and propagates
/// parse and bind failures from [`apply_str`]. On failure `style` keeps the
/// writes made before the failing node.
pub fn load_into(path: impl AsRef<Path>, style: &mut Style) -> Result<(), LoadError> {
    let path = path.as_ref();

    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    apply_str(&text, style)?;
    info!("style loaded from {}", path.display());
    Ok(())
}

/// Loads the style file at `path` into a fresh default [`Style`].
///
/// All-or-nothing: the document binds into a staging copy, so a failure
/// yields an error and no observable style. Apply the returned style to the
/// live toolkit instance only after this has succeeded.
///
/// # Errors
///
/// Same as [`load_into`].
pub fn load(path: impl AsRef<Path>) -> Result<Style, LoadError> {
    let mut staged = Style::default();
    load_into(path, &mut staged)?;
    Ok(staged)
}

/// Resolves the platform-appropriate path of `app`'s style file.
///
/// # Errors
///
/// Returns [`LoadError::NoPlatformConfigDir`] when the platform config base
/// directory cannot be determined from the environment.
pub fn config_style_path(app: &str) -> Result<PathBuf, LoadError> {
    platform_config_dir()
        .map(|dir| dir.join(app).join("style.toml"))
        .ok_or(LoadError::NoPlatformConfigDir)
}

/// Resolves the platform config base directory.
fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        // %APPDATA% e.g. C:\Users\<user>\AppData\Roaming
        std::env::var_os("APPDATA").map(PathBuf::from)
    }

    #[cfg(target_os = "linux")]
    {
        // XDG_CONFIG_HOME or ~/.config
        std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))
    }

    #[cfg(target_os = "macos")]
    {
        // ~/Library/Application Support
        std::env::var_os("HOME")
            .map(|h| PathBuf::from(h).join("Library").join("Application Support"))
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        // Unsupported platforms fall back to an explicit path from the caller.
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use uistyle_core::{ColorSlot, Rgba};

    // ── apply_str ─────────────────────────────────────────────────────────────

    #[test]
    fn test_apply_str_binds_scalar_and_color_paths() {
        let mut style = Style::default();

        apply_str(
            "[alpha]\nvalue = 0.5\n[window.bg]\nvalue = [0.06, 0.06, 0.06, 0.94]\n",
            &mut style,
        )
        .expect("document must bind");

        assert_eq!(style.alpha, 0.5);
        assert_eq!(
            style.color(ColorSlot::WindowBg),
            Rgba::new(0.06, 0.06, 0.06, 0.94)
        );
    }

    #[test]
    fn test_apply_str_rejects_malformed_toml_without_binding() {
        let mut style = Style::default();

        let result = apply_str("[[[ not valid toml", &mut style);

        assert!(matches!(result, Err(LoadError::Parse(_))));
        assert_eq!(style, Style::default(), "no binding may happen on parse failure");
    }

    #[test]
    fn test_apply_str_propagates_bind_failures() {
        let mut style = Style::default();

        let result = apply_str("[alpha]\nvalue = [1, 2]\n", &mut style);

        assert!(matches!(result, Err(LoadError::Bind(_))));
    }

    #[test]
    fn test_apply_str_keeps_writes_made_before_a_failure() {
        let mut style = Style::default();

        // Roots bind in table order: `alpha` succeeds before `window` fails.
        let result = apply_str(
            "[alpha]\nvalue = 0.25\n[window.padding]\nvalue = [8]\n",
            &mut style,
        );

        assert!(result.is_err());
        assert_eq!(style.alpha, 0.25, "earlier writes are not rolled back");
        assert_eq!(style.window_padding, Style::default().window_padding);
    }

    #[test]
    fn test_apply_str_with_empty_document_is_a_no_op() {
        let mut style = Style::default();

        apply_str("", &mut style).expect("empty document is valid");

        assert_eq!(style, Style::default());
    }

    // ── config_style_path ─────────────────────────────────────────────────────

    #[test]
    fn test_config_style_path_ends_with_style_toml() {
        if let Ok(path) = config_style_path("demoapp") {
            assert!(path.ends_with("demoapp/style.toml") || path.ends_with("demoapp\\style.toml"));
        }
        // NoPlatformConfigDir in a stripped environment is also acceptable.
    }
}
