//! Color-source location for `tinct-locate`.
//!
//! `locate(root)` finds a project's Tailwind configuration file and its
//! companion global stylesheet by convention: fixed candidate paths checked
//! in priority order. "Not found" is `None`, a non-fatal result distinct
//! from an I/O error — only `prepare`, which reads the located files, can
//! fail with one.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tinct_core::types::ColorUpdate;

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// The located theme file pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorSources {
    /// Tailwind configuration file at the project root.
    pub config_path: PathBuf,
    /// Global stylesheet holding the `:root` / `.dark` custom properties.
    pub css_path: PathBuf,
}

/// Errors from reading located sources.
#[derive(Debug, Error)]
pub enum LocateError {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// ---------------------------------------------------------------------------
// Candidates
// ---------------------------------------------------------------------------

/// Config filenames at the project root, most specific first.
const CONFIG_CANDIDATES: &[&str] = &[
    "tailwind.config.ts",
    "tailwind.config.js",
    "tailwind.config.cjs",
    "tailwind.config.mjs",
];

/// Stylesheet paths relative to the project root, in priority order.
const CSS_CANDIDATES: &[&str] = &[
    "app/globals.css",
    "src/app/globals.css",
    "src/globals.css",
    "styles/globals.css",
    "src/styles/globals.css",
    "src/index.css",
];

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Locate the Tailwind config and companion stylesheet under `root`.
///
/// Both files must be present; a project missing either yields `None`.
pub fn locate(root: &Path) -> Option<ColorSources> {
    let config_path = first_existing(root, CONFIG_CANDIDATES)?;
    let css_path = first_existing(root, CSS_CANDIDATES)?;
    Some(ColorSources { config_path, css_path })
}

/// Locate both sources and read them into a fresh [`ColorUpdate`].
///
/// Returns `Ok(None)` when location fails, `Err` on a read failure.
pub fn prepare(root: &Path) -> Result<Option<ColorUpdate>, LocateError> {
    let Some(sources) = locate(root) else {
        return Ok(None);
    };
    let config_content = read(&sources.config_path)?;
    let css_content = read(&sources.css_path)?;
    Ok(Some(ColorUpdate {
        config_path: sources.config_path,
        css_path: sources.css_path,
        config_content,
        css_content,
    }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn first_existing(root: &Path, candidates: &[&str]) -> Option<PathBuf> {
    candidates
        .iter()
        .map(|rel| root.join(rel))
        .find(|path| path.is_file())
}

fn read(path: &Path) -> Result<String, LocateError> {
    std::fs::read_to_string(path).map_err(|source| LocateError::Io {
        path: path.to_path_buf(),
        source,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
