//! Read-only theme extraction for the scan entry point.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// Custom-property mappings per theme scope, values canonicalized to hex
/// where the encoding is recognized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScopeVariables {
    pub root: BTreeMap<String, String>,
    pub dark: BTreeMap<String, String>,
}

/// The extracted theme: located paths plus the parsed contents of each side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorScan {
    pub config_path: PathBuf,
    /// Nested group → name → value mapping from `theme.extend.colors`.
    pub config_content: serde_json::Value,
    pub css_path: PathBuf,
    pub css_content: ScopeVariables,
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Extract the current theme under `root`, or `None` when the theme files
/// cannot be located or read. Extraction itself is best-effort — malformed
/// content degrades to empty mappings.
pub fn scan_colors(root: &Path) -> Option<ColorScan> {
    let update = match tinct_locate::prepare(root) {
        Ok(Some(update)) => update,
        Ok(None) => return None,
        Err(err) => {
            tracing::warn!("color scan failed: {err}");
            return None;
        }
    };
    let colors = tinct_theme::scan(&update);
    Some(ColorScan {
        config_path: update.config_path,
        config_content: colors.config,
        css_path: update.css_path,
        css_content: ScopeVariables {
            root: colors.root,
            dark: colors.dark,
        },
    })
}
