//! Best-effort theme extraction.
//!
//! Extraction is read-only: a parse failure degrades to an empty mapping and
//! is logged, never propagated, so it cannot abort a caller's larger flow.

use std::collections::BTreeMap;

use tinct_core::types::{ColorUpdate, ThemeScope};

use crate::css;
use crate::object::ColorsBlock;

/// The extracted theme: the nested config mapping plus one flat
/// property→value mapping per stylesheet scope (values canonicalized).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeColors {
    pub config: serde_json::Value,
    pub root: BTreeMap<String, String>,
    pub dark: BTreeMap<String, String>,
}

/// Extract the color theme from a loaded file pair.
pub fn scan(update: &ColorUpdate) -> ThemeColors {
    let config = match ColorsBlock::parse(&update.config_content) {
        Ok(block) => block.to_value(),
        Err(err) => {
            tracing::warn!(
                "could not read colors from {}: {err}",
                update.config_path.display()
            );
            serde_json::Value::Object(serde_json::Map::new())
        }
    };
    ThemeColors {
        config,
        root: css::extract(&update.css_content, ThemeScope::Root),
        dark: css::extract(&update.css_content, ThemeScope::Dark),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
