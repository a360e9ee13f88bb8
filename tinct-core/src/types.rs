//! Domain types for the tinct theme engine.
//!
//! All path fields use `PathBuf`; never `&str` or `String` for filesystem
//! paths. Serializable types derive serde so the CLI can emit them as JSON.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A CSS custom-property name without its `--` prefix (e.g. `brand-accent`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PropertyName(pub String);

impl PropertyName {
    /// The `var(--name)` reference form used in the config tree.
    pub fn reference(&self) -> String {
        format!("var(--{})", self.0)
    }

    /// The declared form used in stylesheets, `--name`.
    pub fn declared(&self) -> String {
        format!("--{}", self.0)
    }
}

impl fmt::Display for PropertyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for PropertyName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for PropertyName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Theme scope
// ---------------------------------------------------------------------------

/// A stylesheet rule block whose declarations apply under one UI theme.
///
/// `Root` is the `:root` block (the light/default theme); `Dark` is the
/// `.dark` block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeScope {
    Root,
    Dark,
}

impl ThemeScope {
    /// Both scopes, in the order declarations appear in a stylesheet.
    pub fn all() -> [ThemeScope; 2] {
        [ThemeScope::Root, ThemeScope::Dark]
    }

    /// The CSS selector introducing this scope's rule block.
    pub fn selector(self) -> &'static str {
        match self {
            ThemeScope::Root => ":root",
            ThemeScope::Dark => ".dark",
        }
    }
}

impl fmt::Display for ThemeScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeScope::Root => write!(f, "root"),
            ThemeScope::Dark => write!(f, "dark"),
        }
    }
}

impl FromStr for ThemeScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "root" | "light" => Ok(ThemeScope::Root),
            "dark" => Ok(ThemeScope::Dark),
            other => Err(format!("unknown theme scope '{other}'; expected: light, dark")),
        }
    }
}

// ---------------------------------------------------------------------------
// Domain structs
// ---------------------------------------------------------------------------

/// The located theme files and their raw text at the start of an operation.
///
/// Created fresh per operation by the locator's prepare step; never cached;
/// discarded once the operation's writes complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorUpdate {
    pub config_path: PathBuf,
    pub css_path: PathBuf,
    pub config_content: String,
    pub css_content: String,
}

/// A class rename to propagate into project source files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassReplacement {
    pub old_class: String,
    pub new_class: String,
}

/// Uniform outcome contract returned by every public engine entry point.
///
/// Carries no partial-progress detail: an operation either fully succeeds or
/// reports one error string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateOutcome {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl UpdateOutcome {
    pub fn ok() -> Self {
        Self { success: true, error: None }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self { success: false, error: Some(message.into()) }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
