//! Error types for tinct-theme.

use thiserror::Error;

/// All errors that can arise from theme-document parsing and mutation.
///
/// Every variant is a checked structural precondition: the mutator raises
/// these before producing any output, so a failed operation never leaves one
/// document updated and the other untouched.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// The config has no `theme.extend.colors` object literal.
    #[error("no `theme.extend.colors` object found in the Tailwind config")]
    MissingColorsBlock,

    /// The colors object exists but its body could not be parsed.
    #[error("could not parse the colors object: {0}")]
    ConfigParse(String),

    /// A named parent group is absent (or is a flat color, not a group).
    #[error("unknown color group '{0}'")]
    UnknownGroup(String),

    /// A named color is absent from its group.
    #[error("unknown color '{color}' in group '{group}'")]
    UnknownColor { group: String, color: String },

    /// The stylesheet has no rule block for a required theme scope.
    #[error("stylesheet has no `{selector}` block")]
    MissingScope { selector: &'static str },
}
