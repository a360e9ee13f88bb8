//! Dry-run unified diff support.
//!
//! Renders what an update or delete would write and compares it to the
//! current on-disk content. No files are written.

use std::path::{Path, PathBuf};

use similar::TextDiff;
use tinct_core::types::ColorUpdate;
use tinct_theme::{mutate, ColorsMutation};

use crate::error::EngineError;
use crate::update::{build_mutation, UpdateRequest};

/// A single rendered file diff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDiff {
    pub path: PathBuf,
    pub unified_diff: String,
}

/// Diff what [`crate::update_color`] would write for `request`.
///
/// Returns an empty list when the theme files cannot be located or nothing
/// would change.
pub fn diff_update(root: &Path, request: &UpdateRequest) -> Result<Vec<FileDiff>, EngineError> {
    let Some(update) = tinct_locate::prepare(root)? else {
        return Ok(Vec::new());
    };
    let mutation = build_mutation(&update, request)?;
    Ok(diff_pair(root, &update, &mutation))
}

/// Diff what [`crate::delete_color`] would write.
pub fn diff_delete(
    root: &Path,
    group: &str,
    color: Option<&str>,
) -> Result<Vec<FileDiff>, EngineError> {
    let Some(update) = tinct_locate::prepare(root)? else {
        return Ok(Vec::new());
    };
    let mutation = mutate::delete(&update, group, color)?;
    Ok(diff_pair(root, &update, &mutation))
}

fn diff_pair(root: &Path, update: &ColorUpdate, mutation: &ColorsMutation) -> Vec<FileDiff> {
    let pairs = [
        (
            &update.config_path,
            &update.config_content,
            &mutation.config_content,
        ),
        (&update.css_path, &update.css_content, &mutation.css_content),
    ];

    let mut diffs = Vec::new();
    for (path, existing, rendered) in pairs {
        if existing == rendered {
            continue;
        }
        let relative = path.strip_prefix(root).unwrap_or(path.as_path());
        let old_header = format!("a/{}", relative.display());
        let new_header = format!("b/{}", relative.display());
        let unified = TextDiff::from_lines(existing.as_str(), rendered.as_str())
            .unified_diff()
            .header(&old_header, &new_header)
            .context_radius(3)
            .to_string();
        diffs.push(FileDiff {
            path: path.clone(),
            unified_diff: unified,
        });
    }
    diffs
}
