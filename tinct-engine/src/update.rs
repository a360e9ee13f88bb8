//! The create / rename / delete entry points.

use std::path::Path;

use tinct_core::types::{ColorUpdate, ThemeScope, UpdateOutcome};
use tinct_theme::{mutate, ColorsMutation};

use crate::error::EngineError;
use crate::writer;

/// Error string reported when the project's theme files cannot be located.
pub const PREPARE_FAILED: &str = "Failed to prepare color update";

/// One create / rename / recolor request.
///
/// An empty `original` adds a new color named `name`; a non-empty one
/// renames (and optionally recolors) the color it addresses.
#[derive(Debug, Clone, Default)]
pub struct UpdateRequest {
    /// Property name of the color being changed (`group` or
    /// `group-variant`), or empty to create.
    pub original: String,
    /// The new color name.
    pub name: String,
    /// New literal color value, when recoloring or creating.
    pub color: Option<String>,
    /// Parent group for creation.
    pub parent: Option<String>,
    /// Scope filter: recolor only this scope. Creation ignores it.
    pub scope: Option<ThemeScope>,
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Add or rename/recolor a color under `root`.
///
/// Never panics or returns an error across this boundary — every internal
/// failure is normalized into the outcome.
pub fn update_color(root: &Path, request: &UpdateRequest) -> UpdateOutcome {
    match try_update(root, request) {
        Ok(outcome) => outcome,
        Err(err) => UpdateOutcome::failed(err.to_string()),
    }
}

/// Delete a color (or a whole group when `color` is `None`) under `root`.
pub fn delete_color(root: &Path, group: &str, color: Option<&str>) -> UpdateOutcome {
    match try_delete(root, group, color) {
        Ok(outcome) => outcome,
        Err(err) => UpdateOutcome::failed(err.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Internals
// ---------------------------------------------------------------------------

/// Build the mutation for an update request. Shared with dry-run diffing.
pub(crate) fn build_mutation(
    update: &ColorUpdate,
    request: &UpdateRequest,
) -> Result<ColorsMutation, EngineError> {
    if request.original.is_empty() {
        let color = request
            .color
            .as_deref()
            .ok_or(EngineError::MissingColorValue)?;
        Ok(mutate::create(
            update,
            &request.name,
            color,
            request.parent.as_deref(),
        )?)
    } else {
        Ok(mutate::rename(
            update,
            &request.original,
            &request.name,
            request.color.as_deref(),
            request.scope,
        )?)
    }
}

fn try_update(root: &Path, request: &UpdateRequest) -> Result<UpdateOutcome, EngineError> {
    let Some(update) = tinct_locate::prepare(root)? else {
        return Ok(UpdateOutcome::failed(PREPARE_FAILED));
    };
    let mutation = build_mutation(&update, request)?;
    apply(root, &update, mutation)
}

fn try_delete(
    root: &Path,
    group: &str,
    color: Option<&str>,
) -> Result<UpdateOutcome, EngineError> {
    let Some(update) = tinct_locate::prepare(root)? else {
        return Ok(UpdateOutcome::failed(PREPARE_FAILED));
    };
    let mutation = mutate::delete(&update, group, color)?;
    apply(root, &update, mutation)
}

/// Write both theme files, then fan the class rename out into project
/// sources. Reference-propagation failures are aggregated into the outcome
/// rather than swallowed.
fn apply(
    root: &Path,
    update: &ColorUpdate,
    mutation: ColorsMutation,
) -> Result<UpdateOutcome, EngineError> {
    writer::write_if_changed(
        &update.config_path,
        &update.config_content,
        &mutation.config_content,
    )?;
    writer::write_if_changed(&update.css_path, &update.css_content, &mutation.css_content)?;

    if let Some(replacement) = mutation.class_replacement {
        let report = tinct_refs::update_references(root, &[replacement]);
        if !report.is_clean() {
            let detail = report
                .failed
                .iter()
                .map(|(path, reason)| format!("{}: {reason}", path.display()))
                .collect::<Vec<_>>()
                .join("; ");
            return Ok(UpdateOutcome::failed(format!(
                "theme files updated, but {} of {} source file(s) failed: {detail}",
                report.failed.len(),
                report.scanned
            )));
        }
        tracing::info!(
            "propagated class rename into {} file(s)",
            report.updated.len()
        );
    }
    Ok(UpdateOutcome::ok())
}
