//! `tinct rename` — rename and/or recolor an existing color.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::ThemeScopeArg;
use tinct_engine::{diff_update, update_color, UpdateRequest};

/// Arguments for `tinct rename`.
#[derive(Args, Debug)]
pub struct RenameArgs {
    /// Project root containing the Tailwind config.
    pub root: PathBuf,

    /// Property name of the color to change (`group` or `group-variant`).
    pub original: String,

    /// The new color name.
    #[arg(long)]
    pub name: String,

    /// New literal color value.
    #[arg(long)]
    pub color: Option<String>,

    /// Recolor only this theme scope (light or dark); default is both.
    #[arg(long)]
    pub theme: Option<ThemeScopeArg>,

    /// Show what would change without writing any files.
    #[arg(long)]
    pub dry_run: bool,
}

impl RenameArgs {
    pub fn run(self) -> Result<()> {
        let request = UpdateRequest {
            original: self.original.clone(),
            name: self.name.clone(),
            color: self.color,
            scope: self.theme.map(Into::into),
            ..UpdateRequest::default()
        };

        if self.dry_run {
            let diffs = diff_update(&self.root, &request)?;
            super::print_diffs(&diffs);
            return Ok(());
        }

        let outcome = update_color(&self.root, &request);
        super::finish(
            outcome,
            &format!("updated color '{}' -> '{}'", self.original, self.name),
        )
    }
}
