//! `tinct add` — add a color to the theme.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use tinct_engine::{diff_update, update_color, UpdateRequest};

/// Arguments for `tinct add`.
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Project root containing the Tailwind config.
    pub root: PathBuf,

    /// Name of the new color.
    #[arg(long)]
    pub name: String,

    /// Literal color value (hex or HSL); written to both theme scopes.
    #[arg(long)]
    pub color: String,

    /// Existing group to add the color to.
    #[arg(long)]
    pub group: Option<String>,

    /// Show what would change without writing any files.
    #[arg(long)]
    pub dry_run: bool,
}

impl AddArgs {
    pub fn run(self) -> Result<()> {
        let request = UpdateRequest {
            name: self.name.clone(),
            color: Some(self.color),
            parent: self.group,
            ..UpdateRequest::default()
        };

        if self.dry_run {
            let diffs = diff_update(&self.root, &request)?;
            super::print_diffs(&diffs);
            return Ok(());
        }

        let outcome = update_color(&self.root, &request);
        super::finish(outcome, &format!("added color '{}'", self.name))
    }
}
