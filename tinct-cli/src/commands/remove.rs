//! `tinct remove` — remove a color or a whole group.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use tinct_engine::{delete_color, diff_delete};

/// Arguments for `tinct remove`.
#[derive(Args, Debug)]
pub struct RemoveArgs {
    /// Project root containing the Tailwind config.
    pub root: PathBuf,

    /// The color group (or top-level color) to remove.
    pub group: String,

    /// A single color within the group; omit to remove the whole group.
    pub color: Option<String>,

    /// Show what would change without writing any files.
    #[arg(long)]
    pub dry_run: bool,
}

impl RemoveArgs {
    pub fn run(self) -> Result<()> {
        if self.dry_run {
            let diffs = diff_delete(&self.root, &self.group, self.color.as_deref())?;
            super::print_diffs(&diffs);
            return Ok(());
        }

        let outcome = delete_color(&self.root, &self.group, self.color.as_deref());
        let what = match &self.color {
            Some(color) => format!("removed color '{}-{color}'", self.group),
            None => format!("removed group '{}'", self.group),
        };
        super::finish(outcome, &what)
    }
}
