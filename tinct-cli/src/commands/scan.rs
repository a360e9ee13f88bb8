//! `tinct scan` — print the extracted theme.

use std::collections::BTreeSet;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use tabled::{settings::Style, Table, Tabled};

use tinct_engine::scan_colors;

/// Arguments for `tinct scan`.
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Project root containing the Tailwind config.
    pub root: PathBuf,

    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Tabled)]
struct VariableRow {
    #[tabled(rename = "variable")]
    variable: String,
    #[tabled(rename = "root")]
    root: String,
    #[tabled(rename = "dark")]
    dark: String,
}

impl ScanArgs {
    pub fn run(self) -> Result<()> {
        let Some(scan) = scan_colors(&self.root) else {
            println!("No Tailwind theme found under '{}'.", self.root.display());
            return Ok(());
        };

        if self.json {
            println!("{}", serde_json::to_string_pretty(&scan)?);
            return Ok(());
        }

        println!("{} {}", "config:".bold(), scan.config_path.display());
        println!("{} {}", "styles:".bold(), scan.css_path.display());

        let names: BTreeSet<&String> = scan
            .css_content
            .root
            .keys()
            .chain(scan.css_content.dark.keys())
            .collect();
        if names.is_empty() {
            println!("No custom-property declarations found.");
            return Ok(());
        }

        let rows: Vec<VariableRow> = names
            .into_iter()
            .map(|name| VariableRow {
                variable: format!("--{name}"),
                root: value_or_dash(scan.css_content.root.get(name)),
                dark: value_or_dash(scan.css_content.dark.get(name)),
            })
            .collect();

        let mut table = Table::new(rows);
        table.with(Style::rounded());
        println!("{table}");
        Ok(())
    }
}

fn value_or_dash(value: Option<&String>) -> String {
    value.cloned().unwrap_or_else(|| "—".to_string())
}
