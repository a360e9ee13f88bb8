//! tinct — Tailwind color-theme synchronization CLI.
//!
//! # Usage
//!
//! ```text
//! tinct add <root> --name <name> --color <value> [--group <group>] [--dry-run]
//! tinct rename <root> <original> --name <name> [--color <value>] [--theme light|dark] [--dry-run]
//! tinct remove <root> <group> [color] [--dry-run]
//! tinct scan <root> [--json]
//! ```

mod commands;

use std::fmt;
use std::str::FromStr;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{add::AddArgs, remove::RemoveArgs, rename::RenameArgs, scan::ScanArgs};
use tinct_core::types::ThemeScope;

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "tinct",
    version,
    about = "Keep Tailwind color config, CSS variables, and class names in sync",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add a color to the theme.
    Add(AddArgs),

    /// Rename and/or recolor an existing color.
    Rename(RenameArgs),

    /// Remove a color, or a whole group.
    Remove(RemoveArgs),

    /// Print the extracted theme.
    Scan(ScanArgs),
}

// ---------------------------------------------------------------------------
// Shared ThemeScope argument — parsed from CLI strings, converts to core type
// ---------------------------------------------------------------------------

/// Thin wrapper so clap can parse `ThemeScope` from CLI args.
#[derive(Debug, Clone)]
pub struct ThemeScopeArg(pub ThemeScope);

impl FromStr for ThemeScopeArg {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        ThemeScope::from_str(s).map(Self)
    }
}

impl fmt::Display for ThemeScopeArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<ThemeScopeArg> for ThemeScope {
    fn from(s: ThemeScopeArg) -> Self {
        s.0
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Commands::Add(args) => args.run(),
        Commands::Rename(args) => args.run(),
        Commands::Remove(args) => args.run(),
        Commands::Scan(args) => args.run(),
    }
}
