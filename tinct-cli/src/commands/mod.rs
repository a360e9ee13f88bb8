//! Subcommand implementations.

pub mod add;
pub mod remove;
pub mod rename;
pub mod scan;

use colored::Colorize;
use tinct_core::types::UpdateOutcome;
use tinct_engine::FileDiff;

/// Print the outcome marker and exit non-zero on failure.
pub(crate) fn finish(outcome: UpdateOutcome, done: &str) -> anyhow::Result<()> {
    if outcome.success {
        println!("{} {done}", "✓".green());
        Ok(())
    } else {
        let message = outcome
            .error
            .unwrap_or_else(|| "unknown error".to_string());
        eprintln!("{} {message}", "✗".red());
        std::process::exit(1);
    }
}

/// Print dry-run diffs the way `diff -u` would.
pub(crate) fn print_diffs(diffs: &[FileDiff]) {
    if diffs.is_empty() {
        println!("Nothing to change.");
        return;
    }
    for diff in diffs {
        print!("{}", diff.unified_diff);
        if !diff.unified_diff.ends_with('\n') {
            println!();
        }
    }
}
