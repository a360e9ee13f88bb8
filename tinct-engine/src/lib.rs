//! # tinct-engine
//!
//! The public orchestrator: prepare → mutate → write → propagate.
//!
//! Call [`update_color`] to add or rename/recolor a color, [`delete_color`]
//! to remove one, [`scan_colors`] to read the current theme. Every entry
//! point returns a uniform [`tinct_core::UpdateOutcome`] (or `Option` for
//! scan) — internal errors are normalized, never thrown across the public
//! boundary.

pub mod diff;
pub mod error;
pub mod scan;
pub mod update;
pub mod writer;

pub use diff::{diff_delete, diff_update, FileDiff};
pub use error::EngineError;
pub use scan::{scan_colors, ColorScan, ScopeVariables};
pub use update::{delete_color, update_color, UpdateRequest, PREPARE_FAILED};
pub use writer::WriteResult;
