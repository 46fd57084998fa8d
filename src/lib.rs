//! Line diffing and side-by-side rendering for the two-pane compare window.
//!
//! `differ` turns two line sequences into edit operations, `renderer` maps
//! those onto two row sequences of equal length, and `comparison` ties file
//! loading and both steps together for the desktop shell.

pub mod comparison;
pub mod config;
pub mod differ;
pub mod error;
pub mod file_processing;
pub mod payloads;
pub mod renderer;
pub mod session;
mod utils;

#[cfg(test)]
mod tests;

pub use comparison::{compare_lines, run_comparison, Comparison, PaneContent};
pub use config::{CompareConfig, DiffAlgorithm, PaneStyle};
pub use differ::{compare, compare_with, DiffStats, EditOp, Side};
pub use error::LoadError;
pub use renderer::{format_row, render, DisplayRow, Highlight, RenderedPanes};
pub use session::{compare_selection, RequestTracker, Selection, Ticket};
