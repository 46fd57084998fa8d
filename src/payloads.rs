use crate::comparison::{Comparison, PaneContent};
use crate::config::PaneStyle;
use crate::differ::{DiffStats, Side};
use crate::renderer::{format_row, DisplayRow, Highlight};
use crate::session::Selection;

#[derive(Clone, serde::Serialize)]
pub struct ProgressPayload {
    pub percentage: f64,
    pub text: String,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct StepDetailPayload {
    pub step: String,
    pub duration_ms: u128,
}

#[derive(Clone, serde::Serialize)]
pub struct ComparisonFinishedPayload {
    pub request: u64,
}

#[derive(Clone, serde::Serialize)]
pub struct RowPayload {
    pub line_number: Option<usize>,
    pub display: String,
    pub highlight: Highlight,
    pub background: Option<&'static str>,
}

impl From<&DisplayRow> for RowPayload {
    fn from(row: &DisplayRow) -> Self {
        Self {
            line_number: row.line_number,
            display: format_row(row),
            highlight: row.highlight,
            background: row.highlight.background(),
        }
    }
}

#[derive(Clone, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PanePayload {
    Rows { rows: Vec<RowPayload> },
    Error { message: String },
}

impl From<&PaneContent> for PanePayload {
    fn from(content: &PaneContent) -> Self {
        match content {
            PaneContent::Rows(rows) => PanePayload::Rows {
                rows: rows.iter().map(RowPayload::from).collect(),
            },
            PaneContent::Error(message) => PanePayload::Error {
                message: message.clone(),
            },
        }
    }
}

#[derive(Clone, serde::Serialize)]
pub struct ComparisonPayload {
    pub request: u64,
    pub left_label: String,
    pub right_label: String,
    pub left: PanePayload,
    pub right: PanePayload,
    pub stats: Option<DiffStats>,
    pub style: PaneStyle,
}

impl ComparisonPayload {
    pub fn new(request: u64, selection: &Selection, comparison: &Comparison) -> Self {
        Self {
            request,
            left_label: selection.label(Side::Left),
            right_label: selection.label(Side::Right),
            left: PanePayload::from(&comparison.left),
            right: PanePayload::from(&comparison.right),
            stats: comparison.stats,
            style: PaneStyle::default(),
        }
    }
}
