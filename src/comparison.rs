use crate::config::CompareConfig;
use crate::differ::{compare_with, DiffStats, Side};
use crate::error::LoadError;
use crate::file_processing::load_lines;
use crate::payloads::StepDetailPayload;
use crate::renderer::{render, DisplayRow, RenderedPanes};
use crate::utils::{file_step_detail, step_detail, timed};
use std::path::Path;
use std::time::Instant;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaneContent {
    Rows(Vec<DisplayRow>),
    Error(String),
}

/// Everything one comparison request produces.
#[derive(Debug, Clone)]
pub struct Comparison {
    pub left: PaneContent,
    pub right: PaneContent,
    /// `None` when loading failed.
    pub stats: Option<DiffStats>,
    pub steps: Vec<StepDetailPayload>,
}

impl Comparison {
    fn failed(err: &LoadError, steps: Vec<StepDetailPayload>) -> Self {
        log::warn!("Loading file {} failed: {}", err.side().file_number(), err);
        let message = err.to_string();
        Self {
            left: PaneContent::Error(message.clone()),
            right: PaneContent::Error(message),
            stats: None,
            steps,
        }
    }

    pub fn pane(&self, side: Side) -> &PaneContent {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }
}

/// Diffs two already loaded line sequences and renders both panes.
pub fn compare_lines(left: &[String], right: &[String], config: &CompareConfig) -> Comparison {
    let mut steps = Vec::new();
    let (ops, diff_ms) = timed(|| compare_with(left, right, config));
    steps.push(step_detail("Line Diff".to_string(), diff_ms));

    let stats = DiffStats::from_ops(&ops);
    let (RenderedPanes { left, right }, render_ms) = timed(|| render(&ops));
    steps.push(step_detail("Render Panes".to_string(), render_ms));

    Comparison {
        left: PaneContent::Rows(left),
        right: PaneContent::Rows(right),
        stats: Some(stats),
        steps,
    }
}

/// Loads both files, diffs them and renders the panes. Load failures become
/// error text in both panes; this never fails.
pub fn run_comparison(left_path: &Path, right_path: &Path, config: &CompareConfig) -> Comparison {
    let start_time = Instant::now();

    let ((res_a, load_a_ms), (res_b, load_b_ms)) = rayon::join(
        || timed(|| load_lines(left_path, Side::Left)),
        || timed(|| load_lines(right_path, Side::Right)),
    );
    let mut steps = vec![
        file_step_detail("1", "Read Lines", load_a_ms),
        file_step_detail("2", "Read Lines", load_b_ms),
    ];

    // The left file is reported first when both fail.
    let (lines_a, lines_b) = match (res_a, res_b) {
        (Ok(a), Ok(b)) => (a, b),
        (Err(err), _) | (_, Err(err)) => return Comparison::failed(&err, steps),
    };

    let mut comparison = compare_lines(&lines_a, &lines_b, config);
    steps.append(&mut comparison.steps);
    comparison.steps = steps;

    if let Some(stats) = comparison.stats {
        log::info!(
            "Compared {} and {} in {}ms: {} equal, {} deleted, {} inserted",
            left_path.display(),
            right_path.display(),
            start_time.elapsed().as_millis(),
            stats.equal,
            stats.deleted,
            stats.inserted
        );
    }
    comparison
}
