use crate::comparison::{run_comparison, Comparison};
use crate::config::CompareConfig;
use crate::differ::Side;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

/// Snapshot of the files picked so far. Picking a file produces a new
/// snapshot; the old one is left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    left: Option<PathBuf>,
    right: Option<PathBuf>,
}

impl Selection {
    pub fn with_file(&self, side: Side, path: impl Into<PathBuf>) -> Selection {
        let mut next = self.clone();
        match side {
            Side::Left => next.left = Some(path.into()),
            Side::Right => next.right = Some(path.into()),
        }
        next
    }

    pub fn path(&self, side: Side) -> Option<&Path> {
        match side {
            Side::Left => self.left.as_deref(),
            Side::Right => self.right.as_deref(),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.left.is_some() && self.right.is_some()
    }

    pub fn label(&self, side: Side) -> String {
        match self.path(side) {
            Some(path) => format!("File {}: {}", side.file_number(), path.display()),
            None => format!("File {}: None", side.file_number()),
        }
    }
}

/// Runs a comparison once both sides have been picked.
pub fn compare_selection(selection: &Selection, config: &CompareConfig) -> Option<Comparison> {
    match (selection.path(Side::Left), selection.path(Side::Right)) {
        (Some(left), Some(right)) => Some(run_comparison(left, right, config)),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

impl Ticket {
    pub fn id(self) -> u64 {
        self.0
    }
}

/// Hands out increasing tickets so that only the newest request's result is
/// applied.
#[derive(Debug, Default)]
pub struct RequestTracker {
    latest: AtomicU64,
}

impl RequestTracker {
    pub fn begin(&self) -> Ticket {
        Ticket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparison::PaneContent;
    use std::fs;

    #[test]
    fn nothing_runs_until_both_sides_are_picked() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.txt");
        fs::write(&a, "one\n").unwrap();

        let selection = Selection::default().with_file(Side::Left, &a);
        assert!(!selection.is_complete());
        assert!(compare_selection(&selection, &CompareConfig::default()).is_none());
        assert_eq!(selection.label(Side::Right), "File 2: None");
    }

    #[test]
    fn picking_a_file_leaves_the_previous_snapshot_alone() {
        let first = Selection::default().with_file(Side::Left, "a.txt");
        let second = first.with_file(Side::Left, "b.txt");
        assert_eq!(first.path(Side::Left), Some(Path::new("a.txt")));
        assert_eq!(second.path(Side::Left), Some(Path::new("b.txt")));
    }

    #[test]
    fn bad_file_can_be_replaced_without_losing_the_other_side() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.txt");
        let bad = dir.path().join("bad.bin");
        let fixed = dir.path().join("fixed.txt");
        fs::write(&good, "hello\n").unwrap();
        fs::write(&bad, [0xff, 0x00, 0xfe]).unwrap();
        fs::write(&fixed, "hello\nworld\n").unwrap();

        let config = CompareConfig::default();
        let selection = Selection::default()
            .with_file(Side::Left, &good)
            .with_file(Side::Right, &bad);
        let failed = compare_selection(&selection, &config).unwrap();
        assert!(matches!(failed.left, PaneContent::Error(_)));
        assert!(matches!(failed.right, PaneContent::Error(_)));
        assert_eq!(selection.path(Side::Left), Some(good.as_path()));

        // Re-opening the good side alone keeps working.
        let reopened = selection.with_file(Side::Left, &good);
        assert!(matches!(
            compare_selection(&reopened, &config).unwrap().left,
            PaneContent::Error(_)
        ));

        let retried = reopened.with_file(Side::Right, &fixed);
        let comparison = compare_selection(&retried, &config).unwrap();
        assert!(matches!(comparison.right, PaneContent::Rows(ref rows) if rows.len() == 2));
    }

    #[test]
    fn only_the_newest_ticket_is_current() {
        let tracker = RequestTracker::default();
        let first = tracker.begin();
        assert!(tracker.is_current(first));
        let second = tracker.begin();
        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
        assert!(second.id() > first.id());
    }
}
