use crate::differ::{EditOp, Side};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Highlight {
    None,
    Deleted,
    Inserted,
    Hint,
    BlankPad,
}

impl Highlight {
    pub fn background(self) -> Option<&'static str> {
        match self {
            Highlight::Deleted => Some("#ffaaaa"),
            Highlight::Inserted => Some("#aaffaa"),
            Highlight::Hint => Some("#ffffaa"),
            Highlight::None | Highlight::BlankPad => None,
        }
    }
}

/// One painted row of a pane. Rows without a line number are hint
/// annotations or padding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    pub line_number: Option<usize>,
    pub text: String,
    pub highlight: Highlight,
}

impl DisplayRow {
    fn numbered(line_number: usize, text: &str, highlight: Highlight) -> Self {
        Self {
            line_number: Some(line_number),
            text: text.to_string(),
            highlight,
        }
    }

    fn hint(marker: &str) -> Self {
        Self {
            line_number: None,
            text: marker.to_string(),
            highlight: Highlight::Hint,
        }
    }

    fn pad() -> Self {
        Self {
            line_number: None,
            text: String::new(),
            highlight: Highlight::BlankPad,
        }
    }

    pub fn is_padding(&self) -> bool {
        self.highlight == Highlight::BlankPad
    }
}

/// Both panes of a rendered diff. `left` and `right` always have the same
/// length, row `i` of each is painted at the same height.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedPanes {
    pub left: Vec<DisplayRow>,
    pub right: Vec<DisplayRow>,
}

impl RenderedPanes {
    pub fn len(&self) -> usize {
        self.left.len()
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }

    pub fn rows(&self, side: Side) -> &[DisplayRow] {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    /// Each pane as the exact text painted into it.
    pub fn to_text(&self) -> (String, String) {
        (pane_text(&self.left), pane_text(&self.right))
    }
}

pub fn render(ops: &[EditOp]) -> RenderedPanes {
    let mut panes = RenderedPanes {
        left: Vec::with_capacity(ops.len()),
        right: Vec::with_capacity(ops.len()),
    };
    let (mut left_no, mut right_no) = (1, 1);

    for op in ops {
        let (left, right) = row_pair(op, left_no, right_no);
        panes.left.push(left);
        panes.right.push(right);

        let (left_step, right_step) = line_advance(op);
        left_no += left_step;
        right_no += right_step;
    }

    panes
}

/// The row each pane gets for `op`, given the next unused line number of
/// each side.
pub fn row_pair(op: &EditOp, left_no: usize, right_no: usize) -> (DisplayRow, DisplayRow) {
    match op {
        EditOp::Equal(text) => (
            DisplayRow::numbered(left_no, text, Highlight::None),
            DisplayRow::numbered(right_no, text, Highlight::None),
        ),
        EditOp::DeleteLeft(text) => (
            DisplayRow::numbered(left_no, text, Highlight::Deleted),
            DisplayRow::pad(),
        ),
        EditOp::InsertRight(text) => (
            DisplayRow::pad(),
            DisplayRow::numbered(right_no, text, Highlight::Inserted),
        ),
        EditOp::Hint {
            side: Side::Left,
            marker,
        } => (DisplayRow::hint(marker), DisplayRow::pad()),
        EditOp::Hint {
            side: Side::Right,
            marker,
        } => (DisplayRow::pad(), DisplayRow::hint(marker)),
    }
}

fn line_advance(op: &EditOp) -> (usize, usize) {
    match op {
        EditOp::Equal(_) => (1, 1),
        EditOp::DeleteLeft(_) => (1, 0),
        EditOp::InsertRight(_) => (0, 1),
        EditOp::Hint { .. } => (0, 0),
    }
}

/// Formats a row the way it is painted. The result always ends with exactly
/// one `\n`.
pub fn format_row(row: &DisplayRow) -> String {
    let mut out = match (row.line_number, row.highlight) {
        (Some(n), _) => format!("{:4}  {}", n, row.text),
        // The caret replaces the first marker column.
        (None, Highlight::Hint) => {
            let rest: String = row.text.chars().skip(1).collect();
            format!("    ^{}", rest)
        }
        (None, _) => "     ".to_string(),
    };
    if !out.ends_with('\n') {
        out.push('\n');
    }
    out
}

fn pane_text(rows: &[DisplayRow]) -> String {
    rows.iter().map(format_row).collect()
}
