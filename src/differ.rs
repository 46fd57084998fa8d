use crate::config::CompareConfig;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use similar::{capture_diff_slices, DiffTag, TextDiff};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// 1-based file number shown to the user ("file 1" is the left pane).
    pub fn file_number(self) -> u8 {
        match self {
            Side::Left => 1,
            Side::Right => 2,
        }
    }
}

/// One step of a line diff.
///
/// A `Hint` always directly follows the `DeleteLeft` (side `Left`) or
/// `InsertRight` (side `Right`) it annotates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOp {
    Equal(String),
    DeleteLeft(String),
    InsertRight(String),
    Hint { side: Side, marker: String },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DiffStats {
    pub equal: usize,
    pub deleted: usize,
    pub inserted: usize,
    pub hinted: usize,
}

impl DiffStats {
    pub fn from_ops(ops: &[EditOp]) -> Self {
        let mut stats = DiffStats::default();
        for op in ops {
            match op {
                EditOp::Equal(_) => stats.equal += 1,
                EditOp::DeleteLeft(_) => stats.deleted += 1,
                EditOp::InsertRight(_) => stats.inserted += 1,
                EditOp::Hint { .. } => stats.hinted += 1,
            }
        }
        stats
    }

    pub fn is_identical(&self) -> bool {
        self.deleted == 0 && self.inserted == 0
    }
}

/// Compares two line sequences with the default configuration.
pub fn compare(left: &[String], right: &[String]) -> Vec<EditOp> {
    compare_with(left, right, &CompareConfig::default())
}

pub fn compare_with(left: &[String], right: &[String], config: &CompareConfig) -> Vec<EditOp> {
    let mut differ = LineDiffer {
        left,
        right,
        cutoff: config.cutoff(),
        ops: Vec::with_capacity(left.len().max(right.len())),
    };

    for op in capture_diff_slices(config.algorithm.into(), left, right) {
        let (tag, old, new) = op.as_tag_tuple();
        match tag {
            DiffTag::Equal => {
                for i in old {
                    differ.ops.push(EditOp::Equal(left[i].clone()));
                }
            }
            DiffTag::Delete => differ.dump_deletes(old.start, old.end),
            DiffTag::Insert => differ.dump_inserts(new.start, new.end),
            DiffTag::Replace => differ.fancy_replace(old.start, old.end, new.start, new.end),
        }
    }

    let mut ops = differ.ops;
    if !config.show_hints {
        ops.retain(|op| !matches!(op, EditOp::Hint { .. }));
    }
    ops
}

/// Character similarity of two lines, `2 * matches / total_chars`.
pub fn line_ratio(a: &str, b: &str) -> f32 {
    TextDiff::from_chars(a, b).ratio()
}

// Upper bound on `line_ratio` from the lengths alone.
fn ratio_upper_bound(a: &str, b: &str) -> f32 {
    let (la, lb) = (a.chars().count(), b.chars().count());
    if la + lb == 0 {
        return 1.0;
    }
    2.0 * la.min(lb) as f32 / (la + lb) as f32
}

// Upper bound on `line_ratio` from the characters both lines share,
// ignoring their order. `b_counts` holds the character counts of `b`.
fn ratio_multiset_bound(a: &str, b: &str, b_counts: &HashMap<char, usize>) -> f32 {
    let total = a.chars().count() + b.chars().count();
    if total == 0 {
        return 1.0;
    }
    let mut avail: HashMap<char, usize> = HashMap::with_capacity(b_counts.len());
    let mut matches = 0;
    for c in a.chars() {
        let left = avail
            .entry(c)
            .or_insert_with(|| b_counts.get(&c).copied().unwrap_or(0));
        if *left > 0 {
            *left -= 1;
            matches += 1;
        }
    }
    2.0 * matches as f32 / total as f32
}

fn char_counts(line: &str) -> HashMap<char, usize> {
    let mut counts = HashMap::new();
    for c in line.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }
    counts
}

struct LineDiffer<'a> {
    left: &'a [String],
    right: &'a [String],
    cutoff: f32,
    ops: Vec<EditOp>,
}

impl LineDiffer<'_> {
    fn dump_deletes(&mut self, lo: usize, hi: usize) {
        for line in &self.left[lo..hi] {
            self.ops.push(EditOp::DeleteLeft(line.clone()));
        }
    }

    fn dump_inserts(&mut self, lo: usize, hi: usize) {
        for line in &self.right[lo..hi] {
            self.ops.push(EditOp::InsertRight(line.clone()));
        }
    }

    fn plain_replace(&mut self, alo: usize, ahi: usize, blo: usize, bhi: usize) {
        if bhi - blo < ahi - alo {
            self.dump_inserts(blo, bhi);
            self.dump_deletes(alo, ahi);
        } else {
            self.dump_deletes(alo, ahi);
            self.dump_inserts(blo, bhi);
        }
    }

    /// Splits a replaced block around its most similar line pair and recurses
    /// on both halves. Blocks without a pair at or above the cutoff are dumped
    /// as plain deletes and inserts.
    fn fancy_replace(&mut self, alo: usize, ahi: usize, blo: usize, bhi: usize) {
        let mut best: Option<(f32, usize, usize)> = None;
        let mut identical: Option<(usize, usize)> = None;

        for j in blo..bhi {
            let b = &self.right[j];
            let b_counts = char_counts(b);
            for i in alo..ahi {
                let a = &self.left[i];
                if a == b {
                    identical.get_or_insert((i, j));
                    continue;
                }
                let bound = ratio_upper_bound(a, b);
                if bound < self.cutoff || best.is_some_and(|(r, _, _)| bound <= r) {
                    continue;
                }
                let bound = ratio_multiset_bound(a, b, &b_counts);
                if bound < self.cutoff || best.is_some_and(|(r, _, _)| bound <= r) {
                    continue;
                }
                let ratio = line_ratio(a, b);
                if ratio >= self.cutoff && best.is_none_or(|(r, _, _)| ratio > r) {
                    best = Some((ratio, i, j));
                }
            }
        }

        let (i, j, is_identical) = match (best, identical) {
            (Some((_, i, j)), _) => (i, j, false),
            (None, Some((i, j))) => (i, j, true),
            (None, None) => {
                self.plain_replace(alo, ahi, blo, bhi);
                return;
            }
        };

        self.fancy_helper(alo, i, blo, j);
        if is_identical {
            self.ops.push(EditOp::Equal(self.left[i].clone()));
        } else {
            self.push_hinted_pair(i, j);
        }
        self.fancy_helper(i + 1, ahi, j + 1, bhi);
    }

    fn fancy_helper(&mut self, alo: usize, ahi: usize, blo: usize, bhi: usize) {
        if alo < ahi {
            if blo < bhi {
                self.fancy_replace(alo, ahi, blo, bhi);
            } else {
                self.dump_deletes(alo, ahi);
            }
        } else if blo < bhi {
            self.dump_inserts(blo, bhi);
        }
    }

    fn push_hinted_pair(&mut self, i: usize, j: usize) {
        let old = &self.left[i];
        let new = &self.right[j];
        let (old_marker, new_marker) = intraline_markers(old, new);

        self.ops.push(EditOp::DeleteLeft(old.clone()));
        if !old_marker.is_empty() {
            self.ops.push(EditOp::Hint {
                side: Side::Left,
                marker: old_marker,
            });
        }
        self.ops.push(EditOp::InsertRight(new.clone()));
        if !new_marker.is_empty() {
            self.ops.push(EditOp::Hint {
                side: Side::Right,
                marker: new_marker,
            });
        }
    }
}

/// Per-character markers for a changed line pair: `^` replaced, `-` only in
/// the old line, `+` only in the new line. Trailing whitespace is trimmed.
pub fn intraline_markers(old: &str, new: &str) -> (String, String) {
    let diff = TextDiff::from_chars(old, new);
    let mut old_tags = String::with_capacity(old.len());
    let mut new_tags = String::with_capacity(new.len());

    for op in diff.ops() {
        let (tag, o, n) = op.as_tag_tuple();
        let (old_tag, new_tag) = match tag {
            DiffTag::Equal => (' ', ' '),
            DiffTag::Delete => ('-', ' '),
            DiffTag::Insert => (' ', '+'),
            DiffTag::Replace => ('^', '^'),
        };
        old_tags.extend(std::iter::repeat_n(old_tag, o.len()));
        new_tags.extend(std::iter::repeat_n(new_tag, n.len()));
    }

    (
        keep_original_whitespace(old, &old_tags),
        keep_original_whitespace(new, &new_tags),
    )
}

// Tabs under an unchanged column are copied so markers stay aligned.
fn keep_original_whitespace(line: &str, tags: &str) -> String {
    let marker: String = line
        .chars()
        .zip(tags.chars())
        .map(|(c, tag)| if tag == ' ' && c.is_whitespace() { c } else { tag })
        .collect();
    marker.trim_end().to_string()
}
