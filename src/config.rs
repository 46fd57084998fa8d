use serde::{Deserialize, Serialize};

pub const DEFAULT_HINT_CUTOFF: f32 = 0.75;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffAlgorithm {
    #[default]
    Myers,
    Patience,
    Lcs,
}

impl From<DiffAlgorithm> for similar::Algorithm {
    fn from(algorithm: DiffAlgorithm) -> Self {
        match algorithm {
            DiffAlgorithm::Myers => similar::Algorithm::Myers,
            DiffAlgorithm::Patience => similar::Algorithm::Patience,
            DiffAlgorithm::Lcs => similar::Algorithm::Lcs,
        }
    }
}

/// Options sent by the frontend with every comparison request.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CompareConfig {
    pub algorithm: DiffAlgorithm,
    /// Minimum character similarity for a changed line pair to get hints.
    pub hint_cutoff: f32,
    pub show_hints: bool,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            algorithm: DiffAlgorithm::Myers,
            hint_cutoff: DEFAULT_HINT_CUTOFF,
            show_hints: true,
        }
    }
}

impl CompareConfig {
    pub fn cutoff(&self) -> f32 {
        if self.hint_cutoff.is_nan() {
            DEFAULT_HINT_CUTOFF
        } else {
            self.hint_cutoff.clamp(0.0, 1.0)
        }
    }
}

/// Fixed look of both panes.
#[derive(Debug, Clone, Serialize)]
pub struct PaneStyle {
    pub background: &'static str,
    pub font_family: &'static str,
    pub font_size: u8,
}

impl Default for PaneStyle {
    fn default() -> Self {
        Self {
            background: "#f4f4f4",
            font_family: "Courier New",
            font_size: 11,
        }
    }
}
