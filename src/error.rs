use crate::differ::Side;
use std::io;
use thiserror::Error;

/// Failures while loading one side of a comparison. The display text is what
/// both panes show in place of their rows.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(
        "Error: Could not open file, binary or incompatible encoding detected in file {}.",
        .side.file_number()
    )]
    Decode { side: Side },

    #[error("Error: Could not open file {}. {source}", .side.file_number())]
    Open {
        side: Side,
        #[source]
        source: io::Error,
    },
}

impl LoadError {
    pub fn side(&self) -> Side {
        match self {
            LoadError::Decode { side } | LoadError::Open { side, .. } => *side,
        }
    }
}
