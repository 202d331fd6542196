//! Engine error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScoringError {
    #[error("Strokes must be a positive integer, got {0}")]
    InvalidStrokes(i32),

    #[error("Par must be a positive integer, got {0}")]
    InvalidPar(i32),

    #[error("Shots received cannot be negative, got {0}")]
    InvalidShotsReceived(i32),

    #[error("Hole {hole}: {source}")]
    Hole {
        hole: usize,
        source: Box<ScoringError>,
    },

    #[error("Expected {expected} hole values, got {actual}")]
    HoleCountMismatch { expected: usize, actual: usize },

    #[error("Course must have at least one hole")]
    NoHoles,

    #[error("Stroke indexes must be a permutation of 1..={holes}")]
    InvalidStrokeIndexes { holes: usize },

    #[error("Slope rating must be a positive number, got {0}")]
    InvalidSlope(f64),

    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f64 },

    #[error("Total strokes for the round exceed {}", i32::MAX)]
    TotalOverflow,

    #[error("Unknown scoring mode: {0}")]
    UnknownScoringMode(String),

    #[error("Unknown tie split: {0}")]
    UnknownTieSplit(String),
}

impl ScoringError {
    /// Attach a 1-indexed hole number to a per-hole error.
    pub fn at_hole(self, hole: usize) -> Self {
        ScoringError::Hole {
            hole,
            source: Box::new(self),
        }
    }
}
