/// Errors raised at the engine boundary.
///
/// Illegal moves and spawning onto a full board are not errors: those are
/// reported through `bool` returns because they are part of normal play.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("invalid direction {0} (expected 0..=3)")]
    InvalidDirection(u8),

    #[error("board must have a non-zero area, got {width}x{height}")]
    DegenerateDimensions { width: usize, height: usize },

    #[error("board shape mismatch: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },

    #[error("expected {expected} cells, got {actual}")]
    CellCount { expected: usize, actual: usize },

    #[error("row {row} has {actual} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

pub type Result<T> = std::result::Result<T, EngineError>;
