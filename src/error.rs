use thiserror::Error;

/// Errors raised at the `Universe` API boundary.
///
/// Both variants are caller-input errors, checked before any mutation:
/// a failed call always leaves the universe unchanged.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UniverseError {
    #[error("universe dimensions must be positive, got {width}x{height}")]
    ZeroDimension { width: usize, height: usize },

    #[error("universe {width}x{height} exceeds the addressable cell range")]
    DimensionOverflow { width: usize, height: usize },

    #[error("cell ({x}, {y}) is outside the {width}x{height} universe")]
    OutOfRange {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}
