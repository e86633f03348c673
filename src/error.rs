use crate::field::MAX_SIDE;
use thiserror::Error;

/// Rejected field dimensions or mine layout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("the field needs at least one row and one column, got {rows}x{cols}")]
    EmptyField { rows: usize, cols: usize },
    #[error("a {rows}x{cols} field is too large, each side can be at most {max}", max = MAX_SIDE)]
    Oversized { rows: usize, cols: usize },
    #[error("there must be fewer mines than cells: {mines} mines for {cells} cells")]
    TooManyMines { mines: usize, cells: usize },
    #[error("mine at ({row}, {col}) lies outside the {rows}x{cols} field")]
    MineOutsideField {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    #[error("the preset layout has {actual} mines but the field was asked for {expected}")]
    LayoutMismatch { expected: usize, actual: usize },
}

/// An `open` aimed outside the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("coordinates ({row}, {col}) are outside the {rows}x{cols} field")]
pub struct InvalidCoordinate {
    pub row: usize,
    pub col: usize,
    pub rows: usize,
    pub cols: usize,
}
