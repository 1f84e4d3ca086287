use thiserror::Error;

use crate::Coordinate;

/// Contract violations raised by terrain queries and searches.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("coordinate {coordinate} lies outside the {width}x{height} terrain")]
    OutOfBounds {
        coordinate: Coordinate,
        width: usize,
        height: usize,
    },
}

/// Reasons a textual terrain is rejected at ingestion.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TerrainError {
    #[error("terrain has no cells")]
    Empty,
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("invalid symbol {symbol:?} at {coordinate}")]
    InvalidSymbol { coordinate: Coordinate, symbol: char },
    #[error("terrain has more than {limit} cells")]
    TooLarge { limit: usize },
    #[error("terrain has no start cell 'S'")]
    MissingStart,
    #[error("terrain has no goal cell 'E'")]
    MissingGoal,
    #[error("second start cell at {second}, first was at {first}")]
    DuplicateStart {
        first: Coordinate,
        second: Coordinate,
    },
    #[error("second goal cell at {second}, first was at {first}")]
    DuplicateGoal {
        first: Coordinate,
        second: Coordinate,
    },
}
