// ********* Input data structures ***********

use std::error::Error;
use std::fmt::Display;

/// The direction in which a criterion contributes to the final ranking.
///
/// In the textual interface, benefit criteria are written `+` and cost
/// criteria are written `-`.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
pub enum Impact {
    /// Higher raw values are preferable (storage, battery life, ...).
    Benefit,
    /// Lower raw values are preferable (price, weight, ...).
    Cost,
}

/// A rectangular decision table.
///
/// The first column holds an opaque identifier for each alternative and is
/// carried through verbatim, never interpreted. Every following column is a
/// criterion and must hold numeric values.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// The number of criterion columns (everything after the identifier).
    pub fn criteria(&self) -> usize {
        self.header.len().saturating_sub(1)
    }
}

// ******** Output data structures *********

/// Closeness coefficients and ranks for the alternatives, in the same order
/// as the input rows.
///
/// Scores lie in `[0, 1]`, higher is closer to the ideal best point. Ranks
/// are 1-based; equal scores share the smallest rank of the tied group.
#[derive(PartialEq, Debug, Clone)]
pub struct Ranking {
    pub scores: Vec<f64>,
    pub ranks: Vec<u32>,
}

/// Errors that prevent the ranking from completing.
///
/// All of them are deterministic consequences of malformed input: there is
/// nothing to retry, the first violated constraint is reported and no
/// partial output is produced.
#[derive(PartialEq, Debug, Clone)]
pub enum TopsisError {
    /// The table has fewer than 3 columns (identifier + at least 2 criteria).
    NotEnoughColumns { found: usize },
    /// The table has a header but no data rows.
    NoRows,
    /// A data row does not have one cell per header column.
    RaggedRow {
        row: usize,
        found: usize,
        expected: usize,
    },
    /// A criterion cell does not coerce to a finite floating-point number.
    NonNumericCell {
        row: usize,
        column: String,
        value: String,
    },
    /// The weight list length does not match the criteria count.
    WeightCountMismatch { criteria: usize, found: usize },
    /// The impact list length does not match the criteria count.
    ImpactCountMismatch { criteria: usize, found: usize },
    /// An impact token is not exactly `+` or `-`.
    InvalidImpact { token: String },
    /// A weight token does not parse as a real number.
    InvalidWeight { token: String },
    /// A criterion column is entirely zero and cannot be normalized.
    DegenerateColumn { column: String },
}

impl Error for TopsisError {}

impl Display for TopsisError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TopsisError::NotEnoughColumns { found } => write!(
                f,
                "the input table must contain at least 3 columns, found {}",
                found
            ),
            TopsisError::NoRows => write!(f, "the input table contains no data rows"),
            TopsisError::RaggedRow {
                row,
                found,
                expected,
            } => write!(
                f,
                "data row {} has {} cells, expected {}",
                row, found, expected
            ),
            TopsisError::NonNumericCell { row, column, value } => write!(
                f,
                "column {:?} contains a non-numeric value {:?} at data row {}",
                column, value, row
            ),
            TopsisError::WeightCountMismatch { criteria, found } => write!(
                f,
                "number of weights ({}) does not match the number of criteria ({})",
                found, criteria
            ),
            TopsisError::ImpactCountMismatch { criteria, found } => write!(
                f,
                "number of impacts ({}) does not match the number of criteria ({})",
                found, criteria
            ),
            TopsisError::InvalidImpact { token } => {
                write!(f, "impacts must be either '+' or '-', found {:?}", token)
            }
            TopsisError::InvalidWeight { token } => {
                write!(f, "weight {:?} is not a number", token)
            }
            TopsisError::DegenerateColumn { column } => write!(
                f,
                "criterion column {:?} only contains zeros and cannot be normalized",
                column
            ),
        }
    }
}
