mod config;
use log::{debug, info};

pub use crate::config::*;

/// Header of the score column appended to the output table.
pub const SCORE_COLUMN: &str = "Topsis Score";
/// Header of the rank column appended to the output table.
pub const RANK_COLUMN: &str = "Rank";

// **** Private structures ****

// Row-major, rectangular: one inner vector per alternative, one value per
// criterion column.
type Matrix = Vec<Vec<f64>>;

/// Ranks the rows of a decision table with the TOPSIS method.
///
/// `weights` and `impacts` are comma-separated lists with one entry per
/// criterion column: weights are real numbers, impacts are `+` for a benefit
/// criterion and `-` for a cost criterion.
///
/// Returns a new table with the original columns followed by a
/// `Topsis Score` and a `Rank` column, in the original row order.
///
/// ```
/// use topsis_ranking::{rank_table, Table};
///
/// let table = Table {
///     header: vec!["Model", "Price", "Storage", "Camera"]
///         .iter()
///         .map(|s| s.to_string())
///         .collect(),
///     rows: vec![
///         vec!["M1".to_string(), "250".to_string(), "16".to_string(), "12".to_string()],
///         vec!["M2".to_string(), "200".to_string(), "16".to_string(), "8".to_string()],
///     ],
/// };
///
/// let ranked = rank_table(&table, "1,1,1", "-,+,+")?;
/// assert_eq!(ranked.header.last().map(String::as_str), Some("Rank"));
/// assert_eq!(ranked.rows.len(), 2);
/// # Ok::<(), topsis_ranking::TopsisError>(())
/// ```
pub fn rank_table(
    table: &Table,
    weights_str: &str,
    impacts_str: &str,
) -> Result<Table, TopsisError> {
    let matrix = coerce_matrix(table)?;
    let criteria = table.criteria();
    info!(
        "Ranking {} alternatives over {} criteria",
        matrix.len(),
        criteria
    );

    let (weights, impacts) = check_parameters(weights_str, impacts_str, criteria)?;
    check_column_norms(&matrix, &table.header)?;

    let ranking = rank_matrix(&matrix, &weights, &impacts);

    let mut header = table.header.clone();
    header.push(SCORE_COLUMN.to_string());
    header.push(RANK_COLUMN.to_string());
    let rows = table
        .rows
        .iter()
        .zip(ranking.scores.iter().zip(ranking.ranks.iter()))
        .map(|(row, (score, rank))| {
            let mut cells = row.clone();
            cells.push(score.to_string());
            cells.push(rank.to_string());
            cells
        })
        .collect();
    Ok(Table { header, rows })
}

/// Scores and ranks a validated numeric matrix.
///
/// The caller guarantees that the matrix is rectangular, that `weights` and
/// `impacts` both have one entry per matrix column and that no column is
/// entirely zero. [`rank_table`] establishes all of this before delegating
/// here; given such input this function cannot fail.
pub fn rank_matrix(matrix: &[Vec<f64>], weights: &[f64], impacts: &[Impact]) -> Ranking {
    let normalized = normalize_columns(matrix);

    let weighted: Matrix = normalized
        .iter()
        .map(|row| row.iter().zip(weights).map(|(v, w)| v * w).collect())
        .collect();

    let mut ideal_best: Vec<f64> = Vec::with_capacity(impacts.len());
    let mut ideal_worst: Vec<f64> = Vec::with_capacity(impacts.len());
    for (c, impact) in impacts.iter().enumerate() {
        let max = weighted.iter().map(|row| row[c]).fold(f64::MIN, f64::max);
        let min = weighted.iter().map(|row| row[c]).fold(f64::MAX, f64::min);
        match impact {
            Impact::Benefit => {
                ideal_best.push(max);
                ideal_worst.push(min);
            }
            Impact::Cost => {
                ideal_best.push(min);
                ideal_worst.push(max);
            }
        }
    }
    debug!(
        "rank_matrix: ideal best: {:?} ideal worst: {:?}",
        ideal_best, ideal_worst
    );

    let scores: Vec<f64> = weighted
        .iter()
        .map(|row| {
            let dist_best = euclidean_distance(row, &ideal_best);
            let dist_worst = euclidean_distance(row, &ideal_worst);
            if dist_best + dist_worst == 0.0 {
                // The row coincides with both ideal points, which only
                // happens when all rows are identical. The score is 0 rather
                // than the undefined 0/0.
                0.0
            } else {
                dist_worst / (dist_best + dist_worst)
            }
        })
        .collect();
    debug!("rank_matrix: scores: {:?}", scores);

    let ranks = competition_ranks(&scores);
    Ranking { scores, ranks }
}

// Checks the table shape and coerces the criterion columns to floats.
fn coerce_matrix(table: &Table) -> Result<Matrix, TopsisError> {
    if table.header.len() < 3 {
        return Err(TopsisError::NotEnoughColumns {
            found: table.header.len(),
        });
    }
    if table.rows.is_empty() {
        return Err(TopsisError::NoRows);
    }

    let mut matrix: Matrix = Vec::with_capacity(table.rows.len());
    for (idx, row) in table.rows.iter().enumerate() {
        if row.len() != table.header.len() {
            return Err(TopsisError::RaggedRow {
                row: idx + 1,
                found: row.len(),
                expected: table.header.len(),
            });
        }
        let mut values: Vec<f64> = Vec::with_capacity(table.criteria());
        for (cell, name) in row.iter().zip(table.header.iter()).skip(1) {
            // "NaN" and "inf" parse as f64 but are not usable criterion
            // values, hence the finiteness check.
            match cell.trim().parse::<f64>() {
                Ok(value) if value.is_finite() => values.push(value),
                _ => {
                    return Err(TopsisError::NonNumericCell {
                        row: idx + 1,
                        column: name.clone(),
                        value: cell.clone(),
                    });
                }
            }
        }
        matrix.push(values);
    }
    Ok(matrix)
}

// Parses the weight and impact strings against the criteria count.
// The checks run in a fixed order so that the first violation wins: weight
// count, impact count, impact tokens, weight tokens.
fn check_parameters(
    weights_str: &str,
    impacts_str: &str,
    criteria: usize,
) -> Result<(Vec<f64>, Vec<Impact>), TopsisError> {
    let weight_tokens: Vec<&str> = weights_str.split(',').collect();
    let impact_tokens: Vec<&str> = impacts_str.split(',').collect();

    if weight_tokens.len() != criteria {
        return Err(TopsisError::WeightCountMismatch {
            criteria,
            found: weight_tokens.len(),
        });
    }
    if impact_tokens.len() != criteria {
        return Err(TopsisError::ImpactCountMismatch {
            criteria,
            found: impact_tokens.len(),
        });
    }

    let mut impacts: Vec<Impact> = Vec::with_capacity(criteria);
    for token in impact_tokens {
        match token {
            "+" => impacts.push(Impact::Benefit),
            "-" => impacts.push(Impact::Cost),
            _ => {
                return Err(TopsisError::InvalidImpact {
                    token: token.to_string(),
                });
            }
        }
    }

    let mut weights: Vec<f64> = Vec::with_capacity(criteria);
    for token in weight_tokens {
        // A zero or negative weight is syntactically valid, the effect on
        // the ranking is the caller's concern.
        match token.trim().parse::<f64>() {
            Ok(weight) if weight.is_finite() => weights.push(weight),
            _ => {
                return Err(TopsisError::InvalidWeight {
                    token: token.to_string(),
                });
            }
        }
    }
    debug!(
        "check_parameters: weights: {:?} impacts: {:?}",
        weights, impacts
    );
    Ok((weights, impacts))
}

// Rejects columns with a zero sum of squares before they reach the
// normalization divide.
fn check_column_norms(matrix: &[Vec<f64>], header: &[String]) -> Result<(), TopsisError> {
    for c in 0..header.len() - 1 {
        let sum_sq: f64 = matrix.iter().map(|row| row[c] * row[c]).sum();
        if sum_sq == 0.0 {
            return Err(TopsisError::DegenerateColumn {
                column: header[c + 1].clone(),
            });
        }
    }
    Ok(())
}

// Rescales every column to unit Euclidean norm.
fn normalize_columns(matrix: &[Vec<f64>]) -> Matrix {
    let criteria = matrix.first().map(|row| row.len()).unwrap_or(0);
    let norms: Vec<f64> = (0..criteria)
        .map(|c| {
            matrix
                .iter()
                .map(|row| row[c] * row[c])
                .sum::<f64>()
                .sqrt()
        })
        .collect();
    debug!("normalize_columns: column norms: {:?}", norms);
    matrix
        .iter()
        .map(|row| row.iter().zip(&norms).map(|(v, n)| v / n).collect())
        .collect()
}

fn euclidean_distance(row: &[f64], point: &[f64]) -> f64 {
    row.iter()
        .zip(point)
        .map(|(v, p)| (v - p) * (v - p))
        .sum::<f64>()
        .sqrt()
}

// Competition ranking over descending scores: the highest score gets rank 1,
// equal scores share the smallest rank of their group, and the next distinct
// score jumps by the size of the group.
fn competition_ranks(scores: &[f64]) -> Vec<u32> {
    scores
        .iter()
        .map(|score| {
            let better = scores.iter().filter(|other| *other > score).count();
            (better + 1) as u32
        })
        .collect()
}
