// The table I/O adapter: reads the decision table from disk, hands it to the
// core ranking, and writes the augmented table back out.

use log::{debug, info};
use snafu::{prelude::*, Snafu};

use std::path::Path;

use topsis_ranking::{rank_table, Table};

pub mod io_csv;
pub mod io_excel;

#[derive(Debug, Snafu)]
pub enum TableIoError {
    #[snafu(display("File '{path}' not found"))]
    MissingInput { path: String },
    #[snafu(display("Unsupported file format for '{path}', expected a .csv, .xlsx or .xls file"))]
    UnsupportedFormat { path: String },
    #[snafu(display("Error reading CSV file {path}"))]
    CsvRead { source: csv::Error, path: String },
    #[snafu(display("Error opening Excel file {path}"))]
    OpeningExcel {
        source: calamine::Error,
        path: String,
    },
    #[snafu(display("Excel file {path} has no worksheet"))]
    MissingWorksheet { path: String },
    #[snafu(display("Input file {path} contains no header row"))]
    EmptyInput { path: String },
    #[snafu(display("Could not read cell at data row {lineno} of {path}: {content}"))]
    ExcelWrongCellType {
        path: String,
        lineno: usize,
        content: String,
    },
    #[snafu(display("Error writing result file {path}"))]
    CsvWrite { source: csv::Error, path: String },
    #[snafu(display("Error writing result file {path}"))]
    CsvFlush {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("{source}"))]
    Ranking { source: topsis_ranking::TopsisError },
}

pub type TableIoResult<T> = Result<T, TableIoError>;

/// Reads the table at `input_path`, ranks it with the given weights and
/// impacts, and writes the augmented table to `output_path` in CSV format.
pub fn run_ranking(
    input_path: &str,
    weights: &str,
    impacts: &str,
    output_path: &str,
) -> TableIoResult<()> {
    if !Path::new(input_path).is_file() {
        return MissingInputSnafu { path: input_path }.fail();
    }

    let table = read_table(input_path)?;
    info!(
        "Read {} data rows and {} columns from {}",
        table.rows.len(),
        table.header.len(),
        input_path
    );

    let ranked = rank_table(&table, weights, impacts).context(RankingSnafu)?;

    io_csv::write_table(output_path, &ranked)?;
    debug!("Wrote {} data rows to {}", ranked.rows.len(), output_path);
    Ok(())
}

// The file format is detected from the extension, as the sources do not
// carry any other marker.
fn read_table(path: &str) -> TableIoResult<Table> {
    if path.ends_with(".csv") {
        io_csv::read_table(path)
    } else if path.ends_with(".xlsx") || path.ends_with(".xls") {
        io_excel::read_table(path)
    } else {
        UnsupportedFormatSnafu { path }.fail()
    }
}
