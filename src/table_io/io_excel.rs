// Reads the decision table from an Excel workbook. Only the first worksheet
// is considered and its first row is taken as the header.

use calamine::{open_workbook_auto, DataType, Reader};
use log::debug;
use snafu::prelude::*;

use topsis_ranking::Table;

use crate::table_io::{
    EmptyInputSnafu, ExcelWrongCellTypeSnafu, MissingWorksheetSnafu, OpeningExcelSnafu,
    TableIoResult,
};

pub fn read_table(path: &str) -> TableIoResult<Table> {
    let mut workbook = open_workbook_auto(path).context(OpeningExcelSnafu { path })?;
    let wrange = workbook
        .worksheet_range_at(0)
        .context(MissingWorksheetSnafu { path })?
        .context(OpeningExcelSnafu { path })?;

    let mut iter = wrange.rows();
    let header = match iter.next() {
        Some(row) => read_row(row, 0, path)?,
        None => return EmptyInputSnafu { path }.fail(),
    };
    debug!("read_table: header: {:?}", header);

    let mut rows: Vec<Vec<String>> = Vec::new();
    for (idx, row) in iter.enumerate() {
        debug!("read_table: row {}: {:?}", idx + 1, row);
        rows.push(read_row(row, idx + 1, path)?);
    }
    Ok(Table { header, rows })
}

// Numeric cells round-trip through their display form; the core re-parses
// them together with the cells that came in as text.
fn read_row(row: &[DataType], lineno: usize, path: &str) -> TableIoResult<Vec<String>> {
    let mut cells: Vec<String> = Vec::with_capacity(row.len());
    for cell in row {
        let content = match cell {
            DataType::String(s) => s.clone(),
            DataType::Float(x) => x.to_string(),
            DataType::Int(x) => x.to_string(),
            DataType::Empty => String::new(),
            other => {
                return ExcelWrongCellTypeSnafu {
                    path,
                    lineno,
                    content: format!("{:?}", other),
                }
                .fail();
            }
        };
        cells.push(content);
    }
    Ok(cells)
}
