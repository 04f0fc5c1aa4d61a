// Primitives for reading and writing the decision table in CSV format.

use log::debug;
use snafu::prelude::*;

use topsis_ranking::Table;

use crate::table_io::{CsvFlushSnafu, CsvReadSnafu, CsvWriteSnafu, EmptyInputSnafu, TableIoResult};

pub fn read_table(path: &str) -> TableIoResult<Table> {
    let rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .context(CsvReadSnafu { path })?;
    let mut records = rdr.into_records();

    let header: Vec<String> = match records.next() {
        Some(record) => record
            .context(CsvReadSnafu { path })?
            .iter()
            .map(|s| s.to_string())
            .collect(),
        None => return EmptyInputSnafu { path }.fail(),
    };
    debug!("read_table: header: {:?}", header);

    let mut rows: Vec<Vec<String>> = Vec::new();
    for (idx, record) in records.enumerate() {
        let record = record.context(CsvReadSnafu { path })?;
        debug!("read_table: row {}: {:?}", idx + 1, record);
        rows.push(record.iter().map(|s| s.to_string()).collect());
    }
    Ok(Table { header, rows })
}

pub fn write_table(path: &str, table: &Table) -> TableIoResult<()> {
    let mut writer = csv::Writer::from_path(path).context(CsvWriteSnafu { path })?;
    writer
        .write_record(&table.header)
        .context(CsvWriteSnafu { path })?;
    for row in table.rows.iter() {
        writer.write_record(row).context(CsvWriteSnafu { path })?;
    }
    writer.flush().context(CsvFlushSnafu { path })?;
    Ok(())
}
