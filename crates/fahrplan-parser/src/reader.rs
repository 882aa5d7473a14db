use std::io::Read;

use csv::ReaderBuilder;

use crate::errors::ParserError;
use crate::model::RawRecord;

/// Reads every row of a schedule export. The first row must be the header.
///
/// The whole input is consumed before returning; any malformed record aborts the read.
pub fn read_records<R: Read>(input: R) -> Result<Vec<RawRecord>, ParserError> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(input);

    reader
        .headers()
        .map_err(|source| ParserError::Header { source })?;

    let mut records = Vec::new();
    for (index, result) in reader.deserialize::<RawRecord>().enumerate() {
        let record = result.map_err(|source| {
            // Line 1 is the header.
            let line = source
                .position()
                .map(|pos| pos.line())
                .unwrap_or(index as u64 + 2);
            ParserError::Record { line, source }
        })?;
        records.push(record.normalized());
    }

    Ok(records)
}
