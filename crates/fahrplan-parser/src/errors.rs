use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParserError {
    #[error("CSV header could not be read")]
    Header {
        #[source]
        source: csv::Error,
    },

    #[error("CSV record at line {line} is malformed")]
    Record {
        line: u64,
        #[source]
        source: csv::Error,
    },
}
