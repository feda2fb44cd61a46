use std::io;
use std::num::ParseIntError;

use csv::Error as CsvError;
use thiserror::Error;

/// Failure of the underlying input stream. Fatal for whichever pass hit it.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("{0}")]
    Io(#[from] io::Error),
    #[error("{0}")]
    Csv(#[from] CsvError),
}

/// Reasons the lookup table can be rejected. Any of them aborts construction.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The port field is not an integer.
    #[error("invalid port value {value:?}: {source}")]
    Parse {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("invalid port {0}")]
    InvalidPort(i64),

    /// Carries the protocol name exactly as written in the table.
    #[error("invalid protocol number: {0}")]
    UnknownProtocol(String),

    /// `row` counts non-comment rows, starting at 1.
    #[error("record on line {row}: wrong number of fields (found {fields}, expected 3)")]
    MalformedRow { row: usize, fields: usize },

    #[error(transparent)]
    Read(#[from] ReadError),
}

/// Reasons a single flow log line is skipped. Never fatal.
#[derive(Debug, Error)]
pub enum FlowRecordError {
    #[error("record on line {line}: expected at least {expected} fields, found {found}")]
    TooFewFields {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("record on line {line}: invalid {field} {value:?}: {source}")]
    InvalidField {
        line: u64,
        field: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("record on line {line}: {field} {value:?} is not valid UTF-8")]
    NonUtf8Field {
        line: u64,
        field: &'static str,
        value: String,
    },

    /// The row could not be decoded at all.
    #[error("unreadable record: {0}")]
    Csv(#[from] CsvError),
}
