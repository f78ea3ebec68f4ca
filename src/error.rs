// src/error.rs
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyzeError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid datatype: '{0}' (expected BINARY, CHAR, SHORT, INT, FLOAT, COMPLEX, DOUBLE or RGB)")]
    InvalidDatatype(String),

    #[error("Bad header length: expected {expected} bytes, found {found}")]
    BadLength { expected: usize, found: usize },

    #[error("Bad sizeof_hdr field: expected 348, found {0}")]
    BadSizeField(i32),

    #[error("Unsupported element width: {0} bytes (must be 2 or 4)")]
    UnsupportedWidth(usize),

    #[error("Buffer too short: {required} bytes required, buffer holds {actual}")]
    BufferTooShort { required: usize, actual: usize },

    #[error("Field '{field}' too long: {length} bytes does not fit in {capacity}")]
    FieldTooLong { field: &'static str, capacity: usize, length: usize },
}

pub type Result<T> = std::result::Result<T, AnalyzeError>;
