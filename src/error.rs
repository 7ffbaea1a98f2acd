// src/error.rs

use std::io;

use thiserror::Error;

/// Everything that can stop a conversion. Every variant is terminal.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// Stdin is an interactive terminal, so nothing was piped in.
    #[error("no input provided")]
    NoInput,

    #[error("failed to {action}: {source}")]
    Stream {
        action: &'static str,
        #[source]
        source: io::Error,
    },

    /// Malformed CSV. `line` counts lines of the original input, blank ones included.
    #[error("parse error on line {line}, column {column}: {message}")]
    Parse {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("input csv is empty")]
    EmptyInput,

    #[error("table has no rows to render")]
    EmptyTable,

    /// Only raised under `ColumnOverflow::Reject`.
    #[error("row {row} has {found} cells but the header declares {expected} columns")]
    Render {
        row: usize,
        found: usize,
        expected: usize,
    },
}

impl ConvertError {
    pub fn stream(action: &'static str, source: io::Error) -> Self {
        ConvertError::Stream { action, source }
    }

    pub fn parse(line: usize, column: usize, message: impl Into<String>) -> Self {
        ConvertError::Parse {
            line,
            column,
            message: message.into(),
        }
    }

    /// Process exit status for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            ConvertError::NoInput
            | ConvertError::Stream { .. }
            | ConvertError::Parse { .. }
            | ConvertError::EmptyInput
            | ConvertError::EmptyTable
            | ConvertError::Render { .. } => 1,
        }
    }
}
