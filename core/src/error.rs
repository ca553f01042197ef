use thiserror::Error;

use crate::types::LineNo;

#[derive(Error, Debug)]
pub enum CountyError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Cannot open {what} file '{path}'")]
    CannotOpen { what: &'static str, path: String },

    #[error("Demographics file is empty.")]
    EmptyDataset,

    #[error("Missing required column '{name}' in demographics file.")]
    MissingColumn { name: &'static str },

    #[error("Malformed line {line} in demographics file. Skipping.")]
    MalformedRow { line: LineNo },

    #[error("Unrecognized operation '{verb}' on line {line}.")]
    UnknownCommand { verb: String, line: LineNo },

    #[error("Malformed operation line {line}: {usage}.")]
    MalformedCommand { line: LineNo, usage: &'static str },

    #[error("{verb} field '{field}' not supported on line {line}.")]
    InvalidField { verb: &'static str, field: String, line: LineNo },

    #[error("{verb} field '{field}' is not a population subfield.")]
    NotPopulationSubfield { verb: &'static str, field: &'static str },

    #[error("filter comparison '{cmp}' invalid on line {line}.")]
    InvalidComparison { cmp: String, line: LineNo },

    #[error("filter number '{text}' invalid on line {line}.")]
    InvalidNumber { text: String, line: LineNo },
}

impl CountyError {
    /// Row- and instruction-level errors are reported and skipped.
    /// Everything else aborts the run.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::MalformedRow { .. }
                | Self::UnknownCommand { .. }
                | Self::MalformedCommand { .. }
                | Self::InvalidField { .. }
                | Self::NotPopulationSubfield { .. }
                | Self::InvalidComparison { .. }
                | Self::InvalidNumber { .. }
        )
    }
}

pub type CountyResult<T> = Result<T, CountyError>;
