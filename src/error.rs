//! Errors raised while loading or transforming a price table.

use polars::prelude::PolarsError;
use thiserror::Error;

pub type PipelineResult<T> = Result<T, PipelineError>;

#[derive(Debug, Error)]
pub enum PipelineError {
    /// A stage needs a column the table does not have.
    #[error("{stage}: missing required column '{column}'")]
    MissingColumn {
        stage: &'static str,
        column: String,
    },

    #[error("row {row} has no symbol")]
    NullSymbol { row: usize },

    /// More than two observations for a symbol under the `reject` collision policy.
    #[error("symbol '{symbol}' has {observations} observations, expected 2")]
    Collision { symbol: String, observations: usize },

    /// A single observation for a symbol under the `reject` incomplete policy.
    #[error("symbol '{symbol}' has no end observation")]
    Incomplete { symbol: String },

    #[error("unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("separator {0:?} is not a single-byte character")]
    InvalidSeparator(char),

    #[error(transparent)]
    Polars(#[from] PolarsError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
}
