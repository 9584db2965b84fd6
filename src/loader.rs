#[cfg(test)]
mod unit_test;
use crate::error::{PipelineError, PipelineResult};
use polars::prelude::*;

/// CSV readers split on a single byte.
pub fn csv_separator(sep: char) -> PipelineResult<u8> {
    u8::try_from(sep)
        .ok()
        .filter(u8::is_ascii)
        .ok_or(PipelineError::InvalidSeparator(sep))
}

/// Reads a price table from disk. The pipeline itself never touches files.
pub struct Loader<'a> {
    path: &'a str,
}

impl<'a> Loader<'a> {
    pub fn init(path: &'a str) -> Self {
        Self { path }
    }
    pub fn path(&self) -> &str {
        self.path
    }
    pub fn load_csv(&self, sep: u8, header: bool) -> PipelineResult<LazyFrame> {
        if !self.path.ends_with(".csv") {
            return Err(PipelineError::UnsupportedFormat(self.path.to_string()));
        }
        Ok(LazyCsvReader::new(self.path)
            .with_separator(sep)
            .has_header(header)
            .finish()?)
    }
    pub fn load_parquet(&self, args: ScanArgsParquet) -> PipelineResult<LazyFrame> {
        if !self.path.ends_with(".parquet") {
            return Err(PipelineError::UnsupportedFormat(self.path.to_string()));
        }
        Ok(LazyFrame::scan_parquet(self.path, args)?)
    }
    /// Picks the reader from the file extension.
    pub fn load(&self, sep: u8, header: bool) -> PipelineResult<LazyFrame> {
        if self.path.ends_with(".parquet") {
            self.load_parquet(ScanArgsParquet::default())
        } else {
            self.load_csv(sep, header)
        }
    }
}
