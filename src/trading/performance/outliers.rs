use crate::error::PipelineResult;
use polars::prelude::DataFrame;

/// Final stage of the pipeline: drops rows whose percent change is implausible.
pub trait OutlierFilter {
    fn filter(&self, df: DataFrame) -> PipelineResult<DataFrame>;
}

/// Keeps every row. No outlier policy is applied yet.
#[derive(Debug, Default, Clone, Copy)]
pub struct PassThrough;

impl OutlierFilter for PassThrough {
    fn filter(&self, df: DataFrame) -> PipelineResult<DataFrame> {
        Ok(df)
    }
}

impl<F> OutlierFilter for F
where
    F: Fn(DataFrame) -> PipelineResult<DataFrame>,
{
    fn filter(&self, df: DataFrame) -> PipelineResult<DataFrame> {
        self(df)
    }
}
