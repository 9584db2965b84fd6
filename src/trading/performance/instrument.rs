use crate::error::PipelineResult;
use polars::prelude::DataFrame;
use std::time::Instant;
use tracing::info;

/// Wraps a stage so every successful call logs its runtime and output shape.
///
/// The wrapped stage keeps its call contract: the table it returns is passed
/// through untouched and its errors propagate as-is, without a log line.
pub fn logged<I, F>(name: &'static str, stage: F) -> impl Fn(I) -> PipelineResult<DataFrame>
where
    F: Fn(I) -> PipelineResult<DataFrame>,
{
    move |input| {
        let start = Instant::now();
        let result = stage(input)?;
        let runtime = start.elapsed();
        let (rows, cols) = result.shape();
        info!(
            stage = name,
            rows,
            cols,
            "{name}:\n  runtime={runtime:?}, end shape=({rows}, {cols})"
        );
        Ok(result)
    }
}
