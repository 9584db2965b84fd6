use super::instrument::logged;
use super::outliers::{OutlierFilter, PassThrough};
use super::stages::{add_percent_change, clean, flatten, remove_outliers, start_pipeline, trim};
use crate::config::PipelineConfig;
use crate::error::PipelineResult;
use polars::prelude::DataFrame;

/// Runs the performance stages in order over one price table.
pub struct Pipeline {
    config: PipelineConfig,
    outliers: Box<dyn OutlierFilter>,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            config,
            outliers: Box::new(PassThrough),
        }
    }
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }
    pub fn with_outlier_filter<F: OutlierFilter + 'static>(mut self, filter: F) -> Self {
        self.outliers = Box::new(filter);
        self
    }
    /// Turns a table of (symbol, date) observations into one row per symbol
    /// with its start close, end close and percent change. The caller's
    /// table is left untouched; the first failing stage aborts the run.
    pub fn run(&self, df: &DataFrame) -> PipelineResult<DataFrame> {
        let df = logged("start_pipeline", start_pipeline)(df)?;
        let df = logged("clean", clean)(df)?;
        let df = logged("trim", trim)(df)?;
        let df = logged("flatten_date", |df: DataFrame| flatten(df, &self.config))(df)?;
        let df = logged("add_percent_change", add_percent_change)(df)?;
        logged("remove_outliers", |df: DataFrame| {
            remove_outliers(df, self.outliers.as_ref())
        })(df)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(PipelineConfig::default())
    }
}
