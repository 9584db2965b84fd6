use super::outliers::OutlierFilter;
use super::utils::{percent_change, position_label};
use super::{CLOSE, DATE, DIVIDENDS, END_CLOSE, PERCENT_CHANGE, START_CLOSE, SYMBOL};
use crate::config::{CollisionPolicy, IncompletePolicy, PipelineConfig};
use crate::error::{PipelineError, PipelineResult};
use polars::prelude::*;
use std::collections::BTreeMap;
use tracing::{debug, warn};

fn has_column(df: &DataFrame, column: &str) -> bool {
    df.get_column_names().contains(&column)
}

fn require(df: &DataFrame, stage: &'static str, column: &str) -> PipelineResult<()> {
    if has_column(df, column) {
        Ok(())
    } else {
        Err(PipelineError::MissingColumn {
            stage,
            column: column.to_string(),
        })
    }
}

/// Detaches the working table from the caller's one.
pub fn start_pipeline(df: &DataFrame) -> PipelineResult<DataFrame> {
    Ok(df.clone())
}

/// Drops dividend-payment rows, keeping the order of the others.
pub fn clean(df: DataFrame) -> PipelineResult<DataFrame> {
    require(&df, "clean", DIVIDENDS)?;
    let paid = col(DIVIDENDS).gt(lit(0.0)).fill_null(lit(false));
    Ok(df.lazy().filter(paid.not()).collect()?)
}

/// Keeps the closing price and the symbol/date keys.
pub fn trim(df: DataFrame) -> PipelineResult<DataFrame> {
    require(&df, "trim", CLOSE)?;
    let columns: Vec<&str> = [SYMBOL, DATE]
        .into_iter()
        .filter(|key| has_column(&df, key))
        .chain([CLOSE])
        .collect();
    Ok(df.select(columns)?)
}

/// Pairs each symbol's observations into one wide row.
///
/// Rows are grouped by symbol, keeping their relative order (or the order of
/// `config.order_by` when set). The first observation of a group becomes the
/// `Start <column>` value and the end observation the `End <column>` value,
/// for every column other than the symbol. Groups with more than two
/// observations follow `config.collision`, groups with one follow
/// `config.incomplete`. The output `Symbol` column is Utf8 whatever the input
/// type, and rows are sorted by it as text, so `"10"` comes before `"2"`.
pub fn flatten(df: DataFrame, config: &PipelineConfig) -> PipelineResult<DataFrame> {
    require(&df, "flatten", SYMBOL)?;
    let df = match config.order_by.as_deref() {
        Some(key) => {
            require(&df, "flatten", key)?;
            let options = SortOptions {
                maintain_order: true,
                ..Default::default()
            };
            df.lazy().sort(key, options).collect()?
        }
        None => df,
    };

    let symbols = df.column(SYMBOL)?.cast(&DataType::Utf8)?;
    let mut groups: BTreeMap<&str, Vec<IdxSize>> = BTreeMap::new();
    for (row, symbol) in symbols.utf8()?.into_iter().enumerate() {
        let symbol = symbol.ok_or(PipelineError::NullSymbol { row })?;
        groups.entry(symbol).or_default().push(row as IdxSize);
    }

    let mut keys = Vec::with_capacity(groups.len());
    let mut starts = Vec::with_capacity(groups.len());
    let mut ends = Vec::with_capacity(groups.len());
    for (symbol, rows) in groups {
        let end = match (rows.len(), config.collision) {
            (1, _) => match config.incomplete {
                IncompletePolicy::Drop => {
                    warn!(symbol, "dropping symbol with a single observation");
                    continue;
                }
                IncompletePolicy::Reject => {
                    return Err(PipelineError::Incomplete {
                        symbol: symbol.to_string(),
                    })
                }
            },
            (2, _) => rows[1],
            (observations, CollisionPolicy::Reject) => {
                return Err(PipelineError::Collision {
                    symbol: symbol.to_string(),
                    observations,
                })
            }
            (observations, CollisionPolicy::FirstTwo) => {
                debug!(symbol, observations, "keeping the first two observations");
                rows[1]
            }
            (observations, CollisionPolicy::FirstAndLast) => {
                debug!(symbol, observations, "keeping the first and last observations");
                rows[observations - 1]
            }
        };
        keys.push(symbol);
        starts.push(rows[0]);
        ends.push(end);
    }

    let starts = IdxCa::from_vec("", starts);
    let ends = IdxCa::from_vec("", ends);
    let mut columns = vec![Series::new(SYMBOL, keys)];
    for series in df.get_columns() {
        if series.name() == SYMBOL {
            continue;
        }
        for (position, rows) in [(0, &starts), (1, &ends)] {
            let mut wide = series.take(rows)?;
            wide.rename(&position_label(position, series.name()));
            columns.push(wide);
        }
    }
    Ok(DataFrame::new(columns)?)
}

/// Adds `Percent Change` from `Start Close` to `End Close`.
pub fn add_percent_change(df: DataFrame) -> PipelineResult<DataFrame> {
    require(&df, "add_percent_change", START_CLOSE)?;
    require(&df, "add_percent_change", END_CLOSE)?;
    let change = percent_change(col(START_CLOSE), col(END_CLOSE)).alias(PERCENT_CHANGE);
    Ok(df.lazy().with_column(change).collect()?)
}

pub fn remove_outliers(df: DataFrame, filter: &dyn OutlierFilter) -> PipelineResult<DataFrame> {
    filter.filter(df)
}
