use super::BANKRUPT_SENTINEL;
use polars::prelude::*;

/// `(end - start) / start * 100`, or [`BANKRUPT_SENTINEL`] where `start` is zero.
pub fn percent_change(start: Expr, end: Expr) -> Expr {
    let start = start.cast(DataType::Float64);
    let end = end.cast(DataType::Float64);
    when(start.clone().eq(lit(0.0)))
        .then(lit(BANKRUPT_SENTINEL))
        .otherwise((end - start.clone()) / start * lit(100.0))
}

/// Wide column name for a value column at a position within its symbol group.
pub fn position_label(position: usize, column: &str) -> String {
    if position == 0 {
        format!("Start {column}")
    } else {
        format!("End {column}")
    }
}
