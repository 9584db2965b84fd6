//! Start/end closing-price performance per symbol.
//!
//! A price table holds one row per (symbol, date) observation. The stages in
//! [`stages`] turn it into one row per symbol carrying the first and last
//! close of the window and the percent change between them.

pub mod instrument;
pub mod outliers;
pub mod pipeline;
pub mod stages;
pub mod utils;

pub const SYMBOL: &str = "Symbol";
pub const DATE: &str = "Date";
pub const CLOSE: &str = "Close";
pub const DIVIDENDS: &str = "Dividends";
pub const START_CLOSE: &str = "Start Close";
pub const END_CLOSE: &str = "End Close";
pub const PERCENT_CHANGE: &str = "Percent Change";

/// Percent change reported for a symbol whose start close is zero: the
/// security is flagged as bankrupt rather than given a numeric change.
pub const BANKRUPT_SENTINEL: f64 = -200.00;

#[cfg(test)]
pub(crate) mod testing;
