use crate::error::PipelineResult;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Which observations become `Start`/`End` when a symbol has more than two.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionPolicy {
    /// First observation is the start, last observation is the end.
    #[default]
    FirstAndLast,
    /// Positions 0 and 1, later observations are ignored.
    FirstTwo,
    Reject,
}

/// What to do with a symbol that only has a single observation left.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncompletePolicy {
    #[default]
    Drop,
    Reject,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    /// Column to stable-sort by before pairing. Row order is used when unset.
    pub order_by: Option<String>,
    pub collision: CollisionPolicy,
    pub incomplete: IncompletePolicy,
}

impl PipelineConfig {
    pub fn from_json(json: &str) -> PipelineResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
    pub fn load<P: AsRef<Path>>(path: P) -> PipelineResult<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_json(&raw)
    }
}
