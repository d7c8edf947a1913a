//! Measurement batch value records

use serde::{Deserialize, Serialize};

/// One (name, value) measurement. `value` is nullable: the random source
/// never emits a missing value, but upstream producers may.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasureRow {
    pub name: String,
    pub value: Option<i64>,
}

impl MeasureRow {
    pub fn new(name: impl Into<String>, value: i64) -> Self {
        Self {
            name: name.into(),
            value: Some(value),
        }
    }

    pub fn missing(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }
}

/// One batch of measurements for a site, with a validity flag decided by the
/// producer. Immutable after creation; validity is opaque to the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    pub site: String,
    pub rows: Vec<MeasureRow>,
    pub is_valid: bool,
}

impl Dataset {
    pub fn new(site: impl Into<String>, rows: Vec<MeasureRow>, is_valid: bool) -> Self {
        Self {
            site: site.into(),
            rows,
            is_valid,
        }
    }
}
