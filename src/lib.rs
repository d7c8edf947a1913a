//! siteflow - validity-gated collection and per-site aggregation
//!
//! # Architecture
//!
//! ```text
//! Dataset source (Iterator<Item = Dataset>)
//!     ↓
//! clear_datasets (consecutive-invalid tolerance gate)
//!     ↓
//! compute (group by (site, name) → total, average)
//!     ↓
//! stdout table / JSON lines
//! ```

pub mod aggregator;
pub mod collector;
pub mod config;
pub mod dataset;
pub mod generator;
pub mod output;

pub use aggregator::{compute, AggregateRow, AggregationResult};
pub use collector::{clear_datasets, CollectError};
pub use config::{Config, ConfigError};
pub use dataset::{Dataset, MeasureRow};
pub use generator::RandomDatasetSource;
pub use output::OutputFormat;
