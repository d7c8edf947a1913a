//! Grouped (site, name) totals and averages over collected datasets

use std::collections::BTreeMap;

use serde::Serialize;

use crate::collector::{clear_datasets, CollectError};
use crate::dataset::Dataset;

/// One grouped result row. `total` sums the present values of the group
/// (0 when every value is missing); `average` is `None` in that same case.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateRow {
    pub site: String,
    pub name: String,
    pub total: i64,
    pub average: Option<f64>,
}

pub type AggregationResult = Vec<AggregateRow>;

#[derive(Debug, Default, Clone, Copy)]
struct GroupStats {
    total: i64,
    count: u64,
}

/// Collect `n` valid datasets from `source`, then reduce their rows into one
/// grouped table keyed by (site, name).
///
/// Each row is tagged with its dataset's site for grouping; the datasets
/// themselves are not modified. Missing values are excluded from both the sum
/// and the count. Result rows are sorted by (site, name).
pub fn compute<I>(
    source: I,
    n: usize,
    invalid_limit: usize,
) -> Result<AggregationResult, CollectError>
where
    I: IntoIterator<Item = Dataset>,
{
    let accepted = clear_datasets(source, n, invalid_limit)?;

    let mut groups: BTreeMap<(String, String), GroupStats> = BTreeMap::new();
    for dataset in &accepted {
        for row in &dataset.rows {
            let stats = groups
                .entry((dataset.site.clone(), row.name.clone()))
                .or_default();
            if let Some(value) = row.value {
                stats.total += value;
                stats.count += 1;
            }
        }
    }

    log::debug!(
        "aggregated {} datasets into {} (site, name) groups",
        accepted.len(),
        groups.len()
    );

    Ok(groups
        .into_iter()
        .map(|((site, name), stats)| AggregateRow {
            site,
            name,
            total: stats.total,
            average: if stats.count > 0 {
                Some(stats.total as f64 / stats.count as f64)
            } else {
                None
            },
        })
        .collect())
}
