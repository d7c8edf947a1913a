//! Validity-gated collection of datasets from a pull-based source

use crate::dataset::Dataset;

#[derive(Debug, PartialEq, Eq)]
pub enum CollectError {
    /// The source produced `limit` invalid datasets back-to-back.
    TooManyConsecutiveInvalid { limit: usize },
    /// The source ran out before `required` valid datasets were found.
    InsufficientValidDatasets { found: usize, required: usize },
}

impl std::fmt::Display for CollectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CollectError::TooManyConsecutiveInvalid { limit } => {
                write!(f, "too many consecutive invalid datasets ({})", limit)
            }
            CollectError::InsufficientValidDatasets { found, required } => {
                write!(
                    f,
                    "not enough valid datasets: found {}, required {}",
                    found, required
                )
            }
        }
    }
}

impl std::error::Error for CollectError {}

/// Pull datasets from `source` until `n` valid ones are accepted.
///
/// Invalid datasets are dropped. A run of `invalid_limit` consecutive invalid
/// datasets aborts the collection; the counter resets to zero on every valid
/// dataset, so only unbroken runs count. Stops pulling the moment the nth
/// valid dataset is accepted.
///
/// `invalid_limit` must be positive; callers validate it at the config layer.
pub fn clear_datasets<I>(
    source: I,
    n: usize,
    invalid_limit: usize,
) -> Result<Vec<Dataset>, CollectError>
where
    I: IntoIterator<Item = Dataset>,
{
    if n == 0 {
        return Ok(Vec::new());
    }

    let mut consecutive_invalid = 0usize;
    let mut accepted = Vec::with_capacity(n);

    for dataset in source {
        if dataset.is_valid {
            accepted.push(dataset);
            if accepted.len() == n {
                log::debug!("collected {} valid datasets, stopping pull", n);
                return Ok(accepted);
            }
            consecutive_invalid = 0;
        } else {
            consecutive_invalid += 1;
            if consecutive_invalid == invalid_limit {
                return Err(CollectError::TooManyConsecutiveInvalid {
                    limit: invalid_limit,
                });
            }
        }
    }

    Err(CollectError::InsufficientValidDatasets {
        found: accepted.len(),
        required: n,
    })
}
