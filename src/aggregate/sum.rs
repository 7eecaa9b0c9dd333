use rayon::prelude::*;

use crate::error::{Result, RosterError, GENERIC_INPUT};

/// Sum a fallible per-element value.
///
/// The first failing element aborts the whole sum; nothing is skipped.
pub fn try_sum<I, F>(items: I, mut value: F) -> Result<f64>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Result<f64>,
{
    let mut total: Option<f64> = None;
    for item in items {
        let v = value(item)?;
        total = Some(total.map_or(v, |t| t + v));
    }
    total.ok_or(RosterError::EmptySequence(GENERIC_INPUT))
}

/// Parallel [`try_sum`] over a slice
pub fn par_try_sum<T, F>(items: &[T], value: F) -> Result<f64>
where
    T: Sync,
    F: Fn(&T) -> Result<f64> + Sync,
{
    if items.is_empty() {
        return Err(RosterError::EmptySequence(GENERIC_INPUT));
    }

    items
        .par_iter()
        .map(|item| value(item))
        .try_reduce(|| 0.0, |a, b| Ok(a + b))
}
