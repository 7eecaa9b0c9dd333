use rayon::prelude::*;

use crate::error::{Result, RosterError, GENERIC_INPUT};

/// Running state of an arithmetic mean.
///
/// `combine` is associative, so partial states built on different threads can
/// be merged in any grouping before `finalize`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Mean {
    sum: f64,
    count: usize,
}

impl Mean {
    /// State holding a single observation
    pub fn of(value: f64) -> Self {
        Self {
            sum: value,
            count: 1,
        }
    }

    pub fn combine(self, other: Self) -> Self {
        Self {
            sum: self.sum + other.sum,
            count: self.count.saturating_add(other.count),
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Turn the state into the mean, or `EmptySequence` if nothing was observed
    pub fn finalize(self) -> Result<f64> {
        if self.count == 0 {
            return Err(RosterError::EmptySequence(GENERIC_INPUT));
        }
        Ok(self.sum / self.count as f64)
    }
}

impl FromIterator<f64> for Mean {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        iter.into_iter()
            .map(Mean::of)
            .fold(Mean::default(), Mean::combine)
    }
}

/// Arithmetic mean of `values`
pub fn average<I>(values: I) -> Result<f64>
where
    I: IntoIterator<Item = f64>,
{
    values.into_iter().collect::<Mean>().finalize()
}

/// Parallel arithmetic mean using rayon
pub fn par_average(values: &[f64]) -> Result<f64> {
    values
        .par_iter()
        .map(|value| Mean::of(*value))
        .reduce(Mean::default, Mean::combine)
        .finalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_of_ages() {
        let ages = [30.0, 28.0, 40.0, 21.0, 50.0, 33.0];
        let avg = average(ages).unwrap();
        assert!((avg - 33.666_666).abs() < 1e-5);
    }

    #[test]
    fn test_average_of_empty_is_error() {
        let err = average(Vec::<f64>::new()).unwrap_err();
        assert!(err.is_empty_sequence());
    }

    #[test]
    fn test_average_of_zeros_is_zero_not_error() {
        assert_eq!(average([0.0, 0.0]).unwrap(), 0.0);
    }

    #[test]
    fn test_combine_tracks_count() {
        let state = Mean::of(1.0).combine(Mean::of(3.0)).combine(Mean::default());
        assert_eq!(state.count(), 2);
        assert_eq!(state.finalize().unwrap(), 2.0);
    }

    #[test]
    fn test_par_average_matches_sequential() {
        let values: Vec<f64> = (0..10_000).map(|n| (n % 97) as f64).collect();
        let sequential = average(values.iter().copied()).unwrap();
        let parallel = par_average(&values).unwrap();
        assert!((sequential - parallel).abs() < 1e-9);
    }

    #[test]
    fn test_par_average_of_empty_is_error() {
        assert!(par_average(&[]).unwrap_err().is_empty_sequence());
    }
}
