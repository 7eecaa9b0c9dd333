//! Maximum selection with a first-encountered tie-break
//!
//! `Iterator::max_by` keeps the *last* of several equal maxima. Selection here
//! keeps the first one in input order, sequentially and in parallel.

use rayon::prelude::*;
use std::cmp::Ordering;

use crate::error::{Result, RosterError, GENERIC_INPUT};

/// Select the maximal element under `compare`; the earliest wins ties
pub fn max_by<I, F>(items: I, mut compare: F) -> Result<I::Item>
where
    I: IntoIterator,
    F: FnMut(&I::Item, &I::Item) -> Ordering,
{
    items
        .into_iter()
        .reduce(|best, candidate| {
            if compare(&candidate, &best) == Ordering::Greater {
                candidate
            } else {
                best
            }
        })
        .ok_or(RosterError::EmptySequence(GENERIC_INPUT))
}

/// Select the element with the greatest key; the earliest wins ties.
///
/// The key is computed once per element.
pub fn max_by_key<I, K, F>(items: I, mut key: F) -> Result<I::Item>
where
    I: IntoIterator,
    K: Ord,
    F: FnMut(&I::Item) -> K,
{
    try_max_by_key(items, |item| Ok(key(item)))
}

/// Like [`max_by_key`], for keys that can fail.
///
/// The first key error aborts the selection.
pub fn try_max_by_key<I, K, F>(items: I, mut key: F) -> Result<I::Item>
where
    I: IntoIterator,
    K: Ord,
    F: FnMut(&I::Item) -> Result<K>,
{
    let mut best: Option<(K, I::Item)> = None;

    for item in items {
        let candidate_key = key(&item)?;
        let replaces = match &best {
            Some((best_key, _)) => candidate_key > *best_key,
            None => true,
        };
        if replaces {
            best = Some((candidate_key, item));
        }
    }

    best.map(|(_, item)| item)
        .ok_or(RosterError::EmptySequence(GENERIC_INPUT))
}

/// Parallel [`max_by`] over a slice
pub fn par_max_by<T, F>(items: &[T], compare: F) -> Result<&T>
where
    T: Sync,
    F: Fn(&T, &T) -> Ordering + Sync,
{
    items
        .par_iter()
        .enumerate()
        .reduce_with(|(left_index, left), (right_index, right)| {
            match compare(right, left) {
                Ordering::Greater => (right_index, right),
                Ordering::Less => (left_index, left),
                // Chunks may be merged in either order; position decides ties
                Ordering::Equal if right_index < left_index => (right_index, right),
                Ordering::Equal => (left_index, left),
            }
        })
        .map(|(_, item)| item)
        .ok_or(RosterError::EmptySequence(GENERIC_INPUT))
}

/// Parallel [`try_max_by_key`] over a slice
pub fn par_try_max_by_key<T, K, F>(items: &[T], key: F) -> Result<&T>
where
    T: Sync,
    K: Ord + Send + Sync,
    F: Fn(&T) -> Result<K> + Sync,
{
    let keyed = items
        .par_iter()
        .map(|item| key(item).map(|k| (k, item)))
        .collect::<Result<Vec<(K, &T)>>>()?;

    par_max_by(&keyed, |a, b| a.0.cmp(&b.0)).map(|(_, item)| *item)
}
