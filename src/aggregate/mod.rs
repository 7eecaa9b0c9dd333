//! Terminal reductions over finite sequences
//!
//! Every reduction here is a pure function of its input. Reducing zero
//! elements is never answered with a sentinel: the result is
//! [`RosterError::EmptySequence`](crate::error::RosterError::EmptySequence).
//!
//! - `mean` - arithmetic mean through an associative `(sum, count)` state
//! - `selection` - maximum selection where the first maximal element wins
//! - `sum` - fallible summation that aborts on the first failing element
//!
//! Each reduction has a rayon counterpart (`par_*`) that returns the same
//! value as the sequential one.

mod mean;
mod selection;
mod sum;

pub use mean::{average, par_average, Mean};
pub use selection::{max_by, max_by_key, par_max_by, par_try_max_by_key, try_max_by_key};
pub use sum::{par_try_sum, try_sum};
