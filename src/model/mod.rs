//! Immutable roster records
//!
//! Records are built once and only read afterwards. Fields are private and
//! exposed through accessors so nothing downstream can mutate an input.

mod employee;
mod person;

pub use employee::{Employee, JobHistoryEntry};
pub use person::{Person, FULL_NAME_SEPARATOR};
