//! # Roster
//!
//! Composable extraction, selection and reduction over an immutable, in-memory
//! roster of employees.
//!
//! ## Usage
//!
//! ```bash
//! roster report [--json] [--parallel] [--base-rate 75000] [-c roster.toml]
//! roster list
//! ```
//!
//! ## Modules
//!
//! - `model` - Immutable `Person`, `JobHistoryEntry` and `Employee` records
//! - `extract` - Field extractors, comparators and comparator combinators
//! - `aggregate` - Average, first-wins maximum selection and fallible sums
//! - `pipeline` - Filter-then-reduce queries over a roster
//! - `payroll` - Salary totals weighted by current-position tenure
//! - `report` - The canonical queries gathered into one summary
//! - `config` - TOML configuration for reports
//! - `dataset` - The built-in six-employee sample roster
//! - `logging` - Tracing initialization for the binary
//! - `testing` - Builders for test rosters
pub mod aggregate;
pub mod config;
pub mod dataset;
pub mod error;
pub mod extract;
pub mod logging;
pub mod model;
pub mod payroll;
pub mod pipeline;
pub mod report;

pub mod testing;


pub use error::{Result, RosterError};
