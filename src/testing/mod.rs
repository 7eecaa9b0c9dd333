//! Testing utilities and fixtures
//!
//! Builders for ad-hoc rosters used by unit, property and integration tests.

mod builders;

pub use builders::EmployeeBuilder;
