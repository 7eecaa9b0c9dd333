//! Composable queries over a roster of employees
//!
//! An [`EmployeePipeline`] borrows an immutable roster, applies any number of
//! filters, and ends in one terminal reduction:
//!
//! ```
//! use roster::dataset::sample_employees;
//! use roster::pipeline::EmployeePipeline;
//!
//! let employees = sample_employees();
//! let average = EmployeePipeline::new(&employees)
//!     .filter(|e| e.job_history().len() > 1)
//!     .average_age()
//!     .unwrap();
//! assert!((average - 36.2).abs() < 1e-9);
//! ```
//!
//! Nothing is cached; every terminal call walks the roster again.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::debug;

use crate::aggregate::{
    average, max_by, par_average, par_max_by, par_try_max_by_key, try_max_by_key,
};
use crate::error::Result;
use crate::extract;
use crate::model::{Employee, Person};
use crate::payroll::{self, SalaryPolicy};

/// How terminal reductions walk the roster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    #[default]
    Sequential,
    /// Reduce with rayon; results match sequential mode
    Parallel,
}

type Predicate<'a> = Box<dyn Fn(&Employee) -> bool + Send + Sync + 'a>;

pub struct EmployeePipeline<'a> {
    employees: &'a [Employee],
    filters: Vec<Predicate<'a>>,
    mode: ExecutionMode,
}

impl<'a> EmployeePipeline<'a> {
    pub fn new(employees: &'a [Employee]) -> Self {
        Self {
            employees,
            filters: Vec::new(),
            mode: ExecutionMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: ExecutionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Keep only employees matching `predicate`. Filters are combined with AND.
    pub fn filter<P>(mut self, predicate: P) -> Self
    where
        P: Fn(&Employee) -> bool + Send + Sync + 'a,
    {
        self.filters.push(Box::new(predicate));
        self
    }

    /// Employees passing every filter, in roster order
    pub fn employees(&self) -> Vec<&'a Employee> {
        self.employees
            .iter()
            .filter(|employee| self.filters.iter().all(|keep| keep(*employee)))
            .collect()
    }

    pub fn people(&self) -> Vec<&'a Person> {
        self.employees().into_iter().map(extract::person).collect()
    }

    /// Mean of a per-employee value
    pub fn average_by<F>(&self, value: F) -> Result<f64>
    where
        F: Fn(&Employee) -> f64 + Sync,
    {
        let selected = self.employees();
        debug!(
            "Averaging over {} employees ({:?})",
            selected.len(),
            self.mode
        );

        let result = match self.mode {
            ExecutionMode::Sequential => average(selected.iter().map(|employee| value(*employee))),
            ExecutionMode::Parallel => {
                let values: Vec<f64> = selected
                    .par_iter()
                    .map(|employee| value(*employee))
                    .collect();
                par_average(&values)
            }
        };
        result.map_err(|err| err.for_input("employees"))
    }

    pub fn average_age(&self) -> Result<f64> {
        self.average_by(|employee| f64::from(extract::age(extract::person(employee))))
    }

    /// The first person maximal under `compare`
    pub fn max_person_by<F>(&self, compare: F) -> Result<&'a Person>
    where
        F: Fn(&Person, &Person) -> Ordering + Sync,
    {
        let people = self.people();
        debug!("Selecting among {} people ({:?})", people.len(), self.mode);

        let result = match self.mode {
            ExecutionMode::Sequential => max_by(people, |a, b| compare(*a, *b)),
            ExecutionMode::Parallel => par_max_by(&people, |a, b| compare(*a, *b)).copied(),
        };
        result.map_err(|err| err.for_input("employees"))
    }

    pub fn person_with_longest_full_name(&self) -> Result<&'a Person> {
        self.max_person_by(extract::compare_by_full_name_length)
    }

    /// The first employee with the greatest key. A failing key aborts the selection.
    pub fn max_employee_by_key<K, F>(&self, key: F) -> Result<&'a Employee>
    where
        K: Ord + Send + Sync,
        F: Fn(&Employee) -> Result<K> + Sync,
    {
        let selected = self.employees();
        debug!(
            "Selecting among {} employees ({:?})",
            selected.len(),
            self.mode
        );

        let result = match self.mode {
            ExecutionMode::Sequential => try_max_by_key(selected, |employee| key(*employee)),
            ExecutionMode::Parallel => {
                par_try_max_by_key(&selected, |employee| key(*employee)).copied()
            }
        };
        result.map_err(|err| err.for_input("employees"))
    }

    pub fn employee_with_longest_single_position(&self) -> Result<&'a Employee> {
        self.max_employee_by_key(extract::longest_single_position)
    }

    pub fn total_salary(&self, policy: &SalaryPolicy) -> Result<f64> {
        let selected = self.employees();
        match self.mode {
            ExecutionMode::Sequential => payroll::total_salary(selected, policy),
            ExecutionMode::Parallel => payroll::par_total_salary(&selected, policy),
        }
    }
}
