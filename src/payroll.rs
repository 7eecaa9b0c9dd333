//! Salary totals weighted by tenure in the current position
//!
//! Each employee earns the base rate, raised by the bonus multiplier when they
//! have held their current (last) position for more than the threshold.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::aggregate::{par_try_sum, try_sum};
use crate::error::{Result, RosterError};
use crate::extract;
use crate::model::Employee;

pub const DEFAULT_BASE_RATE: f64 = 75_000.0;
pub const DEFAULT_BONUS_MULTIPLIER: f64 = 1.2;
pub const DEFAULT_TENURE_THRESHOLD: u32 = 3;

/// Rates applied when totalling salaries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryPolicy {
    /// Salary of an employee without the tenure bonus
    #[serde(default = "default_base_rate")]
    pub base_rate: f64,

    /// Factor applied to the base rate once tenure exceeds the threshold
    #[serde(default = "default_bonus_multiplier")]
    pub bonus_multiplier: f64,

    /// Years in the current position that must be exceeded (strictly)
    #[serde(default = "default_tenure_threshold")]
    pub tenure_threshold: u32,
}

fn default_base_rate() -> f64 {
    DEFAULT_BASE_RATE
}

fn default_bonus_multiplier() -> f64 {
    DEFAULT_BONUS_MULTIPLIER
}

fn default_tenure_threshold() -> u32 {
    DEFAULT_TENURE_THRESHOLD
}

impl Default for SalaryPolicy {
    fn default() -> Self {
        Self {
            base_rate: DEFAULT_BASE_RATE,
            bonus_multiplier: DEFAULT_BONUS_MULTIPLIER,
            tenure_threshold: DEFAULT_TENURE_THRESHOLD,
        }
    }
}

impl SalaryPolicy {
    pub fn with_base_rate(mut self, base_rate: f64) -> Self {
        self.base_rate = base_rate;
        self
    }

    /// Multiplier for a given tenure: the bonus above the threshold, 1.0 otherwise
    pub fn multiplier_for(&self, tenure: u32) -> f64 {
        if tenure > self.tenure_threshold {
            self.bonus_multiplier
        } else {
            1.0
        }
    }

    /// Salary for a given tenure
    pub fn rate_for(&self, tenure: u32) -> f64 {
        self.base_rate * self.multiplier_for(tenure)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.base_rate.is_finite() || self.base_rate < 0.0 {
            return Err(RosterError::Config(format!(
                "salary.base_rate must be a finite non-negative number, got {}",
                self.base_rate
            )));
        }
        if !self.bonus_multiplier.is_finite() || self.bonus_multiplier < 1.0 {
            return Err(RosterError::Config(format!(
                "salary.bonus_multiplier must be a finite number >= 1.0, got {}",
                self.bonus_multiplier
            )));
        }
        Ok(())
    }
}

/// Salary of one employee, from the duration of their last position
pub fn employee_salary(employee: &Employee, policy: &SalaryPolicy) -> Result<f64> {
    let tenure = extract::current_tenure(employee)?;
    let salary = policy.rate_for(tenure);
    trace!(
        "{} has tenure {} -> salary {}",
        employee.person().full_name(),
        tenure,
        salary
    );
    Ok(salary)
}

/// Total salary across employees.
///
/// An employee with no job history aborts the total. An empty roster has no
/// total either.
pub fn total_salary<'a, I>(employees: I, policy: &SalaryPolicy) -> Result<f64>
where
    I: IntoIterator<Item = &'a Employee>,
{
    let total = try_sum(employees, |employee| employee_salary(employee, policy))
        .map_err(|err| err.for_input("employees"))?;
    debug!("Total weighted salary: {}", total);
    Ok(total)
}

/// Parallel [`total_salary`] over a slice of employee references
pub fn par_total_salary(employees: &[&Employee], policy: &SalaryPolicy) -> Result<f64> {
    let total = par_try_sum(employees, |employee| employee_salary(employee, policy))
        .map_err(|err| err.for_input("employees"))?;
    debug!("Total weighted salary (parallel): {}", total);
    Ok(total)
}
