//! Summary of the canonical roster queries

use serde::Serialize;
use std::fmt;
use tracing::info;

use crate::config::RosterConfig;
use crate::error::Result;
use crate::extract;
use crate::model::{Employee, Person};
use crate::pipeline::EmployeePipeline;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterReport {
    pub employee_count: usize,
    pub average_age: f64,
    pub longest_full_name: Person,
    pub longest_single_position: LongestPosition,
    pub total_salary: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LongestPosition {
    pub person: Person,
    pub years: u32,
}

impl RosterReport {
    /// Run every query over `employees`. The first failing query fails the report.
    pub fn compute(employees: &[Employee], config: &RosterConfig) -> Result<Self> {
        let pipeline = EmployeePipeline::new(employees).with_mode(config.execution);

        let average_age = pipeline.average_age()?;
        let longest_full_name = pipeline.person_with_longest_full_name()?.clone();
        let veteran = pipeline.employee_with_longest_single_position()?;
        let total_salary = pipeline.total_salary(&config.salary)?;

        let report = Self {
            employee_count: employees.len(),
            average_age,
            longest_full_name,
            longest_single_position: LongestPosition {
                person: veteran.person().clone(),
                years: extract::longest_single_position(veteran)?,
            },
            total_salary,
        };
        info!("Computed report for {} employees", report.employee_count);
        Ok(report)
    }
}

impl fmt::Display for RosterReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Employees:               {}", self.employee_count)?;
        writeln!(f, "Average age:             {:.2}", self.average_age)?;
        writeln!(
            f,
            "Longest full name:       {} ({})",
            self.longest_full_name.full_name(),
            self.longest_full_name.age()
        )?;
        writeln!(
            f,
            "Longest single position: {} ({} years)",
            self.longest_single_position.person.full_name(),
            self.longest_single_position.years
        )?;
        write!(f, "Total salary:            {:.2}", self.total_salary)
    }
}
