//! Test data builders for roster scenarios

use crate::model::{Employee, JobHistoryEntry, Person};

/// Builder for creating test employees
pub struct EmployeeBuilder {
    first_name: String,
    last_name: String,
    age: u32,
    job_history: Vec<JobHistoryEntry>,
}

impl Default for EmployeeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EmployeeBuilder {
    pub fn new() -> Self {
        Self {
            first_name: "Иван".to_string(),
            last_name: "Мельников".to_string(),
            age: 30,
            job_history: Vec::new(),
        }
    }

    pub fn named(mut self, first_name: &str, last_name: &str) -> Self {
        self.first_name = first_name.to_string();
        self.last_name = last_name.to_string();
        self
    }

    pub fn aged(mut self, age: u32) -> Self {
        self.age = age;
        self
    }

    /// Append a position; later calls are more recent
    pub fn with_position(mut self, duration: u32, position: &str, employer: &str) -> Self {
        self.job_history
            .push(JobHistoryEntry::new(duration, position, employer));
        self
    }

    /// Append one "dev" position per duration, oldest first
    pub fn with_durations(self, durations: &[u32]) -> Self {
        durations
            .iter()
            .fold(self, |builder, d| builder.with_position(*d, "dev", "EPAM"))
    }

    pub fn build(self) -> Employee {
        Employee::new(
            Person::new(self.first_name, self.last_name, self.age),
            self.job_history,
        )
    }
}
