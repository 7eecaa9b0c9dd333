use serde::{Deserialize, Serialize};

use super::Person;

/// One position held by an employee
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobHistoryEntry {
    /// Years spent in the position
    duration: u32,
    position: String,
    employer: String,
}

impl JobHistoryEntry {
    pub fn new(duration: u32, position: impl Into<String>, employer: impl Into<String>) -> Self {
        Self {
            duration,
            position: position.into(),
            employer: employer.into(),
        }
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn position(&self) -> &str {
        &self.position
    }

    pub fn employer(&self) -> &str {
        &self.employer
    }
}

/// A person together with their job history.
///
/// History is in chronological order; the last entry is the current position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    person: Person,
    job_history: Vec<JobHistoryEntry>,
}

impl Employee {
    pub fn new(person: Person, job_history: Vec<JobHistoryEntry>) -> Self {
        Self {
            person,
            job_history,
        }
    }

    pub fn person(&self) -> &Person {
        &self.person
    }

    pub fn job_history(&self) -> &[JobHistoryEntry] {
        &self.job_history
    }

    /// The most recent entry by position in the history, if any
    pub fn current_position(&self) -> Option<&JobHistoryEntry> {
        self.job_history.last()
    }
}
