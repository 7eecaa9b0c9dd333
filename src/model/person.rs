use serde::{Deserialize, Serialize};

/// Separator placed between first and last name in a full name
pub const FULL_NAME_SEPARATOR: char = ' ';

/// A person with a first name, a last name and an age in years
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    first_name: String,
    last_name: String,
    age: u32,
}

impl Person {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>, age: u32) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            age,
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    /// "first last", joined by [`FULL_NAME_SEPARATOR`]
    pub fn full_name(&self) -> String {
        format!(
            "{}{}{}",
            self.first_name, FULL_NAME_SEPARATOR, self.last_name
        )
    }

    /// Split a full name back into (first, last) at the first separator.
    ///
    /// Returns `None` when the separator is missing.
    pub fn split_full_name(full_name: &str) -> Option<(&str, &str)> {
        full_name.split_once(FULL_NAME_SEPARATOR)
    }
}
