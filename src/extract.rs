//! Pure field extractors and comparators over roster records
//!
//! These are plain functions so they can be passed wherever a closure is
//! expected (`people.map(extract::age)`, `max_by(people, compare_by_full_name_length)`).

use std::cmp::Ordering;

use crate::error::{Result, RosterError};
use crate::model::{Employee, Person};

pub fn age(person: &Person) -> u32 {
    person.age()
}

pub fn full_name(person: &Person) -> String {
    person.full_name()
}

pub fn person(employee: &Employee) -> &Person {
    employee.person()
}

pub fn same_age(left: &Person, right: &Person) -> bool {
    left.age() == right.age()
}

/// Order two people by the character count of their full names
pub fn compare_by_full_name_length(left: &Person, right: &Person) -> Ordering {
    full_name_length(left).cmp(&full_name_length(right))
}

fn full_name_length(person: &Person) -> usize {
    person.full_name().chars().count()
}

/// Build a function returning the age of whichever person's extracted string
/// is lexicographically greater or equal. Ties go to the first argument.
pub fn age_of_greater_by<F>(extractor: F) -> impl Fn(&Person, &Person) -> u32
where
    F: Fn(&Person) -> String,
{
    move |left: &Person, right: &Person| {
        if extractor(left) >= extractor(right) {
            left.age()
        } else {
            right.age()
        }
    }
}

/// Build a function returning the age of whichever person's extracted string
/// has more characters. Ties go to the first argument.
pub fn age_of_longest_by<F>(extractor: F) -> impl Fn(&Person, &Person) -> u32
where
    F: Fn(&Person) -> String,
{
    move |left: &Person, right: &Person| {
        if extractor(left).chars().count() >= extractor(right).chars().count() {
            left.age()
        } else {
            right.age()
        }
    }
}

/// Duration of the current (last) position
pub fn current_tenure(employee: &Employee) -> Result<u32> {
    employee
        .current_position()
        .map(|entry| entry.duration())
        .ok_or(RosterError::EmptySequence("job history"))
}

/// Longest time spent in any single position
pub fn longest_single_position(employee: &Employee) -> Result<u32> {
    employee
        .job_history()
        .iter()
        .map(|entry| entry.duration())
        .max()
        .ok_or(RosterError::EmptySequence("job history"))
}
