//! Built-in sample roster
//!
//! Six employees in construction order. Their ages average to 33.67, the
//! longest full name is "Александр Дементьев", and "Игорь Толмачёв" holds both
//! the longest single position (6 years) and the only current tenure over
//! three years.

use crate::model::{Employee, JobHistoryEntry, Person};

pub fn sample_employees() -> Vec<Employee> {
    vec![
        Employee::new(
            Person::new("Иван", "Мельников", 30),
            vec![
                JobHistoryEntry::new(2, "dev", "EPAM"),
                JobHistoryEntry::new(1, "dev", "google"),
            ],
        ),
        Employee::new(
            Person::new("Александр", "Дементьев", 28),
            vec![
                JobHistoryEntry::new(1, "tester", "EPAM"),
                JobHistoryEntry::new(1, "dev", "EPAM"),
                JobHistoryEntry::new(1, "dev", "google"),
            ],
        ),
        Employee::new(
            Person::new("Дмитрий", "Осинов", 40),
            vec![
                JobHistoryEntry::new(3, "QA", "yandex"),
                JobHistoryEntry::new(1, "QA", "mail.ru"),
                JobHistoryEntry::new(1, "dev", "mail.ru"),
            ],
        ),
        Employee::new(
            Person::new("Анна", "Светличная", 21),
            vec![JobHistoryEntry::new(1, "tester", "T-Systems")],
        ),
        Employee::new(
            Person::new("Игорь", "Толмачёв", 50),
            vec![
                JobHistoryEntry::new(5, "tester", "EPAM"),
                JobHistoryEntry::new(6, "QA", "EPAM"),
            ],
        ),
        Employee::new(
            Person::new("Иван", "Александров", 33),
            vec![
                JobHistoryEntry::new(2, "QA", "T-Systems"),
                JobHistoryEntry::new(3, "QA", "EPAM"),
                JobHistoryEntry::new(1, "dev", "EPAM"),
            ],
        ),
    ]
}
