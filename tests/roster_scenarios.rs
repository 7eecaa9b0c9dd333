//! End-to-end queries over the sample roster

use roster::aggregate::{average, max_by, max_by_key};
use roster::dataset::sample_employees;
use roster::extract;
use roster::model::{Employee, Person};
use roster::payroll::{employee_salary, total_salary, SalaryPolicy};
use roster::pipeline::{EmployeePipeline, ExecutionMode};
use roster::testing::EmployeeBuilder;
use roster::RosterError;

#[test]
fn test_average_age_of_employees() {
    let employees = sample_employees();

    let avg = average(
        employees
            .iter()
            .map(extract::person)
            .map(extract::age)
            .map(f64::from),
    )
    .unwrap();

    assert!((avg - 33.66).abs() < 0.1);
}

#[test]
fn test_find_person_with_longest_full_name() {
    let employees = sample_employees();

    let person = max_by(
        employees.iter().map(extract::person),
        |a, b| extract::compare_by_full_name_length(a, b),
    )
    .unwrap();

    assert_eq!(person, employees[1].person());
    assert_eq!(person.full_name().chars().count(), 19);
}

#[test]
fn test_find_employee_with_maximum_duration_at_one_position() {
    let employees = sample_employees();

    let employee = employees
        .iter()
        .map(|e| extract::longest_single_position(e).map(|years| (years, e)))
        .collect::<Result<Vec<_>, _>>()
        .and_then(|keyed| max_by_key(keyed, |(years, _)| *years))
        .map(|(_, e)| e)
        .unwrap();

    assert_eq!(employee, &employees[4]);
}

#[test]
fn test_total_salary_with_tenure_coefficient() {
    let employees = sample_employees();
    let policy = SalaryPolicy::default();

    let total = total_salary(&employees, &policy).unwrap();
    assert!((total - 465_000.0).abs() < 0.001);

    let contributions: Vec<f64> = employees
        .iter()
        .map(|e| employee_salary(e, &policy).unwrap())
        .collect();
    assert_eq!(
        contributions
            .iter()
            .filter(|c| (**c - 75_000.0).abs() < 1e-6)
            .count(),
        5
    );
    assert!((contributions[4] - 90_000.0).abs() < 1e-6);
}

#[test]
fn test_empty_roster_is_not_zero() {
    let employees: Vec<Employee> = Vec::new();
    let pipeline = EmployeePipeline::new(&employees);

    for err in [
        pipeline.average_age().unwrap_err(),
        pipeline.person_with_longest_full_name().unwrap_err(),
        pipeline.employee_with_longest_single_position().unwrap_err(),
        pipeline.total_salary(&SalaryPolicy::default()).unwrap_err(),
    ] {
        assert!(matches!(err, RosterError::EmptySequence("employees")));
    }
}

#[test]
fn test_employee_without_history_aborts_salary_total() {
    let mut employees = sample_employees();
    employees.insert(2, EmployeeBuilder::new().named("Илья", "Жирков").aged(22).build());

    for mode in [ExecutionMode::Sequential, ExecutionMode::Parallel] {
        let err = EmployeePipeline::new(&employees)
            .with_mode(mode)
            .total_salary(&SalaryPolicy::default())
            .unwrap_err();
        assert!(matches!(err, RosterError::EmptySequence("job history")));
    }
}

#[test]
fn test_age_of_person_with_greater_full_name() {
    let ivan = Person::new("Иван", "Мельников", 33);
    let ilya = Person::new("Илья", "Жирков", 22);

    let by_name = extract::age_of_greater_by(extract::full_name);
    assert_eq!(by_name(&ivan, &ilya), 22);

    let by_length = extract::age_of_longest_by(extract::full_name);
    assert_eq!(by_length(&ivan, &ilya), 33);
}

#[test]
fn test_same_age_checker() {
    let ivan = Person::new("Иван", "Мельников", 33);
    let dmitry = Person::new("Дмитрий", "Гущин", 33);
    let ilya = Person::new("Илья", "Жирков", 22);

    let same_age: fn(&Person, &Person) -> bool = extract::same_age;
    assert!(same_age(&ivan, &dmitry));
    assert!(!same_age(&ivan, &ilya));
    assert!(!same_age(&dmitry, &ilya));
}
