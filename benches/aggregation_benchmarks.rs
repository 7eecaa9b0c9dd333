//! Performance benchmarks for roster reductions
//! Compares sequential and rayon-backed execution of the pipeline queries

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use roster::model::Employee;
use roster::payroll::SalaryPolicy;
use roster::pipeline::{EmployeePipeline, ExecutionMode};
use roster::testing::EmployeeBuilder;
use std::hint::black_box;

fn roster_of(size: usize) -> Vec<Employee> {
    (0..size)
        .map(|i| {
            EmployeeBuilder::new()
                .named("Иван", &"Мельников".repeat(1 + i % 4))
                .aged(20 + (i % 45) as u32)
                .with_durations(&[(i % 3) as u32, (i % 7) as u32])
                .build()
        })
        .collect()
}

/// Benchmark average age
fn bench_average_age(c: &mut Criterion) {
    let mut group = c.benchmark_group("average_age");

    for size in [10, 1000, 100_000] {
        let employees = roster_of(size);
        for mode in [ExecutionMode::Sequential, ExecutionMode::Parallel] {
            group.bench_with_input(
                BenchmarkId::new(format!("{mode:?}"), size),
                &employees,
                |b, employees| {
                    b.iter(|| {
                        black_box(
                            EmployeePipeline::new(employees)
                                .with_mode(mode)
                                .average_age(),
                        )
                    });
                },
            );
        }
    }

    group.finish();
}

/// Benchmark longest full name selection
fn bench_longest_full_name(c: &mut Criterion) {
    let mut group = c.benchmark_group("longest_full_name");

    for size in [10, 1000, 100_000] {
        let employees = roster_of(size);
        for mode in [ExecutionMode::Sequential, ExecutionMode::Parallel] {
            group.bench_with_input(
                BenchmarkId::new(format!("{mode:?}"), size),
                &employees,
                |b, employees| {
                    b.iter(|| {
                        black_box(
                            EmployeePipeline::new(employees)
                                .with_mode(mode)
                                .person_with_longest_full_name()
                                .is_ok(),
                        )
                    });
                },
            );
        }
    }

    group.finish();
}

/// Benchmark weighted salary totals
fn bench_total_salary(c: &mut Criterion) {
    let mut group = c.benchmark_group("total_salary");
    let policy = SalaryPolicy::default();

    for size in [10, 1000, 100_000] {
        let employees = roster_of(size);
        for mode in [ExecutionMode::Sequential, ExecutionMode::Parallel] {
            group.bench_with_input(
                BenchmarkId::new(format!("{mode:?}"), size),
                &employees,
                |b, employees| {
                    b.iter(|| {
                        black_box(
                            EmployeePipeline::new(employees)
                                .with_mode(mode)
                                .total_salary(&policy),
                        )
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_average_age,
    bench_longest_full_name,
    bench_total_salary,
);

criterion_main!(benches);
