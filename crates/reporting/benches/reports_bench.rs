use std::hint::black_box;

use chrono::{Days, NaiveDate};
use criterion::{Criterion, criterion_group, criterion_main};
use uuid::Uuid;

use reporting::{Ledger, ListFilter, ReportQuery, TransactionKind, TransactionRecord};

const BENCH_RECORD_COUNT: usize = 1_000;

const DESCRIPTIONS: [&str; 10] = [
    "Salary",
    "Groceries",
    "Transport",
    "Rent",
    "Coffee",
    "Utilities",
    "Internet",
    "Snacks",
    "Bonus",
    "Medicine",
];

fn build_records(count: usize) -> Vec<TransactionRecord> {
    let base = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
    (0..count)
        .map(|i| {
            let day = base + Days::new((i % 700) as u64);
            let kind = if i % 3 == 0 {
                TransactionKind::Income
            } else {
                TransactionKind::Expense
            };
            TransactionRecord {
                id: Uuid::new_v4(),
                description: DESCRIPTIONS[i % DESCRIPTIONS.len()].to_string(),
                kind,
                amount_minor: 1_000 + (i % 100) as i64 * 37,
                date: day.to_string(),
                created_at: None,
            }
        })
        .collect()
}

fn bench_dashboard(c: &mut Criterion) {
    let ledger = Ledger::new(build_records(BENCH_RECORD_COUNT));
    let query = ReportQuery::new(NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());

    c.bench_function("dashboard_1k", |b| {
        b.iter(|| black_box(ledger.dashboard(black_box(&query)).unwrap()));
    });
}

fn bench_running_balance(c: &mut Criterion) {
    let ledger = Ledger::new(build_records(BENCH_RECORD_COUNT));

    c.bench_function("running_balance_1k", |b| {
        b.iter(|| black_box(ledger.with_running_balance()));
    });
}

fn bench_filtered_listing(c: &mut Criterion) {
    let ledger = Ledger::new(build_records(BENCH_RECORD_COUNT));
    let filter = ListFilter {
        search: Some("sala".to_string()),
        kind: Some(TransactionKind::Income),
        ..ListFilter::default()
    };

    c.bench_function("filtered_listing_1k", |b| {
        b.iter(|| black_box(ledger.filtered(black_box(&filter))));
    });
}

criterion_group!(
    benches,
    bench_dashboard,
    bench_running_balance,
    bench_filtered_listing
);
criterion_main!(benches);
