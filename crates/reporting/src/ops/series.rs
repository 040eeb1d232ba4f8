use std::collections::BTreeMap;

use api_types::stats::{BalancePoint, MonthlyFlow};
use api_types::transaction::TransactionKind;
use chrono::NaiveDate;

use crate::calendar::{day_key, month_key};
use crate::money::Money;
use crate::transactions::RecordExt;

use super::Ledger;

impl Ledger {
    /// Running balance sampled once per calendar day, ascending.
    ///
    /// Each point carries the balance as of the last transaction of that
    /// day; days without transactions produce no point.
    pub fn daily_balance(&self) -> Vec<BalancePoint> {
        self.balance_series(day_key)
    }

    /// Running balance sampled once per `YYYY-MM` bucket, ascending.
    pub fn monthly_balance(&self) -> Vec<BalancePoint> {
        self.balance_series(month_key)
    }

    fn balance_series(&self, key: impl Fn(NaiveDate) -> String) -> Vec<BalancePoint> {
        let mut points: Vec<BalancePoint> = Vec::new();
        let mut balance = Money::ZERO;

        // Date-keyed walk: undated records are skipped entirely, so the
        // series balance can diverge from `totals` on dirty data.
        for record in self.chronological() {
            let Some(day) = record.day() else {
                continue;
            };
            balance += Money::new(record.signed_minor());
            let period = key(day);
            match points.last_mut() {
                Some(last) if last.period == period => last.balance_minor = balance.minor(),
                _ => points.push(BalancePoint {
                    period,
                    balance_minor: balance.minor(),
                }),
            }
        }

        points
    }

    /// Income and expense sums grouped by `YYYY-MM`, ascending.
    pub fn monthly_flow(&self) -> Vec<MonthlyFlow> {
        let mut buckets: BTreeMap<String, (Money, Money)> = BTreeMap::new();

        for record in &self.records {
            let Some(day) = record.day() else {
                continue;
            };
            let bucket = buckets.entry(month_key(day)).or_default();
            match record.kind {
                TransactionKind::Income => bucket.0 += Money::new(record.amount_minor),
                TransactionKind::Expense => bucket.1 += Money::new(record.amount_minor),
            }
        }

        buckets
            .into_iter()
            .map(|(month, (income, expense))| MonthlyFlow {
                month,
                income_minor: income.minor(),
                expense_minor: expense.minor(),
            })
            .collect()
    }
}
