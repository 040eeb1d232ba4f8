use std::collections::{BTreeMap, HashMap};

use api_types::stats::{CategoryTotal, DayExpense, Insights, MonthlyCount};
use api_types::transaction::TransactionKind;
use chrono::{Datelike, NaiveDate};

use crate::calendar::{month_key, previous_month};
use crate::money::Money;
use crate::transactions::RecordExt;

use super::Ledger;
use super::categories::OTHER_CATEGORY;

/// Trailing month buckets kept in `transactions_by_month`.
const TRAILING_MONTHS: usize = 6;

impl Ledger {
    /// Month-over-month expense comparison plus headline extremes, relative
    /// to `reference_date`.
    pub fn insights(&self, reference_date: NaiveDate) -> Insights {
        let current = (reference_date.year(), reference_date.month());
        let previous = previous_month(reference_date);

        let mut current_expenses = Money::ZERO;
        let mut previous_expenses = Money::ZERO;
        // Insertion-ordered grouping so ties resolve to the group seen first.
        let mut category_order: Vec<String> = Vec::new();
        let mut category_totals: HashMap<String, Money> = HashMap::new();
        let mut day_order: Vec<NaiveDate> = Vec::new();
        let mut day_totals: HashMap<NaiveDate, Money> = HashMap::new();
        let mut counts: BTreeMap<String, u64> = BTreeMap::new();

        for record in &self.records {
            let Some(day) = record.day() else {
                continue;
            };
            *counts.entry(month_key(day)).or_insert(0) += 1;

            if record.kind != TransactionKind::Expense {
                continue;
            }
            let amount = Money::new(record.amount_minor);

            if (day.year(), day.month()) == current {
                current_expenses += amount;
                let name = if record.description.is_empty() {
                    OTHER_CATEGORY.to_string()
                } else {
                    record.description.clone()
                };
                if !category_totals.contains_key(&name) {
                    category_order.push(name.clone());
                }
                *category_totals.entry(name).or_default() += amount;
            } else if (day.year(), day.month()) == previous {
                previous_expenses += amount;
            }

            if !day_totals.contains_key(&day) {
                day_order.push(day);
            }
            *day_totals.entry(day).or_default() += amount;
        }

        let expense_change_percent = if previous_expenses.is_positive() {
            let current = current_expenses.minor() as f64;
            let previous = previous_expenses.minor() as f64;
            ((current - previous) / previous * 1000.0).round() / 10.0
        } else if current_expenses.is_positive() {
            100.0
        } else {
            0.0
        };

        let top_category = stable_max(&category_order, &category_totals).map(|(name, total)| {
            CategoryTotal {
                name: name.clone(),
                total_minor: total.minor(),
            }
        });

        let top_day = stable_max(&day_order, &day_totals).map(|(day, total)| DayExpense {
            date: *day,
            total_minor: total.minor(),
        });

        let skip = counts.len().saturating_sub(TRAILING_MONTHS);
        let transactions_by_month = counts
            .into_iter()
            .skip(skip)
            .map(|(month, count)| MonthlyCount { month, count })
            .collect();

        Insights {
            current_month_expenses_minor: current_expenses.minor(),
            previous_month_expenses_minor: previous_expenses.minor(),
            expense_change_percent,
            top_category,
            top_day,
            transactions_by_month,
        }
    }
}

/// Largest-total group in first-encountered order; the first strictly
/// greater total wins, so ties go to the earlier group.
fn stable_max<'a, K>(order: &'a [K], totals: &'a HashMap<K, Money>) -> Option<(&'a K, Money)>
where
    K: std::hash::Hash + Eq,
{
    let mut best: Option<(&K, Money)> = None;
    for key in order {
        let total = totals.get(key).copied().unwrap_or(Money::ZERO);
        match best {
            Some((_, current_best)) if total <= current_best => {}
            _ => best = Some((key, total)),
        }
    }
    best
}
