use api_types::stats::Totals;
use api_types::transaction::{TransactionKind, TransactionRecord, TransactionView};

use crate::money::Money;
use crate::transactions::{RecordExt, to_view};

use super::Ledger;

impl Ledger {
    /// Returns a chronologically ascending copy of the snapshot.
    ///
    /// Sorts by `date` ascending with ties broken by `created_at` ascending;
    /// a missing `created_at` counts as earliest. Records whose date does
    /// not parse order before all dated records.
    pub fn chronological(&self) -> Vec<TransactionRecord> {
        let mut ordered = self.records.to_vec();
        ordered.sort_by_key(|record| (record.day(), record.created_at));
        ordered
    }

    /// Attaches the running balance to every record, chronologically
    /// ascending.
    ///
    /// The balance accumulates the signed amount (`+` income, `-` expense)
    /// over the whole snapshot; its final value equals [`Ledger::totals`]'
    /// balance.
    pub fn with_running_balance(&self) -> Vec<TransactionView> {
        let mut balance = Money::ZERO;
        self.chronological()
            .into_iter()
            .map(|record| {
                balance += Money::new(record.signed_minor());
                to_view(record, balance)
            })
            .collect()
    }

    /// The listing as presented to the user: most recent first, running
    /// balances attached.
    pub fn display_listing(&self) -> Vec<TransactionView> {
        let mut views = self.with_running_balance();
        views.reverse();
        views
    }

    /// Income, expense and balance over the full (unfiltered) snapshot.
    ///
    /// Single pass; tolerant of undated records, which count here even
    /// though they drop out of the date-keyed series.
    pub fn totals(&self) -> Totals {
        let (income, expenses) =
            self.records
                .iter()
                .fold((Money::ZERO, Money::ZERO), |acc, record| {
                    match record.kind {
                        TransactionKind::Income => (acc.0 + Money::new(record.amount_minor), acc.1),
                        TransactionKind::Expense => {
                            (acc.0, acc.1 + Money::new(record.amount_minor))
                        }
                    }
                });

        Totals {
            total_income_minor: income.minor(),
            total_expenses_minor: expenses.minor(),
            balance_minor: (income - expenses).minor(),
        }
    }
}
