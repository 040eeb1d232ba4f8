//! Cross-user aggregation for the admin dashboard.
//!
//! Account management itself lives with the store; these operations only
//! fold the admin wire listings into overview numbers.

use std::collections::HashMap;

use api_types::admin::{AdminStats, KindBreakdown, UserGroup, UserProfile};
use api_types::stats::Totals;
use api_types::transaction::{OwnedRecord, TransactionKind};
use uuid::Uuid;

use crate::money::Money;

/// Fleet-wide statistics over the admin listings.
///
/// `users` is the full account list, so accounts without transactions still
/// count toward `total_users`.
pub fn overview(users: &[UserProfile], records: &[OwnedRecord]) -> AdminStats {
    let mut income = Money::ZERO;
    let mut expenses = Money::ZERO;
    let mut income_count = 0u64;
    let mut expense_count = 0u64;

    for record in records {
        let amount = Money::new(record.amount_minor);
        match record.kind {
            TransactionKind::Income => {
                income += amount;
                income_count += 1;
            }
            TransactionKind::Expense => {
                expenses += amount;
                expense_count += 1;
            }
        }
    }

    let mut by_kind = Vec::new();
    if income_count > 0 {
        by_kind.push(KindBreakdown {
            kind: TransactionKind::Income,
            count: income_count,
            total_minor: income.minor(),
        });
    }
    if expense_count > 0 {
        by_kind.push(KindBreakdown {
            kind: TransactionKind::Expense,
            count: expense_count,
            total_minor: expenses.minor(),
        });
    }

    AdminStats {
        total_users: users.len() as u64,
        total_transactions: records.len() as u64,
        totals: Totals {
            total_income_minor: income.minor(),
            total_expenses_minor: expenses.minor(),
            balance_minor: (income - expenses).minor(),
        },
        by_kind,
    }
}

/// Partitions the admin listing per owner, most active users first.
///
/// Groups keep first-encountered order on equal transaction counts.
pub fn group_by_user(records: &[OwnedRecord]) -> Vec<UserGroup> {
    let mut order: Vec<Uuid> = Vec::new();
    let mut groups: HashMap<Uuid, UserGroup> = HashMap::new();

    for record in records {
        let group = groups.entry(record.user_id).or_insert_with(|| {
            order.push(record.user_id);
            UserGroup {
                user_id: record.user_id,
                user_name: record.user_name.clone(),
                user_email: record.user_email.clone(),
                transaction_count: 0,
                total_income_minor: 0,
                total_expenses_minor: 0,
                balance_minor: 0,
            }
        });
        group.transaction_count += 1;
        match record.kind {
            TransactionKind::Income => group.total_income_minor += record.amount_minor,
            TransactionKind::Expense => group.total_expenses_minor += record.amount_minor,
        }
    }

    let mut out: Vec<UserGroup> = order
        .into_iter()
        .filter_map(|user_id| groups.remove(&user_id))
        .map(|mut group| {
            group.balance_minor = group.total_income_minor - group.total_expenses_minor;
            group
        })
        .collect();
    out.sort_by(|a, b| b.transaction_count.cmp(&a.transaction_count));
    out
}
