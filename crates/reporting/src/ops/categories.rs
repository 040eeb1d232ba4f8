use std::collections::HashMap;

use api_types::stats::CategoryTotal;
use api_types::transaction::TransactionKind;

use crate::money::Money;

use super::Ledger;

/// Grouping label for expenses without a description.
pub const OTHER_CATEGORY: &str = "Other";

/// Default number of expense groups the dashboard keeps.
pub const DEFAULT_CATEGORY_LIMIT: usize = 10;

impl Ledger {
    /// Ranks expense groups by total, largest first, truncated to `limit`.
    ///
    /// The description doubles as the category key. Ties keep the order in
    /// which groups were first encountered.
    pub fn expense_categories(&self, limit: usize) -> Vec<CategoryTotal> {
        let mut order: Vec<String> = Vec::new();
        let mut totals: HashMap<String, Money> = HashMap::new();

        for record in &self.records {
            if record.kind != TransactionKind::Expense {
                continue;
            }
            let name = if record.description.is_empty() {
                OTHER_CATEGORY.to_string()
            } else {
                record.description.clone()
            };
            if !totals.contains_key(&name) {
                order.push(name.clone());
            }
            *totals.entry(name).or_default() += Money::new(record.amount_minor);
        }

        let mut groups: Vec<CategoryTotal> = order
            .into_iter()
            .map(|name| {
                let total = totals[&name];
                CategoryTotal {
                    name,
                    total_minor: total.minor(),
                }
            })
            .collect();
        groups.sort_by(|a, b| b.total_minor.cmp(&a.total_minor));
        groups.truncate(limit);
        groups
    }
}
