use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod transaction {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum TransactionKind {
        Income,
        Expense,
    }

    impl TransactionKind {
        pub fn as_str(self) -> &'static str {
            match self {
                Self::Income => "income",
                Self::Expense => "expense",
            }
        }
    }

    /// A transaction as exported by the store's list endpoint.
    ///
    /// The decode is deliberately forgiving: `amount_minor` coerces numeric
    /// strings and floats (truncating) and falls back to `0` for anything
    /// non-numeric, and `date` stays a raw string so one bad record cannot
    /// poison a whole snapshot. Legacy field names (`amount`, `createdAt`)
    /// are accepted as aliases.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct TransactionRecord {
        pub id: Uuid,
        #[serde(default)]
        pub description: String,
        #[serde(rename = "type")]
        pub kind: TransactionKind,
        /// Amount in the smallest currency unit, non-negative by contract.
        #[serde(default, alias = "amount", deserialize_with = "lenient_minor")]
        pub amount_minor: i64,
        /// Calendar date, normally `YYYY-MM-DD`.
        #[serde(default)]
        pub date: String,
        /// Creation timestamp, tie-breaker for same-date ordering.
        #[serde(default, alias = "createdAt")]
        pub created_at: Option<DateTime<Utc>>,
    }

    /// A transaction joined with its owner, as returned by the store's
    /// admin listing.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct OwnedRecord {
        pub id: Uuid,
        pub user_id: Uuid,
        pub user_name: String,
        pub user_email: String,
        #[serde(default)]
        pub description: String,
        #[serde(rename = "type")]
        pub kind: TransactionKind,
        #[serde(default, alias = "amount", deserialize_with = "lenient_minor")]
        pub amount_minor: i64,
        #[serde(default)]
        pub date: String,
        #[serde(default, alias = "createdAt")]
        pub created_at: Option<DateTime<Utc>>,
    }

    /// A record with its running balance attached.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct TransactionView {
        pub id: Uuid,
        pub description: String,
        #[serde(rename = "type")]
        pub kind: TransactionKind,
        pub amount_minor: i64,
        pub date: String,
        pub created_at: Option<DateTime<Utc>>,
        /// Cumulative signed balance up to and including this record, in
        /// chronological order.
        pub running_balance_minor: i64,
    }

    fn lenient_minor<'de, D>(deserializer: D) -> Result<i64, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct MinorUnits;

        impl<'de> serde::de::Visitor<'de> for MinorUnits {
            type Value = i64;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("an amount in minor units")
            }

            fn visit_i64<E: serde::de::Error>(self, value: i64) -> Result<i64, E> {
                Ok(value)
            }

            fn visit_u64<E: serde::de::Error>(self, value: u64) -> Result<i64, E> {
                Ok(i64::try_from(value).unwrap_or(i64::MAX))
            }

            fn visit_f64<E: serde::de::Error>(self, value: f64) -> Result<i64, E> {
                if value.is_finite() {
                    Ok(value.trunc() as i64)
                } else {
                    Ok(0)
                }
            }

            fn visit_str<E: serde::de::Error>(self, value: &str) -> Result<i64, E> {
                let trimmed = value.trim();
                if let Ok(parsed) = trimmed.parse::<i64>() {
                    return Ok(parsed);
                }
                match trimmed.parse::<f64>() {
                    Ok(parsed) if parsed.is_finite() => Ok(parsed.trunc() as i64),
                    _ => Ok(0),
                }
            }

            fn visit_bool<E: serde::de::Error>(self, _value: bool) -> Result<i64, E> {
                Ok(0)
            }

            fn visit_unit<E: serde::de::Error>(self) -> Result<i64, E> {
                Ok(0)
            }

            fn visit_none<E: serde::de::Error>(self) -> Result<i64, E> {
                Ok(0)
            }

            fn visit_some<D2>(self, deserializer: D2) -> Result<i64, D2::Error>
            where
                D2: serde::Deserializer<'de>,
            {
                deserializer.deserialize_any(MinorUnits)
            }
        }

        deserializer.deserialize_any(MinorUnits)
    }
}

pub mod report {
    use super::*;
    use crate::stats::{BalancePoint, CategoryTotal, Insights, MonthlyFlow, Totals};
    use crate::transaction::{TransactionKind, TransactionView};
    use std::collections::BTreeMap;

    /// Sampling granularity for the balance chart.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum ChartGranularity {
        #[default]
        Daily,
        Monthly,
    }

    /// 1-indexed page request.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct PageRequest {
        #[serde(default = "default_page")]
        pub page: u32,
        #[serde(default = "default_page_size")]
        pub page_size: u32,
    }

    impl Default for PageRequest {
        fn default() -> Self {
            Self {
                page: default_page(),
                page_size: default_page_size(),
            }
        }
    }

    /// Display parameters for one report computation.
    ///
    /// Everything the presentation layer lets the user tweak arrives here
    /// explicitly; the engine holds no session state of its own.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct ReportQuery {
        #[serde(default)]
        pub search: Option<String>,
        #[serde(default)]
        pub date_from: Option<NaiveDate>,
        #[serde(default)]
        pub date_to: Option<NaiveDate>,
        #[serde(default)]
        pub kind: Option<TransactionKind>,
        #[serde(default)]
        pub page: Option<u32>,
        #[serde(default)]
        pub page_size: Option<u32>,
        #[serde(default)]
        pub granularity: ChartGranularity,
        /// "Today" for insights and the heatmap window, in the account's
        /// configured timezone. Resolved by the caller, not the engine.
        pub reference_date: NaiveDate,
    }

    impl ReportQuery {
        /// A query with no filters and default paging for a given "today".
        pub fn new(reference_date: NaiveDate) -> Self {
            Self {
                search: None,
                date_from: None,
                date_to: None,
                kind: None,
                page: None,
                page_size: None,
                granularity: ChartGranularity::default(),
                reference_date,
            }
        }
    }

    /// One page of the filtered listing, most recent first.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct PageView {
        pub items: Vec<TransactionView>,
        pub page: u32,
        pub page_size: u32,
        pub total_count: u64,
        pub total_pages: u32,
    }

    /// Every derived view, recomputed from one snapshot.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct Dashboard {
        pub totals: Totals,
        pub page: PageView,
        pub granularity: ChartGranularity,
        pub balance_series: Vec<BalancePoint>,
        pub monthly_flow: Vec<MonthlyFlow>,
        pub expense_categories: Vec<CategoryTotal>,
        pub insights: Insights,
        pub heatmap: BTreeMap<NaiveDate, u64>,
    }

    fn default_page() -> u32 {
        1
    }

    fn default_page_size() -> u32 {
        25
    }
}

pub mod stats {
    use super::*;

    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Totals {
        pub total_income_minor: i64,
        pub total_expenses_minor: i64,
        pub balance_minor: i64,
    }

    /// Running balance sampled once per period (day or `YYYY-MM`).
    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct BalancePoint {
        pub period: String,
        pub balance_minor: i64,
    }

    /// Income and expense sums for one `YYYY-MM` bucket.
    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct MonthlyFlow {
        pub month: String,
        pub income_minor: i64,
        pub expense_minor: i64,
    }

    /// An expense group keyed by description.
    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct CategoryTotal {
        pub name: String,
        pub total_minor: i64,
    }

    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct MonthlyCount {
        pub month: String,
        pub count: u64,
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct DayExpense {
        pub date: NaiveDate,
        pub total_minor: i64,
    }

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct Insights {
        pub current_month_expenses_minor: i64,
        pub previous_month_expenses_minor: i64,
        /// Month-over-month expense change, rounded to one decimal.
        pub expense_change_percent: f64,
        pub top_category: Option<CategoryTotal>,
        pub top_day: Option<DayExpense>,
        /// Transaction counts for the trailing six month buckets, ascending.
        pub transactions_by_month: Vec<MonthlyCount>,
    }
}

pub mod admin {
    use super::*;
    use crate::stats::Totals;
    use crate::transaction::TransactionKind;

    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum Role {
        #[default]
        User,
        Admin,
    }

    impl Role {
        pub fn as_str(self) -> &'static str {
            match self {
                Self::User => "user",
                Self::Admin => "admin",
            }
        }
    }

    /// An account as returned by the store's admin user listing.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct UserProfile {
        pub id: Uuid,
        pub name: String,
        pub email: String,
        #[serde(default)]
        pub role: Role,
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct KindBreakdown {
        pub kind: TransactionKind,
        pub count: u64,
        pub total_minor: i64,
    }

    /// Cross-user statistics for the admin dashboard.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct AdminStats {
        pub total_users: u64,
        pub total_transactions: u64,
        pub totals: Totals,
        pub by_kind: Vec<KindBreakdown>,
    }

    /// One user's slice of the cross-user listing.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct UserGroup {
        pub user_id: Uuid,
        pub user_name: String,
        pub user_email: String,
        pub transaction_count: u64,
        pub total_income_minor: i64,
        pub total_expenses_minor: i64,
        pub balance_minor: i64,
    }
}

#[cfg(test)]
mod tests {
    use crate::transaction::{TransactionKind, TransactionRecord};

    #[test]
    fn decodes_store_wire_names() {
        let raw = r#"{
            "id": "7f2c5a6e-8a30-4b1f-9c7d-2f4f6a1b0c3d",
            "description": "Gaji",
            "type": "income",
            "amount": 1500000,
            "date": "2024-01-05",
            "createdAt": "2024-01-05T03:12:45Z"
        }"#;
        let record: TransactionRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(record.kind, TransactionKind::Income);
        assert_eq!(record.amount_minor, 1_500_000);
        assert_eq!(record.date, "2024-01-05");
        assert!(record.created_at.is_some());
    }

    #[test]
    fn amount_coerces_strings_and_floats() {
        let decode = |amount: &str| -> i64 {
            let raw = format!(
                r#"{{"id":"7f2c5a6e-8a30-4b1f-9c7d-2f4f6a1b0c3d",
                     "type":"expense","amount":{amount},"date":"2024-01-05"}}"#
            );
            serde_json::from_str::<TransactionRecord>(&raw)
                .unwrap()
                .amount_minor
        };

        assert_eq!(decode("40"), 40);
        assert_eq!(decode("\"40\""), 40);
        assert_eq!(decode("\" 40.9 \""), 40);
        assert_eq!(decode("40.9"), 40);
        assert_eq!(decode("\"not a number\""), 0);
        assert_eq!(decode("null"), 0);
    }

    #[test]
    fn missing_optional_fields_default() {
        let raw = r#"{
            "id": "7f2c5a6e-8a30-4b1f-9c7d-2f4f6a1b0c3d",
            "type": "expense"
        }"#;
        let record: TransactionRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(record.amount_minor, 0);
        assert_eq!(record.description, "");
        assert_eq!(record.date, "");
        assert!(record.created_at.is_none());
    }

    #[test]
    fn kind_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&TransactionKind::Expense).unwrap(),
            "\"expense\""
        );
        assert_eq!(TransactionKind::Income.as_str(), "income");
    }
}
