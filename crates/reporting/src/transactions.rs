//! Engine-side accessors for the wire transaction types.
//!
//! The record structs themselves live in `api_types`; this module adds the
//! derivations the ops need (parsed day, signed amount) and the kind parser
//! used by callers that accept text filters.

use api_types::transaction::{OwnedRecord, TransactionKind, TransactionRecord, TransactionView};
use chrono::NaiveDate;

use crate::{Money, ReportError, calendar};

/// Accessors shared by the per-user and admin wire records.
pub trait RecordExt {
    /// The calendar day, if the raw `date` parses.
    fn day(&self) -> Option<NaiveDate>;

    /// Amount signed by kind: `+` income, `-` expense.
    fn signed_minor(&self) -> i64;
}

impl RecordExt for TransactionRecord {
    fn day(&self) -> Option<NaiveDate> {
        calendar::parse_day(&self.date)
    }

    fn signed_minor(&self) -> i64 {
        match self.kind {
            TransactionKind::Income => self.amount_minor,
            TransactionKind::Expense => -self.amount_minor,
        }
    }
}

impl RecordExt for OwnedRecord {
    fn day(&self) -> Option<NaiveDate> {
        calendar::parse_day(&self.date)
    }

    fn signed_minor(&self) -> i64 {
        match self.kind {
            TransactionKind::Income => self.amount_minor,
            TransactionKind::Expense => -self.amount_minor,
        }
    }
}

/// Parse a kind filter value (`income` / `expense`).
pub fn parse_kind(value: &str) -> Result<TransactionKind, ReportError> {
    match value {
        "income" => Ok(TransactionKind::Income),
        "expense" => Ok(TransactionKind::Expense),
        other => Err(ReportError::InvalidKind(other.to_string())),
    }
}

pub(crate) fn to_view(record: TransactionRecord, running_balance: Money) -> TransactionView {
    TransactionView {
        id: record.id,
        description: record.description,
        kind: record.kind,
        amount_minor: record.amount_minor,
        date: record.date,
        created_at: record.created_at,
        running_balance_minor: running_balance.minor(),
    }
}
