//! The module contains the errors the reporting engine can return.
//!
//! Malformed *records* never error: a non-numeric amount coerces to zero and
//! an unparseable date drops the record from date-keyed views only. The
//! variants here cover parameters and user-entered values.
use thiserror::Error;

/// Reporting engine errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ReportError {
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
    #[error("invalid transaction kind: {0}")]
    InvalidKind(String),
    #[error("invalid page size: {0}")]
    InvalidPageSize(String),
}
