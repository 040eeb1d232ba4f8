//! Pure aggregation over a cashflow transaction snapshot.
//!
//! The engine takes the full set of a user's transactions (already fetched
//! from the store) plus explicit display parameters and derives every view
//! the application shows: running balances, totals, the filtered/paginated
//! listing, chart series, insights and the activity heatmap. Every
//! operation is a pure function of its inputs; callers rebuild the
//! [`Ledger`] whenever the store pushes a fresh list.
//!
//! Dirty data is handled asymmetrically on purpose: amounts that fail to
//! decode coerce to zero so totals stay computable, while records whose
//! date does not parse drop out of date-keyed views only.

pub use error::ReportError;
pub use money::Money;
pub use ops::admin;
pub use ops::{
    DEFAULT_CATEGORY_LIMIT, Ledger, ListFilter, OTHER_CATEGORY, apply_filter, paginate,
};
pub use transactions::{RecordExt, parse_kind};

pub use api_types::report::{ChartGranularity, Dashboard, PageRequest, PageView, ReportQuery};
pub use api_types::transaction::{TransactionKind, TransactionRecord, TransactionView};

pub mod calendar;
mod error;
mod money;
mod ops;
mod transactions;
mod util;

type ResultReport<T> = Result<T, ReportError>;
