use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};

use crate::transactions::RecordExt;

use super::Ledger;

/// Window length of the activity heatmap, in days.
const WINDOW_DAYS: u64 = 365;

impl Ledger {
    /// Transaction counts per day over the 365 days ending at
    /// `reference_date` inclusive.
    ///
    /// Sparse: days without transactions are absent, not zero-valued.
    pub fn heatmap(&self, reference_date: NaiveDate) -> BTreeMap<NaiveDate, u64> {
        let window_start = reference_date
            .checked_sub_days(Days::new(WINDOW_DAYS - 1))
            .unwrap_or(NaiveDate::MIN);

        let mut days: BTreeMap<NaiveDate, u64> = BTreeMap::new();
        for record in &self.records {
            let Some(day) = record.day() else {
                continue;
            };
            if day < window_start || day > reference_date {
                continue;
            }
            *days.entry(day).or_insert(0) += 1;
        }
        days
    }
}
