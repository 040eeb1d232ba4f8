use api_types::report::{ChartGranularity, Dashboard, PageRequest, ReportQuery};
use tracing::debug;

use crate::ResultReport;

use super::categories::DEFAULT_CATEGORY_LIMIT;
use super::{Ledger, ListFilter, paginate};

impl Ledger {
    /// Computes every derived view for one query.
    ///
    /// This is the full recomputation the surrounding system runs after any
    /// snapshot or parameter change; there is no incremental state to keep
    /// consistent.
    pub fn dashboard(&self, query: &ReportQuery) -> ResultReport<Dashboard> {
        let filter = ListFilter::from_query(query);
        let filtered = self.filtered(&filter);

        let defaults = PageRequest::default();
        let request = PageRequest {
            page: query.page.unwrap_or(defaults.page),
            page_size: query.page_size.unwrap_or(defaults.page_size),
        };
        let page = paginate(&filtered, &request)?;

        let balance_series = match query.granularity {
            ChartGranularity::Daily => self.daily_balance(),
            ChartGranularity::Monthly => self.monthly_balance(),
        };

        debug!(
            records = self.len(),
            filtered = page.total_count,
            page = request.page,
            "dashboard recomputed"
        );

        Ok(Dashboard {
            totals: self.totals(),
            page,
            granularity: query.granularity,
            balance_series,
            monthly_flow: self.monthly_flow(),
            expense_categories: self.expense_categories(DEFAULT_CATEGORY_LIMIT),
            insights: self.insights(query.reference_date),
            heatmap: self.heatmap(query.reference_date),
        })
    }
}
