use api_types::report::{PageRequest, PageView};
use api_types::transaction::TransactionView;

use crate::ResultReport;
use crate::calendar;
use crate::util::normalize_text;

use super::{Ledger, ListFilter, validate_page_size};

impl Ledger {
    /// The display listing narrowed by `filter` (running balances attached,
    /// most recent first).
    pub fn filtered(&self, filter: &ListFilter) -> Vec<TransactionView> {
        apply_filter(self.display_listing(), filter)
    }
}

/// Narrows a listing; constraints are conjunctive and never reorder.
pub fn apply_filter(views: Vec<TransactionView>, filter: &ListFilter) -> Vec<TransactionView> {
    let needle = filter
        .search
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(normalize_text);

    views
        .into_iter()
        .filter(|view| matches(view, filter, needle.as_deref()))
        .collect()
}

fn matches(view: &TransactionView, filter: &ListFilter, needle: Option<&str>) -> bool {
    if let Some(needle) = needle
        && !normalize_text(&view.description).contains(needle)
    {
        return false;
    }

    if filter.date_from.is_some() || filter.date_to.is_some() {
        // Date bounds need a parseable date; undated records fail them.
        let Some(day) = calendar::parse_day(&view.date) else {
            return false;
        };
        if let Some(from) = filter.date_from
            && day < from
        {
            return false;
        }
        if let Some(to) = filter.date_to
            && day > to
        {
            return false;
        }
    }

    if let Some(kind) = filter.kind
        && view.kind != kind
    {
        return false;
    }

    true
}

/// Slices a listing into a 1-indexed fixed-size page.
///
/// `total_pages = ceil(len / page_size)`; pages outside `[1, total_pages]`
/// yield an empty item list. Callers reset to page 1 whenever filters
/// change.
pub fn paginate(views: &[TransactionView], request: &PageRequest) -> ResultReport<PageView> {
    validate_page_size(request.page_size)?;

    let page_size = request.page_size as usize;
    let total_pages = views.len().div_ceil(page_size) as u32;

    let items = if request.page == 0 {
        Vec::new()
    } else {
        let start = (request.page as usize - 1).saturating_mul(page_size);
        views.iter().skip(start).take(page_size).cloned().collect()
    };

    Ok(PageView {
        items,
        page: request.page,
        page_size: request.page_size,
        total_count: views.len() as u64,
        total_pages,
    })
}
