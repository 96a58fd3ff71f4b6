//! Aggregation over one month of interrupt records.

use crate::errors::AppResult;
use crate::store::{MonthKey, MonthlyLogStore};
use crate::utils::duration::mins2compact;

/// Totals for one monthly log. No filtering: every record in the month
/// counts, regardless of category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MonthSummary {
    pub entries: usize,
    pub total_minutes: i64,
    /// Lines that failed to decode and were skipped during the scan.
    pub malformed_lines: usize,
}

impl MonthSummary {
    /// Total time in compact duration text, e.g. "1h30m0s".
    pub fn total_time_str(&self) -> String {
        mins2compact(self.total_minutes)
    }
}

/// Full scan of the month's log, folding every record into the summary.
/// An empty or absent month yields all zeros. Store errors propagate
/// unchanged.
pub fn summarize(store: &MonthlyLogStore, key: &MonthKey) -> AppResult<MonthSummary> {
    let mut scan = store.scan(key)?;
    let mut summary = MonthSummary::default();

    for item in scan.by_ref() {
        let event = item?;
        summary.entries += 1;
        summary.total_minutes += event.duration_minutes;
    }
    summary.malformed_lines = scan.malformed;

    Ok(summary)
}
