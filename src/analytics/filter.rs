use crate::models::{Entry, PeriodKey};

/// Entries whose date falls in the given month; `None` returns the full
/// set. Always a new vector; the source is never reordered or touched.
pub(crate) fn filter_by_period(entries: &[Entry], period: Option<PeriodKey>) -> Vec<Entry> {
    match period {
        Some(key) => entries
            .iter()
            .filter(|e| key.contains(e.date))
            .cloned()
            .collect(),
        None => entries.to_vec(),
    }
}

/// Presentation order: newest date first. The sort is stable, so entries
/// sharing a date keep their insertion order.
pub(crate) fn sort_for_display(entries: &mut [Entry]) {
    entries.sort_by(|a, b| b.date.cmp(&a.date));
}
