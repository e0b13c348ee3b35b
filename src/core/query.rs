//! Pure helpers for listing surfaces.
//!
//! Search and page navigation run over snapshots a caller already fetched;
//! none of these functions touch the store.

use crate::doctor::DoctorRecord;

/// Clamps a requested `(page, limit)` pair to the minimum of 1 each.
pub fn normalize_window(page: usize, limit: usize) -> (usize, usize) {
    (page.max(1), limit.max(1))
}

/// Returns the `page`-th window of `limit` items (1-based), empty when out of range.
pub fn page_slice<T>(items: &[T], page: usize, limit: usize) -> &[T] {
    let (page, limit) = normalize_window(page, limit);
    let start = (page - 1).saturating_mul(limit);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(limit).min(items.len());
    &items[start..end]
}

/// Number of pages needed to show `total` items, never less than 1.
pub fn total_pages(total: usize, limit: usize) -> usize {
    total.div_ceil(limit.max(1)).max(1)
}

/// Page reached by "previous"; stops at 1.
pub fn prev_page(page: usize) -> usize {
    page.saturating_sub(1).max(1)
}

/// Page reached by "next"; stops at `total_pages`.
pub fn next_page(page: usize, total_pages: usize) -> usize {
    page.saturating_add(1).min(total_pages.max(1))
}

/// True when `term` occurs case-insensitively in the first name, last name,
/// email, or specialization. The contact number is not searched.
pub fn matches_term(record: &DoctorRecord, term: &str) -> bool {
    let needle = term.to_lowercase();
    [
        &record.first_name,
        &record.last_name,
        &record.email,
        &record.specialization,
    ]
    .iter()
    .any(|value| value.to_lowercase().contains(&needle))
}

/// Filters `records` by [`matches_term`], keeping their order.
pub fn search<'a>(records: &'a [DoctorRecord], term: &str) -> Vec<&'a DoctorRecord> {
    records.iter().filter(|r| matches_term(r, term)).collect()
}
