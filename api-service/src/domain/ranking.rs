use std::cmp::Ordering;

use shared::BoardEntry;

// Fastest first; entries with no usable time sink to the bottom. Ties break
// on earlier updatedAt, missing updatedAt compares as the empty string.
pub fn ranking_order(a: &BoardEntry, b: &BoardEntry) -> Ordering {
    let time_a = a.effective_time().unwrap_or(f64::INFINITY);
    let time_b = b.effective_time().unwrap_or(f64::INFINITY);

    time_a.total_cmp(&time_b).then_with(|| {
        let updated_a = a.updated_at.as_deref().unwrap_or("");
        let updated_b = b.updated_at.as_deref().unwrap_or("");
        updated_a.cmp(updated_b)
    })
}
