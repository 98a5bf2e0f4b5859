//! Grid Filtering
//!
//! Derives the visible slice of the roster from the status map, the active
//! status filter, and the search box contents. Pure; recomputed whenever any
//! input changes.

use crate::models::{effective_status, Digimon, StatusFilter, StatusMap};

/// Select the entries to display, preserving catalog order.
///
/// An all-digit query matches `digimon_number` exactly, never the name.
/// Anything else is a case-sensitive substring match on the name. The status
/// filter applies on top of either match. An empty result is just an empty
/// vec.
pub fn select(
    roster: &[Digimon],
    statuses: &StatusMap,
    filter: StatusFilter,
    query: &str,
) -> Vec<Digimon> {
    let digit_query = !query.is_empty() && query.bytes().all(|b| b.is_ascii_digit());
    // An all-digit query that does not fit u32 cannot equal any number
    let number_query: Option<u32> = if digit_query { query.parse().ok() } else { None };

    roster
        .iter()
        .filter(|digimon| {
            if digit_query {
                if number_query != Some(digimon.digimon_number) {
                    return false;
                }
            } else if !query.is_empty() && !digimon.name.contains(query) {
                return false;
            }
            filter.matches(effective_status(statuses, digimon.digimon_number))
        })
        .cloned()
        .collect()
}
