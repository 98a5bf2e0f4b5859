//! Collection Summaries
//!
//! Count/percentage aggregates per status category, shown on the stat
//! buttons above the grid.

use crate::models::{effective_status, Digimon, StatusFilter, StatusMap};

/// One category's aggregate over the full roster
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub count: usize,
    pub total: usize,
    /// Rounded to the nearest integer; 0 for an empty roster
    pub percentage: u32,
}

/// Count the roster entries whose effective status satisfies `category`.
/// `total` is always the full roster size, not the filtered view.
pub fn summarize(roster: &[Digimon], statuses: &StatusMap, category: StatusFilter) -> Summary {
    let total = roster.len();
    let count = roster
        .iter()
        .filter(|digimon| category.matches(effective_status(statuses, digimon.digimon_number)))
        .count();
    let percentage = if total == 0 {
        0
    } else {
        ((count as f64 / total as f64) * 100.0).round() as u32
    };
    Summary {
        count,
        total,
        percentage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CollectionStatus;

    fn entry(number: u32, name: &str) -> Digimon {
        Digimon {
            digimon_number: number,
            time_stranger_number: number,
            name: name.to_string(),
            generation: "Rookie".to_string(),
            attribute: "Data".to_string(),
            kind: "Beast".to_string(),
            base_personality: "Calm".to_string(),
        }
    }

    fn roster() -> Vec<Digimon> {
        vec![entry(1, "Agumon"), entry(2, "Gabumon")]
    }

    #[test]
    fn empty_status_map_counts_zero_caught() {
        let summary = summarize(&roster(), &StatusMap::new(), StatusFilter::Caught);
        assert_eq!(summary, Summary { count: 0, total: 2, percentage: 0 });
    }

    #[test]
    fn one_living_of_two_is_fifty_percent() {
        let mut statuses = StatusMap::new();
        statuses.insert(1, CollectionStatus::Living);

        let summary = summarize(&roster(), &statuses, StatusFilter::Living);
        assert_eq!(summary, Summary { count: 1, total: 2, percentage: 50 });
    }

    #[test]
    fn living_counts_toward_caught() {
        let mut statuses = StatusMap::new();
        statuses.insert(1, CollectionStatus::Living);
        statuses.insert(2, CollectionStatus::Caught);

        let summary = summarize(&roster(), &statuses, StatusFilter::Caught);
        assert_eq!(summary, Summary { count: 2, total: 2, percentage: 100 });
    }

    #[test]
    fn caught_and_uncaught_partition_the_roster() {
        let roster: Vec<Digimon> = (1..=7).map(|n| entry(n, &format!("D{n}mon"))).collect();
        let mut statuses = StatusMap::new();
        statuses.insert(2, CollectionStatus::Caught);
        statuses.insert(4, CollectionStatus::Living);
        statuses.insert(6, CollectionStatus::Living);

        let caught = summarize(&roster, &statuses, StatusFilter::Caught);
        let uncaught = summarize(&roster, &statuses, StatusFilter::Uncaught);
        let living = summarize(&roster, &statuses, StatusFilter::Living);

        assert_eq!(caught.count + uncaught.count, roster.len());
        assert!(living.count <= caught.count);
    }

    #[test]
    fn percentage_rounds_to_nearest() {
        let roster: Vec<Digimon> = (1..=3).map(|n| entry(n, &format!("D{n}mon"))).collect();
        let mut statuses = StatusMap::new();
        statuses.insert(1, CollectionStatus::Caught);

        // 1/3 -> 33.33 -> 33
        let summary = summarize(&roster, &statuses, StatusFilter::Caught);
        assert_eq!(summary.percentage, 33);

        // 2/3 -> 66.67 -> 67
        statuses.insert(2, CollectionStatus::Caught);
        let summary = summarize(&roster, &statuses, StatusFilter::Caught);
        assert_eq!(summary.percentage, 67);
    }

    #[test]
    fn empty_roster_reports_zero_percentage() {
        let summary = summarize(&[], &StatusMap::new(), StatusFilter::Living);
        assert_eq!(summary, Summary { count: 0, total: 0, percentage: 0 });
    }
}
