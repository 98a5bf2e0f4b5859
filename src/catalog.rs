//! Roster Catalog
//!
//! The fixed, ordered, read-only Digimon list. Bundled as JSON at build
//! time and parsed once on first access; nothing is added or removed at
//! runtime.

use std::sync::LazyLock;

use crate::models::Digimon;

static ROSTER: LazyLock<Vec<Digimon>> = LazyLock::new(|| {
    serde_json::from_str(include_str!("../data/digimon.json"))
        .expect("bundled digimon.json should parse")
});

/// The full roster in catalog order
pub fn roster() -> &'static [Digimon] {
    &ROSTER
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_is_nonempty_and_ordered() {
        let roster = roster();
        assert!(!roster.is_empty());
        for pair in roster.windows(2) {
            assert!(pair[0].digimon_number < pair[1].digimon_number);
        }
    }

    #[test]
    fn digimon_numbers_are_unique() {
        let roster = roster();
        let mut numbers: Vec<u32> = roster.iter().map(|d| d.digimon_number).collect();
        numbers.sort_unstable();
        numbers.dedup();
        assert_eq!(numbers.len(), roster.len());
    }
}
