//! Domain Models
//!
//! The roster entry record plus the small value types that drive the
//! collection state: per-Digimon status, the active status filter, and the
//! pure transition/accessor functions over the status map.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One roster entry (matches the bundled dataset)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Digimon {
    /// Stable primary number, unique across the roster
    pub digimon_number: u32,
    /// Secondary in-game numbering, used for badges and icon lookup
    pub time_stranger_number: u32,
    pub name: String,
    pub generation: String,
    pub attribute: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub base_personality: String,
}

/// Tri-state collection flag for one roster entry.
///
/// Absence of an entry in the [`StatusMap`] means `Uncaught`; use
/// [`effective_status`] rather than reading the map directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollectionStatus {
    #[default]
    Uncaught,
    Caught,
    Living,
}

impl CollectionStatus {
    /// Cycle one step: uncaught -> caught -> living -> uncaught
    pub fn advance(self) -> Self {
        match self {
            CollectionStatus::Uncaught => CollectionStatus::Caught,
            CollectionStatus::Caught => CollectionStatus::Living,
            CollectionStatus::Living => CollectionStatus::Uncaught,
        }
    }

    /// Wire form used in the persisted blob and in CSS class names
    pub fn as_str(self) -> &'static str {
        match self {
            CollectionStatus::Uncaught => "uncaught",
            CollectionStatus::Caught => "caught",
            CollectionStatus::Living => "living",
        }
    }

    /// Parse a persisted status string. Anything unrecognized is treated
    /// as `Uncaught`, so a corrupted entry never poisons the whole map.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "caught" => CollectionStatus::Caught,
            "living" => CollectionStatus::Living,
            _ => CollectionStatus::Uncaught,
        }
    }

    /// Display label for the detail sheet's status badge
    pub fn label(self) -> &'static str {
        match self {
            CollectionStatus::Uncaught => "NOT CAUGHT",
            CollectionStatus::Caught => "CAUGHT",
            CollectionStatus::Living => "LIVING",
        }
    }
}

/// Mapping from `digimon_number` to collection status.
///
/// Entries that would be `Uncaught` are not stored; see [`set_status`].
pub type StatusMap = HashMap<u32, CollectionStatus>;

/// Status used in all computations: the stored value, or `Uncaught` when
/// nothing is stored for this number.
pub fn effective_status(statuses: &StatusMap, digimon_number: u32) -> CollectionStatus {
    statuses.get(&digimon_number).copied().unwrap_or_default()
}

/// Return a new map equal to `statuses` with `digimon_number` set to `next`.
/// The input map is never mutated; this is the only write path into a
/// [`StatusMap`]. Setting `Uncaught` removes the key, keeping the persisted
/// form minimal (absence already means uncaught).
pub fn set_status(statuses: &StatusMap, digimon_number: u32, next: CollectionStatus) -> StatusMap {
    let mut updated = statuses.clone();
    match next {
        CollectionStatus::Uncaught => {
            updated.remove(&digimon_number);
        }
        status => {
            updated.insert(digimon_number, status);
        }
    }
    updated
}

/// Which slice of the roster the grid shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    /// Caught in any sense: caught or living
    Caught,
    Living,
    Uncaught,
}

impl StatusFilter {
    /// Predicate over an effective status
    pub fn matches(self, status: CollectionStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Caught => {
                status == CollectionStatus::Caught || status == CollectionStatus::Living
            }
            StatusFilter::Living => status == CollectionStatus::Living,
            StatusFilter::Uncaught => status == CollectionStatus::Uncaught,
        }
    }

    /// Class-name form for the stat buttons
    pub fn as_str(self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Caught => "caught",
            StatusFilter::Living => "living",
            StatusFilter::Uncaught => "uncaught",
        }
    }

    /// Pressing the already-active filter returns to `All`
    pub fn toggled(self, pressed: StatusFilter) -> StatusFilter {
        if self == pressed {
            StatusFilter::All
        } else {
            pressed
        }
    }
}
