//! Icon Asset Lookup
//!
//! Maps the in-game numbering to a bundled icon path. The core only hands
//! out the path; a missing file degrades to the placeholder via the image
//! error handler in the card components.

pub const PLACEHOLDER_ICON: &str = "assets/icons/placeholder.png";

/// Icon path for one roster entry, keyed by `time_stranger_number`
pub fn icon_url(time_stranger_number: u32) -> String {
    format!("assets/icons/{time_stranger_number:03}.png")
}
