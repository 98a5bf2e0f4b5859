//! Status Persistence
//!
//! One localStorage entry under [`STORAGE_KEY`]: a JSON object mapping
//! string-encoded digimon numbers to `"caught"` or `"living"`. Absent keys
//! mean uncaught; an explicit `"uncaught"` from older writes decodes the
//! same as absence and is dropped on the next save.
//!
//! Every save is a full snapshot of the current map, never a delta. With a
//! single writer on one key, the last completed write is always a complete,
//! current picture, so superseded writes are harmless.
//!
//! Read errors decay to an empty map and write errors leave the in-memory
//! map as the session's source of truth; both are logged to the console and
//! never surfaced to the caller.

use std::collections::HashMap;

use crate::models::{CollectionStatus, StatusMap};

pub const STORAGE_KEY: &str = "digimonStatuses";

/// Decode a persisted blob. Unknown status strings and keys that are not
/// digimon numbers are ignored entry-by-entry; a blob that is not a JSON
/// string-to-string object is an error the caller maps to the empty map.
pub fn decode_statuses(raw: &str) -> Result<StatusMap, serde_json::Error> {
    let entries: HashMap<String, String> = serde_json::from_str(raw)?;
    Ok(entries
        .into_iter()
        .filter_map(|(key, value)| {
            let number = key.parse::<u32>().ok()?;
            match CollectionStatus::parse(&value) {
                CollectionStatus::Uncaught => None,
                status => Some((number, status)),
            }
        })
        .collect())
}

/// Encode the full map as the persisted JSON object. Uncaught entries are
/// never written; absence already carries that meaning.
pub fn encode_statuses(statuses: &StatusMap) -> String {
    let entries: HashMap<String, &str> = statuses
        .iter()
        .filter(|(_, status)| **status != CollectionStatus::Uncaught)
        .map(|(number, status)| (number.to_string(), status.as_str()))
        .collect();
    serde_json::to_string(&entries).unwrap_or_else(|_| "{}".to_string())
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Read the saved statuses, or an empty map when nothing is saved or the
/// blob does not decode.
pub fn load_statuses() -> StatusMap {
    let Some(storage) = local_storage() else {
        return StatusMap::new();
    };
    match storage.get_item(STORAGE_KEY) {
        Ok(Some(raw)) => decode_statuses(&raw).unwrap_or_else(|err| {
            web_sys::console::error_1(
                &format!("[storage] discarding saved statuses: {err}").into(),
            );
            StatusMap::new()
        }),
        Ok(None) => StatusMap::new(),
        Err(err) => {
            web_sys::console::error_1(&format!("[storage] read failed: {err:?}").into());
            StatusMap::new()
        }
    }
}

/// Write the full snapshot, replacing whatever was saved before. A failure
/// is logged and otherwise ignored; the next mutation's save is the retry.
pub fn save_statuses(statuses: &StatusMap) {
    let Some(storage) = local_storage() else {
        return;
    };
    let blob = encode_statuses(statuses);
    if let Err(err) = storage.set_item(STORAGE_KEY, &blob) {
        web_sys::console::error_1(&format!("[storage] write failed: {err:?}").into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_saved_blob() {
        let statuses = decode_statuses(r#"{"1":"caught","7":"living"}"#).unwrap();
        assert_eq!(statuses.get(&1), Some(&CollectionStatus::Caught));
        assert_eq!(statuses.get(&7), Some(&CollectionStatus::Living));
        assert_eq!(statuses.len(), 2);
    }

    #[test]
    fn legacy_explicit_uncaught_decodes_as_absence() {
        let statuses = decode_statuses(r#"{"1":"uncaught","2":"caught"}"#).unwrap();
        assert!(!statuses.contains_key(&1));
        assert_eq!(statuses.get(&2), Some(&CollectionStatus::Caught));
    }

    #[test]
    fn unknown_status_string_decodes_as_absence() {
        let statuses = decode_statuses(r#"{"3":"digivolved"}"#).unwrap();
        assert!(statuses.is_empty());
    }

    #[test]
    fn non_numeric_keys_are_ignored() {
        let statuses = decode_statuses(r#"{"agumon":"caught","4":"living"}"#).unwrap();
        assert_eq!(statuses.len(), 1);
        assert_eq!(statuses.get(&4), Some(&CollectionStatus::Living));
    }

    #[test]
    fn invalid_json_is_an_error_not_a_panic() {
        assert!(decode_statuses("not json {").is_err());
        assert!(decode_statuses(r#"["caught"]"#).is_err());
    }

    #[test]
    fn encode_writes_string_keys_and_skips_uncaught() {
        let mut statuses = StatusMap::new();
        statuses.insert(12, CollectionStatus::Caught);
        statuses.insert(3, CollectionStatus::Uncaught);

        let blob = encode_statuses(&statuses);
        let decoded = decode_statuses(&blob).unwrap();
        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded.get(&12), Some(&CollectionStatus::Caught));
        assert!(blob.contains(r#""12":"caught""#));
    }

    #[test]
    fn empty_map_encodes_as_empty_object() {
        assert_eq!(encode_statuses(&StatusMap::new()), "{}");
    }
}
