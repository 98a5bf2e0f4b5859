//! Application Context
//!
//! Shared detail-sheet state provided via Leptos Context API. Opening and
//! closing the sheet is independent of the collection statuses; selecting
//! an entry never changes its status.

use leptos::prelude::*;

use crate::models::Digimon;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Entry currently shown in the detail sheet (None = sheet closed) - read
    pub selected: ReadSignal<Option<Digimon>>,
    /// Entry currently shown in the detail sheet - write
    set_selected: WriteSignal<Option<Digimon>>,
}

impl AppContext {
    pub fn new(selected: (ReadSignal<Option<Digimon>>, WriteSignal<Option<Digimon>>)) -> Self {
        Self {
            selected: selected.0,
            set_selected: selected.1,
        }
    }

    /// Open the detail sheet for one entry
    pub fn open_detail(&self, digimon: Digimon) {
        self.set_selected.set(Some(digimon));
    }

    /// Close the detail sheet
    pub fn close_detail(&self) {
        self.set_selected.set(None);
    }
}
