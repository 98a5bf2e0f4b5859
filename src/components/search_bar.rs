//! Search Bar Component
//!
//! Feeds the grid's query: an all-digit entry looks up a digimon number
//! exactly, anything else is a case-sensitive name substring.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn SearchBar() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="search-bar">
            <input
                class="search-input"
                type="text"
                placeholder="Search by name or number"
                prop:value=move || store.query().get()
                on:input=move |ev| store.query().set(event_target_value(&ev))
            />
        </div>
    }
}
