//! Digimon Card Component
//!
//! One grid cell: number badge, icon, name, status-colored chrome. Press
//! cycles the status; long-press (contextmenu, which mobile browsers fire
//! on long-press) opens the detail sheet.

use leptos::prelude::*;

use crate::icons;
use crate::models::{CollectionStatus, Digimon};

/// A single roster cell in the grid
#[component]
pub fn DigimonCard(
    digimon: Digimon,
    status: CollectionStatus,
    #[prop(into)] on_press: Callback<u32>,
    #[prop(into)] on_long_press: Callback<Digimon>,
) -> impl IntoView {
    let number = digimon.digimon_number;
    let display_number = digimon.time_stranger_number;
    let name = digimon.name.clone();
    let alt_text = digimon.name.clone();

    view! {
        <button
            class=format!("digimon-card status-{}", status.as_str())
            on:click=move |_| on_press.run(number)
            on:contextmenu=move |ev| {
                ev.prevent_default();
                on_long_press.run(digimon.clone());
            }
        >
            <div class="card-status-bar"></div>
            <span class="card-number">{format!("#{display_number}")}</span>
            <div class="card-icon-frame">
                <img
                    class="card-icon"
                    src=icons::icon_url(display_number)
                    alt=alt_text
                    on:error=move |ev| {
                        let img = event_target::<web_sys::HtmlImageElement>(&ev);
                        if !img.src().ends_with("placeholder.png") {
                            img.set_src(icons::PLACEHOLDER_ICON);
                        }
                    }
                />
            </div>
            <span class="card-name">{name}</span>
        </button>
    }
}
