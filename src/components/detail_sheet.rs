//! Detail Sheet Component
//!
//! Bottom sheet with the full record for the long-pressed entry. The
//! status badge inside it is pressable and runs the same cycle as the grid
//! card; opening or closing the sheet never touches the statuses.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::icons;
use crate::models::effective_status;
use crate::store::{self, use_app_store, AppStateStoreFields};

#[component]
pub fn DetailSheet() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    view! {
        {move || {
            ctx.selected.get().map(|digimon| {
                let number = digimon.digimon_number;
                let display_number = digimon.time_stranger_number;
                let status = effective_status(&store.statuses().read(), number);

                view! {
                    <div class="sheet-backdrop" on:click=move |_| ctx.close_detail()></div>
                    <section class="detail-sheet">
                        <button class="sheet-close" on:click=move |_| ctx.close_detail()>
                            "×"
                        </button>
                        <div class=format!("sheet-portrait status-{}", status.as_str())>
                            <img
                                class="sheet-icon"
                                src=icons::icon_url(display_number)
                                alt=digimon.name.clone()
                                on:error=move |ev| {
                                    let img = event_target::<web_sys::HtmlImageElement>(&ev);
                                    if !img.src().ends_with("placeholder.png") {
                                        img.set_src(icons::PLACEHOLDER_ICON);
                                    }
                                }
                            />
                        </div>
                        <header class="sheet-header">
                            <h2 class="sheet-name">{digimon.name.clone()}</h2>
                            <span class="sheet-number">{format!("#{display_number}")}</span>
                        </header>
                        <div class="sheet-info">
                            <InfoRow label="Digimon #" value=number.to_string() />
                            <InfoRow label="Generation" value=digimon.generation.clone() />
                            <InfoRow label="Attribute" value=digimon.attribute.clone() />
                            <InfoRow label="Type" value=digimon.kind.clone() />
                            <InfoRow label="Base Personality" value=digimon.base_personality.clone() />
                        </div>
                        <button
                            class=format!("sheet-status status-{}", status.as_str())
                            on:click=move |_| store::cycle_status(&store, number)
                        >
                            {status.label()}
                        </button>
                    </section>
                }
            })
        }}
    }
}

/// One label/value line in the info grid
#[component]
fn InfoRow(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="info-row">
            <span class="info-label">{label}</span>
            <span class="info-value">{value}</span>
        </div>
    }
}
