//! Field Guide App
//!
//! Main application component: wires the store and detail-sheet context,
//! loads the saved statuses on mount, and renders the stat row, search bar,
//! roster grid and detail sheet from the derived state.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::catalog;
use crate::components::{DetailSheet, DigimonCard, SearchBar, StatButton};
use crate::context::AppContext;
use crate::filter;
use crate::models::{effective_status, Digimon, StatusFilter};
use crate::storage;
use crate::store::{self, AppState, AppStateStoreFields, AppStore};
use crate::summary;

#[component]
pub fn App() -> impl IntoView {
    let store: AppStore = Store::new(AppState::new());
    provide_context(store);

    let (selected, set_selected) = signal::<Option<Digimon>>(None);
    let ctx = AppContext::new((selected, set_selected));
    provide_context(ctx);

    // Load saved statuses on mount
    Effect::new(move |_| {
        store.statuses().set(storage::load_statuses());
    });

    let on_card_press = Callback::new(move |number: u32| store::cycle_status(&store, number));
    let on_card_long_press = Callback::new(move |digimon: Digimon| ctx.open_detail(digimon));
    let on_filter_press =
        Callback::new(move |category: StatusFilter| store::toggle_filter(&store, category));

    view! {
        <div class="app-layout">
            <h1 class="app-title">"Digimon Field Guide"</h1>

            // Stats Section
            <div class="stat-row">
                {move || {
                    let statuses = store.statuses().get();
                    let active = store.filter().get();
                    let roster = catalog::roster();
                    [
                        (StatusFilter::Caught, "Caught"),
                        (StatusFilter::Living, "Living"),
                        (StatusFilter::Uncaught, "Uncaught"),
                    ]
                        .into_iter()
                        .map(|(category, label)| {
                            let summary = summary::summarize(roster, &statuses, category);
                            view! {
                                <StatButton
                                    label=label
                                    category=category
                                    summary=summary
                                    is_active={active == category}
                                    dimmed={active != StatusFilter::All}
                                    on_press=on_filter_press
                                />
                            }
                        })
                        .collect_view()
                }}
            </div>

            <SearchBar />

            // Roster grid, recomputed from statuses + filter + query
            <div class="digimon-grid">
                {move || {
                    let statuses = store.statuses().get();
                    let active = store.filter().get();
                    let query = store.query().get();
                    filter::select(catalog::roster(), &statuses, active, &query)
                        .into_iter()
                        .map(|digimon| {
                            let status = effective_status(&statuses, digimon.digimon_number);
                            view! {
                                <DigimonCard
                                    digimon=digimon
                                    status=status
                                    on_press=on_card_press
                                    on_long_press=on_card_long_press
                                />
                            }
                        })
                        .collect_view()
                }}
            </div>

            <DetailSheet />

            <p class="app-version">{format!("v{}", env!("CARGO_PKG_VERSION"))}</p>
        </div>
    }
}
