//! Stat Button Component
//!
//! One summary badge above the grid: category label, count/total and
//! percentage. Pressing it activates that filter; pressing it again while
//! active returns to All.

use leptos::prelude::*;

use crate::models::StatusFilter;
use crate::summary::Summary;

#[component]
pub fn StatButton(
    label: &'static str,
    category: StatusFilter,
    summary: Summary,
    is_active: bool,
    dimmed: bool,
    #[prop(into)] on_press: Callback<StatusFilter>,
) -> impl IntoView {
    let mut class = format!("stat-button stat-{}", category.as_str());
    if is_active {
        class.push_str(" active");
    } else if dimmed {
        class.push_str(" dimmed");
    }

    view! {
        <button class=class on:click=move |_| on_press.run(category)>
            <span class="stat-label">{label}</span>
            <span class="stat-count">{format!("{}/{}", summary.count, summary.total)}</span>
            <span class="stat-percentage">{format!("{}%", summary.percentage)}</span>
        </button>
    }
}
