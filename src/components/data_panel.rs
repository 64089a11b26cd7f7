//! Data Panel Component
//!
//! Load button plus the results area. Owns the panel's view-state.

use chrono::Local;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::RecordCard;
use crate::api::HttpRecordSource;
use crate::config::AppConfig;
use crate::loader::load_data;
use crate::store::ViewState;
use crate::view_model::{render, FETCHING_TEXT, PLACEHOLDER_TEXT, RECORDS_HEADING};

/// Fetches the record list on demand and shows it.
///
/// Nothing is fetched on mount; the list stays empty until the button is
/// clicked. The button is disabled while a request is in flight.
#[component]
pub fn DataPanel() -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();

    let state = RwSignal::new(ViewState::new());
    // Browser-local offset, fixed for the component's lifetime
    let offset = *Local::now().offset();
    let panel = Memo::new(move |_| state.with(|s| render(s, offset)));

    let on_load = move |_| {
        let source = HttpRecordSource::new(&config.api);
        log::debug!("Requesting {}", source.url());
        spawn_local(async move {
            load_data(&state, &source).await;
        });
    };

    view! {
        <div class="data-section">
            <button
                on:click=on_load
                disabled=move || panel.with(|p| p.trigger.disabled)
            >
                {move || panel.with(|p| p.trigger.label)}
            </button>

            {move || panel.with(|p| p.error.clone()).map(|message| view! {
                <div class="error">{message}</div>
            })}

            <Show when=move || panel.with(|p| p.fetching)>
                <div class="loading">{FETCHING_TEXT}</div>
            </Show>

            <Show when=move || panel.with(|p| !p.records.is_empty())>
                <h3>{RECORDS_HEADING}</h3>
                {move || panel.with(|p| p.records.clone())
                    .into_iter()
                    .map(|record| view! { <RecordCard record=record /> })
                    .collect_view()}
            </Show>

            <Show when=move || panel.with(|p| p.show_placeholder)>
                <p>{PLACEHOLDER_TEXT}</p>
            </Show>
        </div>
    }
}
