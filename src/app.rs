//! Data Viewer Frontend App
//!
//! Page shell around the data panel.

use leptos::prelude::*;

use crate::components::DataPanel;
use crate::config::AppConfig;

#[component]
pub fn App(#[prop(optional)] config: Option<AppConfig>) -> impl IntoView {
    provide_context(config.unwrap_or_default());

    view! {
        <div class="container">
            <h1 class="header">"Data Viewer - Docker Compose Demo"</h1>
            <DataPanel />
        </div>
    }
}
