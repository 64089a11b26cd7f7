//! Record Card Component
//!
//! One block per backend record.

use leptos::prelude::*;

use crate::view_model::RecordView;

#[component]
pub fn RecordCard(record: RecordView) -> impl IntoView {
    view! {
        <div class="data-item">
            <strong>"ID:"</strong> " " {record.id} <br/>
            <strong>"Name:"</strong> " " {record.name} <br/>
            <strong>"Description:"</strong> " " {record.description} <br/>
            <strong>"Created:"</strong> " " {record.created}
        </div>
    }
}
