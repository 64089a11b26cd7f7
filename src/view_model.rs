//! Data Panel View Model
//!
//! Pure mapping from `ViewState` to what the panel shows. The Leptos
//! component only turns a `PanelView` into DOM.

use chrono::FixedOffset;

use crate::datetime::format_medium;
use crate::models::Record;
use crate::store::ViewState;

pub const LOAD_LABEL: &str = "Load Data from Backend";
pub const BUSY_LABEL: &str = "Loading...";
pub const FETCHING_TEXT: &str = "Fetching data from backend...";
pub const RECORDS_HEADING: &str = "Data from PostgreSQL Database:";
pub const PLACEHOLDER_TEXT: &str = "No data loaded yet. Click the button above to fetch data.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerView {
    pub label: &'static str,
    pub disabled: bool,
}

/// One record block, every field ready for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub created: String,
}

impl RecordView {
    fn from_record(record: &Record, offset: FixedOffset) -> Self {
        Self {
            id: record.id.to_string(),
            name: record.name.clone(),
            description: record.description.clone(),
            created: format_medium(&record.created_at, offset),
        }
    }
}

/// Everything the panel renders.
///
/// Each section is decided on its own; nothing here enforces that only one
/// of them is visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelView {
    pub trigger: TriggerView,
    pub error: Option<String>,
    pub fetching: bool,
    /// Empty means the heading and list are hidden
    pub records: Vec<RecordView>,
    pub show_placeholder: bool,
}

pub fn render(state: &ViewState, offset: FixedOffset) -> PanelView {
    PanelView {
        trigger: TriggerView {
            label: if state.loading { BUSY_LABEL } else { LOAD_LABEL },
            disabled: state.loading,
        },
        error: state.error.clone(),
        fetching: state.loading,
        records: state
            .items
            .iter()
            .map(|record| RecordView::from_record(record, offset))
            .collect(),
        show_placeholder: !state.loading && state.items.is_empty() && state.error.is_none(),
    }
}
