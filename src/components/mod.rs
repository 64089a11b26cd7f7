//! UI Components
//!
//! Leptos components for the data page.

mod data_panel;
mod record_card;

pub use data_panel::DataPanel;
pub use record_card::RecordCard;
