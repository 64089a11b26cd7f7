//! Data Panel State
//!
//! The view-state behind the data panel and its transitions.

use std::cell::RefCell;

use leptos::prelude::*;

use crate::api::RequestError;
use crate::models::Record;

/// Prefix of the user-visible failure message
pub const LOAD_ERROR_PREFIX: &str = "Failed to load data from backend: ";

/// View-state of the data panel. Owned by one component, never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    /// Records in server order, replaced wholesale on each successful load
    pub items: Vec<Record>,
    /// A request is in flight
    pub loading: bool,
    /// Message of the last failed load; cleared when a new load starts
    pub error: Option<String>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter the loading state.
    ///
    /// Returns `false` and changes nothing if a load is already in flight.
    pub fn begin_load(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        self.error = None;
        true
    }

    pub fn finish_loaded(&mut self, records: Vec<Record>) {
        self.items = records;
        self.loading = false;
    }

    /// Record a failure. `items` keeps whatever the last success left there.
    pub fn finish_failed(&mut self, err: &RequestError) {
        self.error = Some(format!("{}{}", LOAD_ERROR_PREFIX, err));
        self.loading = false;
    }
}

/// In-place access to a `ViewState`.
///
/// Returns `None` when the state is gone (e.g. the owning component was
/// disposed while a request was in flight).
pub trait StateCell {
    fn with_state<R>(&self, f: impl FnOnce(&mut ViewState) -> R) -> Option<R>;
}

impl StateCell for RwSignal<ViewState> {
    fn with_state<R>(&self, f: impl FnOnce(&mut ViewState) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl StateCell for RefCell<ViewState> {
    fn with_state<R>(&self, f: impl FnOnce(&mut ViewState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}
