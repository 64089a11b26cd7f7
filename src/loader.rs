//! Load Action
//!
//! The click handler's work: one request, two continuations.

use log::{debug, error, info};

use crate::api::RecordSource;
use crate::store::{StateCell, ViewState};

/// Fetch the record list and fold the outcome into the view-state.
///
/// Single-flight: a call made while a load is already in flight returns
/// without issuing a request. Failures end here; nothing is returned to the
/// caller.
pub async fn load_data<C, S>(cell: &C, source: &S)
where
    C: StateCell + ?Sized,
    S: RecordSource + ?Sized,
{
    if cell.with_state(ViewState::begin_load) != Some(true) {
        debug!("Load already in flight, ignoring trigger");
        return;
    }

    match source.fetch_records().await {
        Ok(records) => {
            info!("Loaded {} records from backend", records.len());
            cell.with_state(|state| state.finish_loaded(records));
        }
        Err(err) => {
            error!("Error loading data: {:?}", err);
            cell.with_state(|state| state.finish_failed(&err));
        }
    }
}
