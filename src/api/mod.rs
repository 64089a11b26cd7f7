//! Backend Client
//!
//! The seam between the data panel and the HTTP backend.

mod http;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::Record;

pub use http::HttpRecordSource;

/// Any failure while fetching records.
///
/// The UI collapses every variant into one message through `Display`; the
/// variants only exist so logs and tests can tell them apart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// Connection, DNS or transport-level failure
    #[error("{0}")]
    Network(String),
    /// Backend answered with a non-2xx status
    #[error("Http failure response for {url}: {status} {reason}")]
    Status {
        url: String,
        status: u16,
        reason: String,
    },
    /// Body was not a list of records
    #[error("Http failure during parsing for {url}: {reason}")]
    Decode { url: String, reason: String },
}

/// Something that can produce the record list.
///
/// Futures are `?Send`: on wasm32 the fetch API is bound to the UI thread.
#[async_trait(?Send)]
pub trait RecordSource {
    async fn fetch_records(&self) -> Result<Vec<Record>, RequestError>;
}
