//! Frontend Models
//!
//! Data structures matching the backend payload.

use serde::Deserialize;

/// One record returned by `GET /api/data` (matches backend)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Record {
    pub id: i64,
    pub name: String,
    pub description: String,
    /// Timestamp as sent by the backend; parsed only for display
    pub created_at: String,
}
