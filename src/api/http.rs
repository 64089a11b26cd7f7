//! HTTP record source backed by `reqwest`.

use std::error::Error as _;

use async_trait::async_trait;

use super::{RecordSource, RequestError};
use crate::config::ApiConfig;
use crate::models::Record;

/// Issues one `GET` against the configured records endpoint per call.
///
/// No timeout and no retry: the wait is bounded only by the transport.
#[derive(Debug, Clone)]
pub struct HttpRecordSource {
    client: reqwest::Client,
    url: String,
}

impl HttpRecordSource {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: config.data_url(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait(?Send)]
impl RecordSource for HttpRecordSource {
    async fn fetch_records(&self) -> Result<Vec<Record>, RequestError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| RequestError::Network(describe(&e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RequestError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown Error").to_string(),
            });
        }

        response.json::<Vec<Record>>().await.map_err(|e| {
            if e.is_decode() {
                RequestError::Decode {
                    url: self.url.clone(),
                    reason: describe(&e),
                }
            } else {
                RequestError::Network(describe(&e))
            }
        })
    }
}

/// reqwest's `Display` omits the underlying cause; append it.
fn describe(err: &reqwest::Error) -> String {
    match err.source() {
        Some(cause) => format!("{}: {}", err, cause),
        None => err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::get, Json, Router};
    use serde_json::json;

    async fn spawn_backend(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_fetch_records_success() {
        let router = Router::new().route(
            "/api/data",
            get(|| async {
                Json(json!([
                    {"id": 1, "name": "Widget", "description": "A test widget", "created_at": "2024-01-15T10:30:00Z"},
                    {"id": 7, "name": "Gadget", "description": "Another one", "created_at": "2024-02-01T00:00:00Z"}
                ]))
            }),
        );
        let base = spawn_backend(router).await;
        let source = HttpRecordSource::new(&ApiConfig::with_base_url(base));

        let records = source.fetch_records().await.expect("fetch failed");

        // Server order is preserved
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, 1);
        assert_eq!(records[0].name, "Widget");
        assert_eq!(records[1].id, 7);
    }

    #[tokio::test]
    async fn test_fetch_records_empty_list() {
        let router = Router::new().route("/api/data", get(|| async { Json(json!([])) }));
        let base = spawn_backend(router).await;
        let source = HttpRecordSource::new(&ApiConfig::with_base_url(base));

        assert_eq!(source.fetch_records().await, Ok(vec![]));
    }

    #[tokio::test]
    async fn test_non_success_status() {
        let router = Router::new().route(
            "/api/data",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "Database error") }),
        );
        let base = spawn_backend(router).await;
        let source = HttpRecordSource::new(&ApiConfig::with_base_url(base));

        let err = source.fetch_records().await.unwrap_err();

        assert_eq!(
            err,
            RequestError::Status {
                url: source.url().to_string(),
                status: 500,
                reason: "Internal Server Error".to_string(),
            }
        );
        assert_eq!(
            err.to_string(),
            format!("Http failure response for {}: 500 Internal Server Error", source.url())
        );
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let router = Router::new().route("/api/data", get(|| async { "definitely not json" }));
        let base = spawn_backend(router).await;
        let source = HttpRecordSource::new(&ApiConfig::with_base_url(base));

        let err = source.fetch_records().await.unwrap_err();

        assert!(matches!(err, RequestError::Decode { .. }), "got {:?}", err);
        assert!(err.to_string().starts_with("Http failure during parsing for"));
    }

    #[tokio::test]
    async fn test_connection_refused() {
        // Grab a free port, then close it again
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let source = HttpRecordSource::new(&ApiConfig::with_base_url(format!("http://{}", addr)));
        let err = source.fetch_records().await.unwrap_err();

        assert!(matches!(err, RequestError::Network(_)), "got {:?}", err);
        assert!(!err.to_string().is_empty());
    }
}
