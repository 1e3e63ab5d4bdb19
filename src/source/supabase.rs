//! Supabase (PostgREST) event source.
//!
//! Reads the `events` and `event_services` tables through the project's
//! REST endpoint using the public anon key.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;

use super::EventSource;
use crate::domain::{Event, EventId, EventService};
use crate::error::CatalogError;

const REST_PATH: &str = "rest/v1";

/// Event source reading from a Supabase project.
#[derive(Debug, Clone)]
pub struct SupabaseSource {
    client: reqwest::Client,
    base_url: String,
}

impl SupabaseSource {
    /// Creates a client for the project at `project_url`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidRequest`] if the key cannot be used as
    /// a header value, or [`CatalogError::Internal`] if the HTTP client
    /// cannot be built.
    pub fn new(
        project_url: &str,
        anon_key: &str,
        timeout: Duration,
    ) -> Result<Self, CatalogError> {
        let mut headers = HeaderMap::new();
        let key = HeaderValue::from_str(anon_key)
            .map_err(|e| CatalogError::InvalidRequest(format!("invalid anon key: {e}")))?;
        let bearer = HeaderValue::from_str(&format!("Bearer {anon_key}"))
            .map_err(|e| CatalogError::InvalidRequest(format!("invalid anon key: {e}")))?;
        headers.insert("apikey", key);
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| CatalogError::Internal(format!("http client: {e}")))?;

        Ok(Self {
            client,
            base_url: project_url.trim_end_matches('/').to_string(),
        })
    }

    /// URL of a table endpoint.
    fn table_url(&self, table: &str) -> String {
        format!("{}/{REST_PATH}/{table}", self.base_url)
    }

    async fn get_rows<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &[(&str, String)],
    ) -> Result<Vec<T>, CatalogError> {
        let resp = self
            .client
            .get(self.table_url(table))
            .query(query)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(CatalogError::FetchFailure(format!(
                "{table}: status {}: {body}",
                status.as_u16()
            )));
        }

        let bytes = resp.bytes().await?;
        let rows: Vec<T> = serde_json::from_slice(&bytes)?;
        tracing::debug!(table, rows = rows.len(), "fetched rows");
        Ok(rows)
    }
}

#[async_trait]
impl EventSource for SupabaseSource {
    async fn fetch_all_events(&self) -> Result<Vec<Event>, CatalogError> {
        self.get_rows("events", &[("select", "*".to_string())])
            .await
            .inspect_err(|e| tracing::error!(error = %e, "error fetching events"))
    }

    async fn fetch_services_for_event(
        &self,
        event_id: &EventId,
    ) -> Result<Vec<EventService>, CatalogError> {
        self.get_rows(
            "event_services",
            &[
                ("select", "*".to_string()),
                ("event_id", format!("eq.{event_id}")),
                ("order", "created_at.asc".to_string()),
            ],
        )
        .await
        .inspect_err(|e| tracing::error!(%event_id, error = %e, "error fetching event services"))
    }

    async fn fetch_event(&self, event_id: &EventId) -> Result<Option<Event>, CatalogError> {
        let rows: Vec<Event> = self
            .get_rows(
                "events",
                &[
                    ("select", "*".to_string()),
                    ("id", format!("eq.{event_id}")),
                    ("limit", "1".to_string()),
                ],
            )
            .await?;
        Ok(rows.into_iter().next())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn table_url_strips_trailing_slash() {
        let Ok(source) = SupabaseSource::new(
            "https://project.supabase.co/",
            "anon-key",
            Duration::from_secs(5),
        ) else {
            panic!("client should build");
        };
        assert_eq!(
            source.table_url("events"),
            "https://project.supabase.co/rest/v1/events"
        );
    }

    #[test]
    fn rejects_key_with_newline() {
        let result =
            SupabaseSource::new("https://p.supabase.co", "bad\nkey", Duration::from_secs(5));
        assert!(matches!(result, Err(CatalogError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn unreachable_project_is_fetch_failure() {
        let Ok(source) = SupabaseSource::new(
            "http://127.0.0.1:9",
            "anon-key",
            Duration::from_millis(500),
        ) else {
            panic!("client should build");
        };
        let result = source.fetch_all_events().await;
        assert!(matches!(result, Err(CatalogError::FetchFailure(_))));
    }
}
