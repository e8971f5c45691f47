//! Minimal PostgREST (Supabase) read client.
//!
//! Only what the portfolio needs: `select=*`, equality filters and a single
//! ordering column, authenticated with the project's anon key.

use folio_core::config::DataSourceConfig;
use folio_core::portfolio::ordering::SortOrder;
use folio_core::{FolioError, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// A read query against one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableQuery {
    table: &'static str,
    filters: Vec<(String, String)>,
    order: Option<SortOrder>,
}

impl TableQuery {
    pub fn new(table: &'static str) -> Self {
        Self {
            table,
            filters: Vec::new(),
            order: None,
        }
    }

    /// Adds a `column = value` filter.
    pub fn eq(mut self, column: &str, value: impl std::fmt::Display) -> Self {
        self.filters
            .push((column.to_string(), format!("eq.{}", value)));
        self
    }

    pub fn order(mut self, order: SortOrder) -> Self {
        self.order = Some(order);
        self
    }

    pub fn table(&self) -> &'static str {
        self.table
    }

    /// Query string parameters in PostgREST syntax.
    pub fn params(&self) -> Vec<(String, String)> {
        let mut params = vec![("select".to_string(), "*".to_string())];
        params.extend(self.filters.iter().cloned());
        if let Some(order) = self.order {
            params.push((
                "order".to_string(),
                format!("{}.{}", order.column, order.direction.as_str()),
            ));
        }
        params
    }
}

/// HTTP client bound to one Supabase project.
#[derive(Clone)]
pub struct PostgrestClient {
    client: Client,
    base_url: String,
    anon_key: String,
}

impl PostgrestClient {
    pub fn new(
        base_url: impl Into<String>,
        anon_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FolioError::internal(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            anon_key: anon_key.into(),
        })
    }

    /// Builds a client from configuration; both URL and key are required.
    pub fn from_config(config: &DataSourceConfig) -> Result<Self> {
        let url = config
            .url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| FolioError::config("Data source URL is not configured"))?;
        let anon_key = config
            .anon_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| FolioError::config("Data source anon key is not configured"))?;
        Self::new(url, anon_key, Duration::from_secs(config.timeout_secs))
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    /// Runs `query` and decodes every returned row.
    pub async fn select<T: DeserializeOwned>(&self, query: &TableQuery) -> Result<Vec<T>> {
        let url = self.table_url(query.table());
        tracing::debug!("[Postgrest] GET {} {:?}", url, query.params());

        let response = self
            .client
            .get(&url)
            .query(&query.params())
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            return Err(FolioError::http(status.as_u16(), body));
        }

        let rows: Vec<T> = response.json().await?;
        tracing::debug!("[Postgrest] {} returned {} rows", query.table(), rows.len());
        Ok(rows)
    }
}
