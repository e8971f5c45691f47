//! HTTP implementation of `TunnelStatusSource`.

use async_trait::async_trait;
use folio_core::config::TunnelConfig;
use folio_core::tunnel::{TunnelStatus, TunnelStatusSource};
use folio_core::{FolioError, Result};
use reqwest::Client;
use std::time::Duration;

const STATUS_PATH: &str = "/api/tunnel-status";

/// Calls `GET {base_url}/api/tunnel-status/{id}`.
///
/// The request timeout bounds every query independently.
#[derive(Clone)]
pub struct HttpTunnelStatusSource {
    client: Client,
    base_url: String,
}

impl HttpTunnelStatusSource {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FolioError::internal(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &TunnelConfig) -> Result<Self> {
        let base_url = config
            .base_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| FolioError::config("Tunnel status base URL is not configured"))?;
        Self::new(base_url, Duration::from_secs(config.timeout_secs))
    }

    fn status_url(&self, tunnel_id: &str) -> Result<reqwest::Url> {
        let mut url = reqwest::Url::parse(&format!("{}{}", self.base_url, STATUS_PATH))
            .map_err(|e| FolioError::config(format!("Invalid tunnel base URL: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| FolioError::config("Tunnel base URL cannot have path segments"))?
            .push(tunnel_id);
        Ok(url)
    }
}

#[async_trait]
impl TunnelStatusSource for HttpTunnelStatusSource {
    async fn get_status(&self, tunnel_id: &str) -> Result<TunnelStatus> {
        let url = self.status_url(tunnel_id)?;
        tracing::debug!("[TunnelStatus] GET {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FolioError::http(
                status.as_u16(),
                format!("tunnel status unavailable for {}", tunnel_id),
            ));
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::tunnel::OnlineStatus;
    use mockito::Server;

    fn source(url: String) -> HttpTunnelStatusSource {
        HttpTunnelStatusSource::new(url, Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_get_status_decodes_payload() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/api/tunnel-status/t1")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id":"t1","web_url":"https://t1.example.com","online_status":"up"}"#)
            .create_async()
            .await;

        let status = source(server.url()).get_status("t1").await.unwrap();

        mock.assert_async().await;
        assert_eq!(status.online_status, OnlineStatus::Up);
        assert_eq!(status.web_url, "https://t1.example.com");
    }

    #[tokio::test]
    async fn test_non_success_is_error() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/api/tunnel-status/t2")
            .with_status(502)
            .create_async()
            .await;

        let err = source(server.url()).get_status("t2").await.unwrap_err();
        assert!(matches!(err, FolioError::Http { status: 502, .. }));
    }

    #[tokio::test]
    async fn test_malformed_body_is_error() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/api/tunnel-status/t3")
            .with_status(200)
            .with_body("<html>")
            .create_async()
            .await;

        assert!(source(server.url()).get_status("t3").await.is_err());
    }

    #[test]
    fn test_tunnel_id_is_path_encoded() {
        let url = source("https://site.example.com/".to_string())
            .status_url("a b/c")
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://site.example.com/api/tunnel-status/a%20b%2Fc"
        );
    }

    #[test]
    fn test_from_config_requires_base_url() {
        assert!(
            HttpTunnelStatusSource::from_config(&TunnelConfig::default())
                .err()
                .is_some_and(|e| e.is_config())
        );
    }
}
