use async_trait::async_trait;
use reqwest::{Client, Url};
use std::fmt::Debug;

use crate::error::WeatherError;

/// Status and body of a finished GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}

/// Sends the single GET a weather lookup needs.
///
/// Timeouts, pooling and concurrency guarantees belong to the implementation.
#[async_trait]
pub trait HttpTransport: Send + Sync + Debug {
    async fn get(&self, url: &Url) -> Result<TransportResponse, WeatherError>;
}

#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    http: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self { http: Client::new() }
    }

    /// Use a preconfigured client, e.g. one built with a timeout.
    pub fn with_client(http: Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &Url) -> Result<TransportResponse, WeatherError> {
        let res = self.http.get(url.clone()).send().await?;

        let status = res.status().as_u16();
        let body = res.text().await?;

        Ok(TransportResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn get_returns_status_and_body() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/weather")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"name":"Tokyo"}"#)
            .create_async()
            .await;

        let url = Url::parse(&format!("{}/weather", server.url())).unwrap();
        let res = ReqwestTransport::new().get(&url).await.unwrap();

        mock.assert_async().await;
        assert!(res.is_success());
        assert_eq!(res.body, r#"{"name":"Tokyo"}"#);
    }

    #[tokio::test]
    async fn non_success_status_is_not_an_error_here() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/weather")
            .with_status(404)
            .with_body(r#"{"cod":"404","message":"city not found"}"#)
            .create_async()
            .await;

        let url = Url::parse(&format!("{}/weather", server.url())).unwrap();
        let res = ReqwestTransport::new().get(&url).await.unwrap();

        mock.assert_async().await;
        assert_eq!(res.status, 404);
        assert!(!res.is_success());
    }

    #[tokio::test]
    async fn connection_failure_is_transport_error() {
        // Port 1 is never listening in the test environment.
        let url = Url::parse("http://127.0.0.1:1/weather").unwrap();
        let err = ReqwestTransport::new().get(&url).await.unwrap_err();

        assert!(matches!(err, WeatherError::Transport(_)));
        assert!(err.is_transient());
    }
}
