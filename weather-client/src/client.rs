use reqwest::Url;
use std::sync::Arc;

use crate::{
    config::ClientConfig,
    error::{WeatherError, truncate_body},
    model::{OwCurrentResponse, WeatherResult},
    observer::{RequestObserver, TracingObserver},
    transport::{HttpTransport, ReqwestTransport},
};

/// OpenWeather v2.5 current weather endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

#[derive(Debug, Clone)]
pub struct WeatherClient {
    config: ClientConfig,
    base_url: String,
    transport: Arc<dyn HttpTransport>,
    observer: Arc<dyn RequestObserver>,
}

impl WeatherClient {
    /// Nothing is validated here; an empty key is only rejected when fetching.
    pub fn new(api_key: impl Into<String>, region: impl Into<String>) -> Self {
        Self::from_config(ClientConfig::new(api_key, region))
    }

    pub fn from_config(config: ClientConfig) -> Self {
        Self {
            config,
            base_url: DEFAULT_BASE_URL.to_string(),
            transport: Arc::new(ReqwestTransport::new()),
            observer: Arc::new(TracingObserver),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = transport;
        self
    }

    pub fn with_observer(mut self, observer: Arc<dyn RequestObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut ClientConfig {
        &mut self.config
    }

    /// Build the request URL for `city`. The API key appears in plain text.
    ///
    /// The region hint is not part of the query.
    pub fn request_url(&self, city: &str) -> Result<Url, WeatherError> {
        let api_key = self.config.require_api_key()?;

        let mut url = Url::parse(&self.base_url).map_err(|e| {
            WeatherError::Transport(format!("Invalid endpoint URL '{}': {e}", self.base_url))
        })?;

        url.query_pairs_mut()
            .clear()
            .append_pair("q", city)
            .append_pair("appid", api_key)
            .append_pair("units", "metric");

        Ok(url)
    }

    /// Fetch current conditions for `city` (an English place name).
    ///
    /// One GET, no retries, no caching. City names are passed through as is.
    #[tracing::instrument(skip(self))]
    pub async fn fetch_current_weather(&self, city: &str) -> Result<WeatherResult, WeatherError> {
        let url = self.request_url(city)?;

        if self.config.debug {
            self.observer.on_request(&url);
        }

        let res = self.transport.get(&url).await?;

        if !res.is_success() {
            tracing::warn!(status = res.status, "weather request failed");
            return Err(WeatherError::Upstream {
                status: res.status,
                body: truncate_body(&res.body),
            });
        }

        let result = OwCurrentResponse::parse(&res.body)?.into_result()?;

        tracing::debug!(
            city = %result.city,
            temperature_c = result.temperature_c,
            condition = %result.condition,
            "weather fetched"
        );

        Ok(result)
    }
}
