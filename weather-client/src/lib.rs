//! Client library for current weather conditions.
//!
//! This crate defines:
//! - Client configuration (API key, region hint, debug flag)
//! - A single lookup: current conditions for a named city
//! - The error taxonomy every lookup failure maps onto
//!
//! Requests go to the OpenWeather current weather endpoint with metric units.
//! The HTTP transport and the debug observer are both replaceable.

pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod observer;
pub mod transport;

pub use client::{DEFAULT_BASE_URL, WeatherClient};
pub use config::{ClientConfig, Region};
pub use error::WeatherError;
pub use model::WeatherResult;
pub use observer::{FnObserver, RedactingObserver, RequestObserver, TracingObserver, redact_url};
pub use transport::{HttpTransport, ReqwestTransport, TransportResponse};

pub use reqwest::Url;
