use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::WeatherError;

/// Region hint such as "JP", "US" or "EU".
///
/// Reserved for future use: it is carried in the configuration but never
/// takes part in request construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Region(String);

impl Region {
    pub fn new(region: impl Into<String>) -> Self {
        Self(region.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Client configuration.
///
/// Fields are public and may be changed between calls; the API key is only
/// checked when a request is about to be made.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub api_key: String,

    /// Example TOML:
    /// region = "JP"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<Region>,

    /// Report each request URL to the client's observer.
    #[serde(default)]
    pub debug: bool,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>, region: impl Into<String>) -> Self {
        let region = region.into();
        Self {
            api_key: api_key.into(),
            region: (!region.is_empty()).then_some(Region(region)),
            debug: false,
        }
    }

    /// Parse configuration from an in-memory TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self, WeatherError> {
        toml::from_str(contents)
            .map_err(|e| WeatherError::Configuration(format!("Failed to parse config: {e}")))
    }

    pub(crate) fn require_api_key(&self) -> Result<&str, WeatherError> {
        if self.api_key.is_empty() {
            return Err(WeatherError::Configuration("API Key is required".to_string()));
        }
        Ok(&self.api_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_keeps_region_as_tagged_option() {
        let cfg = ClientConfig::new("KEY", "JP");
        assert_eq!(cfg.api_key, "KEY");
        assert_eq!(cfg.region, Some(Region::new("JP")));
        assert!(!cfg.debug);
    }

    #[test]
    fn empty_region_becomes_none() {
        let cfg = ClientConfig::new("KEY", "");
        assert_eq!(cfg.region, None);
    }

    #[test]
    fn empty_key_is_accepted_at_construction() {
        let cfg = ClientConfig::new("", "US");
        let err = cfg.require_api_key().unwrap_err();
        assert!(matches!(err, WeatherError::Configuration(_)));
    }

    #[test]
    fn from_toml_str_reads_all_fields() {
        let cfg = ClientConfig::from_toml_str(
            r#"
            api_key = "OPEN_KEY"
            region = "EU"
            debug = true
            "#,
        )
        .expect("valid config");

        assert_eq!(cfg.api_key, "OPEN_KEY");
        assert_eq!(cfg.region.as_ref().map(Region::as_str), Some("EU"));
        assert!(cfg.debug);
    }

    #[test]
    fn from_toml_str_defaults_optional_fields() {
        let cfg = ClientConfig::from_toml_str(r#"api_key = "K""#).expect("valid config");
        assert_eq!(cfg.region, None);
        assert!(!cfg.debug);
    }

    #[test]
    fn from_toml_str_rejects_missing_key() {
        let err = ClientConfig::from_toml_str("debug = true").unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }
}
