use serde::{Deserialize, Deserializer, Serialize};

use crate::error::WeatherError;

/// Current conditions for a city, normalized from the API response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherResult {
    pub city: String,
    pub temperature_c: f64,
    pub condition: String,
}

/// Shape of the OpenWeather `/data/2.5/weather` body. Missing or `null`
/// fields fall back to their defaults; an absent `weather` list ends up as
/// `NoData`.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct OwCurrentResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    weather: Vec<OwWeather>,
    #[serde(default, deserialize_with = "null_as_default")]
    main: OwMain,
    #[serde(default, deserialize_with = "null_as_default")]
    name: String,
    #[allow(dead_code)]
    #[serde(default, deserialize_with = "null_as_default")]
    cod: i64,
}

#[derive(Debug, Default, Deserialize)]
struct OwWeather {
    #[serde(default, deserialize_with = "null_as_default")]
    main: String,
}

#[derive(Debug, Default, Deserialize)]
struct OwMain {
    #[serde(default, deserialize_with = "null_as_default")]
    temp: f64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl OwCurrentResponse {
    pub(crate) fn parse(body: &str) -> Result<Self, WeatherError> {
        Ok(serde_json::from_str(body)?)
    }

    pub(crate) fn into_result(self) -> Result<WeatherResult, WeatherError> {
        let condition = self.weather.into_iter().next().ok_or(WeatherError::NoData)?.main;

        Ok(WeatherResult { city: self.name, temperature_c: self.main.temp, condition })
    }
}
