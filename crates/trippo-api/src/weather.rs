//! Current-weather lookup for the home screen header
//!
//! This is a read-only enrichment call against weatherapi.com. It is not
//! part of the Trippo backend and any failure simply hides the weather block.

use crate::http::{ApiClient, ApiClientConfig, ApiRequest};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Default weather service base URL
pub const DEFAULT_WEATHER_URL: &str = "https://api.weatherapi.com/v1";

/// Current conditions endpoint
pub const CURRENT_PATH: &str = "current.json";

/// Device position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

impl Coordinates {
    /// Create a coordinate pair
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

/// Configuration for the weather client
#[derive(Debug, Clone)]
pub struct WeatherConfig {
    /// Service base URL
    pub base_url: String,
    /// API key; lookups fail fast without one
    pub api_key: Option<String>,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_WEATHER_URL.to_string(),
            api_key: None,
            timeout: Duration::from_secs(10),
        }
    }
}

impl WeatherConfig {
    /// Create a config with an API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self { api_key: Some(api_key.into()), ..Default::default() }
    }

    /// Override the service base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[derive(Debug, Deserialize)]
struct CurrentResponse {
    location: LocationBody,
    current: CurrentBody,
}

#[derive(Debug, Deserialize)]
struct LocationBody {
    name: String,
    #[serde(default)]
    country: String,
}

#[derive(Debug, Deserialize)]
struct CurrentBody {
    temp_c: f64,
    #[serde(default)]
    is_day: u8,
    condition: ConditionBody,
}

#[derive(Debug, Deserialize)]
struct ConditionBody {
    text: String,
    #[serde(default)]
    icon: String,
}

/// Current conditions at a location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    /// Place name reported by the service
    pub location: String,
    /// Country name
    pub country: String,
    /// Temperature in Celsius
    pub temperature_c: f64,
    /// Condition summary ("Partly cloudy")
    pub condition: String,
    /// Condition icon URL
    pub icon_url: Option<String>,
    /// Daytime flag
    pub is_day: bool,
}

impl From<CurrentResponse> for CurrentWeather {
    fn from(body: CurrentResponse) -> Self {
        let icon = body.current.condition.icon;
        let icon_url = match icon.as_str() {
            "" => None,
            protocol_relative if protocol_relative.starts_with("//") => {
                Some(format!("https:{}", protocol_relative))
            }
            _ => Some(icon),
        };

        Self {
            location: body.location.name,
            country: body.location.country,
            temperature_c: body.current.temp_c,
            condition: body.current.condition.text,
            icon_url,
            is_day: body.current.is_day == 1,
        }
    }
}

/// Client for current-weather lookups
#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: ApiClient,
    api_key: Option<String>,
}

impl WeatherClient {
    /// Create a new weather client
    pub fn new(config: WeatherConfig) -> Result<Self> {
        let client = ApiClient::new(
            ApiClientConfig::new(config.base_url)
                .with_timeout(config.timeout)
                .without_language(),
        )?;
        Ok(Self { client, api_key: config.api_key })
    }

    /// Current conditions at a position
    pub async fn current(&self, position: Coordinates) -> Result<CurrentWeather> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| Error::InvalidInput("weather API key is not configured".to_string()))?;

        let request = ApiRequest::get(CURRENT_PATH)
            .param("key", api_key)
            .param("q", position.to_string())
            .param("aqi", "no");

        let response = self.client.send::<CurrentResponse>(request).await.map_err(|err| {
            tracing::warn!("Weather fetch error: {}", err);
            err
        })?;

        Ok(response.data.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_coordinates_query_format() {
        assert_eq!(Coordinates::new(41.31, 69.28).to_string(), "41.31,69.28");
    }

    #[test]
    fn test_current_weather_from_response() {
        let body: CurrentResponse = serde_json::from_value(json!({
            "location": {"name": "Tashkent", "country": "Uzbekistan"},
            "current": {
                "temp_c": 27.5,
                "is_day": 1,
                "condition": {"text": "Sunny", "icon": "//cdn.weatherapi.com/113.png"}
            }
        }))
        .unwrap();

        let weather = CurrentWeather::from(body);
        assert_eq!(weather.location, "Tashkent");
        assert_eq!(weather.temperature_c, 27.5);
        assert_eq!(weather.condition, "Sunny");
        assert_eq!(weather.icon_url.as_deref(), Some("https://cdn.weatherapi.com/113.png"));
        assert!(weather.is_day);
    }

    #[tokio::test]
    async fn test_missing_api_key_fails_fast() {
        let client = WeatherClient::new(WeatherConfig::default()).unwrap();
        let err = client.current(Coordinates::new(0.0, 0.0)).await.unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }
}
