use crate::config::OpenWeatherMapConfig;
use crate::error::{PronosticoError, Result};
use crate::models::{ForecastSample, WeatherCondition};
use serde::Deserialize;

#[derive(Debug, Clone)]
pub struct OpenWeatherMapClient {
    client: reqwest::Client,
    config: OpenWeatherMapConfig,
}

// OpenWeatherMap API response structures
#[derive(Debug, Deserialize)]
struct OwmForecastResponse {
    list: Vec<OwmForecastItem>,
}

#[derive(Debug, Deserialize)]
struct OwmForecastItem {
    dt_txt: String,
    main: OwmMain,
    weather: Vec<OwmWeather>,
    pop: f64, // probability of precipitation
}

#[derive(Debug, Deserialize)]
struct OwmMain {
    temp_max: f64,
    temp_min: f64,
}

#[derive(Debug, Deserialize)]
struct OwmWeather {
    icon: String,
    description: String,
}

/// Body of a non-2xx response
#[derive(Debug, Deserialize)]
struct OwmErrorBody {
    #[serde(default)]
    message: Option<String>,
}

impl OpenWeatherMapClient {
    pub fn new(config: OpenWeatherMapConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}?lat={}&lon={}&units=metric&appid={}",
            self.config.base_url.trim_end_matches('/'),
            endpoint,
            self.config.latitude,
            self.config.longitude,
            self.config.api_key
        )
    }

    /// Fetch the 5-day/3-hour forecast samples, in the order the API returns them
    pub async fn fetch_samples(&self) -> Result<Vec<ForecastSample>> {
        let response = self.client.get(self.url("forecast")).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<OwmErrorBody>()
                .await
                .ok()
                .and_then(|body| body.message);
            tracing::warn!(status = status.as_u16(), ?message, "forecast request rejected");
            return Err(PronosticoError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let owm_response: OwmForecastResponse = serde_json::from_str(&body)?;

        owm_response
            .list
            .into_iter()
            .map(convert_forecast_item)
            .collect()
    }

    /// Test connection to OpenWeatherMap API
    pub async fn test_connection(&self) -> Result<bool> {
        let response = self.client.get(self.url("weather")).send().await?;
        Ok(response.status().is_success())
    }
}

fn convert_forecast_item(item: OwmForecastItem) -> Result<ForecastSample> {
    let weather = item.weather.into_iter().next().ok_or_else(|| {
        PronosticoError::InvalidData(format!("sample {} has no weather conditions", item.dt_txt))
    })?;

    Ok(ForecastSample {
        dt_txt: item.dt_txt,
        temp_max: item.main.temp_max,
        temp_min: item.main.temp_min,
        pop: item.pop,
        condition: WeatherCondition {
            icon: weather.icon,
            description: weather.description,
        },
    })
}
