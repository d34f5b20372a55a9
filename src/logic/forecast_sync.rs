use crate::config::Config;
use crate::datasources::OpenWeatherMapClient;
use crate::error::Result;
use crate::logic::aggregate_daily;
use crate::models::DaySummary;
use tokio::task::JoinHandle;

/// Fetches the forecast and reduces it to day summaries. One call, one request.
#[derive(Debug, Clone)]
pub struct ForecastSync {
    client: OpenWeatherMapClient,
}

impl ForecastSync {
    pub fn new(config: &Config) -> Self {
        Self {
            client: OpenWeatherMapClient::new(config.openweathermap.clone()),
        }
    }

    pub async fn load(&self) -> Result<Vec<DaySummary>> {
        let samples = match self.client.fetch_samples().await {
            Ok(samples) => samples,
            Err(e) => {
                tracing::warn!("Failed to fetch weather forecast: {}", e);
                return Err(e);
            }
        };
        tracing::debug!(samples = samples.len(), "forecast samples received");

        let days = aggregate_daily(&samples)?;
        tracing::info!(days = days.len(), "forecast updated");
        Ok(days)
    }

    /// Run [`ForecastSync::load`] on the runtime so the caller can keep drawing.
    pub fn spawn_load(&self) -> JoinHandle<Result<Vec<DaySummary>>> {
        let sync = self.clone();
        tokio::spawn(async move { sync.load().await })
    }

    pub async fn test_connection(&self) -> Result<bool> {
        self.client.test_connection().await
    }
}
