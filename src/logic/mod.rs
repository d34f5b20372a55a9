pub mod aggregation;
pub mod forecast_sync;

pub use aggregation::aggregate_daily;
pub use forecast_sync::ForecastSync;
