pub mod error;
pub mod forecast;
pub mod loading;

pub use error::ErrorScreen;
pub use forecast::ForecastScreen;
pub use loading::LoadingScreen;
