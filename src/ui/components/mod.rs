pub mod spinner;
pub mod weather_card;

pub use spinner::Spinner;
pub use weather_card::{WeatherCard, CARD_HEIGHT};
