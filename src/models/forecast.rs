use crate::error::{PronosticoError, Result};
use chrono::{Datelike, Locale, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Static asset host for OpenWeatherMap condition icons
pub const ICON_URL_BASE: &str = "https://openweathermap.org/img/wn";

/// A single 3-hour forecast point as delivered by the forecast API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSample {
    pub dt_txt: String, // "YYYY-MM-DD HH:MM:SS"
    pub temp_max: f64,
    pub temp_min: f64,
    pub pop: f64, // 0.0-1.0
    pub condition: WeatherCondition,
}

impl ForecastSample {
    /// Calendar day this sample belongs to, taken from the date part of `dt_txt`
    pub fn day_key(&self) -> Result<NaiveDate> {
        parse_day_key(&self.dt_txt)
    }
}

pub fn parse_day_key(dt_txt: &str) -> Result<NaiveDate> {
    let date_part = dt_txt.split(' ').next().unwrap_or_default();
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map_err(|e| PronosticoError::InvalidData(format!("bad timestamp '{}': {}", dt_txt, e)))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherCondition {
    pub icon: String,
    pub description: String,
}

impl WeatherCondition {
    pub fn icon_url(&self) -> String {
        format!("{}/{}.png", ICON_URL_BASE, self.icon)
    }
}

/// Condition shown on a day card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayCondition {
    pub icon: String,
    pub icon_url: String,
    pub text: String,
}

impl From<&WeatherCondition> for DayCondition {
    fn from(condition: &WeatherCondition) -> Self {
        Self {
            icon: condition.icon.clone(),
            icon_url: condition.icon_url(),
            text: condition.description.clone(),
        }
    }
}

impl DayCondition {
    /// Terminal stand-in for the icon image, keyed on the icon code
    pub fn symbol(&self) -> &'static str {
        let night = self.icon.ends_with('n');
        match self.icon.get(..2).unwrap_or_default() {
            "01" if night => "🌙",
            "01" => "☀",
            "02" => "🌤",
            "03" | "04" => "☁",
            "09" => "🌧",
            "10" => "🌦",
            "11" => "⛈",
            "13" => "❄",
            "50" => "🌫",
            _ => "?",
        }
    }
}

/// Aggregated forecast for one calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub display_date: String,
    pub day_name: String,
    pub temp_max: f64,
    pub temp_min: f64,
    pub rain_prob: f64, // percent, 0-100
    pub condition: DayCondition,
}

impl DaySummary {
    /// Start a summary from the first sample seen for `date`.
    pub fn seed(date: NaiveDate, sample: &ForecastSample) -> Self {
        Self {
            date,
            display_date: display_date(date),
            day_name: weekday_name(date),
            temp_max: sample.temp_max,
            temp_min: sample.temp_min,
            rain_prob: sample.pop * 100.0,
            condition: DayCondition::from(&sample.condition),
        }
    }

    /// Fold a later sample of the same day in. The condition stays as seeded.
    pub fn absorb(&mut self, sample: &ForecastSample) {
        self.temp_max = self.temp_max.max(sample.temp_max);
        self.temp_min = self.temp_min.min(sample.temp_min);
        self.rain_prob = self.rain_prob.max(sample.pop * 100.0);
    }

    pub fn headline(&self) -> String {
        format!("{} - {}", self.day_name, self.display_date)
    }

    pub fn temp_max_text(&self) -> String {
        format!("{}°C", to_fixed(self.temp_max, 1))
    }

    pub fn temp_min_text(&self) -> String {
        format!("{}°C", to_fixed(self.temp_min, 1))
    }

    pub fn temperature_label(&self) -> String {
        format!("🌡 {} / {}", self.temp_max_text(), self.temp_min_text())
    }

    pub fn rain_label(&self) -> String {
        format!("💧 {}% prob. de lluvia", to_fixed(self.rain_prob, 0))
    }
}

/// Fixed-point text with exact ties rounded away from zero (24.25 -> "24.3")
pub fn to_fixed(value: f64, decimals: usize) -> String {
    let scale = 10f64.powi(decimals as i32);
    let rounded = (value * scale).round() / scale;
    format!("{:.*}", decimals, rounded)
}

/// Short `es-ES` date: day/month/year, no zero padding
pub fn display_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.day(), date.month(), date.year())
}

/// Spanish weekday name with its first letter upper-cased
pub fn weekday_name(date: NaiveDate) -> String {
    let name = date
        .and_time(NaiveTime::MIN)
        .and_utc()
        .format_localized("%A", Locale::es_ES)
        .to_string();
    capitalize_first(&name)
}

pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
