use thiserror::Error;

/// Message shown when the failure carries nothing better to tell the user.
pub const FALLBACK_ERROR_MESSAGE: &str = "Error al obtener datos del clima";

#[derive(Error, Debug)]
pub enum PronosticoError {
    #[error("HTTP request error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error(
        "OpenWeatherMap returned {status}: {}",
        .message.as_deref().unwrap_or("no message")
    )]
    Api { status: u16, message: Option<String> },

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl PronosticoError {
    /// The text the error screen shows. Only the API's own message gets
    /// through; transport and parse failures show the fallback, never the
    /// reqwest/serde text, which is logged instead.
    pub fn user_message(&self) -> String {
        match self {
            PronosticoError::Api {
                message: Some(message),
                ..
            } if !message.is_empty() => message.clone(),
            _ => FALLBACK_ERROR_MESSAGE.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PronosticoError>;
