use crate::error::{PronosticoError, Result};
use dialoguer::{Input, Password};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub location: LocationConfig,
    pub openweathermap: OpenWeatherMapConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LocationConfig {
    /// Shown as the forecast screen's subtitle
    pub name: String,
}

#[derive(Clone, Deserialize, Serialize)]
pub struct OpenWeatherMapConfig {
    pub api_key: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    pub latitude: f64,
    pub longitude: f64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl std::fmt::Debug for OpenWeatherMapConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenWeatherMapConfig")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("latitude", &self.latitude)
            .field("longitude", &self.longitude)
            .finish()
    }
}

impl Config {
    pub fn load(config_override: Option<&PathBuf>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) => p.clone(),
            None => Self::find_config_path()?,
        };

        if !config_path.exists() {
            return Err(PronosticoError::Config(format!(
                "Config file not found at {:?}. Run `pronostico init` to set up.",
                config_path
            )));
        }

        let config_str = std::fs::read_to_string(&config_path)
            .map_err(|e| PronosticoError::Config(format!("Failed to read config: {}", e)))?;

        let config = Self::from_yaml(&config_str)?;
        tracing::debug!(path = %config_path.display(), "configuration loaded");
        Ok(config)
    }

    /// Parse YAML after substituting `${VAR}` from the process environment.
    pub fn from_yaml(content: &str) -> Result<Self> {
        let content = substitute_vars(content, |name| std::env::var(name).ok())?;

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| PronosticoError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let key = self.openweathermap.api_key.trim();
        if key.is_empty() || key.contains("${") {
            return Err(PronosticoError::Config(
                "openweathermap.api_key is empty - set it or export OPENWEATHERMAP_API_KEY".into(),
            ));
        }
        if self.openweathermap.base_url.trim().is_empty() {
            return Err(PronosticoError::Config(
                "openweathermap.base_url must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Search for config.yaml in standard locations.
    /// Returns the path of the first found config, or the XDG default path if none found.
    fn find_config_path() -> Result<PathBuf> {
        let local_config = PathBuf::from("config/config.yaml");
        if local_config.exists() {
            return Ok(local_config);
        }

        Self::default_config_path()
    }

    /// Returns true if a config file can be found in any standard location.
    pub fn exists() -> bool {
        Self::find_config_path()
            .map(|p| p.exists())
            .unwrap_or(false)
    }

    /// Default path for writing new config files (~/.config/pronostico/config.yaml).
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| PronosticoError::Config("Cannot determine config directory".into()))?
            .join("pronostico");
        Ok(config_dir.join("config.yaml"))
    }

    /// Run interactive setup prompts and write config to disk.
    /// Returns the loaded Config and the path it was written to.
    pub fn setup_interactive() -> Result<(Self, PathBuf)> {
        let defaults = Config::default();

        println!();
        println!("No configuration found. Let's set up Pronóstico!");
        println!();

        println!("Location");
        let name: String = Input::new()
            .with_prompt("  Name")
            .default(defaults.location.name)
            .interact_text()
            .map_err(|e| PronosticoError::Config(format!("Input error: {}", e)))?;

        let latitude: f64 = Input::new()
            .with_prompt("  Latitude")
            .default(defaults.openweathermap.latitude)
            .interact_text()
            .map_err(|e| PronosticoError::Config(format!("Input error: {}", e)))?;

        let longitude: f64 = Input::new()
            .with_prompt("  Longitude")
            .default(defaults.openweathermap.longitude)
            .interact_text()
            .map_err(|e| PronosticoError::Config(format!("Input error: {}", e)))?;

        println!();

        println!("OpenWeatherMap (leave blank to read ${{OPENWEATHERMAP_API_KEY}})");
        let api_key: String = Password::new()
            .with_prompt("  API key")
            .allow_empty_password(true)
            .interact()
            .map_err(|e| PronosticoError::Config(format!("Input error: {}", e)))?;

        let api_key = if api_key.is_empty() {
            "${OPENWEATHERMAP_API_KEY}".to_string()
        } else {
            api_key
        };

        println!();

        let config = Config {
            location: LocationConfig { name },
            openweathermap: OpenWeatherMapConfig {
                api_key,
                base_url: default_base_url(),
                latitude,
                longitude,
            },
        };

        let config_path = Self::default_config_path()?;
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(&config)
            .map_err(|e| PronosticoError::Config(format!("Failed to serialize config: {}", e)))?;

        let content = format!(
            "# Pronóstico Configuration\n# Generated by `pronostico init`\n# Environment variable substitution (${{VAR}}) is supported.\n\n{}",
            yaml
        );
        std::fs::write(&config_path, content)?;

        println!("Configuration saved to {}", config_path.display());
        println!();

        // Re-read so an env-var placeholder key is resolved and validated
        let config = Self::load(Some(&config_path))?;
        Ok((config, config_path))
    }

    pub fn data_dir() -> Result<PathBuf> {
        if let Ok(dir) = std::env::var("PRONOSTICO_DATA_DIR") {
            let p = PathBuf::from(dir);
            std::fs::create_dir_all(&p)?;
            return Ok(p);
        }

        let data_dir = dirs::data_dir()
            .ok_or_else(|| PronosticoError::Config("Cannot determine data directory".into()))?
            .join("pronostico");

        std::fs::create_dir_all(&data_dir)?;
        Ok(data_dir)
    }

    pub fn log_path() -> Result<PathBuf> {
        Ok(Self::data_dir()?.join("pronostico.log"))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            location: LocationConfig {
                name: "Huejutla de Reyes".into(),
            },
            openweathermap: OpenWeatherMapConfig {
                api_key: String::new(),
                base_url: default_base_url(),
                latitude: 21.14,
                longitude: -98.42,
            },
        }
    }
}

/// Replace every `${VAR_NAME}` whose name `lookup` resolves; unknown names stay as-is.
fn substitute_vars(content: &str, lookup: impl Fn(&str) -> Option<String>) -> Result<String> {
    let re = regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| PronosticoError::Config(format!("Bad substitution pattern: {}", e)))?;

    let mut result = content.to_string();
    for cap in re.captures_iter(content) {
        let var_name = &cap[1];
        let placeholder = &cap[0];
        if let Some(value) = lookup(var_name) {
            result = result.replace(placeholder, &value);
        }
    }

    Ok(result)
}
