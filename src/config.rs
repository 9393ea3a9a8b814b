use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use mealdeck_nutrition::UsdaClientConfig;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    #[serde(default)]
    pub nutrition: NutritionConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct NutritionConfig {
    #[serde(default = "default_nutrition_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_nutrition_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for NutritionConfig {
    fn default() -> Self {
        Self {
            base_url: default_nutrition_base_url(),
            api_key: String::new(),
            timeout_secs: default_nutrition_timeout_secs(),
        }
    }
}

impl From<&NutritionConfig> for UsdaClientConfig {
    fn from(config: &NutritionConfig) -> Self {
        UsdaClientConfig {
            api_key: config.api_key.to_owned(),
            base_url: config.base_url.to_owned(),
            timeout_secs: config.timeout_secs,
        }
    }
}

fn default_nutrition_base_url() -> String {
    mealdeck_nutrition::DEFAULT_BASE_URL.to_string()
}

fn default_nutrition_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Structured JSON logs instead of the console format
    #[serde(default)]
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Legacy variables (DATABASE_URL, USDA_API_KEY)
    /// 2. Environment variables (MEALDECK__DATABASE__URL, etc.)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("database.url", "sqlite:mealdeck.db")?
            .set_default("database.max_connections", 5)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Config file is optional
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("MEALDECK")
                .separator("__")
                .try_parsing(true),
        );

        if let Ok(database_url) = env::var("DATABASE_URL") {
            builder = builder.set_override("database.url", database_url)?;
        }
        if let Ok(api_key) = env::var("USDA_API_KEY") {
            builder = builder.set_override("nutrition.api_key", api_key)?;
        }

        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.database.url.trim().is_empty() {
            return Err("Database url must not be empty".to_string());
        }
        if self.database.max_connections < 1 {
            return Err("Database max_connections must be at least 1".to_string());
        }
        if !self.nutrition.base_url.starts_with("http://")
            && !self.nutrition.base_url.starts_with("https://")
        {
            return Err("Nutrition base_url must be an http(s) url".to_string());
        }
        if self.nutrition.timeout_secs == 0 {
            return Err("Nutrition timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> Config {
        Config {
            database: DatabaseConfig {
                url: "sqlite:test.db".to_string(),
                max_connections: 5,
            },
            nutrition: NutritionConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }

    #[test]
    fn test_validation_valid_config() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_validation_zero_connections() {
        let mut config = valid_config();
        config.database.max_connections = 0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_empty_url() {
        let mut config = valid_config();
        config.database.url = " ".to_string();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_nutrition() {
        let mut config = valid_config();
        config.nutrition.base_url = "ftp://example.com".to_string();
        assert!(config.validate().is_err());

        let mut config = valid_config();
        config.nutrition.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_usda_client_config() {
        let mut config = valid_config();
        config.nutrition.api_key = "DEMO_KEY".to_string();

        let usda = UsdaClientConfig::from(&config.nutrition);
        assert_eq!(usda.api_key, "DEMO_KEY");
        assert_eq!(usda.base_url, "https://api.nal.usda.gov/fdc/v1");
        assert_eq!(usda.timeout_secs, 10);
    }
}
