use serde::Deserialize;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub artifacts: ArtifactsConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory the dashboard page is served from
    pub public_dir: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Locations of the fitted artifacts produced by the training pipeline
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ArtifactsConfig {
    pub scaler_path: String,
    pub expander_path: String,
    pub model_path: String,
}

fn default_public_dir() -> String {
    "public".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            public_dir: default_public_dir(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for ArtifactsConfig {
    fn default() -> Self {
        Self {
            scaler_path: "artifacts/scaler.json".to_string(),
            expander_path: "artifacts/poly_features.json".to_string(),
            model_path: "artifacts/poly_model.json".to_string(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.public_dir, "public");
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert_eq!(config.artifacts.model_path, "artifacts/poly_model.json");
    }

    #[test]
    fn test_partial_sources_fall_back_to_defaults() {
        let config: AppConfig = config::Config::builder()
            .add_source(config::File::from_str(
                "[server]\nhost = \"127.0.0.1\"\n[logging]\nlevel = \"debug\"\nformat = \"json\"\n",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.artifacts.scaler_path, "artifacts/scaler.json");
    }
}
