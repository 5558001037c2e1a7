use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiConfig {
    pub api_keys: Option<ApiKeysConfig>,
    pub cors: Option<CorsConfig>,
    pub server: Option<ServerConfig>,
    pub gemini: Option<GeminiConfig>,
    pub dataset: Option<DatasetConfig>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_keys: None,
            cors: Some(CorsConfig {
                allowed_origins: vec![
                    "http://localhost:4200".to_string(),
                    "http://127.0.0.1:4200".to_string(),
                ],
            }),
            server: Some(ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            }),
            gemini: Some(GeminiConfig::default()),
            dataset: Some(DatasetConfig::default()),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiKeysConfig {
    pub gemini_api_key: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct GeminiConfig {
    pub model: String,
    pub temperature: Option<f32>,
    pub max_output_tokens: Option<u32>,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            model: "gemini-pro".to_string(),
            temperature: None,
            max_output_tokens: None,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DatasetConfig {
    pub path: String,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: "data/dataset.json".to_string(),
        }
    }
}

impl ApiConfig {
    pub fn load() -> Result<(Self, PathBuf), ConfigError> {
        let config_path = get_config_path();

        // Create config directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        // Create default config file if it doesn't exist
        if !config_path.exists() {
            let default_config = r#"
[api_keys]
# gemini_api_key = "your-gemini-key"

[cors]
allowed_origins = ["http://localhost:4200", "http://127.0.0.1:4200"]

[server]
host = "127.0.0.1"
port = 8080

[gemini]
model = "gemini-pro"
# temperature = 0.2
# max_output_tokens = 1024

[dataset]
path = "data/dataset.json"
"#;
            std::fs::write(&config_path, default_config).map_err(|e| {
                ConfigError::Message(format!("Failed to write default config: {e}"))
            })?;
        }

        let builder = Config::builder()
            .add_source(File::from(config_path.clone()))
            .build()?;

        let mut config: ApiConfig = builder.try_deserialize()?;

        // GEMINI_API_KEY in the environment overrides the config file, so
        // the key never has to live on disk.
        if let Ok(key) = std::env::var("GEMINI_API_KEY") {
            if !key.is_empty() {
                config
                    .api_keys
                    .get_or_insert(ApiKeysConfig {
                        gemini_api_key: None,
                    })
                    .gemini_api_key = Some(key);
            }
        }

        Ok((config, config_path))
    }

    pub fn gemini_api_key(&self) -> Option<&str> {
        self.api_keys
            .as_ref()
            .and_then(|keys| keys.gemini_api_key.as_deref())
    }
}

pub fn get_config_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("geoquery").join("api.toml")
    } else {
        PathBuf::from("api.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ApiConfig::default();

        let server = config.server.unwrap();
        assert_eq!(server.host, "127.0.0.1");
        assert_eq!(server.port, 8080);

        assert_eq!(config.gemini.unwrap().model, "gemini-pro");
        assert_eq!(config.dataset.unwrap().path, "data/dataset.json");
        assert!(config.api_keys.is_none());
    }

    #[test]
    fn test_deserialize_partial_toml() {
        let config: ApiConfig = toml::from_str(
            r#"
[api_keys]
gemini_api_key = "abc123"

[server]
host = "0.0.0.0"
port = 9000
"#,
        )
        .unwrap();

        assert_eq!(config.gemini_api_key(), Some("abc123"));
        assert_eq!(config.server.unwrap().port, 9000);
        assert!(config.cors.is_none());
    }
}
