use serde::Deserialize;
use std::path::Path;

use crate::domain::{VisionRequest, DEFAULT_VISION_PICTURE1, DEFAULT_VISION_PICTURE2};

pub const ORIGIN_ENV: &str = "PICTURE_SEARCH_ORIGIN";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config file: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub endpoints: EndpointsConfig,
    pub vision: VisionConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub origin: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EndpointsConfig {
    pub pictures: String,
    pub search: String,
    pub vision: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct VisionConfig {
    pub picture1: String,
    pub picture2: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            origin: "http://localhost:8765".to_string(),
        }
    }
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            pictures: "/pictures".to_string(),
            search: "/search".to_string(),
            vision: "/vision".to_string(),
        }
    }
}

impl Default for VisionConfig {
    fn default() -> Self {
        Self {
            picture1: DEFAULT_VISION_PICTURE1.to_string(),
            picture2: DEFAULT_VISION_PICTURE2.to_string(),
        }
    }
}

impl AppConfig {
    /// Reads the YAML file when given, then applies environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_yaml(&std::fs::read_to_string(path)?)?,
            None => Self::default(),
        };
        Ok(config.with_env(|key| std::env::var(key).ok()))
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn with_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(origin) = lookup(ORIGIN_ENV).filter(|o| !o.trim().is_empty()) {
            self.server.origin = origin;
        }
        self
    }

    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.server.origin = origin.into();
        self
    }

    pub fn pictures_url(&self) -> String {
        self.url(&self.endpoints.pictures)
    }

    pub fn search_url(&self) -> String {
        self.url(&self.endpoints.search)
    }

    pub fn vision_url(&self) -> String {
        self.url(&self.endpoints.vision)
    }

    pub fn vision_request(&self) -> VisionRequest {
        VisionRequest::new(&self.vision.picture1, &self.vision.picture2)
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.server.origin.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.pictures_url(), "http://localhost:8765/pictures");
        assert_eq!(config.search_url(), "http://localhost:8765/search");
        assert_eq!(config.vision_url(), "http://localhost:8765/vision");
        assert_eq!(config.vision_request(), VisionRequest::default());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = "server:\n  origin: https://pictures.example.com/\nvision:\n  picture1: a.png\n";
        let config = AppConfig::from_yaml(yaml).unwrap();

        assert_eq!(config.search_url(), "https://pictures.example.com/search");
        assert_eq!(config.vision.picture1, "a.png");
        assert_eq!(config.vision.picture2, DEFAULT_VISION_PICTURE2);
        assert_eq!(config.endpoints.pictures, "/pictures");
    }

    #[test]
    fn test_invalid_yaml_is_rejected() {
        let err = AppConfig::from_yaml("server: [1, 2").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    #[test]
    fn test_env_and_flag_override_origin() {
        let config = AppConfig::default().with_env(|key| {
            (key == ORIGIN_ENV).then(|| "http://10.0.0.5:9000".to_string())
        });
        assert_eq!(config.pictures_url(), "http://10.0.0.5:9000/pictures");

        let config = config.with_origin("http://cli:1");
        assert_eq!(config.pictures_url(), "http://cli:1/pictures");
    }

    #[test]
    fn test_blank_env_is_ignored() {
        let config = AppConfig::default().with_env(|_| Some("  ".to_string()));
        assert_eq!(config.server.origin, "http://localhost:8765");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("picture-search.yaml");
        std::fs::write(&path, "endpoints:\n  search: /api/search\n").unwrap();

        let config = AppConfig::load(Some(&path)).unwrap();
        assert!(config.search_url().ends_with("/api/search"));
    }
}
