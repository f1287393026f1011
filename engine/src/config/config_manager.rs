use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use super::{
    ConfigContentProvider, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

/// Caching front over a content provider and a serializer. The first
/// `get_config` reads and validates; a missing source yields the default.
pub struct ConfigManager<TConfig, TProvider = FileContentConfigProvider, TSerializer = YamlConfigSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TProvider: ConfigContentProvider,
    TSerializer: ConfigSerializer<TConfig>,
{
    content_provider: TProvider,
    serializer: TSerializer,
    cached: Mutex<Option<TConfig>>,
}

impl<TConfig> ConfigManager<TConfig, FileContentConfigProvider, YamlConfigSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(file_path: &str) -> Self {
        Self {
            content_provider: FileContentConfigProvider::new(file_path),
            serializer: YamlConfigSerializer::new(),
            cached: Mutex::new(None),
        }
    }
}

impl<TConfig, TProvider, TSerializer> ConfigManager<TConfig, TProvider, TSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TProvider: ConfigContentProvider,
    TSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(content_provider: TProvider, serializer: TSerializer) -> Self {
        Self {
            content_provider,
            serializer,
            cached: Mutex::new(None),
        }
    }

    pub fn get_config(&self) -> Result<TConfig, String> {
        let mut current = self.cached.lock().unwrap();

        if let Some(config) = current.as_ref() {
            return Ok(config.clone());
        }

        let Some(content) = self.content_provider.get_config_content()? else {
            return Ok(TConfig::default());
        };

        let config = self.serializer.deserialize(&content)?;
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        *current = Some(config.clone());
        Ok(config)
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), String> {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        let content = self.serializer.serialize(config)?;
        self.content_provider.set_config_content(&content)?;

        let mut current = self.cached.lock().unwrap();
        *current = Some(config.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    struct TestConfig {
        name: String,
        size: u32,
    }

    impl Default for TestConfig {
        fn default() -> Self {
            Self {
                name: "default".to_string(),
                size: 10,
            }
        }
    }

    impl Validate for TestConfig {
        fn validate(&self) -> Result<(), String> {
            if self.size == 0 {
                return Err("size must be positive".to_string());
            }
            Ok(())
        }
    }

    struct StaticProvider {
        content: Option<String>,
    }

    impl ConfigContentProvider for StaticProvider {
        fn get_config_content(&self) -> Result<Option<String>, String> {
            Ok(self.content.clone())
        }

        fn set_config_content(&self, _content: &str) -> Result<(), String> {
            Ok(())
        }
    }

    #[test]
    fn test_missing_content_yields_default() {
        let manager: ConfigManager<TestConfig, _, _> =
            ConfigManager::new(StaticProvider { content: None }, YamlConfigSerializer::new());
        assert_eq!(manager.get_config().unwrap(), TestConfig::default());
    }

    #[test]
    fn test_yaml_content_is_parsed_and_validated() {
        let provider = StaticProvider {
            content: Some("name: custom\nsize: 3\n".to_string()),
        };
        let manager: ConfigManager<TestConfig, _, _> =
            ConfigManager::new(provider, YamlConfigSerializer::new());
        let config = manager.get_config().unwrap();
        assert_eq!(config.name, "custom");
        assert_eq!(config.size, 3);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let provider = StaticProvider {
            content: Some("name: broken\nsize: 0\n".to_string()),
        };
        let manager: ConfigManager<TestConfig, _, _> =
            ConfigManager::new(provider, YamlConfigSerializer::new());
        assert!(manager.get_config().is_err());
    }

    #[test]
    fn test_serializer_round_trip() {
        let serializer = YamlConfigSerializer::new();
        let config = TestConfig {
            name: "round".to_string(),
            size: 42,
        };
        let content = ConfigSerializer::<TestConfig>::serialize(&serializer, &config).unwrap();
        let back: TestConfig = serializer.deserialize(&content).unwrap();
        assert_eq!(back, config);
    }
}
