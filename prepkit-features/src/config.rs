//! YAML configuration files for data-preparation pipelines.
//!
//! `ConfigLoader` reads and writes mappings relative to a config directory.
//! Failures are logged and then returned to the caller unchanged.

use crate::error::FeatureError;
use crate::features::registry::FeatureRegistry;
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{error, info};

/// Feature layout of a dataset as written in a pipeline config.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureSchemaConfig {
    /// Numerical feature columns.
    #[serde(default)]
    pub numerical: Vec<String>,
    /// Categorical feature columns.
    #[serde(default)]
    pub categorical: Vec<String>,
    /// Prediction target column.
    pub target: String,
}

/// Loads and saves config files under a fixed directory.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config_dir: PathBuf,
}

impl ConfigLoader {
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
        }
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Load `filename` as a mapping. An empty document yields an empty mapping.
    pub fn parse(&self, filename: &str) -> Result<Mapping, FeatureError> {
        let result = self.read_yaml::<Value>(filename).and_then(|value| match value {
            Value::Null => Ok(Mapping::new()),
            Value::Mapping(map) => Ok(map),
            other => Err(FeatureError::Parse(serde_yaml::Error::custom(format!(
                "config root must be a mapping, got {}",
                yaml_kind(&other)
            )))),
        });
        log_load(filename, &result);
        result
    }

    /// Load `filename` into a typed config.
    pub fn parse_as<T: DeserializeOwned>(&self, filename: &str) -> Result<T, FeatureError> {
        let result = self.read_yaml(filename);
        log_load(filename, &result);
        result
    }

    /// Build a registry from a YAML file holding a [`FeatureSchemaConfig`].
    pub fn load_registry(&self, filename: &str) -> Result<FeatureRegistry, FeatureError> {
        let schema: FeatureSchemaConfig = self.parse_as(filename)?;
        FeatureRegistry::from_config(&schema)
    }

    /// Write `config` to `filename` as block-style YAML.
    ///
    /// The document is staged in an anonymous temp file inside the config
    /// dir and renamed over the target; on failure the temp file is removed.
    pub fn save(&self, config: &Mapping, filename: &str) -> Result<(), FeatureError> {
        self.save_as(config, filename)
    }

    pub fn save_as<T: Serialize>(&self, config: &T, filename: &str) -> Result<(), FeatureError> {
        let path = self.config_dir.join(filename);
        let result = write_yaml(&self.config_dir, &path, config);
        match &result {
            Ok(()) => info!(file = filename, "Config saved"),
            Err(e) => error!(file = filename, error = %e, "Failed to save config"),
        }
        result
    }

    fn read_yaml<T: DeserializeOwned>(&self, filename: &str) -> Result<T, FeatureError> {
        let path = self.config_dir.join(filename);
        if !path.exists() {
            return Err(FeatureError::ConfigNotFound(path));
        }

        let content = std::fs::read_to_string(&path)?;
        Ok(serde_yaml::from_str(&content)?)
    }
}

fn log_load<T>(filename: &str, result: &Result<T, FeatureError>) {
    match result {
        Ok(_) => info!(file = filename, "Config loaded"),
        Err(FeatureError::ConfigNotFound(path)) => {
            error!(path = %path.display(), "Config file not found")
        }
        Err(e) => error!(file = filename, error = %e, "Failed to load config"),
    }
}

fn yaml_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}

fn write_yaml<T: Serialize>(dir: &Path, path: &Path, config: &T) -> Result<(), FeatureError> {
    let content = serde_yaml::to_string(config)?;
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_config_defaults_lists() {
        let config: FeatureSchemaConfig = serde_yaml::from_str("target: label\n").unwrap();
        assert!(config.numerical.is_empty());
        assert!(config.categorical.is_empty());
        assert_eq!(config.target, "label");
    }

    #[test]
    fn test_schema_config_requires_target() {
        let result = serde_yaml::from_str::<FeatureSchemaConfig>("numerical: [age]\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let loader = ConfigLoader::new("/nonexistent/prepkit");
        let err = loader.parse("features.yaml").unwrap_err();
        match err {
            FeatureError::ConfigNotFound(path) => {
                assert!(path.ends_with("features.yaml"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[derive(Clone, Default)]
    struct LogBuffer(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_non_mapping_root_logs_only_failure() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join("list.yaml"), "- a\n- b\n").unwrap();
        let loader = ConfigLoader::new(dir.path());

        let logs = LogBuffer::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        let result = tracing::subscriber::with_default(subscriber, || loader.parse("list.yaml"));

        assert!(matches!(result, Err(FeatureError::Parse(_))));
        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("Failed to load config"));
        assert!(!output.contains("Config loaded"));
    }

    #[test]
    fn test_config_dir_accessor() {
        let loader = ConfigLoader::new("conf");
        assert_eq!(loader.config_dir(), Path::new("conf"));
    }
}
