//! Translator configuration.
//!
//! ```yaml
//! cluster_name: test1
//! host_namespace: k3k-test1
//! max_length: 64
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::concat::{DEFAULT_MAX_LENGTH, MIN_MAX_LENGTH};
use crate::errors::NameError;
use crate::translator::NameTranslator;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslatorConfig {
    /// Virtual cluster whose objects are mirrored.
    pub cluster_name: String,

    /// Host namespace receiving the mirrored objects.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_namespace: Option<String>,

    /// Name length budget; shortened names are one shorter than this.
    #[serde(default = "default_max_length")]
    pub max_length: usize,
}

fn default_max_length() -> usize {
    DEFAULT_MAX_LENGTH
}

impl TranslatorConfig {
    pub fn new(cluster_name: impl Into<String>) -> Self {
        Self {
            cluster_name: cluster_name.into(),
            host_namespace: None,
            max_length: DEFAULT_MAX_LENGTH,
        }
    }

    /// Load and validate a config from a YAML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read translator config: {}", path.display()))?;
        Self::from_yaml(&content)
            .with_context(|| format!("invalid translator config: {}", path.display()))
    }

    /// Parse and validate a config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self =
            serde_yaml::from_str(yaml).context("failed to parse translator config YAML")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), NameError> {
        if self.cluster_name.is_empty() {
            return Err(NameError::EmptyClusterName);
        }
        if self.max_length < MIN_MAX_LENGTH {
            return Err(NameError::MaxLengthTooSmall {
                got: self.max_length,
                min: MIN_MAX_LENGTH,
            });
        }
        Ok(())
    }

    pub fn into_translator(self) -> Result<NameTranslator, NameError> {
        self.validate()?;
        let mut translator =
            NameTranslator::new(self.cluster_name).with_max_length(self.max_length)?;
        if let Some(ns) = self.host_namespace {
            translator = translator.with_host_namespace(ns);
        }
        Ok(translator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn minimal_yaml_uses_defaults() {
        let config = TranslatorConfig::from_yaml("cluster_name: test1\n").unwrap();
        assert_eq!(config, TranslatorConfig::new("test1"));
        assert_eq!(config.max_length, 64);
        assert!(config.host_namespace.is_none());
    }

    #[test]
    fn full_yaml_builds_translator() {
        let yaml = r#"
cluster_name: test1
host_namespace: k3k-test1
max_length: 34
"#;
        let trans = TranslatorConfig::from_yaml(yaml)
            .unwrap()
            .into_translator()
            .unwrap();
        assert_eq!(trans.cluster_name(), "test1");
        assert_eq!(trans.host_namespace(), Some("k3k-test1"));
        assert_eq!(trans.max_length(), 34);
        assert_eq!(
            trans.translate_name("default", "default-volume"),
            "default-volume-default-test-a3777"
        );
    }

    #[test]
    fn rejects_empty_cluster_name() {
        let err = TranslatorConfig::from_yaml("cluster_name: ''\n").unwrap_err();
        assert!(
            err.to_string().contains("cluster name must not be empty"),
            "{err:#}"
        );
    }

    #[test]
    fn rejects_small_budget() {
        let err = TranslatorConfig::from_yaml("cluster_name: c\nmax_length: 4\n").unwrap_err();
        assert_eq!(
            err.downcast_ref::<NameError>(),
            Some(&NameError::MaxLengthTooSmall { got: 4, min: 8 })
        );
    }

    #[test]
    fn missing_cluster_name_is_a_parse_error() {
        let err = TranslatorConfig::from_yaml("max_length: 64\n").unwrap_err();
        assert!(err.to_string().contains("failed to parse"), "{err:#}");
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let config = TranslatorConfig::from_yaml("cluster_name: c\nmode: shared\n").unwrap();
        assert_eq!(config.cluster_name, "c");
    }

    #[test]
    fn loads_from_file() {
        let mut tmp = NamedTempFile::new().unwrap();
        write!(tmp, "cluster_name: from-file\nmax_length: 40\n").unwrap();
        let config = TranslatorConfig::from_file(tmp.path()).unwrap();
        assert_eq!(config.cluster_name, "from-file");
        assert_eq!(config.max_length, 40);
    }

    #[test]
    fn missing_file_reports_path() {
        let path = Path::new("/nonexistent/mirrorname.yaml");
        let err = TranslatorConfig::from_file(path).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/mirrorname.yaml"), "{err:#}");
    }
}
