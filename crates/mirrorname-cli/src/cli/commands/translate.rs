//! CLI command: mirrorname translate
//!
//! Usage:
//!   mirrorname translate --cluster test1 -n default default-volume registries
//!   mirrorname translate --config mirrorname.yaml -n kube-system coredns --format json

use anyhow::{bail, Result};
use mirrorname_core::{NameTranslator, TranslatorConfig};
use serde::Serialize;

use crate::cli::args::{OutputFormat, TranslateArgs};
use crate::exit_codes::EXIT_SUCCESS;

#[derive(Debug, Serialize)]
pub struct TranslatedName {
    pub cluster: String,
    pub namespace: String,
    pub name: String,
    pub host_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_namespace: Option<String>,
}

/// Merge the optional config file with flag overrides.
pub fn resolve_config(args: &TranslateArgs) -> Result<TranslatorConfig> {
    let mut config = match (&args.config, &args.cluster) {
        (Some(path), _) => TranslatorConfig::from_file(path)?,
        (None, Some(cluster)) => TranslatorConfig::new(cluster.as_str()),
        (None, None) => {
            bail!("no cluster name given: pass --cluster, set MIRRORNAME_CLUSTER or use --config")
        }
    };

    if let Some(cluster) = &args.cluster {
        config.cluster_name = cluster.clone();
    }
    if let Some(ns) = &args.host_namespace {
        config.host_namespace = Some(ns.clone());
    }
    if let Some(max_length) = args.max_length {
        config.max_length = max_length;
    }

    config.validate()?;
    Ok(config)
}

pub fn translate_all(
    translator: &NameTranslator,
    namespace: &str,
    names: &[String],
) -> Vec<TranslatedName> {
    names
        .iter()
        .map(|name| TranslatedName {
            cluster: translator.cluster_name().to_string(),
            namespace: namespace.to_string(),
            name: name.clone(),
            host_name: translator.translate_name(namespace, name),
            host_namespace: translator.host_namespace().map(str::to_string),
        })
        .collect()
}

pub fn run(args: TranslateArgs) -> Result<i32> {
    let config = resolve_config(&args)?;
    tracing::debug!(
        cluster = %config.cluster_name,
        max_length = config.max_length,
        "resolved translator config"
    );
    let translator = config.into_translator()?;

    let namespace = args.namespace.as_deref().unwrap_or_default();
    let rows = translate_all(&translator, namespace, &args.names);

    match args.format {
        OutputFormat::Text => {
            for row in &rows {
                println!("{}", row.host_name);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
    }
    Ok(EXIT_SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn args() -> TranslateArgs {
        TranslateArgs {
            config: None,
            cluster: None,
            host_namespace: None,
            max_length: None,
            namespace: None,
            format: OutputFormat::Text,
            names: vec!["web".to_string()],
        }
    }

    #[test]
    fn cluster_flag_alone_is_enough() {
        let config = resolve_config(&TranslateArgs {
            cluster: Some("test1".into()),
            ..args()
        })
        .unwrap();
        assert_eq!(config, TranslatorConfig::new("test1"));
    }

    #[test]
    fn missing_cluster_is_an_error() {
        let err = resolve_config(&args()).unwrap_err();
        assert!(err.to_string().contains("no cluster name"), "{err}");
    }

    #[test]
    fn flags_override_file_values() {
        let dir = tempfile::tempdir().unwrap();
        let path: PathBuf = dir.path().join("mirrorname.yaml");
        std::fs::write(&path, "cluster_name: file\nmax_length: 40\n").unwrap();

        let config = resolve_config(&TranslateArgs {
            config: Some(path),
            max_length: Some(34),
            host_namespace: Some("k3k-file".into()),
            ..args()
        })
        .unwrap();
        assert_eq!(config.cluster_name, "file");
        assert_eq!(config.max_length, 34);
        assert_eq!(config.host_namespace.as_deref(), Some("k3k-file"));
    }

    #[test]
    fn override_is_validated() {
        let err = resolve_config(&TranslateArgs {
            cluster: Some("c".into()),
            max_length: Some(2),
            ..args()
        })
        .unwrap_err();
        assert!(err.to_string().contains("below the minimum"), "{err}");
    }

    #[test]
    fn rows_carry_identity_and_host_name() {
        let translator = NameTranslator::new("c").with_host_namespace("host");
        let rows = translate_all(&translator, "n", &["x".to_string()]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].host_name, "x-n-c-782b6e2b63");
        assert_eq!(rows[0].host_namespace.as_deref(), Some("host"));
    }
}
