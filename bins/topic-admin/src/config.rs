use clap::{Args, Parser, Subcommand};
use serde::Deserialize;

use sidecar_admin::SidecarConfig;
use topic_admin_api::{AdminClientType, TopicDetail};

use crate::error::CliError;

#[derive(Parser)]
#[command(name = "topic-admin", about = "Create and delete Kafka topics through the admin backend")]
pub struct Cli {
    /// Path to the TOML config file
    #[arg(long, global = true, default_value = "topic-admin.toml", env = "TOPIC_ADMIN_CONFIG")]
    pub config: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a topic
    Create(CreateArgs),
    /// Delete a topic
    Delete(DeleteArgs),
}

#[derive(Args, Clone, Debug)]
pub struct CreateArgs {
    pub name: String,
    #[arg(long, default_value_t = 1)]
    pub partitions: i32,
    #[arg(long, default_value_t = 1)]
    pub replication_factor: i16,
    /// Topic config entry, `key=value` or bare `key` for the broker default
    #[arg(long = "config-entry", value_parser = parse_config_entry)]
    pub config_entries: Vec<(String, Option<String>)>,
}

impl CreateArgs {
    pub fn detail(&self) -> TopicDetail {
        self.config_entries
            .iter()
            .cloned()
            .fold(TopicDetail::new(self.partitions, self.replication_factor), |d, (k, v)| {
                d.with_config(k, v)
            })
    }
}

#[derive(Args, Clone, Debug)]
pub struct DeleteArgs {
    pub name: String,
}

fn parse_config_entry(raw: &str) -> Result<(String, Option<String>), String> {
    let (key, value) = match raw.split_once('=') {
        Some((k, v)) => (k.trim(), Some(v.to_string())),
        None => (raw.trim(), None),
    };
    if key.is_empty() {
        return Err(format!("config entry '{raw}' has an empty key"));
    }
    Ok((key.to_string(), value))
}

// ---- TOML Config ----

#[derive(Debug, Default, Deserialize)]
pub struct AdminConfig {
    #[serde(default)]
    pub backend: AdminClientType,
    #[serde(default)]
    pub sidecar: SidecarConfig,
}

impl AdminConfig {
    /// Load from `path`; a missing file means all defaults.
    pub fn load(path: &str) -> Result<Self, CliError> {
        if !std::path::Path::new(path).exists() {
            tracing::info!(config = %path, "config file not found, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .map_err(|e| CliError::Config { context: "read", detail: format!("'{path}': {e}") })?;
        Self::parse(&content)
            .map_err(|detail| CliError::Config { context: "parse", detail: format!("'{path}': {detail}") })
    }

    fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_create_with_entries() {
        let cli = Cli::try_parse_from([
            "topic-admin",
            "--config",
            "x.toml",
            "create",
            "orders",
            "--partitions",
            "3",
            "--replication-factor",
            "2",
            "--config-entry",
            "retention.ms=60000",
            "--config-entry",
            "cleanup.policy",
        ])
        .unwrap();
        assert_eq!(cli.config, "x.toml");
        let Commands::Create(args) = cli.command else {
            panic!("expected create");
        };
        let detail = args.detail();
        assert_eq!(detail.num_partitions, 3);
        assert_eq!(detail.replication_factor, 2);
        assert_eq!(detail.config_entries["retention.ms"].as_deref(), Some("60000"));
        assert_eq!(detail.config_entries["cleanup.policy"], None);
    }

    #[test]
    fn rejects_empty_entry_key() {
        assert!(parse_config_entry("=1").is_err());
    }

    #[test]
    fn parses_delete() {
        let cli = Cli::try_parse_from(["topic-admin", "delete", "orders"]).unwrap();
        assert!(matches!(cli.command, Commands::Delete(ref a) if a.name == "orders"));
    }

    #[test]
    fn toml_sidecar_section() {
        let cfg = AdminConfig::parse(
            r#"
            backend = "custom"

            [sidecar]
            host = "sidecar.local"
            port = 9090
            timeout_ms = 500
            "#,
        )
        .unwrap();
        assert_eq!(cfg.backend, AdminClientType::Custom);
        assert_eq!(cfg.sidecar.base_url(), "http://sidecar.local:9090");
        assert_eq!(cfg.sidecar.topics_path, "/topics");
        assert_eq!(cfg.sidecar.timeout_ms, 500);
    }

    #[test]
    fn empty_toml_is_defaults() {
        let cfg = AdminConfig::parse("").unwrap();
        assert_eq!(cfg.backend, AdminClientType::Custom);
        assert_eq!(cfg.sidecar, SidecarConfig::default());
    }

    #[test]
    fn missing_file_is_defaults() {
        let cfg = AdminConfig::load("/nonexistent/topic-admin.toml").unwrap();
        assert_eq!(cfg.sidecar, SidecarConfig::default());
    }
}
