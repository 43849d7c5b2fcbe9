use std::time::Duration;

use serde::Deserialize;

use crate::error::SidecarError;

/// Where the topic sidecar listens. Read once when the client is built.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SidecarConfig {
    #[serde(default = "default_scheme")]
    pub scheme: String,
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Collection path for topics, e.g. `/topics`.
    #[serde(default = "default_topics_path")]
    pub topics_path: String,
    /// Header carrying the topic name on create.
    #[serde(default = "default_topic_name_header")]
    pub topic_name_header: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_scheme() -> String {
    "http".into()
}
fn default_host() -> String {
    "localhost".into()
}
fn default_port() -> u16 {
    8888
}
fn default_topics_path() -> String {
    "/topics".into()
}
fn default_topic_name_header() -> String {
    "Slug".into()
}
fn default_timeout_ms() -> u64 {
    10_000
}

impl Default for SidecarConfig {
    fn default() -> Self {
        Self {
            scheme: default_scheme(),
            host: default_host(),
            port: default_port(),
            topics_path: default_topics_path(),
            topic_name_header: default_topic_name_header(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl SidecarConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn base_url(&self) -> String {
        format!("{}://{}:{}", self.scheme, self.host, self.port)
    }

    /// Structural checks only; nothing here touches the network.
    pub fn validate(&self) -> Result<(), SidecarError> {
        if !matches!(self.scheme.as_str(), "http" | "https") {
            return Err(SidecarError::config("scheme", format!("unsupported scheme '{}'", self.scheme)));
        }
        if self.host.trim().is_empty() {
            return Err(SidecarError::config("host", "empty host"));
        }
        if self.port == 0 {
            return Err(SidecarError::config("port", "port must be non-zero"));
        }
        if !self.topics_path.starts_with('/') {
            return Err(SidecarError::config(
                "topics_path",
                format!("'{}' must start with '/'", self.topics_path),
            ));
        }
        if self.topic_name_header.trim().is_empty() {
            return Err(SidecarError::config("topic_name_header", "empty header name"));
        }
        if reqwest::header::HeaderName::from_bytes(self.topic_name_header.as_bytes()).is_err() {
            return Err(SidecarError::config(
                "topic_name_header",
                format!("'{}' is not a valid header name", self.topic_name_header),
            ));
        }
        if self.timeout_ms == 0 {
            return Err(SidecarError::config("timeout_ms", "timeout must be non-zero"));
        }
        Ok(())
    }
}
