pub mod create;
pub mod delete;

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use sidecar_admin::SidecarAdminClient;
use topic_admin_api::{AdminClientType, TopicAdmin};

use crate::config::AdminConfig;
use crate::error::CliError;

/// Build the admin backend named by the config.
pub fn build_admin(config: AdminConfig) -> Result<Arc<dyn TopicAdmin>, CliError> {
    match config.backend {
        AdminClientType::Custom => {
            let client = SidecarAdminClient::new(config.sidecar)?;
            Ok(Arc::new(client))
        }
        other => Err(CliError::UnsupportedBackend(other)),
    }
}

/// Token cancelled on Ctrl-C, so an in-flight call is abandoned.
pub fn ctrl_c_token() -> CancellationToken {
    let token = CancellationToken::new();
    let child = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("interrupted, cancelling topic operation");
            child.cancel();
        }
    });
    token
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_custom_backend_is_buildable() {
        for backend in [AdminClientType::Kafka, AdminClientType::EventHub] {
            let cfg = AdminConfig { backend, ..AdminConfig::default() };
            assert!(matches!(build_admin(cfg), Err(CliError::UnsupportedBackend(b)) if b == backend));
        }
        assert!(build_admin(AdminConfig::default()).is_ok());
    }
}
