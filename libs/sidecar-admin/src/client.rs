use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use topic_admin_api::{
    AdminFuture, CloseError, Operation, TopicAdmin, TopicDetail, TopicOutcome,
};

use crate::classify::map_response;
use crate::config::SidecarConfig;
use crate::error::SidecarError;
use crate::request::{create_request, delete_request, encode_detail};
use crate::transport::{HttpTransport, SidecarRequest, SidecarTransport};

/// Topic admin backend that passes create/delete through to a REST sidecar
/// running next to the controller.
///
/// Holds no per-call state, so one instance can serve concurrent callers.
pub struct SidecarAdminClient {
    config: SidecarConfig,
    transport: Arc<dyn SidecarTransport>,
}

/// `.` and `..` would be collapsed as dot segments by the URL parser and
/// address a resource outside the topics collection.
fn is_valid_name(name: &str) -> bool {
    !matches!(name, "" | "." | "..")
}

const _: fn() = || {
    fn assert_admin<T: TopicAdmin>() {}
    assert_admin::<SidecarAdminClient>();
};

impl SidecarAdminClient {
    pub fn new(config: SidecarConfig) -> Result<Self, SidecarError> {
        config.validate()?;
        let transport = HttpTransport::new(&config)?;
        tracing::debug!(
            url = %config.base_url(),
            timeout_ms = config.timeout_ms,
            "created sidecar admin client"
        );
        Ok(Self { config, transport: Arc::new(transport) })
    }

    /// Same as `new`, with a caller-supplied transport.
    pub fn with_transport(
        config: SidecarConfig,
        transport: Arc<dyn SidecarTransport>,
    ) -> Result<Self, SidecarError> {
        config.validate()?;
        Ok(Self { config, transport })
    }

    pub async fn create(
        &self,
        cancel: &CancellationToken,
        name: &str,
        detail: Option<&TopicDetail>,
    ) -> TopicOutcome {
        let Some(detail) = detail.filter(|_| is_valid_name(name)) else {
            tracing::warn!(topic = %name, detail = ?detail, "received empty or invalid topic name, or missing detail");
            return TopicOutcome::invalid_request("received empty/nil topic name and / or detail");
        };

        let body = match encode_detail(name, detail) {
            Ok(body) => body,
            Err(outcome) => {
                tracing::error!(topic = %name, detail = ?detail, "failed to encode create topic body");
                return outcome;
            }
        };

        let request = create_request(&self.config, name, body);
        self.dispatch(cancel, Operation::Create, name, request).await
    }

    pub async fn delete(&self, cancel: &CancellationToken, name: &str) -> TopicOutcome {
        if !is_valid_name(name) {
            tracing::warn!(topic = %name, "received empty or invalid topic name");
            return TopicOutcome::invalid_request("received empty/nil topic name");
        }

        let request = delete_request(&self.config, name);
        self.dispatch(cancel, Operation::Delete, name, request).await
    }

    /// Nothing to release: the HTTP client is dropped with the adapter.
    pub fn close(&self) -> Result<(), CloseError> {
        Ok(())
    }

    async fn dispatch(
        &self,
        cancel: &CancellationToken,
        operation: Operation,
        name: &str,
        request: SidecarRequest,
    ) -> TopicOutcome {
        tracing::debug!(topic = %name, %operation, method = %request.method, url = %request.url, "sending sidecar request");

        let sent = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                tracing::warn!(topic = %name, %operation, "sidecar request cancelled");
                return TopicOutcome::network(format!(
                    "http request for {operation} of topic '{name}' cancelled"
                ));
            }
            result = self.transport.send(request) => result,
        };

        let response = match sent {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(topic = %name, %operation, error = %e, "sidecar request failed");
                return TopicOutcome::network(format!(
                    "failed to make http request for {operation} of topic '{name}': {e}"
                ));
            }
        };

        let outcome = map_response(operation, response).await.for_topic(name);
        tracing::info!(topic = %name, %operation, kind = %outcome.kind(), "sidecar topic operation finished");
        outcome
    }
}

impl TopicAdmin for SidecarAdminClient {
    fn create_topic<'a>(
        &'a self,
        cancel: &'a CancellationToken,
        name: &'a str,
        detail: Option<&'a TopicDetail>,
    ) -> AdminFuture<'a, TopicOutcome> {
        Box::pin(self.create(cancel, name, detail))
    }

    fn delete_topic<'a>(
        &'a self,
        cancel: &'a CancellationToken,
        name: &'a str,
    ) -> AdminFuture<'a, TopicOutcome> {
        Box::pin(self.delete(cancel, name))
    }

    fn close(&self) -> Result<(), CloseError> {
        SidecarAdminClient::close(self)
    }
}
