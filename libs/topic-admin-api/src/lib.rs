pub mod error;
pub mod refmap;
pub mod topic;

use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

pub use error::{OutcomeKind, TopicOutcome};
pub use refmap::{RefMapError, RefMapper, RefMapperFactory, ResourceRef, TopicGroup};
pub use topic::TopicDetail;

// ════════════════════════════════════════════════════════════════
//  Operation
// ════════════════════════════════════════════════════════════════

/// Topic lifecycle operation an outcome belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Create,
    Delete,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Create => "create",
            Operation::Delete => "delete",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ════════════════════════════════════════════════════════════════
//  Backend selection
// ════════════════════════════════════════════════════════════════

/// Which admin backend manages topics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminClientType {
    /// Broker-native admin protocol.
    Kafka,
    /// Azure Event Hubs namespace management.
    #[serde(alias = "eventhub")]
    EventHub,
    /// REST pass-through to a co-located sidecar.
    #[default]
    Custom,
}

impl std::fmt::Display for AdminClientType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdminClientType::Kafka => f.write_str("kafka"),
            AdminClientType::EventHub => f.write_str("event_hub"),
            AdminClientType::Custom => f.write_str("custom"),
        }
    }
}

// ════════════════════════════════════════════════════════════════
//  TopicAdmin
// ════════════════════════════════════════════════════════════════

pub type AdminFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, thiserror::Error)]
#[error("close admin client: {0}")]
pub struct CloseError(pub String);

/// Topic lifecycle capability. Every backend implements it; callers hold an
/// `Arc<dyn TopicAdmin>` and never see the concrete type.
///
/// Failures are reported through the returned `TopicOutcome`, never as a
/// panic. `cancel` bounds the call: once cancelled, an in-flight request is
/// abandoned and reported as `NetworkException`.
pub trait TopicAdmin: Send + Sync {
    fn create_topic<'a>(
        &'a self,
        cancel: &'a CancellationToken,
        name: &'a str,
        detail: Option<&'a TopicDetail>,
    ) -> AdminFuture<'a, TopicOutcome>;

    fn delete_topic<'a>(
        &'a self,
        cancel: &'a CancellationToken,
        name: &'a str,
    ) -> AdminFuture<'a, TopicOutcome>;

    /// Release backend resources.
    fn close(&self) -> Result<(), CloseError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_type_parses_snake_case() {
        #[derive(Deserialize)]
        struct Wrapper {
            backend: AdminClientType,
        }
        let parse = |s: &str| serde_json::from_str::<Wrapper>(s).unwrap().backend;
        assert_eq!(parse(r#"{"backend":"custom"}"#), AdminClientType::Custom);
        assert_eq!(parse(r#"{"backend":"event_hub"}"#), AdminClientType::EventHub);
        assert_eq!(parse(r#"{"backend":"eventhub"}"#), AdminClientType::EventHub);
        assert_eq!(parse(r#"{"backend":"kafka"}"#), AdminClientType::Kafka);
    }

    struct Noop;

    impl TopicAdmin for Noop {
        fn create_topic<'a>(
            &'a self,
            _cancel: &'a CancellationToken,
            name: &'a str,
            _detail: Option<&'a TopicDetail>,
        ) -> AdminFuture<'a, TopicOutcome> {
            Box::pin(async move { TopicOutcome::no_error(format!("created {name}")) })
        }

        fn delete_topic<'a>(
            &'a self,
            _cancel: &'a CancellationToken,
            name: &'a str,
        ) -> AdminFuture<'a, TopicOutcome> {
            Box::pin(async move { TopicOutcome::no_error(format!("deleted {name}")) })
        }

        fn close(&self) -> Result<(), CloseError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn trait_is_object_safe() {
        let admin: std::sync::Arc<dyn TopicAdmin> = std::sync::Arc::new(Noop);
        let cancel = CancellationToken::new();
        let outcome = admin.create_topic(&cancel, "orders", None).await;
        assert_eq!(outcome.message(), "created orders");
        assert!(admin.close().is_ok());
    }
}
