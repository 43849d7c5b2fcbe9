//! Extension point mapping a custom-resource reference to the Kafka topic
//! and consumer group it drives. Declared here; implementations live with
//! whoever owns the resource kinds.

/// Reference to the resource whose offsets are being managed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRef {
    pub kind: String,
    pub namespace: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicGroup {
    pub topic: String,
    pub group: String,
}

#[derive(Debug, thiserror::Error)]
pub enum RefMapError {
    #[error("unsupported ref kind '{0}'")]
    UnsupportedKind(String),

    #[error("ref '{namespace}/{name}' not found")]
    NotFound { namespace: String, name: String },

    #[error("{0}")]
    Other(String),
}

/// Maps a `ResourceRef` to its `(topic, group)` pair.
pub trait RefMapper: Send + Sync {
    fn map_ref(&self, reference: &ResourceRef) -> Result<TopicGroup, RefMapError>;
}

/// Deferred construction of a `RefMapper`, once the surrounding runtime
/// state it needs is available.
pub trait RefMapperFactory: Send + Sync {
    fn create(&self) -> Box<dyn RefMapper>;
}
