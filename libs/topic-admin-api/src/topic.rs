use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Configuration of a topic to be created, in the shape the sidecar expects.
///
/// `config_entries` values are optional: a `None` entry asks the sidecar to
/// apply the broker default for that key.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicDetail {
    pub num_partitions: i32,
    pub replication_factor: i16,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub replica_assignment: BTreeMap<i32, Vec<i32>>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub config_entries: BTreeMap<String, Option<String>>,
}

impl TopicDetail {
    pub fn new(num_partitions: i32, replication_factor: i16) -> Self {
        Self {
            num_partitions,
            replication_factor,
            ..Self::default()
        }
    }

    pub fn with_config(mut self, key: impl Into<String>, value: Option<String>) -> Self {
        self.config_entries.insert(key.into(), value);
        self
    }

    pub fn with_replicas(mut self, partition: i32, brokers: Vec<i32>) -> Self {
        self.replica_assignment.insert(partition, brokers);
        self
    }
}
