/// Category of a topic operation result. Stands in for the broker admin
/// protocol error codes so callers can decide between retry, treat-as-done
/// and escalate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutcomeKind {
    /// Operation succeeded.
    NoError,
    /// No response was obtained and no transport error was reported.
    Unknown,
    /// Delete target does not exist.
    UnknownTopicOrPartition,
    /// Transport-level failure (connect, timeout, cancellation).
    NetworkException,
    /// Create target already exists.
    TopicAlreadyExists,
    /// Topic specification could not be encoded.
    InvalidConfig,
    /// Malformed caller input, or a status the mapping does not recognise.
    InvalidRequest,
}

impl OutcomeKind {
    /// Kafka protocol error code for this kind.
    ///
    /// See: <https://kafka.apache.org/protocol#protocol_error_codes>
    pub fn code(&self) -> i16 {
        match self {
            OutcomeKind::NoError => 0,
            OutcomeKind::Unknown => -1,
            OutcomeKind::UnknownTopicOrPartition => 3,
            OutcomeKind::NetworkException => 13,
            OutcomeKind::TopicAlreadyExists => 36,
            OutcomeKind::InvalidConfig => 40,
            OutcomeKind::InvalidRequest => 42,
        }
    }
}

impl std::fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutcomeKind::NoError => f.write_str("no_error"),
            OutcomeKind::Unknown => f.write_str("unknown"),
            OutcomeKind::UnknownTopicOrPartition => f.write_str("unknown_topic_or_partition"),
            OutcomeKind::NetworkException => f.write_str("network_exception"),
            OutcomeKind::TopicAlreadyExists => f.write_str("topic_already_exists"),
            OutcomeKind::InvalidConfig => f.write_str("invalid_config"),
            OutcomeKind::InvalidRequest => f.write_str("invalid_request"),
        }
    }
}

/// Result of a create or delete attempt.
///
/// Carries an `OutcomeKind` and a diagnostic message. Immutable once built:
/// the only "modifier" consumes `self` and returns a new value.
#[derive(Clone, PartialEq, Eq)]
pub struct TopicOutcome {
    kind: OutcomeKind,
    message: String,
}

impl TopicOutcome {
    pub fn new(kind: OutcomeKind, msg: impl Into<String>) -> Self {
        Self { kind, message: msg.into() }
    }

    pub fn no_error(msg: impl Into<String>) -> Self {
        Self::new(OutcomeKind::NoError, msg)
    }

    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::new(OutcomeKind::InvalidRequest, msg)
    }

    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::new(OutcomeKind::InvalidConfig, msg)
    }

    pub fn network(msg: impl Into<String>) -> Self {
        Self::new(OutcomeKind::NetworkException, msg)
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self::new(OutcomeKind::Unknown, msg)
    }

    pub fn kind(&self) -> OutcomeKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_success(&self) -> bool {
        self.kind == OutcomeKind::NoError
    }

    /// Desired state already holds: topic exists on create, or is gone on delete.
    pub fn is_already_satisfied(&self) -> bool {
        matches!(
            self.kind,
            OutcomeKind::TopicAlreadyExists | OutcomeKind::UnknownTopicOrPartition
        )
    }

    /// Tag the message with the topic it concerns.
    pub fn for_topic(self, topic: &str) -> Self {
        Self {
            kind: self.kind,
            message: format!("{} (topic '{topic}')", self.message),
        }
    }
}

impl std::fmt::Debug for TopicOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)
    }
}

impl std::fmt::Display for TopicOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kafka_codes() {
        assert_eq!(OutcomeKind::NoError.code(), 0);
        assert_eq!(OutcomeKind::Unknown.code(), -1);
        assert_eq!(OutcomeKind::UnknownTopicOrPartition.code(), 3);
        assert_eq!(OutcomeKind::TopicAlreadyExists.code(), 36);
        assert_eq!(OutcomeKind::InvalidRequest.code(), 42);
    }

    #[test]
    fn already_satisfied_covers_exists_and_missing() {
        assert!(TopicOutcome::new(OutcomeKind::TopicAlreadyExists, "").is_already_satisfied());
        assert!(TopicOutcome::new(OutcomeKind::UnknownTopicOrPartition, "").is_already_satisfied());
        assert!(!TopicOutcome::no_error("").is_already_satisfied());
        assert!(!TopicOutcome::invalid_request("").is_success());
    }

    #[test]
    fn for_topic_keeps_kind() {
        let outcome = TopicOutcome::network("boom").for_topic("orders");
        assert_eq!(outcome.kind(), OutcomeKind::NetworkException);
        assert_eq!(outcome.message(), "boom (topic 'orders')");
        assert_eq!(format!("{outcome:?}"), "[network_exception] boom (topic 'orders')");
    }
}
