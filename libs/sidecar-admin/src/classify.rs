//! Mapping of sidecar HTTP responses onto topic outcomes.
//!
//! The mapping is lossy on purpose: only the two statuses meaning "desired
//! state already holds" get their own kind, everything else collapses to
//! `InvalidRequest`. Callers' retry policies depend on this staying stable.

use topic_admin_api::{Operation, OutcomeKind, TopicOutcome};

use crate::transport::{ResponseBody, SidecarResponse};

/// Classify a sidecar reply. `status == None` means no response object.
pub fn classify(operation: Operation, status: Option<u16>, body: &str) -> TopicOutcome {
    let Some(status) = status else {
        return TopicOutcome::unknown("received no http response");
    };

    let (kind, verb) = match status {
        200..=299 => (OutcomeKind::NoError, "succeeded"),
        404 if operation == Operation::Delete => (OutcomeKind::UnknownTopicOrPartition, "returned"),
        409 if operation == Operation::Create => (OutcomeKind::TopicAlreadyExists, "returned"),
        _ => (OutcomeKind::InvalidRequest, "failed"),
    };

    TopicOutcome::new(
        kind,
        format!(
            "custom sidecar topic '{operation}' operation {verb} with status code '{status}' and body '{body}'"
        ),
    )
}

/// Closes the wrapped body exactly once, when dropped.
pub(crate) struct BodyGuard {
    body: Box<dyn ResponseBody>,
}

impl BodyGuard {
    pub(crate) fn new(body: Box<dyn ResponseBody>) -> Self {
        Self { body }
    }

    /// Read the whole body. A read failure is logged and yields empty text.
    pub(crate) async fn read_text(&mut self) -> String {
        match self.body.read_all().await {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read sidecar response body");
                String::new()
            }
        }
    }
}

impl Drop for BodyGuard {
    fn drop(&mut self) {
        if let Err(e) = self.body.close() {
            tracing::error!(error = %e, "failed to close sidecar response body");
        }
    }
}

/// Read and classify a transport result that did not fail.
pub(crate) async fn map_response(operation: Operation, response: Option<SidecarResponse>) -> TopicOutcome {
    let Some(response) = response else {
        return classify(operation, None, "");
    };
    let status = response.status;
    let mut body = BodyGuard::new(response.body);
    let text = body.read_text().await;
    classify(operation, Some(status), &text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_2xx_is_success_for_both_operations() {
        for status in 200..=299 {
            for op in [Operation::Create, Operation::Delete] {
                assert_eq!(classify(op, Some(status), "ok").kind(), OutcomeKind::NoError);
            }
        }
    }

    #[test]
    fn not_found_is_special_only_for_delete() {
        assert_eq!(
            classify(Operation::Delete, Some(404), "gone").kind(),
            OutcomeKind::UnknownTopicOrPartition
        );
        assert_eq!(
            classify(Operation::Create, Some(404), "gone").kind(),
            OutcomeKind::InvalidRequest
        );
    }

    #[test]
    fn conflict_is_special_only_for_create() {
        assert_eq!(
            classify(Operation::Create, Some(409), "exists").kind(),
            OutcomeKind::TopicAlreadyExists
        );
        assert_eq!(
            classify(Operation::Delete, Some(409), "exists").kind(),
            OutcomeKind::InvalidRequest
        );
    }

    #[test]
    fn other_statuses_fail_with_traceable_message() {
        for status in [100, 199, 300, 301, 400, 401, 403, 410, 418, 500, 502, 503, 599] {
            for op in [Operation::Create, Operation::Delete] {
                let outcome = classify(op, Some(status), "sidecar says no");
                assert_eq!(outcome.kind(), OutcomeKind::InvalidRequest, "status {status}");
                assert!(outcome.message().contains(&status.to_string()));
                assert!(outcome.message().contains("sidecar says no"));
                assert!(outcome.message().contains(op.as_str()));
            }
        }
    }

    #[test]
    fn missing_response_is_unknown() {
        let outcome = classify(Operation::Create, None, "");
        assert_eq!(outcome.kind(), OutcomeKind::Unknown);
        assert_eq!(outcome.message(), "received no http response");
    }

    #[test]
    fn message_format() {
        assert_eq!(
            classify(Operation::Delete, Some(404), "not found").message(),
            "custom sidecar topic 'delete' operation returned with status code '404' and body 'not found'"
        );
    }
}
