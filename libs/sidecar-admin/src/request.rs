use reqwest::Method;
use serde::Serialize;

use topic_admin_api::TopicOutcome;

use crate::config::SidecarConfig;
use crate::transport::SidecarRequest;

/// Topics collection URL, or a single topic under it when `topic` is given.
pub fn topics_url(config: &SidecarConfig, topic: Option<&str>) -> String {
    let mut url = format!("{}{}", config.base_url(), config.topics_path);
    if let Some(name) = topic.filter(|n| !n.is_empty()) {
        url.push('/');
        url.push_str(&urlencoding::encode(name));
    }
    url
}

/// JSON body for a create request. Encoding failure is `InvalidConfig`.
pub fn encode_detail<T: Serialize + ?Sized>(topic: &str, detail: &T) -> Result<Vec<u8>, TopicOutcome> {
    serde_json::to_vec(detail).map_err(|e| {
        TopicOutcome::invalid_config(format!(
            "failed to marshal request body for creation of topic '{topic}': {e}"
        ))
    })
}

/// POST to the collection; the name travels in a header and the body,
/// never in the path.
pub fn create_request(config: &SidecarConfig, topic: &str, body: Vec<u8>) -> SidecarRequest {
    SidecarRequest {
        method: Method::POST,
        url: topics_url(config, None),
        headers: vec![
            ("Content-Type".to_string(), "application/json".to_string()),
            (config.topic_name_header.clone(), topic.to_string()),
        ],
        body: Some(body),
    }
}

/// DELETE addressed at the topic resource itself.
pub fn delete_request(config: &SidecarConfig, topic: &str) -> SidecarRequest {
    SidecarRequest {
        method: Method::DELETE,
        url: topics_url(config, Some(topic)),
        headers: Vec::new(),
        body: None,
    }
}
