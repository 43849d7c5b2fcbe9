#[derive(Debug, thiserror::Error)]
pub enum SidecarError {
    #[error("config ({field}): {detail}")]
    Config { field: &'static str, detail: String },

    #[error("http client: {0}")]
    HttpClient(reqwest::Error),

    #[error("transport: {0}")]
    Transport(String),

    #[error("response body: {0}")]
    Body(String),
}

impl SidecarError {
    pub(crate) fn config(field: &'static str, detail: impl Into<String>) -> Self {
        SidecarError::Config { field, detail: detail.into() }
    }
}
