#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("config ({context}): {detail}")]
    Config { context: &'static str, detail: String },

    #[error("backend '{0}' is not supported by this build")]
    UnsupportedBackend(topic_admin_api::AdminClientType),

    #[error("sidecar: {0}")]
    Sidecar(#[from] sidecar_admin::SidecarError),

    #[error("{0}")]
    Close(#[from] topic_admin_api::CloseError),
}
