use std::future::Future;
use std::pin::Pin;

use reqwest::Method;

use crate::config::SidecarConfig;
use crate::error::SidecarError;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Fully built request for the sidecar.
#[derive(Debug, Clone)]
pub struct SidecarRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

/// Body of a sidecar response. `close` is called exactly once by the
/// client, after reading or on any early exit.
pub trait ResponseBody: Send {
    fn read_all(&mut self) -> BoxFuture<'_, Result<Vec<u8>, SidecarError>>;

    fn close(&mut self) -> Result<(), SidecarError>;
}

pub struct SidecarResponse {
    pub status: u16,
    pub body: Box<dyn ResponseBody>,
}

/// Sends one request and hands back whatever came back.
///
/// `Ok(None)` means no response object without a transport error; the
/// client reports it as `Unknown`.
pub trait SidecarTransport: Send + Sync {
    fn send(
        &self,
        request: SidecarRequest,
    ) -> BoxFuture<'_, Result<Option<SidecarResponse>, SidecarError>>;
}

// ═══════════════════════════════════════════════════════════════
//  HttpTransport — reqwest
// ═══════════════════════════════════════════════════════════════

pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    pub fn new(config: &SidecarConfig) -> Result<Self, SidecarError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(SidecarError::HttpClient)?;
        Ok(Self { http })
    }
}

impl SidecarTransport for HttpTransport {
    fn send(
        &self,
        request: SidecarRequest,
    ) -> BoxFuture<'_, Result<Option<SidecarResponse>, SidecarError>> {
        Box::pin(async move {
            let mut builder = self.http.request(request.method, &request.url);
            for (name, value) in &request.headers {
                builder = builder.header(name.as_str(), value.as_str());
            }
            if let Some(body) = request.body {
                builder = builder.body(body);
            }

            let resp = builder
                .send()
                .await
                .map_err(|e| SidecarError::Transport(e.to_string()))?;

            Ok(Some(SidecarResponse {
                status: resp.status().as_u16(),
                body: Box::new(HttpBody { response: Some(resp) }),
            }))
        })
    }
}

struct HttpBody {
    response: Option<reqwest::Response>,
}

impl ResponseBody for HttpBody {
    fn read_all(&mut self) -> BoxFuture<'_, Result<Vec<u8>, SidecarError>> {
        let response = self.response.take();
        Box::pin(async move {
            match response {
                Some(resp) => resp
                    .bytes()
                    .await
                    .map(|b| b.to_vec())
                    .map_err(|e| SidecarError::Body(e.to_string())),
                None => Ok(Vec::new()),
            }
        })
    }

    fn close(&mut self) -> Result<(), SidecarError> {
        // Dropping an unread response returns the connection to the pool.
        self.response.take();
        Ok(())
    }
}
