//! REST sidecar backend for topic administration.
//!
//! Topic create/delete are passed through to well-defined endpoints on a
//! sidecar container, letting third parties plug in their own topic
//! management without implementing the broker admin protocol:
//!
//! - `POST {topics_path}` with the topic name in a header and the JSON
//!   `TopicDetail` as body,
//! - `DELETE {topics_path}/{name}`.
//!
//! HTTP statuses are mapped onto `OutcomeKind` by [`classify::classify`].

pub mod classify;
pub mod client;
pub mod config;
pub mod error;
pub mod request;
pub mod transport;

pub use classify::classify;
pub use client::SidecarAdminClient;
pub use config::SidecarConfig;
pub use error::SidecarError;
pub use transport::{
    BoxFuture, HttpTransport, ResponseBody, SidecarRequest, SidecarResponse, SidecarTransport,
};
