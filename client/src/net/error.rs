//! Error type for backend requests.

use thiserror::Error;

/// A failed backend request. Callers log these and roll back optimistic
/// state; no network failure is fatal to the session.
#[derive(Debug, Error)]
pub enum NetError {
    /// The request never produced a response (network down, CORS, abort).
    #[error("transport error: {0}")]
    Transport(String),
    /// The backend answered with a non-2xx status.
    #[error("backend returned status {0}")]
    Status(u16),
    /// The response body was not the JSON shape we expected.
    #[error("malformed response: {0}")]
    Decode(String),
    /// Called outside the browser (native test build).
    #[error("network unavailable outside the browser")]
    Unavailable,
}

#[cfg(feature = "hydrate")]
impl From<gloo_net::Error> for NetError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => Self::Decode(e.to_string()),
            other => Self::Transport(other.to_string()),
        }
    }
}
