//! Object storage: upload file bytes, derive public download URLs.
//!
//! Storage paths are prefixed with the upload's epoch-millisecond timestamp
//! so two drops of the same file name never collide.

#[cfg(test)]
#[path = "object_store_test.rs"]
mod object_store_test;

use super::NetError;

/// Storage path for an uploaded file: `files/<unix-millis>-<name>`.
#[must_use]
pub fn storage_path(now_ms: i64, name: &str) -> String {
    format!("files/{now_ms}-{name}")
}

/// Public download URL for a stored object.
#[must_use]
pub fn public_url(path: &str) -> String {
    format!("/api/storage/{path}")
}

/// Upload a file's bytes and return its public download URL.
///
/// # Errors
///
/// Fails on transport problems or a non-2xx status.
#[cfg(feature = "hydrate")]
pub async fn put(path: &str, file: &web_sys::File) -> Result<String, NetError> {
    let content_type = file.type_();
    let mut request = gloo_net::http::Request::put(&public_url(path));
    if !content_type.is_empty() {
        request = request.header("Content-Type", &content_type);
    }
    let resp = request.body(file.clone())?.send().await?;
    if resp.ok() {
        Ok(public_url(path))
    } else {
        Err(NetError::Status(resp.status()))
    }
}
