//! Metadata store: CRUD over the `files` and `notes` document collections.
//!
//! Endpoint construction is pure and tested natively; the HTTP calls are
//! hydrate-only and return [`NetError::Unavailable`] elsewhere.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "metadata_test.rs"]
mod metadata_test;

use canvas::item::Collection;
#[cfg(feature = "hydrate")]
use serde::Serialize;
#[cfg(feature = "hydrate")]
use serde::de::DeserializeOwned;

use super::NetError;
#[cfg(feature = "hydrate")]
use super::types::CreatedResponse;

/// URL of a collection (list, create).
#[must_use]
pub fn collection_url(collection: Collection) -> String {
    format!("/api/data/{}", collection.as_str())
}

/// URL of one document (update, delete).
#[must_use]
pub fn document_url(collection: Collection, id: &str) -> String {
    format!("/api/data/{}/{id}", collection.as_str())
}

#[cfg(feature = "hydrate")]
fn check_status(resp: &gloo_net::http::Response) -> Result<(), NetError> {
    if resp.ok() {
        Ok(())
    } else {
        Err(NetError::Status(resp.status()))
    }
}

/// Create a document; the backend assigns and returns its id.
///
/// # Errors
///
/// Fails on transport problems, non-2xx status, or a malformed response.
#[cfg(feature = "hydrate")]
pub async fn create<T: Serialize>(collection: Collection, record: &T) -> Result<String, NetError> {
    let resp = gloo_net::http::Request::post(&collection_url(collection))
        .json(record)?
        .send()
        .await?;
    check_status(&resp)?;
    let body: CreatedResponse = resp.json().await?;
    Ok(body.id)
}

#[cfg(not(feature = "hydrate"))]
pub async fn create<T>(_collection: Collection, _record: &T) -> Result<String, NetError> {
    Err(NetError::Unavailable)
}

/// Apply a partial update to a document (position or text).
///
/// # Errors
///
/// Fails on transport problems or a non-2xx status.
#[cfg(feature = "hydrate")]
pub async fn update(collection: Collection, id: &str, patch: &serde_json::Value) -> Result<(), NetError> {
    let resp = gloo_net::http::Request::patch(&document_url(collection, id))
        .json(patch)?
        .send()
        .await?;
    check_status(&resp)
}

#[cfg(not(feature = "hydrate"))]
pub async fn update(_collection: Collection, _id: &str, _patch: &serde_json::Value) -> Result<(), NetError> {
    Err(NetError::Unavailable)
}

/// Delete a document.
///
/// # Errors
///
/// Fails on transport problems or a non-2xx status.
#[cfg(feature = "hydrate")]
pub async fn delete(collection: Collection, id: &str) -> Result<(), NetError> {
    let resp = gloo_net::http::Request::delete(&document_url(collection, id))
        .send()
        .await?;
    check_status(&resp)
}

#[cfg(not(feature = "hydrate"))]
pub async fn delete(_collection: Collection, _id: &str) -> Result<(), NetError> {
    Err(NetError::Unavailable)
}

/// Fetch every document in a collection (initial board load).
///
/// # Errors
///
/// Fails on transport problems, non-2xx status, or a malformed response.
#[cfg(feature = "hydrate")]
pub async fn list_all<T: DeserializeOwned>(collection: Collection) -> Result<Vec<T>, NetError> {
    let resp = gloo_net::http::Request::get(&collection_url(collection))
        .send()
        .await?;
    check_status(&resp)?;
    Ok(resp.json().await?)
}

#[cfg(not(feature = "hydrate"))]
pub async fn list_all<T>(_collection: Collection) -> Result<Vec<T>, NetError> {
    Err(NetError::Unavailable)
}
