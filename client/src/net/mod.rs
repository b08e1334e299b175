//! Backend adapters: object storage, metadata collections, and the
//! interpreter that performs the engine's persistence actions.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Native (tests): the pure parts — endpoint builders, DTO conversions,
//! storage-path construction — compile and run without a browser.

pub mod actions;
pub mod error;
pub mod metadata;
pub mod object_store;
pub mod types;

pub use error::NetError;
