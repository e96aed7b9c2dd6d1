//! Typed REST client for the camera backend.
//!
//! [`CameraApi`](api::CameraApi) wraps the `/api/camera/*` resource groups
//! (settings, recordings, status, capabilities) with one async method per
//! verb+path pair. The client is a stateless request/response mapper: it
//! owns no session state, performs no retries and substitutes no fallback
//! values; every failure is logged once and handed back to the caller.

pub mod api;
pub mod config;
pub mod models;

pub use api::{CameraApi, CameraApiError};
pub use config::ClientConfig;
