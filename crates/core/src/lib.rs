//! Domain types, catalogs and validation for the camera control panel.
//!
//! This crate is purely synchronous and side-effect free: it defines the
//! shooting-parameter catalogs, the [`CameraSettings`](settings::CameraSettings)
//! snapshot with its typed [`SettingUpdate`](settings::SettingUpdate)
//! variants, the display-only [`CameraStatus`](status::CameraStatus)
//! snapshot and the recording-time formatter.

pub mod catalog;
pub mod error;
pub mod settings;
pub mod status;
pub mod timefmt;
pub mod types;

pub use error::CoreError;
