//! Read-mostly camera status snapshot.

use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

/// Hardware status as produced by the backend (or the built-in defaults
/// before the first fetch). The control surface only displays it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraStatus {
    /// Battery charge in percent, `0..=100`.
    pub battery: u8,
    /// Total storage label, e.g. `"64GB"`.
    pub storage: String,
    /// Used storage in gigabytes.
    pub storage_used: f64,
    /// Elapsed recording time label as last reported (`HH:MM:SS`). The live
    /// counter is owned by the session; this is display data only.
    #[serde(default = "zero_time")]
    pub recording_time: String,
    /// Sensor readout rate in frames per second.
    pub fps: u32,
    /// Active resolution label, e.g. `"4K UHD"`.
    pub resolution: String,
    /// Thermal state label: `Normal`, `Warning` or `Hot`.
    pub temperature: String,
    /// When the backend last refreshed this snapshot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_update: Option<Timestamp>,
}

fn zero_time() -> String {
    "00:00:00".to_string()
}

impl Default for CameraStatus {
    fn default() -> Self {
        Self {
            battery: 85,
            storage: "64GB".to_string(),
            storage_used: 23.5,
            recording_time: zero_time(),
            fps: 24,
            resolution: "4K UHD".to_string(),
            temperature: "Normal".to_string(),
            last_update: None,
        }
    }
}
