//! Wire models for the camera backend resources.
//!
//! All payloads are JSON with camelCase field names. The settings resource
//! is a superset of the live [`CameraSettings`] snapshot: the backend adds
//! a preset name, menu parameters (recording format, frame rate, color
//! profile, stabilization) and bookkeeping timestamps, and it carries no
//! `recording` flag -- the recording state never round-trips.

use serde::{Deserialize, Serialize};

use viewfinder_core::settings::CameraSettings;
use viewfinder_core::types::{ResourceId, Timestamp};

/// A saved settings preset as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsResource {
    pub id: ResourceId,
    pub name: String,
    pub iso: u32,
    pub aperture: f64,
    pub shutter_speed: String,
    pub focus: u32,
    pub white_balance: String,
    pub exposure: f64,
    pub mode: String,
    pub zoom: f64,
    pub recording_format: String,
    pub frame_rate: String,
    pub color_profile: String,
    pub stabilization: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Body for `POST /camera/settings`. Absent fields take backend defaults.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsCreate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iso: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aperture: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shutter_speed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub white_balance: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exposure: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zoom: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recording_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame_rate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_profile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stabilization: Option<bool>,
}

impl SettingsCreate {
    /// Build a create body from a live settings snapshot.
    pub fn from_snapshot(name: impl Into<String>, settings: &CameraSettings) -> Self {
        Self {
            name: Some(name.into()),
            iso: Some(settings.iso),
            aperture: Some(settings.aperture),
            shutter_speed: Some(settings.shutter_speed.clone()),
            focus: Some(settings.focus),
            white_balance: Some(settings.white_balance.clone()),
            exposure: Some(settings.exposure),
            mode: Some(settings.mode.as_str().to_string()),
            zoom: Some(settings.zoom),
            ..Self::default()
        }
    }
}

/// Body for `PUT /camera/settings/{id}`. Only present fields are changed.
pub type SettingsPatch = SettingsCreate;

/// Body for `POST /camera/recordings`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordingCreate {
    pub file_name: String,
    pub resolution: String,
    pub frame_rate: String,
    /// Settings snapshot stored alongside the recording.
    pub settings: serde_json::Value,
}

/// A recording resource owned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordingResource {
    pub id: ResourceId,
    pub session_id: ResourceId,
    pub file_name: String,
    /// Seconds, filled in on stop.
    pub duration: f64,
    /// Megabytes, filled in on stop.
    pub file_size: f64,
    pub resolution: String,
    pub frame_rate: String,
    pub settings: serde_json::Value,
    pub start_time: Timestamp,
    pub end_time: Option<Timestamp>,
    /// `recording`, `completed` or `failed`.
    pub status: String,
}

/// Acknowledgement body returned by the delete endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteAck {
    pub message: String,
}

/// A shooting mode entry in the capabilities listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModeEntry {
    pub id: String,
    pub name: String,
    pub description: String,
}

/// A white balance entry in the capabilities listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhiteBalanceEntry {
    pub id: String,
    pub name: String,
    /// Color temperature in Kelvin.
    pub temp: u32,
}

/// Feature set and legal values reported by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Capabilities {
    pub modes: Vec<ModeEntry>,
    pub iso_values: Vec<u32>,
    pub aperture_values: Vec<f64>,
    pub shutter_speeds: Vec<String>,
    pub white_balance_options: Vec<WhiteBalanceEntry>,
    pub recording_formats: Vec<String>,
    pub frame_rates: Vec<String>,
    pub color_profiles: Vec<String>,
}

/* --------------------------------------------------------------------------
   Tests
   -------------------------------------------------------------------------- */
