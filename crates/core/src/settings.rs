//! The live shooting-parameter snapshot and its typed update variants.
//!
//! [`CameraSettings`] is an immutable value: applying a [`SettingUpdate`]
//! yields a fresh snapshot with exactly one field changed, or a validation
//! error if the payload is not in its catalog. There is no string-keyed
//! update path, so an unknown field or out-of-catalog value can never be
//! merged silently.

use serde::{Deserialize, Serialize};

use crate::catalog;
use crate::error::CoreError;

/// Shooting mode of the exposure state machine.
///
/// The capabilities endpoint advertises more display modes, but the mode
/// toggle only ever moves between these two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CameraMode {
    Manual,
    Auto,
}

impl CameraMode {
    /// The other mode. Applying this twice returns the original value.
    pub fn toggled(self) -> Self {
        match self {
            CameraMode::Manual => CameraMode::Auto,
            CameraMode::Auto => CameraMode::Manual,
        }
    }

    /// Lowercase wire identifier (`manual` / `auto`).
    pub fn as_str(self) -> &'static str {
        match self {
            CameraMode::Manual => "manual",
            CameraMode::Auto => "auto",
        }
    }
}

/// Current shooting parameters.
///
/// Field names serialize in camelCase to match the backend JSON contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraSettings {
    pub iso: u32,
    pub aperture: f64,
    pub shutter_speed: String,
    /// Focal length in millimeters.
    pub focus: u32,
    /// Identifier of a [`catalog::WhiteBalancePreset`].
    pub white_balance: String,
    /// Exposure compensation in EV.
    pub exposure: f64,
    pub mode: CameraMode,
    pub recording: bool,
    pub zoom: f64,
}

impl Default for CameraSettings {
    /// The power-on snapshot the panel starts from.
    fn default() -> Self {
        Self {
            iso: 800,
            aperture: 2.8,
            shutter_speed: "1/60".to_string(),
            focus: 85,
            white_balance: "daylight".to_string(),
            exposure: 0.0,
            mode: CameraMode::Manual,
            recording: false,
            zoom: 1.0,
        }
    }
}

/// A single-field settings change, carrying a typed payload.
///
/// Each variant maps to exactly one [`CameraSettings`] field. The
/// `recording` flag is deliberately absent: it only moves through the
/// session's record toggle, never through a plain settings update.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingUpdate {
    Iso(u32),
    Aperture(f64),
    ShutterSpeed(String),
    Focus(u32),
    WhiteBalance(String),
    Exposure(f64),
    Mode(CameraMode),
    Zoom(f64),
}

impl SettingUpdate {
    /// Check the payload against its catalog or range.
    pub fn validate(&self) -> Result<(), CoreError> {
        match self {
            SettingUpdate::Iso(iso) => catalog::validate_iso(*iso),
            SettingUpdate::Aperture(aperture) => catalog::validate_aperture(*aperture),
            SettingUpdate::ShutterSpeed(speed) => catalog::validate_shutter_speed(speed),
            SettingUpdate::Focus(focus) => catalog::validate_focus(*focus),
            SettingUpdate::WhiteBalance(id) => catalog::validate_white_balance(id),
            SettingUpdate::Exposure(ev) => catalog::validate_exposure(*ev),
            // Both modes are always legal.
            SettingUpdate::Mode(_) => Ok(()),
            SettingUpdate::Zoom(zoom) => catalog::validate_zoom(*zoom),
        }
    }
}

impl CameraSettings {
    /// Return a new snapshot with `update` applied.
    ///
    /// Validates the payload first; on error the current snapshot is left
    /// untouched and nothing is merged.
    pub fn with_update(&self, update: SettingUpdate) -> Result<CameraSettings, CoreError> {
        update.validate()?;

        let mut next = self.clone();
        match update {
            SettingUpdate::Iso(iso) => next.iso = iso,
            SettingUpdate::Aperture(aperture) => next.aperture = aperture,
            SettingUpdate::ShutterSpeed(speed) => next.shutter_speed = speed,
            SettingUpdate::Focus(focus) => next.focus = focus,
            SettingUpdate::WhiteBalance(id) => next.white_balance = id,
            SettingUpdate::Exposure(ev) => next.exposure = ev,
            SettingUpdate::Mode(mode) => next.mode = mode,
            SettingUpdate::Zoom(zoom) => next.zoom = zoom,
        }
        Ok(next)
    }
}

/* --------------------------------------------------------------------------
   Tests
   -------------------------------------------------------------------------- */
