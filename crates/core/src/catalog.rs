//! Catalogs of legal shooting-parameter values.
//!
//! Every discrete setting (ISO, aperture, shutter speed, white balance) must
//! hold a value from its catalog; the validation helpers here are the single
//! place that decides catalog membership. Continuous settings (focus,
//! exposure, zoom) are range-checked instead.

use serde::Serialize;

use crate::error::CoreError;

/* --------------------------------------------------------------------------
   Discrete catalogs
   -------------------------------------------------------------------------- */

/// Sensor sensitivity stops, ascending.
pub const ISO_VALUES: &[u32] = &[100, 200, 400, 800, 1600, 3200, 6400, 12800];

/// Lens f-numbers, ascending.
pub const APERTURE_VALUES: &[f64] = &[1.4, 2.0, 2.8, 4.0, 5.6, 8.0, 11.0, 16.0];

/// Exposure durations, fastest first.
pub const SHUTTER_SPEEDS: &[&str] = &[
    "1/4000", "1/2000", "1/1000", "1/500", "1/250", "1/125", "1/60", "1/30", "1/15", "1/8",
];

/// A white balance preset: identifier, display name and color temperature.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WhiteBalancePreset {
    pub id: &'static str,
    pub name: &'static str,
    /// Color temperature in Kelvin.
    pub temp: u32,
}

/// All selectable white balance presets.
pub const WHITE_BALANCE_PRESETS: &[WhiteBalancePreset] = &[
    WhiteBalancePreset { id: "auto", name: "Auto", temp: 5500 },
    WhiteBalancePreset { id: "daylight", name: "Daylight", temp: 5500 },
    WhiteBalancePreset { id: "cloudy", name: "Cloudy", temp: 6500 },
    WhiteBalancePreset { id: "tungsten", name: "Tungsten", temp: 3200 },
    WhiteBalancePreset { id: "fluorescent", name: "Fluorescent", temp: 4000 },
    WhiteBalancePreset { id: "flash", name: "Flash", temp: 5500 },
];

/// A shooting mode as reported by the capabilities endpoint. Only `manual`
/// and `auto` participate in the mode toggle; the rest are display entries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModeInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

/// Shooting modes shown in the capabilities listing.
pub const CAMERA_MODES: &[ModeInfo] = &[
    ModeInfo { id: "manual", name: "Manual", description: "Full manual control" },
    ModeInfo { id: "auto", name: "Auto", description: "Automatic settings" },
    ModeInfo { id: "cinema", name: "Cinema", description: "Cinema optimized" },
    ModeInfo { id: "portrait", name: "Portrait", description: "Portrait mode" },
    ModeInfo { id: "landscape", name: "Landscape", description: "Landscape mode" },
];

/// Still image qualities selectable from the menu tab.
pub const IMAGE_QUALITY_OPTIONS: &[&str] = &["RAW", "JPEG", "RAW+JPEG"];

/// Recording formats selectable from the menu tab.
pub const RECORDING_FORMATS: &[&str] = &["4K UHD", "FHD", "HD"];

/// Frame rates selectable from the menu tab.
pub const FRAME_RATES: &[&str] = &["24p", "30p", "60p", "120p"];

/// Color profiles selectable from the menu tab.
pub const COLOR_PROFILES: &[&str] = &["S-Log3", "Standard", "Cinema", "Vivid"];

/* --------------------------------------------------------------------------
   Continuous ranges
   -------------------------------------------------------------------------- */

/// Minimum focal length in millimeters.
pub const FOCUS_MIN: u32 = 10;

/// Maximum focal length in millimeters.
pub const FOCUS_MAX: u32 = 300;

/// Focus adjustment step in millimeters.
pub const FOCUS_STEP: u32 = 5;

/// Exposure compensation range, in EV.
pub const EXPOSURE_MIN: f64 = -3.0;
pub const EXPOSURE_MAX: f64 = 3.0;

/// Zoom factor range.
pub const ZOOM_MIN: f64 = 0.5;
pub const ZOOM_MAX: f64 = 10.0;

/* --------------------------------------------------------------------------
   Validation functions
   -------------------------------------------------------------------------- */

/// Validate that `iso` is a catalog stop.
pub fn validate_iso(iso: u32) -> Result<(), CoreError> {
    if ISO_VALUES.contains(&iso) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid ISO {iso}. Must be one of: {}",
            join_values(ISO_VALUES)
        )))
    }
}

/// Validate that `aperture` is a catalog f-number.
pub fn validate_aperture(aperture: f64) -> Result<(), CoreError> {
    if APERTURE_VALUES.contains(&aperture) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid aperture f/{aperture}. Must be one of: {}",
            join_values(APERTURE_VALUES)
        )))
    }
}

/// Validate that `speed` is a catalog shutter speed label.
pub fn validate_shutter_speed(speed: &str) -> Result<(), CoreError> {
    if SHUTTER_SPEEDS.contains(&speed) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid shutter speed '{speed}'. Must be one of: {}",
            SHUTTER_SPEEDS.join(", ")
        )))
    }
}

/// Validate that `focus` lies in `[FOCUS_MIN, FOCUS_MAX]` on a
/// `FOCUS_STEP` boundary.
pub fn validate_focus(focus: u32) -> Result<(), CoreError> {
    if focus < FOCUS_MIN || focus > FOCUS_MAX {
        return Err(CoreError::Validation(format!(
            "Focus {focus}mm out of range [{FOCUS_MIN}, {FOCUS_MAX}]"
        )));
    }
    if focus % FOCUS_STEP != 0 {
        return Err(CoreError::Validation(format!(
            "Focus {focus}mm is not a multiple of {FOCUS_STEP}mm"
        )));
    }
    Ok(())
}

/// Validate that `id` names a known white balance preset.
pub fn validate_white_balance(id: &str) -> Result<(), CoreError> {
    if white_balance_preset(id).is_some() {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Unknown white balance preset '{id}'. Must be one of: {}",
            WHITE_BALANCE_PRESETS
                .iter()
                .map(|p| p.id)
                .collect::<Vec<_>>()
                .join(", ")
        )))
    }
}

/// Validate that `exposure` compensation is within range.
pub fn validate_exposure(exposure: f64) -> Result<(), CoreError> {
    if exposure < EXPOSURE_MIN || exposure > EXPOSURE_MAX {
        return Err(CoreError::Validation(format!(
            "Exposure {exposure} EV out of range [{EXPOSURE_MIN}, {EXPOSURE_MAX}]"
        )));
    }
    Ok(())
}

/// Validate that `zoom` is within range.
pub fn validate_zoom(zoom: f64) -> Result<(), CoreError> {
    if zoom < ZOOM_MIN || zoom > ZOOM_MAX {
        return Err(CoreError::Validation(format!(
            "Zoom {zoom}x out of range [{ZOOM_MIN}, {ZOOM_MAX}]"
        )));
    }
    Ok(())
}

/// Look up a white balance preset by its identifier.
pub fn white_balance_preset(id: &str) -> Option<&'static WhiteBalancePreset> {
    WHITE_BALANCE_PRESETS.iter().find(|p| p.id == id)
}

fn join_values<T: std::fmt::Display>(values: &[T]) -> String {
    values
        .iter()
        .map(T::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/* --------------------------------------------------------------------------
   Tests
   -------------------------------------------------------------------------- */
