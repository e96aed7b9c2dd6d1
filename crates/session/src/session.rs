//! The recording state machine and settings owner.
//!
//! Two states, driven entirely by discrete events:
//!
//! - **Standby**: `recording == false`, elapsed pinned at 0.
//! - **Recording**: `recording == true`, elapsed advances by one per tick.
//!
//! Toggling strictly alternates between the two; both transitions reset the
//! elapsed counter, so elapsed time is never carried across sessions.

use serde::Serialize;

use viewfinder_core::error::CoreError;
use viewfinder_core::settings::{CameraMode, CameraSettings, SettingUpdate};
use viewfinder_core::timefmt::format_time;

/// Owns the live [`CameraSettings`] and the derived recording timer value.
///
/// Purely synchronous; the 1 Hz tick is delivered from the outside (see
/// [`crate::timer`]), which keeps every transition unit-testable with
/// simulated ticks.
#[derive(Debug, Clone, Default)]
pub struct CameraSession {
    settings: CameraSettings,
    elapsed_secs: u64,
}

/// Immutable view of the session handed to rendering code.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub settings: CameraSettings,
    pub elapsed_secs: u64,
}

impl SessionSnapshot {
    /// Elapsed recording time as a `HH:MM:SS` label.
    pub fn recording_time(&self) -> String {
        format_time(self.elapsed_secs)
    }

    /// Whether the session is in the Recording state.
    pub fn is_recording(&self) -> bool {
        self.settings.recording
    }
}

impl CameraSession {
    /// Start a session from the given power-on settings, in Standby.
    pub fn new(settings: CameraSettings) -> Self {
        Self {
            settings,
            elapsed_secs: 0,
        }
    }

    /// Current immutable snapshot.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            settings: self.settings.clone(),
            elapsed_secs: self.elapsed_secs,
        }
    }

    /// Apply a validated single-field update and return the new settings
    /// snapshot. A rejected update leaves the session untouched.
    pub fn apply_update(&mut self, update: SettingUpdate) -> Result<CameraSettings, CoreError> {
        let next = self.settings.with_update(update)?;
        self.settings = next.clone();
        Ok(next)
    }

    /// Flip between Standby and Recording; returns the new recording flag.
    ///
    /// Both directions reset the elapsed counter: entering Recording starts
    /// counting from zero, and leaving discards the count.
    pub fn toggle_recording(&mut self) -> bool {
        self.settings.recording = !self.settings.recording;
        self.elapsed_secs = 0;
        self.settings.recording
    }

    /// Flip between manual and auto mode; returns the new mode.
    pub fn toggle_mode(&mut self) -> CameraMode {
        self.settings.mode = self.settings.mode.toggled();
        self.settings.mode
    }

    /// Advance the recording clock by one second. A tick that arrives in
    /// Standby (e.g. racing a cancellation) is ignored.
    pub fn tick(&mut self) {
        if self.settings.recording {
            self.elapsed_secs += 1;
        }
    }

    /// Whether the session is in the Recording state.
    pub fn is_recording(&self) -> bool {
        self.settings.recording
    }

    /// The current settings, borrowed.
    pub fn settings(&self) -> &CameraSettings {
        &self.settings
    }
}

/* --------------------------------------------------------------------------
   Tests
   -------------------------------------------------------------------------- */
