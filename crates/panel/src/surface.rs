//! Pure text rendering of the session and status snapshots.
//!
//! Every function here maps snapshots to a string and touches nothing else,
//! so the whole surface is testable without a terminal.

use viewfinder_core::catalog;
use viewfinder_core::settings::{CameraMode, CameraSettings};
use viewfinder_core::status::CameraStatus;
use viewfinder_session::SessionSnapshot;

use crate::intent::Tab;

/// Top status bar: recording state, elapsed time, format and resources.
pub fn render_status_bar(snapshot: &SessionSnapshot, status: &CameraStatus) -> String {
    let rec = if snapshot.is_recording() {
        "● REC"
    } else {
        "○ STANDBY"
    };
    format!(
        "{rec}  {}  |  {} • {}fps  |  BAT {}%  |  {:.1}GB / {}",
        snapshot.recording_time(),
        status.resolution,
        status.fps,
        status.battery,
        status.storage_used,
        status.storage,
    )
}

/// Viewfinder overlay line with the exposure triangle and focus.
pub fn render_overlay(settings: &CameraSettings) -> String {
    format!(
        "ISO {} • f/{} • {}\nWB: {} • Focus: {}mm",
        settings.iso,
        settings.aperture,
        settings.shutter_speed,
        settings.white_balance.to_uppercase(),
        settings.focus,
    )
}

/// The controls pane for the selected tab.
pub fn render_controls(tab: Tab, settings: &CameraSettings) -> String {
    match tab {
        Tab::Manual => render_manual_tab(settings),
        Tab::Auto => render_auto_tab(settings),
        Tab::Menu => render_menu_tab(),
    }
}

fn render_manual_tab(settings: &CameraSettings) -> String {
    let wb_label = catalog::white_balance_preset(&settings.white_balance)
        .map(|p| format!("{} ({}K)", p.name, p.temp))
        .unwrap_or_else(|| settings.white_balance.clone());

    let mut lines = vec![
        format!("[Manual Controls]  mode: {}", settings.mode.as_str().to_uppercase()),
        format!("  ISO            {:>8}   ({})", settings.iso, join(catalog::ISO_VALUES)),
        format!(
            "  Aperture       {:>8}   ({})",
            format!("f/{}", settings.aperture),
            join(catalog::APERTURE_VALUES)
        ),
        format!(
            "  Shutter Speed  {:>8}   ({})",
            settings.shutter_speed,
            catalog::SHUTTER_SPEEDS.join(", ")
        ),
        format!(
            "  Focus          {:>8}   ({}..{}mm, step {})",
            format!("{}mm", settings.focus),
            catalog::FOCUS_MIN,
            catalog::FOCUS_MAX,
            catalog::FOCUS_STEP
        ),
        format!("  White Balance  {wb_label:>8}"),
    ];
    if settings.mode == CameraMode::Auto {
        lines.push("  (auto mode active - values applied on return to manual)".to_string());
    }
    lines.join("\n")
}

fn render_auto_tab(settings: &CameraSettings) -> String {
    if settings.mode == CameraMode::Auto {
        "[Auto Mode]\n  Auto mode active - camera is optimizing settings automatically".to_string()
    } else {
        "[Auto Mode]\n  Camera will automatically adjust settings for optimal results\n  \
         Type 'auto' to enable"
            .to_string()
    }
}

fn render_menu_tab() -> String {
    [
        "[Camera Settings]".to_string(),
        format!("  Image Quality     {}", catalog::IMAGE_QUALITY_OPTIONS.join(" / ")),
        format!("  Recording Format  {}", catalog::RECORDING_FORMATS.join(" / ")),
        format!("  Frame Rate        {}", catalog::FRAME_RATES.join(" / ")),
        format!("  Color Profile     {}", catalog::COLOR_PROFILES.join(" / ")),
        "  Stabilization     On / Off".to_string(),
    ]
    .join("\n")
}

/// Compose the whole frame.
pub fn render_frame(tab: Tab, snapshot: &SessionSnapshot, status: &CameraStatus) -> String {
    format!(
        "{}\n{}\n{}\n",
        render_status_bar(snapshot, status),
        render_overlay(&snapshot.settings),
        render_controls(tab, &snapshot.settings),
    )
}

fn join<T: std::fmt::Display>(values: &[T]) -> String {
    values
        .iter()
        .map(T::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/* --------------------------------------------------------------------------
   Tests
   -------------------------------------------------------------------------- */
