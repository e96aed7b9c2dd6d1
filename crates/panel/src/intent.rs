//! Command parsing: one line of input becomes one typed intent.
//!
//! Each settings control maps to exactly one catalog-backed field; the
//! parser only shapes the input into a [`SettingUpdate`], catalog
//! validation itself happens when the session applies it. Exposure and zoom
//! are present in the data model but have no command here, mirroring the
//! panel layout.

use viewfinder_core::settings::{CameraMode, SettingUpdate};

/// The three panel tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Manual,
    Auto,
    Menu,
}

/// A parsed user action.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    /// Change one shooting parameter.
    Update(SettingUpdate),
    /// Flip Standby/Recording.
    ToggleRecording,
    /// Flip manual/auto mode.
    ToggleMode,
    /// Switch the visible tab.
    SelectTab(Tab),
    /// Fetch the hardware status from the backend.
    FetchStatus,
    /// Save the current settings as a named backend preset.
    SaveSettings(String),
    /// List recordings stored on the backend.
    ListRecordings,
    /// Re-render the current frame.
    Refresh,
    /// Print the command reference.
    Help,
    /// Leave the panel.
    Quit,
}

/// Errors produced while parsing a command line.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ParseError {
    #[error("Unknown command '{0}' (try 'help')")]
    UnknownCommand(String),

    #[error("Command '{0}' needs an argument")]
    MissingArgument(&'static str),

    #[error("'{1}' is not a valid value for '{0}'")]
    InvalidArgument(&'static str, String),
}

/// Parse one input line into an [`Intent`]. Blank lines refresh the frame.
pub fn parse(line: &str) -> Result<Intent, ParseError> {
    let mut parts = line.split_whitespace();
    let Some(command) = parts.next() else {
        return Ok(Intent::Refresh);
    };
    let arg = parts.next();

    match command {
        "iso" => {
            let raw = arg.ok_or(ParseError::MissingArgument("iso"))?;
            let iso = raw
                .parse()
                .map_err(|_| ParseError::InvalidArgument("iso", raw.to_string()))?;
            Ok(Intent::Update(SettingUpdate::Iso(iso)))
        }
        "aperture" | "f" => {
            let raw = arg.ok_or(ParseError::MissingArgument("aperture"))?;
            let f_number = raw
                .parse()
                .map_err(|_| ParseError::InvalidArgument("aperture", raw.to_string()))?;
            Ok(Intent::Update(SettingUpdate::Aperture(f_number)))
        }
        "shutter" => {
            let raw = arg.ok_or(ParseError::MissingArgument("shutter"))?;
            Ok(Intent::Update(SettingUpdate::ShutterSpeed(raw.to_string())))
        }
        "focus" => {
            let raw = arg.ok_or(ParseError::MissingArgument("focus"))?;
            let mm = raw
                .parse()
                .map_err(|_| ParseError::InvalidArgument("focus", raw.to_string()))?;
            Ok(Intent::Update(SettingUpdate::Focus(mm)))
        }
        "wb" => {
            let raw = arg.ok_or(ParseError::MissingArgument("wb"))?;
            Ok(Intent::Update(SettingUpdate::WhiteBalance(raw.to_string())))
        }
        "rec" | "record" => Ok(Intent::ToggleRecording),
        "mode" => Ok(Intent::ToggleMode),
        "auto" => Ok(Intent::Update(SettingUpdate::Mode(CameraMode::Auto))),
        "tab" => match arg {
            Some("manual") => Ok(Intent::SelectTab(Tab::Manual)),
            Some("auto") => Ok(Intent::SelectTab(Tab::Auto)),
            Some("menu") => Ok(Intent::SelectTab(Tab::Menu)),
            Some(other) => Err(ParseError::InvalidArgument("tab", other.to_string())),
            None => Err(ParseError::MissingArgument("tab")),
        },
        "status" => Ok(Intent::FetchStatus),
        "save" => {
            // Preset names may contain spaces; take the whole remainder.
            let rest = arg
                .into_iter()
                .chain(parts)
                .collect::<Vec<_>>()
                .join(" ");
            let name = if rest.is_empty() {
                "Custom Settings".to_string()
            } else {
                rest
            };
            Ok(Intent::SaveSettings(name))
        }
        "recordings" => Ok(Intent::ListRecordings),
        "show" => Ok(Intent::Refresh),
        "help" => Ok(Intent::Help),
        "quit" | "q" | "exit" => Ok(Intent::Quit),
        other => Err(ParseError::UnknownCommand(other.to_string())),
    }
}

/// The command reference printed by `help`.
pub const HELP: &str = "\
Commands:
  iso <value>        set ISO (100..12800, catalog stops)
  aperture <f>       set aperture f-number (1.4..16, catalog stops)
  shutter <label>    set shutter speed (e.g. 1/60)
  focus <mm>         set focus 10..300 in steps of 5
  wb <preset>        set white balance (auto, daylight, cloudy, ...)
  rec                start/stop recording
  mode               toggle manual/auto
  auto               enable auto mode
  tab <name>         switch tab: manual, auto, menu
  status             fetch hardware status from the backend
  save [name]        save current settings as a backend preset
  recordings         list recordings stored on the backend
  show               redraw the panel
  quit               exit";

/* --------------------------------------------------------------------------
   Tests
   -------------------------------------------------------------------------- */
