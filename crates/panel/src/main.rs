use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use viewfinder_client::models::SettingsCreate;
use viewfinder_client::{CameraApi, ClientConfig};
use viewfinder_core::settings::CameraSettings;
use viewfinder_core::status::CameraStatus;
use viewfinder_core::timefmt::format_time;
use viewfinder_panel::intent::{self, Intent, Tab};
use viewfinder_panel::surface;
use viewfinder_session::SessionController;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "viewfinder_panel=info,viewfinder_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ClientConfig::from_env();
    tracing::info!(base_url = %config.base_url, "Camera backend configured");
    let api = CameraApi::new(&config);

    // --- Session ---
    let mut controller = SessionController::new(CameraSettings::default());
    let mut status = CameraStatus::default();
    let mut tab = Tab::default();

    println!(
        "{}",
        surface::render_frame(tab, &controller.snapshot().await, &status)
    );
    println!("(type 'help' for commands)");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let intent = match intent::parse(&line) {
            Ok(intent) => intent,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };

        match intent {
            Intent::Update(update) => match controller.apply_update(update).await {
                Ok(_) => {}
                Err(e) => println!("{e}"),
            },
            Intent::ToggleRecording => {
                let snap = controller.toggle_recording().await;
                if snap.is_recording() {
                    println!("Recording...");
                }
            }
            Intent::ToggleMode => {
                controller.toggle_mode().await;
            }
            Intent::SelectTab(selected) => tab = selected,
            Intent::FetchStatus => match api.get_status().await {
                Ok(fresh) => status = fresh,
                // Already logged by the client; a failed fetch leaves the
                // local snapshot as it was.
                Err(e) => println!("Status fetch failed: {e}"),
            },
            Intent::SaveSettings(name) => {
                let snap = controller.snapshot().await;
                let body = SettingsCreate::from_snapshot(name, &snap.settings);
                match api.create_settings(&body).await {
                    Ok(created) => println!("Saved preset '{}' ({})", created.name, created.id),
                    Err(e) => println!("Save failed: {e}"),
                }
            }
            Intent::ListRecordings => match api.get_all_recordings().await {
                Ok(recordings) if recordings.is_empty() => println!("No recordings."),
                Ok(recordings) => {
                    for rec in recordings {
                        println!(
                            "{}  {}  {}  {}",
                            rec.id,
                            rec.file_name,
                            format_time(rec.duration as u64),
                            rec.status,
                        );
                    }
                }
                Err(e) => println!("Listing failed: {e}"),
            },
            Intent::Refresh => {}
            Intent::Help => {
                println!("{}", intent::HELP);
                continue;
            }
            Intent::Quit => break,
        }

        println!(
            "{}",
            surface::render_frame(tab, &controller.snapshot().await, &status)
        );
    }

    Ok(())
}
