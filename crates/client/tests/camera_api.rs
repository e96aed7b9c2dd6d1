//! Integration tests for the camera REST client against a stub backend.
//!
//! Spawns a minimal axum server speaking the `/api/camera/*` contract and
//! points a real [`CameraApi`] at it, so requests travel the full HTTP path
//! (URL construction, serialization, status handling, decoding).

use assert_matches::assert_matches;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use serde_json::{json, Value};

use viewfinder_client::models::RecordingCreate;
use viewfinder_client::{CameraApi, CameraApiError, ClientConfig};
use viewfinder_core::settings::CameraSettings;

// ---------------------------------------------------------------------------
// Stub backend
// ---------------------------------------------------------------------------

/// Canned settings preset as the backend would serialize it.
fn preset_json(id: &str, name: &str, iso: u32) -> Value {
    json!({
        "id": id,
        "name": name,
        "iso": iso,
        "aperture": 2.8,
        "shutterSpeed": "1/60",
        "focus": 85,
        "whiteBalance": "daylight",
        "exposure": 0.0,
        "mode": "manual",
        "zoom": 1.0,
        "recordingFormat": "4K UHD",
        "frameRate": "24p",
        "colorProfile": "S-Log3",
        "stabilization": true,
        "createdAt": "2025-06-01T10:00:00Z",
        "updatedAt": "2025-06-01T10:00:00Z"
    })
}

async fn list_settings() -> Json<Value> {
    Json(json!([
        preset_json("p-1", "Daylight run", 400),
        preset_json("p-2", "Night shoot", 3200),
    ]))
}

/// Echo the received body merged over backend defaults, the way the real
/// service fills in unspecified preset fields.
async fn create_settings(Json(body): Json<Value>) -> Json<Value> {
    let mut resource = preset_json(&uuid::Uuid::new_v4().to_string(), "Custom Settings", 800);
    if let Some(fields) = body.as_object() {
        for (key, value) in fields {
            resource[key] = value.clone();
        }
    }
    Json(resource)
}

async fn delete_settings(Path(_id): Path<String>) -> Json<Value> {
    Json(json!({"message": "Camera settings deleted successfully"}))
}

async fn stop_recording(Path(id): Path<String>) -> Json<Value> {
    Json(json!({
        "id": id,
        "sessionId": "s-1",
        "fileName": "clip_0001.mov",
        "duration": 12.0,
        "fileSize": 6.0,
        "resolution": "4K UHD",
        "frameRate": "24p",
        "settings": {"iso": 800},
        "startTime": "2025-06-01T10:00:00Z",
        "endTime": "2025-06-01T10:00:12Z",
        "status": "completed"
    }))
}

async fn status_unavailable() -> (StatusCode, String) {
    (
        StatusCode::SERVICE_UNAVAILABLE,
        "camera offline".to_string(),
    )
}

async fn capabilities() -> Json<Value> {
    Json(json!({
        "modes": [
            {"id": "manual", "name": "Manual", "description": "Full manual control"},
            {"id": "auto", "name": "Auto", "description": "Automatic settings"}
        ],
        "isoValues": [100, 200, 400, 800, 1600, 3200, 6400, 12800],
        "apertureValues": [1.4, 2.0, 2.8, 4.0, 5.6, 8.0, 11.0, 16.0],
        "shutterSpeeds": ["1/4000", "1/60", "1/8"],
        "whiteBalanceOptions": [{"id": "daylight", "name": "Daylight", "temp": 5500}],
        "recordingFormats": ["4K UHD", "FHD", "HD"],
        "frameRates": ["24p", "30p", "60p", "120p"],
        "colorProfiles": ["S-Log3", "Standard", "Cinema", "Vivid"]
    }))
}

/// Spawn the stub backend on an ephemeral port; returns a client pointed
/// at it.
async fn spawn_stub() -> CameraApi {
    let app = Router::new()
        .route("/api/camera/settings", get(list_settings))
        .route("/api/camera/settings", post(create_settings))
        .route("/api/camera/settings/{id}", delete(delete_settings))
        .route("/api/camera/recordings/{id}/stop", put(stop_recording))
        .route("/api/camera/status", get(status_unavailable))
        .route("/api/camera/capabilities", get(capabilities));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub listener");
    let addr = listener.local_addr().expect("stub local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve stub");
    });

    CameraApi::new(&ClientConfig {
        base_url: format!("http://{addr}"),
    })
}

// ---------------------------------------------------------------------------
// Test: successful list returns the exact decoded payload
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_all_settings_returns_decoded_list() {
    let api = spawn_stub().await;

    let presets = api.get_all_settings().await.expect("list settings");

    assert_eq!(presets.len(), 2);
    assert_eq!(presets[0].id, "p-1");
    assert_eq!(presets[0].name, "Daylight run");
    assert_eq!(presets[0].iso, 400);
    assert_eq!(presets[1].id, "p-2");
    assert_eq!(presets[1].iso, 3200);
}

// ---------------------------------------------------------------------------
// Test: create round-trips the snapshot fields through camelCase JSON
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_settings_round_trips_snapshot_fields() {
    let api = spawn_stub().await;

    let mut settings = CameraSettings::default();
    settings.iso = 1600;
    settings.white_balance = "tungsten".to_string();

    let body =
        viewfinder_client::models::SettingsCreate::from_snapshot("Night shoot", &settings);
    let created = api.create_settings(&body).await.expect("create settings");

    assert_eq!(created.name, "Night shoot");
    assert_eq!(created.iso, 1600);
    assert_eq!(created.white_balance, "tungsten");
    assert_eq!(created.shutter_speed, "1/60");
    // Fields the snapshot does not carry keep the backend defaults.
    assert_eq!(created.recording_format, "4K UHD");
    assert!(created.stabilization);
}

// ---------------------------------------------------------------------------
// Test: stop recording hits the verb+path pair and decodes the resource
// ---------------------------------------------------------------------------

#[tokio::test]
async fn stop_recording_returns_completed_recording() {
    let api = spawn_stub().await;

    let recording = api.stop_recording("r-42").await.expect("stop recording");

    assert_eq!(recording.id, "r-42");
    assert_eq!(recording.status, "completed");
    assert!(recording.end_time.is_some());
    assert_eq!(recording.duration, 12.0);
}

// ---------------------------------------------------------------------------
// Test: delete decodes the acknowledgement body
// ---------------------------------------------------------------------------

#[tokio::test]
async fn delete_settings_decodes_ack() {
    let api = spawn_stub().await;

    let ack = api.delete_settings("p-1").await.expect("delete settings");
    assert!(ack.message.contains("deleted"));
}

// ---------------------------------------------------------------------------
// Test: capabilities decode the full value sets
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_capabilities_decodes_value_sets() {
    let api = spawn_stub().await;

    let caps = api.get_capabilities().await.expect("capabilities");

    assert_eq!(caps.iso_values.len(), 8);
    assert_eq!(caps.modes[1].id, "auto");
    assert_eq!(caps.white_balance_options[0].temp, 5500);
    assert_eq!(caps.color_profiles.last().map(String::as_str), Some("Vivid"));
}

// ---------------------------------------------------------------------------
// Test: non-2xx surfaces an Api error with status and body, no fallback
// ---------------------------------------------------------------------------

#[tokio::test]
async fn non_2xx_surfaces_api_error_with_status_and_body() {
    let api = spawn_stub().await;

    let err = api.get_status().await.expect_err("status must fail");

    assert_matches!(err, CameraApiError::Api { status: 503, ref body } => {
        assert!(body.contains("camera offline"));
    });
}

// ---------------------------------------------------------------------------
// Test: transport failure surfaces a Request error
// ---------------------------------------------------------------------------

#[tokio::test]
async fn connection_failure_surfaces_request_error() {
    // Bind and immediately drop a listener so the port is very likely dead.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = CameraApi::new(&ClientConfig {
        base_url: format!("http://{addr}"),
    });

    let err = api.get_all_recordings().await.expect_err("must not connect");
    assert_matches!(err, CameraApiError::Request(_));
}

// ---------------------------------------------------------------------------
// Test: unroutable path is an Api error, not a decode panic
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_route_is_an_api_error() {
    let api = spawn_stub().await;

    // The stub registers no recordings listing, so axum answers 404.
    let err = api.get_all_recordings().await.expect_err("must 404");
    assert_matches!(err, CameraApiError::Api { status: 404, .. });
}

// ---------------------------------------------------------------------------
// Test: start recording posts the settings snapshot along
// ---------------------------------------------------------------------------

#[tokio::test]
async fn start_recording_serializes_camel_case_body() {
    let body = RecordingCreate {
        file_name: "clip_0002.mov".to_string(),
        resolution: "4K UHD".to_string(),
        frame_rate: "24p".to_string(),
        settings: serde_json::to_value(CameraSettings::default()).unwrap(),
    };

    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(json["fileName"], "clip_0002.mov");
    assert_eq!(json["frameRate"], "24p");
    assert_eq!(json["settings"]["shutterSpeed"], "1/60");
}
