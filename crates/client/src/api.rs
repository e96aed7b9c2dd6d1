//! REST client for the camera backend HTTP endpoints.
//!
//! One method per verb+path pair, all asynchronous and non-blocking. The
//! error policy is deliberately blunt: any transport failure or non-2xx
//! response is logged exactly once and returned to the caller unchanged.
//! There is no retry, no backoff and no timeout here; a caller that needs
//! bounded latency wraps its own.

use serde::de::DeserializeOwned;

use viewfinder_core::status::CameraStatus;

use crate::config::ClientConfig;
use crate::models::{
    Capabilities, DeleteAck, RecordingCreate, RecordingResource, SettingsCreate, SettingsPatch,
    SettingsResource,
};

/// HTTP client for one camera backend.
pub struct CameraApi {
    client: reqwest::Client,
    api_url: String,
}

/// Errors from the camera REST layer.
#[derive(Debug, thiserror::Error)]
pub enum CameraApiError {
    /// The HTTP request itself failed (connect, DNS, TLS, decode).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The backend returned a non-2xx status code.
    #[error("Camera API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

impl CameraApi {
    /// Create a client for the backend described by `config`.
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: config.api_base(),
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`] (shares the
    /// connection pool with other clients on the same backend).
    pub fn with_client(client: reqwest::Client, config: &ClientConfig) -> Self {
        Self {
            client,
            api_url: config.api_base(),
        }
    }

    // ---- settings ----

    /// `POST /camera/settings` -- save a new settings preset.
    pub async fn create_settings(
        &self,
        settings: &SettingsCreate,
    ) -> Result<SettingsResource, CameraApiError> {
        let request = self
            .client
            .post(format!("{}/camera/settings", self.api_url))
            .json(settings);
        self.execute("create_settings", request).await
    }

    /// `GET /camera/settings/{id}` -- fetch one settings preset.
    pub async fn get_settings(&self, id: &str) -> Result<SettingsResource, CameraApiError> {
        let request = self
            .client
            .get(format!("{}/camera/settings/{id}", self.api_url));
        self.execute("get_settings", request).await
    }

    /// `GET /camera/settings` -- list all saved settings presets.
    pub async fn get_all_settings(&self) -> Result<Vec<SettingsResource>, CameraApiError> {
        let request = self.client.get(format!("{}/camera/settings", self.api_url));
        self.execute("get_all_settings", request).await
    }

    /// `PUT /camera/settings/{id}` -- partially update a settings preset.
    pub async fn update_settings(
        &self,
        id: &str,
        patch: &SettingsPatch,
    ) -> Result<SettingsResource, CameraApiError> {
        let request = self
            .client
            .put(format!("{}/camera/settings/{id}", self.api_url))
            .json(patch);
        self.execute("update_settings", request).await
    }

    /// `DELETE /camera/settings/{id}` -- remove a settings preset.
    pub async fn delete_settings(&self, id: &str) -> Result<DeleteAck, CameraApiError> {
        let request = self
            .client
            .delete(format!("{}/camera/settings/{id}", self.api_url));
        self.execute("delete_settings", request).await
    }

    // ---- recordings ----

    /// `POST /camera/recordings` -- start a recording session.
    pub async fn start_recording(
        &self,
        recording: &RecordingCreate,
    ) -> Result<RecordingResource, CameraApiError> {
        let request = self
            .client
            .post(format!("{}/camera/recordings", self.api_url))
            .json(recording);
        self.execute("start_recording", request).await
    }

    /// `PUT /camera/recordings/{id}/stop` -- stop a recording. No body; not
    /// guaranteed idempotent: stopping an already-stopped recording may
    /// error, per backend semantics.
    pub async fn stop_recording(&self, id: &str) -> Result<RecordingResource, CameraApiError> {
        let request = self
            .client
            .put(format!("{}/camera/recordings/{id}/stop", self.api_url));
        self.execute("stop_recording", request).await
    }

    /// `GET /camera/recordings` -- list all recordings.
    pub async fn get_all_recordings(&self) -> Result<Vec<RecordingResource>, CameraApiError> {
        let request = self
            .client
            .get(format!("{}/camera/recordings", self.api_url));
        self.execute("get_all_recordings", request).await
    }

    /// `GET /camera/recordings/{id}` -- fetch one recording.
    pub async fn get_recording(&self, id: &str) -> Result<RecordingResource, CameraApiError> {
        let request = self
            .client
            .get(format!("{}/camera/recordings/{id}", self.api_url));
        self.execute("get_recording", request).await
    }

    /// `DELETE /camera/recordings/{id}` -- remove a recording.
    pub async fn delete_recording(&self, id: &str) -> Result<DeleteAck, CameraApiError> {
        let request = self
            .client
            .delete(format!("{}/camera/recordings/{id}", self.api_url));
        self.execute("delete_recording", request).await
    }

    // ---- status & capabilities ----

    /// `GET /camera/status` -- fetch the current hardware status snapshot.
    pub async fn get_status(&self) -> Result<CameraStatus, CameraApiError> {
        let request = self.client.get(format!("{}/camera/status", self.api_url));
        self.execute("get_status", request).await
    }

    /// `PUT /camera/status` -- replace the hardware status snapshot.
    pub async fn update_status(
        &self,
        status: &CameraStatus,
    ) -> Result<CameraStatus, CameraApiError> {
        let request = self
            .client
            .put(format!("{}/camera/status", self.api_url))
            .json(status);
        self.execute("update_status", request).await
    }

    /// `GET /camera/capabilities` -- fetch supported modes and value sets.
    pub async fn get_capabilities(&self) -> Result<Capabilities, CameraApiError> {
        let request = self
            .client
            .get(format!("{}/camera/capabilities", self.api_url));
        self.execute("get_capabilities", request).await
    }

    // ---- private helpers ----

    /// Send a request, decode the JSON body and log any failure exactly
    /// once before handing it back.
    async fn execute<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        request: reqwest::RequestBuilder,
    ) -> Result<T, CameraApiError> {
        let result = match request.send().await {
            Ok(response) => Self::parse_response(response).await,
            Err(e) => Err(CameraApiError::Request(e)),
        };

        if let Err(e) = &result {
            tracing::error!(error = %e, operation, "Camera API request failed");
        }
        result
    }

    /// Ensure the response has a success status code. Returns the response
    /// unchanged on success, or a [`CameraApiError::Api`] containing the
    /// status and body text on failure.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, CameraApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(CameraApiError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, CameraApiError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}
