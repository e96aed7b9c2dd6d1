//! Client configuration loaded from environment variables.

/// Connection settings for the camera backend.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend origin, e.g. `http://localhost:8000`. The `/api` prefix is
    /// appended by the client.
    pub base_url: String,
}

impl ClientConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var              | Default                 |
    /// |----------------------|-------------------------|
    /// | `CAMERA_BACKEND_URL` | `http://localhost:8000` |
    pub fn from_env() -> Self {
        let base_url = std::env::var("CAMERA_BACKEND_URL")
            .unwrap_or_else(|_| "http://localhost:8000".into());
        Self { base_url }
    }

    /// Full API base, with any trailing slash on the origin normalized away.
    pub fn api_base(&self) -> String {
        format!("{}/api", self.base_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_base_appends_prefix() {
        let config = ClientConfig {
            base_url: "http://camera.local:8000".to_string(),
        };
        assert_eq!(config.api_base(), "http://camera.local:8000/api");
    }

    #[test]
    fn api_base_normalizes_trailing_slash() {
        let config = ClientConfig {
            base_url: "http://camera.local:8000/".to_string(),
        };
        assert_eq!(config.api_base(), "http://camera.local:8000/api");
    }
}
