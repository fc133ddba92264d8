use dioxus::logger::tracing::Level;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8888/wedding";

// Served by the host next to the bundle, not through the asset pipeline.
pub const POSTER_PATH: &str = "/assets/poster.jpg";
pub const VIDEO_PATH: &str = "/assets/main.mp4";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub endpoint: String,
}

impl ApiConfig {
    /// The page runs in a browser without a process environment, so the
    /// override is baked in at build time: `WEDDING_API_URL=... dx build`.
    pub fn from_build_env() -> Self {
        Self::with_override(option_env!("WEDDING_API_URL"))
    }

    fn with_override(endpoint: Option<&str>) -> Self {
        let endpoint = endpoint
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_ENDPOINT);
        Self {
            endpoint: endpoint.to_string(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::with_override(None)
    }
}

pub fn log_level() -> Level {
    if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    }
}
