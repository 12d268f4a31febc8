use std::path::PathBuf;

/// Process-wide configuration, built once at startup and passed explicitly
/// to the provider clients — no hidden module-level state.
#[derive(Clone)]
pub struct AppConfig {
    pub route_api_key: String,
    pub imagery_api_key: String,
    pub log_level: String,
    pub output_dir: PathBuf,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub sample_count: usize,
    pub image_width: u32,
    pub image_height: u32,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("route_api_key", &"[redacted]")
            .field("imagery_api_key", &"[redacted]")
            .field("log_level", &self.log_level)
            .field("output_dir", &self.output_dir)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("sample_count", &self.sample_count)
            .field("image_width", &self.image_width)
            .field("image_height", &self.image_height)
            .finish()
    }
}
