use std::path::PathBuf;

#[derive(Clone)]
pub struct AppConfig {
    pub mapquest_api_key: String,
    pub nps_base_url: String,
    pub places_url: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub log_level: String,
    pub snapshot_path: PathBuf,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("mapquest_api_key", &"[redacted]")
            .field("nps_base_url", &self.nps_base_url)
            .field("places_url", &self.places_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("log_level", &self.log_level)
            .field("snapshot_path", &self.snapshot_path)
            .finish()
    }
}
