use std::path::PathBuf;

/// Process-wide settings resolved once at the entry point.
///
/// `places_api_key` stays optional here; whether its absence is fatal is
/// decided by the request builder, which also accepts a per-query credential.
#[derive(Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub places_api_key: Option<String>,
    pub places_base_url: String,
    pub plan_path: Option<PathBuf>,
    pub output_path: PathBuf,
    pub request_timeout_secs: u64,
    pub user_agent: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("log_level", &self.log_level)
            .field(
                "places_api_key",
                &self.places_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("places_base_url", &self.places_base_url)
            .field("plan_path", &self.plan_path)
            .field("output_path", &self.output_path)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
