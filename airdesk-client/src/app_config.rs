use serde::Deserialize;
use std::env;
use config::builder::DefaultState;
use config::ConfigBuilder;

pub use config::ConfigError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub endpoints: EndpointConfig,
    #[serde(default)]
    pub chat: ChatConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EndpointConfig {
    pub base_url: String,
    pub booking_path: String,
    pub chat_path: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ChatConfig {
    /// Sent as `session_id` with every chat message when set
    pub session_id: Option<String>,
}

impl EndpointConfig {
    pub fn booking_url(&self) -> String {
        join_url(&self.base_url, &self.booking_path)
    }

    pub fn chat_url(&self) -> String {
        join_url(&self.base_url, &self.chat_path)
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = Self::with_defaults()?
            // Every file is optional: the defaults already describe the demo backend
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg.. `AIRDESK__ENDPOINTS__BASE_URL=http://10.0.0.2:5000`
            .add_source(config::Environment::with_prefix("AIRDESK").separator("__"))
            .build()?;

        s.try_deserialize()
    }

    fn with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        config::Config::builder()
            .set_default("endpoints.base_url", DEFAULT_BASE_URL)?
            .set_default("endpoints.booking_path", "/book")?
            .set_default("endpoints.chat_path", "/chat")
    }
}
