// --- File: crates/bookable_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

// --- Remote Store Config ---
// Holds non-secret store config. The API key is loaded via APP__STORE__API_KEY.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct StoreConfig {
    /// Base URL of the managed store's REST interface.
    pub base_url: String,
    /// API key; usually injected through the environment rather than a file.
    pub api_key: Option<String>,
}

// --- Scheduling Config ---
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct SchedulingConfig {
    /// IANA timezone the shop operates in; "now" for past-slot filtering is
    /// resolved against it. Falls back to UTC when absent or unparseable.
    pub time_zone: Option<String>,
}

// --- Application Config ---
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    /// When false the backend runs against the in-memory store.
    #[serde(default)]
    pub use_rest_store: bool,
    pub store: Option<StoreConfig>,
    #[serde(default)]
    pub scheduling: SchedulingConfig,
}
