use shared_types::ClientConfig;
use std::sync::{LazyLock, OnceLock};

static CONFIG: OnceLock<ClientConfig> = OnceLock::new();

/// Path to the config file, relative to the working directory.
#[cfg(not(target_arch = "wasm32"))]
const CONFIG_PATH: &str = "config.toml";

/// Overrides `[api] base_url` when set.
pub const API_URL_ENV: &str = "STUDENT_API_URL";

/// Load the client configuration into the global `OnceLock`. Only the first
/// call has effect; later calls return the stored value.
///
/// A missing or unparseable file falls back to defaults.
#[cfg(not(target_arch = "wasm32"))]
pub fn load_config() -> &'static ClientConfig {
    CONFIG.get_or_init(|| {
        let _ = dotenvy::dotenv();
        let mut config = match std::fs::read_to_string(CONFIG_PATH) {
            Ok(contents) => parse_config(&contents),
            Err(e) => {
                eprintln!("[config] {CONFIG_PATH} not found ({e}), using defaults");
                ClientConfig::default()
            }
        };
        apply_api_override(&mut config, std::env::var(API_URL_ENV).ok());
        eprintln!("[config] API base URL: {}", config.api_base_url());
        config
    })
}

/// In the browser there is no file system; the base URL can still be baked
/// in at build time.
#[cfg(target_arch = "wasm32")]
pub fn load_config() -> &'static ClientConfig {
    CONFIG.get_or_init(|| {
        let mut config = ClientConfig::default();
        apply_api_override(&mut config, option_env!("STUDENT_API_URL").map(String::from));
        config
    })
}

/// The loaded configuration, or defaults if `load_config()` has not run.
pub fn config() -> &'static ClientConfig {
    static DEFAULT: LazyLock<ClientConfig> = LazyLock::new(ClientConfig::default);
    CONFIG.get().unwrap_or(&DEFAULT)
}

pub fn parse_config(contents: &str) -> ClientConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        eprintln!("[config] Failed to parse config: {e}, using defaults");
        ClientConfig::default()
    })
}

fn apply_api_override(config: &mut ClientConfig, value: Option<String>) {
    if let Some(url) = value.filter(|v| !v.trim().is_empty()) {
        config.api.base_url = url.trim().to_string();
    }
}
