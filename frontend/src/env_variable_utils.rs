use ideas::{InitStrategy, DEFAULT_STORAGE_KEY};
use lazy_static::lazy_static;
use log::Level;
use serde::Deserialize;
use web_sys::window;

lazy_static! {
    pub static ref ENV_CONFIG: EnvConfig = load_env_config();
}

/// Runtime settings injected by `index.html` as `window.ENV_CONFIG`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", default)]
pub struct EnvConfig {
    pub app_name: String,
    pub storage_key: String,
    pub seed_examples: bool,
    pub debug_mode: bool,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            app_name: "Running Channel Manager".to_string(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            seed_examples: true,
            debug_mode: false,
        }
    }
}

impl EnvConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Config for the raw `ENV_CONFIG` JSON, or the defaults plus the reason
    /// they were used.
    pub fn resolve(raw: Option<&str>) -> (Self, Option<String>) {
        let Some(raw) = raw else {
            return (
                Self::default(),
                Some("ENV_CONFIG is undefined - using default configuration".to_string()),
            );
        };

        match Self::from_json(raw) {
            Ok(config) => (config, None),
            Err(e) => (
                Self::default(),
                Some(format!(
                    "ENV_CONFIG could not be parsed ({e}) - using default configuration"
                )),
            ),
        }
    }

    pub fn log_level(&self) -> Level {
        if self.debug_mode {
            Level::Debug
        } else {
            Level::Info
        }
    }

    pub fn init_strategy(&self) -> InitStrategy {
        if self.seed_examples {
            InitStrategy::LoadOrSeed
        } else {
            InitStrategy::LoadOrEmpty
        }
    }
}

fn env_config_json() -> Option<String> {
    let window = window()?;

    // Get the ENV_CONFIG object
    let env_config = js_sys::Reflect::get(&window, &"ENV_CONFIG".into()).ok()?;

    if env_config.is_undefined() {
        return None;
    }

    js_sys::JSON::stringify(&env_config).ok()?.as_string()
}

pub fn load_env_config() -> EnvConfig {
    let (config, warning) = EnvConfig::resolve(env_config_json().as_deref());
    if let Some(warning) = warning {
        log::warn!("{warning}");
    }
    config
}
