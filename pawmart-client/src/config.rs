use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Backend base URL. Route suffixes are appended to it directly with no
    /// normalization, so the value must end in `/`.
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionConfig {
    /// Location of the persisted session file.
    #[serde(default = "default_session_path")]
    pub path: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            path: default_session_path(),
        }
    }
}

fn default_session_path() -> String {
    ".pawmart/session.json".to_string()
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Start off by merging in the "default" configuration file
            .add_source(config::File::with_name("config/default").required(false))
            // Add in the current environment file
            // Default to 'development' env
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add in a local configuration file
            // This file shouldn't be checked in to git
            .add_source(config::File::with_name("config/local").required(false))
            // Add in settings from the environment (with a prefix of PAWMART)
            // Eg.. `PAWMART__API__BASE_URL=...` would set the api.base_url key
            .add_source(config::Environment::with_prefix("PAWMART").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_reads_base_url_from_environment() {
        env::set_var("PAWMART__API__BASE_URL", "https://api.pawmart.example/");

        let config = Config::load().unwrap();
        assert_eq!(config.api.base_url, "https://api.pawmart.example/");
        // Session section falls back to its default when unset
        assert_eq!(config.session.path, ".pawmart/session.json");

        env::remove_var("PAWMART__API__BASE_URL");
    }
}
