use serde::{Deserialize, Serialize};

use super::error::*;

/// Configuration baked into the bundle at build time, in toml.
///
/// Missing keys fall back to the defaults below.
const BUILD_CONFIG: Option<&str> = option_env!("TUTOR_CONFIG");

#[derive(Debug, PartialEq, Eq, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default = "default_frontend_config")]
    pub frontend: FrontendConfig,
}

#[derive(Debug, PartialEq, Eq, Clone, Deserialize, Serialize)]
pub struct FrontendConfig {
    #[serde(default = "default_api_server")]
    pub api_server: String,
    /// scheme word put in front of the token in `Authorization`
    #[serde(default = "default_token_scheme")]
    pub token_scheme: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        default_frontend_config()
    }
}

fn default_frontend_config() -> FrontendConfig {
    FrontendConfig {
        api_server: default_api_server(),
        token_scheme: default_token_scheme(),
    }
}

fn default_api_server() -> String {
    "http://127.0.0.1:8000".to_owned()
}

fn default_token_scheme() -> String {
    "Token".to_owned()
}

pub fn parse_config(raw: &str) -> Result<Config> {
    Ok(toml::from_str(raw)?)
}

fn load_config() -> FrontendConfig {
    let Some(raw) = BUILD_CONFIG else {
        return default_frontend_config();
    };
    match parse_config(raw).context("reading TUTOR_CONFIG") {
        Ok(config) => config.frontend,
        Err(err) => {
            tracing::warn!(%err, "malformed build config, using defaults");
            default_frontend_config()
        }
    }
}

/// Frontend configuration, cached in the tab's session storage.
pub fn frontend_config() -> FrontendConfig {
    cfg_if::cfg_if! { if #[cfg(target_arch = "wasm32")] {
        use gloo::storage::{SessionStorage, Storage};
        const SERVER_CONFIG_KEY: &str = "frontend_config";
        if let Ok(config) = SessionStorage::get(SERVER_CONFIG_KEY) {
            return config;
        }
        let config = load_config();
        if let Err(err) = SessionStorage::set(SERVER_CONFIG_KEY, &config) {
            tracing::warn!(%err, "cannot cache frontend config");
        }
        config
    } else {
        load_config()
    }}
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.frontend, FrontendConfig::default());
        assert_eq!(config.frontend.token_scheme, "Token");
    }

    #[test]
    fn partial_config_keeps_other_defaults() {
        let config = parse_config(
            r#"
            [frontend]
            api_server = "https://tutor.example.org"
            "#,
        )
        .unwrap();
        assert_eq!(config.frontend.api_server, "https://tutor.example.org");
        assert_eq!(config.frontend.token_scheme, "Token");
    }

    #[test]
    fn malformed_config_is_error() {
        let err = parse_config("[frontend\napi_server = 1").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Malformed);
    }
}
