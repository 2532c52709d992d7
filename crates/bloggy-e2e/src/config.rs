// Suite configuration - credentials file and target URL
//
// Credentials live in a YAML file (`credentials.adminusername`, ...); the
// application URL comes from the `LOCAL_SETUP_URL` environment variable.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use url::Url;

/// Environment variable holding the application base URL
pub const TARGET_URL_VAR: &str = "LOCAL_SETUP_URL";

/// Environment variable overriding the credentials file location
pub const CONFIG_PATH_VAR: &str = "BLOGGY_CONFIG";

/// A username/password pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Login {
    pub username: String,
    pub password: String,
}

impl Login {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Valid admin credentials plus a pair the application must reject.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Credentials {
    #[serde(rename = "adminusername")]
    pub admin_username: String,
    pub password: String,
    pub invalid_username: String,
    pub invalid_password: String,
}

impl Credentials {
    pub fn valid(&self) -> Login {
        Login::new(&self.admin_username, &self.password)
    }

    pub fn invalid(&self) -> Login {
        Login::new(&self.invalid_username, &self.invalid_password)
    }
}

/// Parsed credentials file.
#[derive(Debug, Clone, Deserialize)]
pub struct SuiteConfig {
    pub credentials: Credentials,
}

impl SuiteConfig {
    pub fn from_yaml(source: &str) -> Result<Self> {
        let config: SuiteConfig = serde_yaml::from_str(source)?;
        let creds = &config.credentials;
        if creds.admin_username.is_empty() || creds.password.is_empty() {
            return Err(Error::Config(
                "credentials.adminusername and credentials.password must not be empty".to_string(),
            ));
        }
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("cannot read {}: {}", path.display(), e)))?;
        Self::from_yaml(&source).map_err(|e| e.context(path.display().to_string()))
    }

    /// Loads from `BLOGGY_CONFIG`, falling back to `data/config.yaml` in this crate.
    pub fn load_default() -> Result<Self> {
        Self::load(&default_config_path(std::env::var_os(CONFIG_PATH_VAR)))
    }
}

fn default_config_path(override_path: Option<std::ffi::OsString>) -> PathBuf {
    match override_path {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => Path::new(env!("CARGO_MANIFEST_DIR")).join("data").join("config.yaml"),
    }
}

/// Reads and validates the application URL from the environment.
pub fn target_url() -> Result<String> {
    let raw = std::env::var(TARGET_URL_VAR)
        .map_err(|_| Error::Config(format!("{TARGET_URL_VAR} is not set")))?;
    parse_target_url(&raw)
}

pub fn parse_target_url(raw: &str) -> Result<String> {
    let url = Url::parse(raw.trim())
        .map_err(|e| Error::Config(format!("{TARGET_URL_VAR}='{raw}' is not a URL: {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url.as_str().trim_end_matches('/').to_string()),
        other => Err(Error::Config(format!(
            "{TARGET_URL_VAR} must be http(s), got scheme '{other}'"
        ))),
    }
}
