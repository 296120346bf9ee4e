use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;
use zeroize::Zeroize;

use crate::error::Result;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub auth: AuthConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Base URL of the Identity Server, without a trailing path
    pub base_url: String,
    /// Request timeout for management API calls
    pub timeout_secs: u64,
    /// Accept self-signed certificates (local development servers)
    pub insecure: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: "https://localhost:9443".to_string(),
            timeout_secs: 30,
            insecure: false,
        }
    }
}

#[derive(Clone, Deserialize, Default)]
pub struct AuthConfig {
    /// Bearer token for the management API
    #[serde(default)]
    pub access_token: String,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("access_token", &"<redacted>")
            .finish()
    }
}

impl Drop for AuthConfig {
    fn drop(&mut self) {
        self.access_token.zeroize();
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        match default_path() {
            Some(path) => Self::load_from(path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            info!("Config file not found at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        info!("Loaded config from {:?}", path);
        Ok(config)
    }

    pub fn has_token(&self) -> bool {
        !self.auth.access_token.is_empty()
    }
}

fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("iswiz").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = Config::load_from("/nonexistent/iswiz/config.toml").unwrap();
        assert_eq!(config.server.base_url, "https://localhost:9443");
        assert_eq!(config.server.timeout_secs, 30);
        assert!(!config.server.insecure);
        assert!(!config.has_token());
    }

    #[test]
    fn loads_documented_toml_shape() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[server]
base_url = "https://id.example.test"
timeout_secs = 5
insecure = true

[auth]
access_token = "secret-token"
"#
        )
        .unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.server.base_url, "https://id.example.test");
        assert_eq!(config.server.timeout_secs, 5);
        assert!(config.server.insecure);
        assert_eq!(config.auth.access_token, "secret-token");
        assert!(config.has_token());
    }

    #[test]
    fn partial_config_keeps_remaining_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[auth]\naccess_token = \"tkn\"").unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.server.base_url, "https://localhost:9443");
        assert!(config.has_token());
    }

    #[test]
    fn debug_output_redacts_token() {
        let config = Config {
            auth: AuthConfig {
                access_token: "secret-token".to_string(),
            },
            ..Config::default()
        };
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("secret-token"));
    }
}
