use std::time::Duration;

use tracing::{debug, info};
use zeroize::Zeroize;

use super::models::{Application, CreatedApplication};
use crate::config::Config;
use crate::error::{IswizError, Result};

const APPLICATIONS_PATH: &str = "/api/server/v1/applications";

/// Thin client for the Identity Server management API. In demo mode no
/// network I/O happens and creation succeeds with a canned result.
pub struct ApiClient {
    http: Option<reqwest::Client>,
    base_url: String,
    access_token: String,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self> {
        if !config.has_token() {
            return Err(IswizError::MissingCredentials);
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.server.timeout_secs))
            .danger_accept_invalid_certs(config.server.insecure)
            .build()?;

        Ok(Self {
            http: Some(http),
            base_url: config.server.base_url.trim_end_matches('/').to_string(),
            access_token: config.auth.access_token.clone(),
        })
    }

    pub fn demo() -> Self {
        info!("Running in demo mode");
        Self {
            http: None,
            base_url: String::new(),
            access_token: String::new(),
        }
    }

    pub async fn create_application(
        &self,
        application: &Application,
    ) -> Result<CreatedApplication> {
        let Some(http) = &self.http else {
            debug!("Demo mode: would create application '{}'", application.name);
            return Ok(CreatedApplication {
                id: Some("demo-application".to_string()),
            });
        };

        let url = format!("{}{}", self.base_url, APPLICATIONS_PATH);
        debug!("POST {}", url);

        let response = http
            .post(&url)
            .bearer_auth(&self.access_token)
            .json(application)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            let id = response
                .headers()
                .get(reqwest::header::LOCATION)
                .and_then(|value| value.to_str().ok())
                .and_then(|location| location.rsplit('/').next())
                .map(str::to_string);
            info!("Application '{}' created (id: {:?})", application.name, id);
            Ok(CreatedApplication { id })
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(IswizError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

impl Drop for ApiClient {
    fn drop(&mut self) {
        self.access_token.zeroize();
    }
}
