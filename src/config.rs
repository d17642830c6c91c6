//! Client Configuration
//!
//! Backend location and request policy, fixed when the bundle is built.

use std::str::FromStr;

use reqwest::Method;
use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000/api";

/// Which requests carry the browser's ambient credentials (cookies)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CredentialsPolicy {
    Never,
    /// Only DELETE requests
    #[default]
    Deletes,
    Always,
}

impl CredentialsPolicy {
    pub fn applies_to(&self, method: &Method) -> bool {
        match self {
            CredentialsPolicy::Never => false,
            CredentialsPolicy::Deletes => *method == Method::DELETE,
            CredentialsPolicy::Always => true,
        }
    }
}

impl FromStr for CredentialsPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "never" => Ok(CredentialsPolicy::Never),
            "deletes" => Ok(CredentialsPolicy::Deletes),
            "always" => Ok(CredentialsPolicy::Always),
            other => Err(format!("unknown credentials policy '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub base_url: String,
    #[serde(default)]
    pub credentials: CredentialsPolicy,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            credentials: CredentialsPolicy::default(),
        }
    }
}

impl ClientConfig {
    /// Read `TASKBOARD_API_BASE` / `TASKBOARD_CREDENTIALS` captured at compile time
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("TASKBOARD_API_BASE"), option_env!("TASKBOARD_CREDENTIALS"))
    }

    pub fn from_values(base_url: Option<&str>, credentials: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(base) = base_url.map(str::trim).filter(|b| !b.is_empty()) {
            config.base_url = base.trim_end_matches('/').to_string();
        }
        if let Some(raw) = credentials {
            match raw.parse() {
                Ok(policy) => config.credentials = policy,
                Err(e) => tracing::warn!(error = %e, "falling back to default credentials policy"),
            }
        }
        config
    }

    /// Absolute URL for an API path such as `/boards/`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path.trim_start_matches('/'))
    }
}
