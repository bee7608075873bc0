use crate::constants::{DEFAULT_API_VERSION, DEFAULT_AUTH_URL, DEFAULT_BASE_URL};
use crate::utils::config::get_env_or_default;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// OAuth2 client credentials for the SedoTMP API
pub struct Credentials {
    /// OAuth2 client identifier
    pub client_id: String,
    /// OAuth2 client secret, never serialised
    #[serde(skip_serializing, default)]
    pub client_secret: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Endpoints and version of the REST API
pub struct RestApiConfig {
    /// Base URL of the REST API, without trailing slash
    pub base_url: String,
    /// OAuth2 token endpoint
    pub auth_url: String,
    /// Version segment inserted after the resource segment (e.g. `v1`)
    pub api_version: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Main configuration for the SedoTMP API client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from the environment
    ///
    /// A `.env` file is loaded first when present. Recognised variables are
    /// `SEDOTMP_CLIENT_ID`, `SEDOTMP_CLIENT_SECRET`, `SEDOTMP_BASE_URL`,
    /// `SEDOTMP_AUTH_URL` and `SEDOTMP_API_VERSION`.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let client_id = get_env_or_default("SEDOTMP_CLIENT_ID", String::new());
        let client_secret = get_env_or_default("SEDOTMP_CLIENT_SECRET", String::new());

        if client_id.is_empty() {
            error!("SEDOTMP_CLIENT_ID not found in environment variables or .env file");
        }
        if client_secret.is_empty() {
            error!("SEDOTMP_CLIENT_SECRET not found in environment variables or .env file");
        }

        Config {
            credentials: Credentials {
                client_id,
                client_secret,
            },
            rest_api: RestApiConfig {
                base_url: get_env_or_default("SEDOTMP_BASE_URL", String::from(DEFAULT_BASE_URL)),
                auth_url: get_env_or_default("SEDOTMP_AUTH_URL", String::from(DEFAULT_AUTH_URL)),
                api_version: get_env_or_default(
                    "SEDOTMP_API_VERSION",
                    String::from(DEFAULT_API_VERSION),
                ),
            },
        }
    }

    /// Creates a configuration from explicit credentials and the default endpoints
    ///
    /// # Arguments
    /// * `client_id` - OAuth2 client identifier
    /// * `client_secret` - OAuth2 client secret
    pub fn with_credentials(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Config {
            credentials: Credentials {
                client_id: client_id.into(),
                client_secret: client_secret.into(),
            },
            rest_api: RestApiConfig {
                base_url: String::from(DEFAULT_BASE_URL),
                auth_url: String::from(DEFAULT_AUTH_URL),
                api_version: String::from(DEFAULT_API_VERSION),
            },
        }
    }

    /// Sets the API version segment
    #[must_use]
    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.rest_api.api_version = api_version.into();
        self
    }

    /// Sets the REST API base URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.rest_api.base_url = base_url.into();
        self
    }

    /// Sets the OAuth2 token endpoint
    #[must_use]
    pub fn with_auth_url(mut self, auth_url: impl Into<String>) -> Self {
        self.rest_api.auth_url = auth_url.into();
        self
    }

    /// Audience claim requested during the token exchange: the base URL plus a trailing slash
    #[must_use]
    pub fn audience(&self) -> String {
        format!("{}/", self.rest_api.base_url)
    }
}
