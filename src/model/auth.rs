/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::application::config::Config;
use crate::constants::GRANT_TYPE_CLIENT_CREDENTIALS;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of the OAuth2 client-credentials token request
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct TokenRequest<'a> {
    /// OAuth2 client identifier
    pub client_id: &'a str,
    /// OAuth2 client secret
    pub client_secret: &'a str,
    /// API the token is requested for: the base URL with a trailing slash
    pub audience: String,
    /// Always `client_credentials`
    pub grant_type: &'static str,
}

impl<'a> TokenRequest<'a> {
    /// Builds the token request for the given configuration
    pub fn from_config(config: &'a Config) -> Self {
        Self {
            client_id: &config.credentials.client_id,
            client_secret: &config.credentials.client_secret,
            audience: config.audience(),
            grant_type: GRANT_TYPE_CLIENT_CREDENTIALS,
        }
    }
}

/// Token endpoint response
///
/// Only `access_token` is used by the client; every other field the identity
/// provider sends (`token_type`, `expires_in`, `scope`...) is kept in `extra`.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct TokenResponse {
    /// Bearer token for resource requests
    #[serde(default)]
    pub access_token: Option<String>,
    /// Remaining fields of the response
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TokenResponse {
    /// Returns the access token when it is present and non-empty
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.access_token.as_deref().filter(|t| !t.is_empty())
    }
}
