/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Client facade for the SedoTMP API
//!
//! [`SedoTmp`] wires configuration, the authentication session and the
//! request dispatcher together and hands out the resource services:
//! - [`SedoTmp::content`] for the `content/...` endpoints
//! - [`SedoTmp::platform`] for the `platform/...` endpoints
//!
//! Authentication is lazy: the first resource call (or
//! [`SedoTmp::get_access_token`]) performs the OAuth2 exchange and the token
//! is reused afterwards.
//!
//! # Example
//! ```ignore
//! use sedotmp_client::prelude::*;
//!
//! let client = SedoTmp::new(Config::new())?;
//! let campaign = client.platform().get_content_campaign("310a2938").await?;
//! ```

use crate::application::auth::Auth;
use crate::application::config::Config;
use crate::application::services::{ContentServiceImpl, PlatformServiceImpl};
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::model::http::HttpClient;
use reqwest::Client as ReqwestClient;
use std::sync::Arc;
use tracing::debug;

/// Client for the SedoTMP API
///
/// Cheap to clone; clones share the session and its cached token.
#[derive(Clone)]
pub struct SedoTmp {
    auth: Arc<Auth>,
    http_client: Arc<HttpClient>,
    config: Arc<Config>,
}

impl SedoTmp {
    /// Creates a client with its own HTTP transport
    ///
    /// No request is made until the first call that needs a token.
    ///
    /// # Returns
    /// * `Ok(SedoTmp)` - Client ready to use
    /// * `Err(AppError::Http)` - If the HTTP transport cannot be built
    pub fn new(config: Config) -> Result<Self, AppError> {
        let transport = ReqwestClient::builder().user_agent(USER_AGENT).build()?;
        Ok(Self::with_http_client(config, transport))
    }

    /// Creates a client over an injected HTTP transport
    ///
    /// Use this to configure timeouts, proxies or TLS on the transport.
    pub fn with_http_client(config: Config, transport: ReqwestClient) -> Self {
        let config = Arc::new(config);
        let auth = Arc::new(Auth::new(config.clone(), transport.clone()));
        let http_client = Arc::new(HttpClient::new(auth.clone(), transport, config.clone()));

        debug!(
            "SedoTMP client created for {} (api {})",
            config.rest_api.base_url, config.rest_api.api_version
        );

        Self {
            auth,
            http_client,
            config,
        }
    }

    /// Creates a client configured from the environment, see [`Config::new`]
    pub fn from_env() -> Result<Self, AppError> {
        Self::new(Config::new())
    }

    /// Content resource (`content/{version}/...`)
    #[must_use]
    pub fn content(&self) -> ContentServiceImpl {
        ContentServiceImpl::new(self.http_client.clone())
    }

    /// Platform resource (`platform/{version}/...`)
    #[must_use]
    pub fn platform(&self) -> PlatformServiceImpl {
        PlatformServiceImpl::new(self.http_client.clone())
    }

    /// Gets the bearer token, authenticating first if none is cached
    pub async fn get_access_token(&self) -> Result<String, AppError> {
        self.auth.get_access_token().await
    }

    /// Performs the token exchange even if a token is cached
    pub async fn authenticate(&self) -> Result<String, AppError> {
        self.auth.authenticate().await
    }

    /// Replaces the cached token without contacting the identity provider
    pub async fn set_access_token(&self, token: impl Into<String>) -> &Self {
        self.auth.set_access_token(token).await;
        self
    }

    /// Returns the cached token without triggering authentication
    pub async fn cached_access_token(&self) -> Option<String> {
        self.auth.cached_access_token().await
    }

    /// Checks whether a token is cached
    pub async fn has_access_token(&self) -> bool {
        self.auth.has_access_token().await
    }

    /// Drops the cached token so the next request authenticates again
    pub async fn clear_access_token(&self) {
        self.auth.clear_access_token().await;
    }

    /// OAuth2 client identifier
    #[must_use]
    pub fn get_client_id(&self) -> &str {
        self.auth.client_id()
    }

    /// OAuth2 client secret
    #[must_use]
    pub fn get_client_secret(&self) -> &str {
        self.auth.client_secret()
    }

    /// REST API base URL
    #[must_use]
    pub fn get_base_url(&self) -> &str {
        self.auth.base_url()
    }

    /// OAuth2 token endpoint
    #[must_use]
    pub fn get_auth_url(&self) -> &str {
        self.auth.auth_url()
    }

    /// API version segment
    #[must_use]
    pub fn get_api_version(&self) -> &str {
        self.auth.api_version()
    }

    /// Configuration the client was built with
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Request dispatcher shared by the services
    #[must_use]
    pub fn http_client(&self) -> &HttpClient {
        &self.http_client
    }
}
