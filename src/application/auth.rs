/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Authentication module for the SedoTMP API
//!
//! This module owns the OAuth2 client-credentials exchange and the cached
//! bearer token:
//! - The first call to [`Auth::get_access_token`] performs the exchange
//! - The token is then reused for the lifetime of the instance
//! - Callers may inject, inspect or clear the token explicitly
//!
//! Tokens are never refreshed on expiry. A resource call made with a stale
//! token fails with the API's 401; call [`Auth::clear_access_token`] to force
//! a new exchange on the next request.

use crate::application::config::Config;
use crate::error::AppError;
use crate::model::auth::{TokenRequest, TokenResponse};
use reqwest::{Client, StatusCode};
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, error, info};

/// Authentication manager for the SedoTMP API
///
/// Holds the client credentials and the cached bearer token. The cache is
/// populated at most once per [`Auth::clear_access_token`]: concurrent callers
/// wait on the in-flight exchange instead of starting their own.
pub struct Auth {
    config: Arc<Config>,
    client: Client,
    token: RwLock<Option<String>>,
    exchange: Mutex<()>,
}

impl Auth {
    /// Creates a new Auth instance without a cached token
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and endpoints
    /// * `client` - HTTP transport used for the token exchange
    pub fn new(config: Arc<Config>, client: Client) -> Self {
        Self {
            config,
            client,
            token: RwLock::new(None),
            exchange: Mutex::new(()),
        }
    }

    /// Gets the bearer token, authenticating first if none is cached
    ///
    /// # Returns
    /// * `Ok(String)` - The cached or freshly obtained token
    /// * `Err(AppError::Authentication)` - If the exchange fails
    pub async fn get_access_token(&self) -> Result<String, AppError> {
        if let Some(token) = self.cached_access_token().await {
            return Ok(token);
        }

        let _guard = self.exchange.lock().await;

        // Another caller may have finished the exchange while we waited
        if let Some(token) = self.cached_access_token().await {
            return Ok(token);
        }

        info!("No cached access token, authenticating");
        self.exchange_token().await
    }

    /// Performs the token exchange unconditionally and caches the result
    ///
    /// # Returns
    /// * `Ok(String)` - The new token
    /// * `Err(AppError::Authentication)` - If the exchange fails; any previously cached token is kept
    pub async fn authenticate(&self) -> Result<String, AppError> {
        let _guard = self.exchange.lock().await;
        self.exchange_token().await
    }

    /// Replaces the cached token without contacting the identity provider
    ///
    /// An empty token clears the cache, so the next request authenticates.
    pub async fn set_access_token(&self, token: impl Into<String>) -> &Self {
        let token = token.into();
        let mut cached = self.token.write().await;
        if token.is_empty() {
            *cached = None;
            debug!("Empty access token set, cache cleared");
        } else {
            *cached = Some(token);
            debug!("Access token set explicitly");
        }
        self
    }

    /// Returns the cached token without triggering authentication
    pub async fn cached_access_token(&self) -> Option<String> {
        self.token.read().await.clone()
    }

    /// Checks whether a token is cached
    pub async fn has_access_token(&self) -> bool {
        self.token.read().await.is_some()
    }

    /// Drops the cached token so the next request authenticates again
    pub async fn clear_access_token(&self) {
        let mut cached = self.token.write().await;
        if cached.take().is_some() {
            info!("Cached access token cleared");
        }
    }

    /// OAuth2 client identifier
    #[must_use]
    pub fn client_id(&self) -> &str {
        &self.config.credentials.client_id
    }

    /// OAuth2 client secret
    #[must_use]
    pub fn client_secret(&self) -> &str {
        &self.config.credentials.client_secret
    }

    /// REST API base URL
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.rest_api.base_url
    }

    /// OAuth2 token endpoint
    #[must_use]
    pub fn auth_url(&self) -> &str {
        &self.config.rest_api.auth_url
    }

    /// API version segment
    #[must_use]
    pub fn api_version(&self) -> &str {
        &self.config.rest_api.api_version
    }

    /// Posts the client credentials to the token endpoint and stores the token
    ///
    /// Callers must hold the `exchange` lock.
    async fn exchange_token(&self) -> Result<String, AppError> {
        let url = &self.config.rest_api.auth_url;
        let body = TokenRequest::from_config(&self.config);

        debug!("Sending token request to: {}", url);

        let response = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::Authentication {
                message: format!("token request to {url} failed"),
                source: Some(e),
            })?;

        let status = response.status();

        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            error!("Authentication failed with status {}: {}", status, body);
            return Err(AppError::authentication(format!(
                "identity provider answered with status {status}"
            )));
        }

        let bytes = response.bytes().await.map_err(|e| AppError::Authentication {
            message: "failed to read token response".to_string(),
            source: Some(e),
        })?;

        let token = serde_json::from_slice::<TokenResponse>(&bytes)
            .ok()
            .and_then(|r| r.token().map(String::from))
            .ok_or_else(|| {
                error!("Token response did not contain an access token");
                AppError::authentication("no access token in response")
            })?;

        let mut cached = self.token.write().await;
        *cached = Some(token.clone());

        info!("✓ Authentication successful");
        Ok(token)
    }
}
