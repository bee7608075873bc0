/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

use crate::application::auth::Auth;
use crate::application::config::Config;
use crate::error::{AppError, Operation};
use crate::model::decode::decode_body;
use crate::model::requests::QueryParams;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, Response};
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, error};

/// Top-level path segment grouping related endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiSegment {
    /// `content/...` endpoints
    Content,
    /// `platform/...` endpoints
    Platform,
}

impl ApiSegment {
    /// Path component of the segment
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Content => "content",
            Self::Platform => "platform",
        }
    }
}

impl fmt::Display for ApiSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request dispatcher shared by the resource services
///
/// Every call obtains the bearer token from [`Auth`] (authenticating on first
/// use), sends the request, turns transport failures and non-2xx statuses into
/// [`AppError::ApiCall`] and decodes the body.
pub struct HttpClient {
    auth: Arc<Auth>,
    http_client: Client,
    config: Arc<Config>,
}

impl HttpClient {
    /// Creates a dispatcher over an existing session and transport
    pub fn new(auth: Arc<Auth>, http_client: Client, config: Arc<Config>) -> Self {
        Self {
            auth,
            http_client,
            config,
        }
    }

    /// Session used to authorise requests
    #[must_use]
    pub fn auth(&self) -> &Auth {
        &self.auth
    }

    /// Builds `base/segment/version/path[?query]`
    #[must_use]
    pub fn endpoint_url(&self, segment: ApiSegment, path: &str, query: &QueryParams) -> String {
        let mut url = format!(
            "{}/{}/{}/{}",
            self.config.rest_api.base_url, segment, self.config.rest_api.api_version, path
        );
        if !query.is_empty() {
            url.push('?');
            url.push_str(&query.to_query_string());
        }
        url
    }

    /// Makes a GET request and decodes the body
    pub async fn get(
        &self,
        operation: Operation,
        segment: ApiSegment,
        path: &str,
        query: &QueryParams,
    ) -> Result<Value, AppError> {
        let url = self.endpoint_url(segment, path, query);
        let response = self
            .request_internal(operation, Method::GET, &url, None::<&()>)
            .await?;
        self.parse_response(operation, response).await
    }

    /// Makes a POST request with a JSON body and decodes the response
    pub async fn post<B: Serialize + ?Sized>(
        &self,
        operation: Operation,
        segment: ApiSegment,
        path: &str,
        body: &B,
    ) -> Result<Value, AppError> {
        let url = self.endpoint_url(segment, path, &QueryParams::new());
        let response = self
            .request_internal(operation, Method::POST, &url, Some(body))
            .await?;
        self.parse_response(operation, response).await
    }

    /// Makes a PUT request with a JSON body and decodes the response
    pub async fn put<B: Serialize + ?Sized>(
        &self,
        operation: Operation,
        segment: ApiSegment,
        path: &str,
        body: &B,
    ) -> Result<Value, AppError> {
        let url = self.endpoint_url(segment, path, &QueryParams::new());
        let response = self
            .request_internal(operation, Method::PUT, &url, Some(body))
            .await?;
        self.parse_response(operation, response).await
    }

    /// Makes a DELETE request; the response body is not read
    pub async fn delete(
        &self,
        operation: Operation,
        segment: ApiSegment,
        path: &str,
    ) -> Result<(), AppError> {
        let url = self.endpoint_url(segment, path, &QueryParams::new());
        self.request_internal(operation, Method::DELETE, &url, None::<&()>)
            .await?;
        Ok(())
    }

    /// Sends the request and checks the status
    async fn request_internal<B: Serialize + ?Sized>(
        &self,
        operation: Operation,
        method: Method,
        url: &str,
        body: Option<&B>,
    ) -> Result<Response, AppError> {
        let token = self.auth.get_access_token().await?;

        debug!("{} {}", method, url);

        let mut request = self
            .http_client
            .request(method, url)
            .bearer_auth(token)
            .header(CONTENT_TYPE, "application/json");

        if let Some(b) = body {
            request = request.json(b);
        }

        let response = request
            .send()
            .await
            .map_err(|source| api_call_error(operation, source))?;

        let status = response.status();
        debug!("Response status: {}", status);

        response
            .error_for_status()
            .map_err(|source| api_call_error(operation, source))
    }

    /// Reads the body and hands it to the decoder with the declared content type
    async fn parse_response(&self, operation: Operation, response: Response) -> Result<Value, AppError> {
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();

        let bytes = response
            .bytes()
            .await
            .map_err(|source| api_call_error(operation, source))?;

        decode_body(&bytes, &content_type)
    }
}

fn api_call_error(operation: Operation, source: reqwest::Error) -> AppError {
    error!("{}: {}", operation, source);
    AppError::ApiCall { operation, source }
}
