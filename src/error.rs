/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Error types returned by the SedoTMP client

use crate::constants::API_NAME;
use std::fmt;
use thiserror::Error;

/// Resource operation that issued a failed API call
///
/// Carried by [`AppError::ApiCall`] so callers can tell which endpoint failed
/// without parsing the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// `GET content/{v}/categories`
    FetchCategories,
    /// `GET platform/{v}/content-campaigns`
    FetchContentCampaigns,
    /// `GET platform/{v}/content-campaigns/{id}`
    FetchContentCampaign,
    /// `POST platform/{v}/content-campaigns`
    CreateContentCampaign,
    /// `GET platform/{v}/campaign-report`
    FetchCampaignReport,
    /// `GET platform/{v}/keyword-performance-report`
    FetchKeywordPerformanceReport,
    /// `GET platform/{v}/tracking-data-templates/postback`
    FetchPostbackTemplates,
    /// `GET platform/{v}/tracking-data-templates/postback/{id}`
    FetchPostbackTemplate,
    /// `POST platform/{v}/tracking-data-templates/postback`
    CreatePostbackTemplate,
    /// `PUT platform/{v}/tracking-data-templates/postback/{id}`
    UpdatePostbackTemplate,
    /// `DELETE platform/{v}/tracking-data-templates/postback/{id}`
    DeletePostbackTemplate,
    /// `GET platform/{v}/tracking-data-templates/traffic-source`
    FetchTrafficSourceTemplates,
    /// `GET platform/{v}/tracking-data-templates/traffic-source/{id}`
    FetchTrafficSourceTemplate,
    /// `POST platform/{v}/tracking-data-templates/traffic-source`
    CreateTrafficSourceTemplate,
    /// `PUT platform/{v}/tracking-data-templates/traffic-source/{id}`
    UpdateTrafficSourceTemplate,
    /// `DELETE platform/{v}/tracking-data-templates/traffic-source/{id}`
    DeleteTrafficSourceTemplate,
}

impl Operation {
    /// Verb phrase describing the operation, including its preposition
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::FetchCategories => "fetch categories from",
            Self::FetchContentCampaigns => "fetch content campaigns from",
            Self::FetchContentCampaign => "fetch content campaign from",
            Self::CreateContentCampaign => "create content campaign in",
            Self::FetchCampaignReport => "fetch campaign report from",
            Self::FetchKeywordPerformanceReport => "fetch keyword performance report from",
            Self::FetchPostbackTemplates => "fetch postback templates from",
            Self::FetchPostbackTemplate => "fetch postback template from",
            Self::CreatePostbackTemplate => "create postback template in",
            Self::UpdatePostbackTemplate => "update postback template in",
            Self::DeletePostbackTemplate => "delete postback template from",
            Self::FetchTrafficSourceTemplates => "fetch traffic source templates from",
            Self::FetchTrafficSourceTemplate => "fetch traffic source template from",
            Self::CreateTrafficSourceTemplate => "create traffic source template in",
            Self::UpdateTrafficSourceTemplate => "update traffic source template in",
            Self::DeleteTrafficSourceTemplate => "delete traffic source template from",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Failed to {} {}", self.description(), API_NAME)
    }
}

/// Main error type of the library
#[derive(Debug, Error)]
pub enum AppError {
    /// The token exchange failed, was rejected, or returned no usable token
    #[error("authentication failed: {message}")]
    Authentication {
        /// What went wrong
        message: String,
        /// Transport error behind the failure, if any
        #[source]
        source: Option<reqwest::Error>,
    },

    /// The response body is not a JSON object or array
    #[error("invalid response format: {message}")]
    ResponseFormat {
        /// What went wrong
        message: String,
        /// Parser error behind the failure, if any
        #[source]
        source: Option<serde_json::Error>,
    },

    /// A resource call failed at the transport level or returned a non-2xx status
    #[error("{operation}: {source}")]
    ApiCall {
        /// Operation that was being performed
        operation: Operation,
        /// Underlying transport error
        #[source]
        source: reqwest::Error,
    },

    /// Serialising a request value failed
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Building the HTTP client failed
    #[error("http client error: {0}")]
    Http(#[from] reqwest::Error),

    /// An argument was rejected before any request was made
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl AppError {
    pub(crate) fn authentication(message: impl Into<String>) -> Self {
        Self::Authentication {
            message: message.into(),
            source: None,
        }
    }

    pub(crate) fn response_format(message: impl Into<String>) -> Self {
        Self::ResponseFormat {
            message: message.into(),
            source: None,
        }
    }

    /// Returns the failed operation when this is an [`AppError::ApiCall`]
    #[must_use]
    pub fn operation(&self) -> Option<Operation> {
        match self {
            Self::ApiCall { operation, .. } => Some(*operation),
            _ => None,
        }
    }

    /// Returns the HTTP status behind the error, when one was received
    #[must_use]
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            Self::ApiCall { source, .. } | Self::Http(source) => source.status(),
            Self::Authentication {
                source: Some(source),
                ..
            } => source.status(),
            _ => None,
        }
    }
}
