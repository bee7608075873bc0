/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # SedoTMP Client Prelude
//!
//! Commonly used types and traits in one import.
//!
//! ## Usage
//!
//! ```rust
//! use sedotmp_client::prelude::*;
//!
//! let config = Config::with_credentials("client-id", "client-secret");
//! let client = SedoTmp::new(config).unwrap();
//! assert_eq!(client.get_api_version(), "v1");
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the SedoTMP API client
pub use crate::config::{Config, Credentials, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type and failed-operation tag
pub use crate::error::{AppError, Operation};

// ============================================================================
// CLIENT, AUTHENTICATION AND TRANSPORT
// ============================================================================

/// Client facade
pub use crate::application::client::SedoTmp;

/// Authentication session
pub use crate::application::auth::Auth;

/// Request dispatcher
pub use crate::model::http::{ApiSegment, HttpClient};

// ============================================================================
// SERVICES
// ============================================================================

/// Service traits
pub use crate::application::interfaces::content::ContentService;
pub use crate::application::interfaces::platform::PlatformService;

/// Service implementations
pub use crate::application::services::{ContentServiceImpl, PlatformServiceImpl};

// ============================================================================
// REQUEST MODELS AND DECODING
// ============================================================================

/// Query builders
pub use crate::model::requests::{Pagination, QueryParams, ReportQuery, TemplateQuery};

/// Body decoder
pub use crate::model::decode::{decode_body, is_ndjson};

// ============================================================================
// UTILITIES AND CONSTANTS
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use serde_json::{Map, Value, json};
pub use std::sync::Arc;
pub use tracing::{debug, error, info, warn};
