/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # SedoTMP Client
//!
//! Client library for the SedoTMP advertising platform API.
//!
//! The crate handles the OAuth2 client-credentials exchange, caches the bearer
//! token for the lifetime of the client and exposes the Content and Platform
//! endpoints as async methods returning loosely-typed [`serde_json::Value`]s.
//! Report endpoints answer with newline-delimited JSON; the body decoder turns
//! those into a JSON array transparently.
//!
//! ## Example
//! ```ignore
//! use sedotmp_client::prelude::*;
//!
//! let config = Config::with_credentials("client-id", "client-secret");
//! let client = SedoTmp::new(config)?;
//!
//! let categories = client.content().get_categories().await?;
//! let report = client
//!     .platform()
//!     .get_campaign_report(
//!         &ReportQuery::new()
//!             .with_dimensions(["DATE", "COUNTRY"])
//!             .with_pagination(Pagination::offset(0, 100)),
//!     )
//!     .await?;
//! ```

/// Client facade, configuration, authentication and resource services
pub mod application;

/// Library-wide constants
pub mod constants;

/// Error types
pub mod error;

/// Request, response and transport models
pub mod model;

/// Commonly used re-exports
pub mod prelude;

/// Configuration and logging helpers
pub mod utils;

/// Configuration re-export at the crate root
pub use application::config;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
