use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the content service (`content/{version}/...` endpoints)
#[async_trait]
pub trait ContentService: Send + Sync {
    /// Gets the list of content categories
    async fn get_categories(&self) -> Result<Value, AppError>;
}
