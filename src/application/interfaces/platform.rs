use crate::error::AppError;
use crate::model::requests::{ReportQuery, TemplateQuery};
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the platform service (`platform/{version}/...` endpoints)
///
/// Request bodies are sent verbatim and responses are returned as decoded
/// JSON without imposing a schema.
#[async_trait]
pub trait PlatformService: Send + Sync {
    /// Gets one page of content campaigns
    ///
    /// # Arguments
    /// * `page` - Zero-based page index
    async fn get_content_campaigns(&self, page: u64) -> Result<Value, AppError>;

    /// Gets a content campaign by id
    async fn get_content_campaign(&self, id: &str) -> Result<Value, AppError>;

    /// Creates a content campaign from the given JSON body
    async fn create_content_campaign(&self, data: &Value) -> Result<Value, AppError>;

    /// Gets the campaign report
    ///
    /// The endpoint answers with NDJSON; the result is an array with one
    /// element per report row.
    async fn get_campaign_report(&self, query: &ReportQuery) -> Result<Value, AppError>;

    /// Gets the keyword performance report
    ///
    /// The endpoint answers with NDJSON; the result is an array with one
    /// element per report row.
    async fn get_keyword_performance_report(&self, query: &ReportQuery)
    -> Result<Value, AppError>;

    /// Lists postback templates
    async fn get_postback_templates(&self, query: &TemplateQuery) -> Result<Value, AppError>;

    /// Gets a postback template by id
    async fn get_postback_template(&self, id: &str) -> Result<Value, AppError>;

    /// Creates a postback template
    async fn create_postback_template(&self, data: &Value) -> Result<Value, AppError>;

    /// Replaces a postback template
    async fn update_postback_template(&self, id: &str, data: &Value) -> Result<Value, AppError>;

    /// Deletes a postback template; the response body is ignored
    async fn delete_postback_template(&self, id: &str) -> Result<(), AppError>;

    /// Lists traffic source templates
    async fn get_traffic_source_templates(&self, query: &TemplateQuery)
    -> Result<Value, AppError>;

    /// Gets a traffic source template by id
    async fn get_traffic_source_template(&self, id: &str) -> Result<Value, AppError>;

    /// Creates a traffic source template
    async fn create_traffic_source_template(&self, data: &Value) -> Result<Value, AppError>;

    /// Replaces a traffic source template
    async fn update_traffic_source_template(
        &self,
        id: &str,
        data: &Value,
    ) -> Result<Value, AppError>;

    /// Deletes a traffic source template; the response body is ignored
    async fn delete_traffic_source_template(&self, id: &str) -> Result<(), AppError>;
}
