use crate::application::interfaces::content::ContentService;
use crate::error::{AppError, Operation};
use crate::model::http::{ApiSegment, HttpClient};
use crate::model::requests::QueryParams;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// Implementation of the content service
#[derive(Clone)]
pub struct ContentServiceImpl {
    client: Arc<HttpClient>,
}

impl ContentServiceImpl {
    /// Creates a new instance of the content service
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ContentService for ContentServiceImpl {
    async fn get_categories(&self) -> Result<Value, AppError> {
        info!("Getting categories");

        let result = self
            .client
            .get(
                Operation::FetchCategories,
                ApiSegment::Content,
                "categories",
                &QueryParams::new(),
            )
            .await?;

        debug!("Categories obtained: {}", summarize(&result));
        Ok(result)
    }
}

/// Short description of a decoded value for log lines
pub(crate) fn summarize(value: &Value) -> String {
    match value {
        Value::Array(items) => format!("{} items", items.len()),
        Value::Object(fields) => format!("object with {} fields", fields.len()),
        other => other.to_string(),
    }
}
