use crate::application::interfaces::platform::PlatformService;
use crate::application::services::content_service::summarize;
use crate::error::{AppError, Operation};
use crate::model::http::{ApiSegment, HttpClient};
use crate::model::requests::{QueryParams, ReportQuery, TemplateQuery};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};
use urlencoding::encode;

const CONTENT_CAMPAIGNS: &str = "content-campaigns";
const CAMPAIGN_REPORT: &str = "campaign-report";
const KEYWORD_PERFORMANCE_REPORT: &str = "keyword-performance-report";
const POSTBACK_TEMPLATES: &str = "tracking-data-templates/postback";
const TRAFFIC_SOURCE_TEMPLATES: &str = "tracking-data-templates/traffic-source";

/// Implementation of the platform service
#[derive(Clone)]
pub struct PlatformServiceImpl {
    client: Arc<HttpClient>,
}

impl PlatformServiceImpl {
    /// Creates a new instance of the platform service
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    async fn get(
        &self,
        operation: Operation,
        path: &str,
        query: &QueryParams,
    ) -> Result<Value, AppError> {
        self.client
            .get(operation, ApiSegment::Platform, path, query)
            .await
    }
}

/// Joins a collection path and a resource id, percent-encoding the id
fn item_path(collection: &str, id: &str) -> Result<String, AppError> {
    if id.trim().is_empty() {
        return Err(AppError::InvalidInput(format!(
            "resource id for {collection} must not be empty"
        )));
    }
    Ok(format!("{}/{}", collection, encode(id)))
}

#[async_trait]
impl PlatformService for PlatformServiceImpl {
    async fn get_content_campaigns(&self, page: u64) -> Result<Value, AppError> {
        info!("Getting content campaigns, page {}", page);

        let mut query = QueryParams::new();
        query.push("page", page);
        let result = self
            .get(Operation::FetchContentCampaigns, CONTENT_CAMPAIGNS, &query)
            .await?;

        debug!("Content campaigns obtained: {}", summarize(&result));
        Ok(result)
    }

    async fn get_content_campaign(&self, id: &str) -> Result<Value, AppError> {
        let path = item_path(CONTENT_CAMPAIGNS, id)?;
        info!("Getting content campaign: {}", id);

        let result = self
            .get(Operation::FetchContentCampaign, &path, &QueryParams::new())
            .await?;

        debug!("Content campaign obtained: {}", id);
        Ok(result)
    }

    async fn create_content_campaign(&self, data: &Value) -> Result<Value, AppError> {
        info!("Creating content campaign");

        let result = self
            .client
            .post(
                Operation::CreateContentCampaign,
                ApiSegment::Platform,
                CONTENT_CAMPAIGNS,
                data,
            )
            .await?;

        debug!("Content campaign created: {}", summarize(&result));
        Ok(result)
    }

    async fn get_campaign_report(&self, query: &ReportQuery) -> Result<Value, AppError> {
        let params = query.to_query_params()?;
        info!("Getting campaign report");

        let result = self
            .get(Operation::FetchCampaignReport, CAMPAIGN_REPORT, &params)
            .await?;

        debug!("Campaign report obtained: {}", summarize(&result));
        Ok(result)
    }

    async fn get_keyword_performance_report(
        &self,
        query: &ReportQuery,
    ) -> Result<Value, AppError> {
        let params = query.to_query_params()?;
        info!("Getting keyword performance report");

        let result = self
            .get(
                Operation::FetchKeywordPerformanceReport,
                KEYWORD_PERFORMANCE_REPORT,
                &params,
            )
            .await?;

        debug!("Keyword performance report obtained: {}", summarize(&result));
        Ok(result)
    }

    async fn get_postback_templates(&self, query: &TemplateQuery) -> Result<Value, AppError> {
        let params = query.to_query_params()?;
        info!("Getting postback templates");

        let result = self
            .get(Operation::FetchPostbackTemplates, POSTBACK_TEMPLATES, &params)
            .await?;

        debug!("Postback templates obtained: {}", summarize(&result));
        Ok(result)
    }

    async fn get_postback_template(&self, id: &str) -> Result<Value, AppError> {
        let path = item_path(POSTBACK_TEMPLATES, id)?;
        info!("Getting postback template: {}", id);

        self.get(Operation::FetchPostbackTemplate, &path, &QueryParams::new())
            .await
    }

    async fn create_postback_template(&self, data: &Value) -> Result<Value, AppError> {
        info!("Creating postback template");

        let result = self
            .client
            .post(
                Operation::CreatePostbackTemplate,
                ApiSegment::Platform,
                POSTBACK_TEMPLATES,
                data,
            )
            .await?;

        debug!("Postback template created: {}", summarize(&result));
        Ok(result)
    }

    async fn update_postback_template(&self, id: &str, data: &Value) -> Result<Value, AppError> {
        let path = item_path(POSTBACK_TEMPLATES, id)?;
        info!("Updating postback template: {}", id);

        self.client
            .put(
                Operation::UpdatePostbackTemplate,
                ApiSegment::Platform,
                &path,
                data,
            )
            .await
    }

    async fn delete_postback_template(&self, id: &str) -> Result<(), AppError> {
        let path = item_path(POSTBACK_TEMPLATES, id)?;
        info!("Deleting postback template: {}", id);

        self.client
            .delete(
                Operation::DeletePostbackTemplate,
                ApiSegment::Platform,
                &path,
            )
            .await?;

        debug!("Postback template deleted: {}", id);
        Ok(())
    }

    async fn get_traffic_source_templates(
        &self,
        query: &TemplateQuery,
    ) -> Result<Value, AppError> {
        let params = query.to_query_params()?;
        info!("Getting traffic source templates");

        let result = self
            .get(
                Operation::FetchTrafficSourceTemplates,
                TRAFFIC_SOURCE_TEMPLATES,
                &params,
            )
            .await?;

        debug!("Traffic source templates obtained: {}", summarize(&result));
        Ok(result)
    }

    async fn get_traffic_source_template(&self, id: &str) -> Result<Value, AppError> {
        let path = item_path(TRAFFIC_SOURCE_TEMPLATES, id)?;
        info!("Getting traffic source template: {}", id);

        self.get(
            Operation::FetchTrafficSourceTemplate,
            &path,
            &QueryParams::new(),
        )
        .await
    }

    async fn create_traffic_source_template(&self, data: &Value) -> Result<Value, AppError> {
        info!("Creating traffic source template");

        let result = self
            .client
            .post(
                Operation::CreateTrafficSourceTemplate,
                ApiSegment::Platform,
                TRAFFIC_SOURCE_TEMPLATES,
                data,
            )
            .await?;

        debug!("Traffic source template created: {}", summarize(&result));
        Ok(result)
    }

    async fn update_traffic_source_template(
        &self,
        id: &str,
        data: &Value,
    ) -> Result<Value, AppError> {
        let path = item_path(TRAFFIC_SOURCE_TEMPLATES, id)?;
        info!("Updating traffic source template: {}", id);

        self.client
            .put(
                Operation::UpdateTrafficSourceTemplate,
                ApiSegment::Platform,
                &path,
                data,
            )
            .await
    }

    async fn delete_traffic_source_template(&self, id: &str) -> Result<(), AppError> {
        let path = item_path(TRAFFIC_SOURCE_TEMPLATES, id)?;
        info!("Deleting traffic source template: {}", id);

        self.client
            .delete(
                Operation::DeleteTrafficSourceTemplate,
                ApiSegment::Platform,
                &path,
            )
            .await?;

        debug!("Traffic source template deleted: {}", id);
        Ok(())
    }
}
