use super::types::*;
use crate::{Error, Result, config::ClassifierConfig};
use async_trait::async_trait;
use tracing::debug;

#[async_trait]
pub trait ClassifierClient: Send + Sync {
    async fn classify(&self, request: ClassificationRequest) -> Result<ClassificationResponse>;

    async fn health(&self) -> Result<HealthResponse>;
}

pub struct HttpClassifierClient {
    http: reqwest::Client,
    classify_url: String,
    health_url: String,
}

impl HttpClassifierClient {
    pub fn new(config: ClassifierConfig) -> Self {
        // No request timeout: a submission either settles or stays pending
        let http = reqwest::Client::new();

        Self {
            http,
            classify_url: config.classify_url(),
            health_url: config.health_url(),
        }
    }
}

#[async_trait]
impl ClassifierClient for HttpClassifierClient {
    async fn classify(&self, request: ClassificationRequest) -> Result<ClassificationResponse> {
        debug!(
            "Submitting prompt for classification ({} chars)",
            request.prompt.len()
        );

        let response = self
            .http
            .post(&self.classify_url)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            let classified: ClassificationResponse = response.json().await?;
            debug!(
                "Received classification '{}' for prompt",
                classified.classification
            );
            return Ok(classified);
        }

        // Rejected requests may carry a displayable detail message
        let body = response.text().await.unwrap_or_default();
        if let Ok(api_error) = serde_json::from_str::<ApiError>(&body) {
            if let Some(detail) = api_error.detail {
                return Err(Error::classifier(detail));
            }
        }

        Err(Error::internal(format!(
            "Classification service returned status {}",
            status
        )))
    }

    async fn health(&self) -> Result<HealthResponse> {
        debug!("Probing classification service at {}", self.health_url);

        let response = self.http.get(&self.health_url).send().await?;
        let health: HealthResponse = response.error_for_status()?.json().await?;

        Ok(health)
    }
}
