use async_trait::async_trait;
use clasificador_rust::{
    Error, Result,
    classifier::{
        ClassificationRequest, ClassificationResponse, ClassifierClient, HealthResponse,
    },
};
use std::sync::{Arc, Mutex};

/// Mock classifier client for testing
#[derive(Debug)]
pub struct MockClassifierClient {
    pub responses: Arc<Mutex<Vec<ClassificationResponse>>>,
    pub requests: Arc<Mutex<Vec<ClassificationRequest>>>,
    pub detail_error: Arc<Mutex<Option<String>>>,
    pub transport_error: Arc<Mutex<Option<String>>>,
}

impl MockClassifierClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            detail_error: Arc::new(Mutex::new(None)),
            transport_error: Arc::new(Mutex::new(None)),
        }
    }

    pub fn with_responses(self, responses: Vec<ClassificationResponse>) -> Self {
        *self.responses.lock().unwrap() = responses;
        self
    }

    /// Fails every call as a server rejection carrying a detail message.
    pub fn with_detail_error(self, detail: String) -> Self {
        *self.detail_error.lock().unwrap() = Some(detail);
        self
    }

    /// Fails every call without any server-supplied detail.
    pub fn with_transport_error(self, error: String) -> Self {
        *self.transport_error.lock().unwrap() = Some(error);
        self
    }

    pub fn add_response(&self, response: ClassificationResponse) {
        self.responses.lock().unwrap().push(response);
    }

    pub fn get_requests(&self) -> Vec<ClassificationRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ClassifierClient for MockClassifierClient {
    async fn classify(&self, request: ClassificationRequest) -> Result<ClassificationResponse> {
        self.requests.lock().unwrap().push(request);

        if let Some(detail) = self.detail_error.lock().unwrap().clone() {
            return Err(Error::classifier(detail));
        }

        if let Some(error) = self.transport_error.lock().unwrap().clone() {
            return Err(Error::internal(error));
        }

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(Error::internal("No more mock responses available"));
        }

        Ok(responses.remove(0))
    }

    async fn health(&self) -> Result<HealthResponse> {
        Ok(HealthResponse {
            status: "healthy".to_string(),
            service: "classification_api".to_string(),
        })
    }
}

impl Default for MockClassifierClient {
    fn default() -> Self {
        Self::new()
    }
}

// Helper functions for creating test data

pub fn create_mock_response(prompt: &str, classification: &str) -> ClassificationResponse {
    ClassificationResponse {
        prompt: prompt.to_string(),
        classification: classification.to_string(),
        success: true,
        extra: serde_json::Map::new(),
    }
}
