use serde::{Deserialize, Serialize};

/// Body of a classification submission: `{ "prompt": string }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationRequest {
    pub prompt: String,
}

/// Response of the classification endpoint. The service echoes the
/// submitted prompt next to the label; fields this client does not
/// know about are kept for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationResponse {
    pub prompt: String,
    pub classification: String,
    #[serde(default)]
    pub success: bool,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ClassificationResponse {
    pub fn priority(&self) -> Option<Priority> {
        Priority::from_label(&self.classification)
    }
}

/// The closed label set the service emits. Anything else counts as
/// unrecognized and takes the neutral styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    Urgente,
    Moderado,
    Normal,
}

impl Priority {
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "urgente" => Some(Self::Urgente),
            "moderado" => Some(Self::Moderado),
            "normal" => Some(Self::Normal),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Urgente => "urgente",
            Self::Moderado => "moderado",
            Self::Normal => "normal",
        }
    }
}

/// `GET /health` payload of the service.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

/// Error body the service attaches to rejected requests.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    pub detail: Option<String>,
}
