use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub classifier: ClassifierConfig,
    #[serde(default)]
    pub logs: LogsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_classify_path")]
    pub classify_path: String,
    #[serde(default = "default_health_path")]
    pub health_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl ClassifierConfig {
    pub fn classify_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.classify_path)
    }

    pub fn health_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.health_path)
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            classify_path: default_classify_path(),
            health_path: default_health_path(),
        }
    }
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_classify_path() -> String {
    "/generate/".to_string()
}

fn default_health_path() -> String {
    "/health".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}
