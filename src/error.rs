use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaddyPlanError {
    #[error("Invalid field profile: {0}")]
    Validation(String),

    #[error("Variety catalog is empty - nothing to rank")]
    EmptyCatalog,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl PaddyPlanError {
    pub fn validation(msg: impl Into<String>) -> Self {
        PaddyPlanError::Validation(msg.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, PaddyPlanError::Validation(_))
    }
}

pub type Result<T> = std::result::Result<T, PaddyPlanError>;
