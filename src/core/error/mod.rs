use crate::core::pipeline::PipelineError;
use crate::core::registry::RegistryError;
use crate::core::types::ErrorCategory;
use std::collections::BTreeMap;

#[derive(Debug)]
pub struct AppError {
    pub category: ErrorCategory,
    pub code: String,
    pub message: String,
    pub context: BTreeMap<String, String>,
    pub recovery_suggestions: Vec<String>,
    pub source: Option<anyhow::Error>,
}

impl AppError {
    pub fn new<T: Into<String>>(category: ErrorCategory, message: T) -> Self {
        AppError {
            category,
            code: category.default_code().to_string(),
            message: message.into(),
            context: BTreeMap::new(),
            recovery_suggestions: vec![],
            source: None,
        }
    }

    pub fn with_context<T: Into<String>>(mut self, context: T) -> Self {
        self.context.insert("context".to_string(), context.into());
        self
    }

    pub fn with_code<T: Into<String>>(mut self, code: T) -> Self {
        self.code = code.into();
        self
    }

    pub fn with_suggestion<T: Into<String>>(mut self, suggestion: T) -> Self {
        self.recovery_suggestions.push(suggestion.into());
        self
    }

    pub fn add_context(&mut self, key: &str, value: &str) {
        self.context.insert(key.to_string(), value.to_string());
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.code, self.category, self.message)?;
        if !self.context.is_empty() {
            write!(f, " (Context: {:?})", self.context)?;
        }
        if let Some(ref source) = self.source {
            write!(f, "\nCaused by: {}", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for AppError {}

impl From<anyhow::Error> for AppError {
    fn from(e: anyhow::Error) -> Self {
        let mut error = AppError::new(ErrorCategory::InternalError, e.to_string())
            .with_code("AMD-INTERNAL-001")
            .with_suggestion("Check the error details");
        error.source = Some(e);
        error
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        let mut error = AppError::new(ErrorCategory::IoError, e.to_string())
            .with_suggestion("Check file permissions and paths");
        error.source = Some(anyhow::anyhow!(e));
        error
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        let mut error = AppError::new(ErrorCategory::SerializationError, e.to_string())
            .with_code("AMD-SERDE-001");
        error.add_context("line", &e.line().to_string());
        error.add_context("column", &e.column().to_string());
        error.source = Some(anyhow::anyhow!(e));
        error
    }
}

impl From<RegistryError> for AppError {
    fn from(e: RegistryError) -> Self {
        let (code, suggestion) = match &e {
            RegistryError::NotFound(_) => (
                "AMD-LOOKUP-001",
                "Run `amender list` to see the available keys",
            ),
            RegistryError::DuplicateKey(_) => (
                "AMD-LOOKUP-002",
                "Rename one of the transforms so every key is unique",
            ),
        };
        AppError::new(ErrorCategory::LookupError, e.to_string())
            .with_code(code)
            .with_suggestion(suggestion)
    }
}

impl From<PipelineError> for AppError {
    fn from(e: PipelineError) -> Self {
        let mut error = AppError::new(ErrorCategory::PipelineError, e.to_string())
            .with_code("AMD-PIPELINE-001");
        match e {
            PipelineError::IndexOutOfRange { index, len } => {
                error.add_context("index", &index.to_string());
                error.add_context("len", &len.to_string());
            }
        }
        error
    }
}
