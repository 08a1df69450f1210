use serde::{Deserialize, Serialize};

pub use amender_types::{Category, TransformSummary};

/// Error category enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCategory {
    ValidationError,
    LookupError,
    PipelineError,
    SerializationError,
    IoError,
    InternalError,
}

impl ErrorCategory {
    /// Short code prefix used when no explicit code is attached.
    pub fn default_code(self) -> &'static str {
        match self {
            ErrorCategory::ValidationError => "AMD-VALIDATION",
            ErrorCategory::LookupError => "AMD-LOOKUP",
            ErrorCategory::PipelineError => "AMD-PIPELINE",
            ErrorCategory::SerializationError => "AMD-SERDE",
            ErrorCategory::IoError => "AMD-IO",
            ErrorCategory::InternalError => "AMD-INTERNAL",
        }
    }
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
