use crate::models::ErrorResponse;
use axum::{http::StatusCode, response::Json};
use tracing::{error, warn};

/// Failure kinds of a single text-completion call
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CompletionError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Empty response from model provider")]
    EmptyResponse,

    #[error("Failed to generate content: {0}")]
    ProviderFailure(String),
}

/// Centralized error types for consistent API error handling
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    ValidationError(String),

    #[error("LLM service error: {0}")]
    LLMError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl From<CompletionError> for ApiError {
    fn from(err: CompletionError) -> Self {
        match err {
            CompletionError::InvalidInput(message) => ApiError::ValidationError(message),
            CompletionError::ProviderFailure(message) => ApiError::LLMError(message),
            CompletionError::EmptyResponse => {
                ApiError::InternalError(CompletionError::EmptyResponse.to_string())
            }
        }
    }
}

/// Error context for structured logging
#[derive(Debug)]
pub struct ErrorContext {
    pub operation: String,
    pub resource_type: String,
    pub request_id: Option<String>,
    pub user_friendly_message: Option<String>,
}

impl ErrorContext {
    pub fn new(operation: &str, resource_type: &str) -> Self {
        Self {
            operation: operation.to_string(),
            resource_type: resource_type.to_string(),
            request_id: None,
            user_friendly_message: None,
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.request_id = Some(id.to_string());
        self
    }

    /// Message shown to callers for 500 responses
    pub fn with_user_message(mut self, message: &str) -> Self {
        self.user_friendly_message = Some(message.to_string());
        self
    }
}

pub type ErrorReply = (StatusCode, Json<ErrorResponse>);

impl ApiError {
    /// Convert API error to HTTP response with consistent structure and logging.
    ///
    /// Only validation failures expose their detail; provider and internal
    /// failures are logged and replaced with a generic message.
    pub fn to_response_with_context(self, context: ErrorContext) -> ErrorReply {
        match &self {
            ApiError::ValidationError(_) => {
                warn!(
                    operation = %context.operation,
                    resource_type = %context.resource_type,
                    request_id = ?context.request_id,
                    error = %self,
                    "Validation error"
                );
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse::new(self.to_string())),
                )
            }
            ApiError::LLMError(_) => {
                error!(
                    operation = %context.operation,
                    resource_type = %context.resource_type,
                    request_id = ?context.request_id,
                    error = %self,
                    "LLM service error"
                );
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(ErrorResponse::new(
                        "Service temporarily unavailable. Please try again.",
                    )),
                )
            }
            ApiError::InternalError(_) => {
                error!(
                    operation = %context.operation,
                    resource_type = %context.resource_type,
                    request_id = ?context.request_id,
                    error = %self,
                    "Internal server error"
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::new(
                        context
                            .user_friendly_message
                            .unwrap_or_else(|| "An internal error occurred. Please try again.".to_string()),
                    )),
                )
            }
        }
    }
}
