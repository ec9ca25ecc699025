// Macros file - tracing macros are imported within the macro definitions

/// Standardized logging macros for consistent field names and message patterns across the application
///
/// These macros ensure:
/// - Consistent field naming conventions
/// - Appropriate logging levels for different scenarios
/// - Structured logging with context

// ============================================================================
// API Operation Logging Macros
// ============================================================================

/// Log the start of an API operation with consistent fields
#[macro_export]
macro_rules! log_api_start {
    ($operation:expr, request_id = $request_id:expr) => {
        tracing::debug!(
            operation = $operation,
            request_id = %$request_id,
            "API operation started"
        );
    };
}

/// Log successful completion of an API operation
#[macro_export]
macro_rules! log_api_success {
    ($operation:expr, request_id = $request_id:expr, count = $count:expr, $msg:expr) => {
        tracing::info!(
            operation = $operation,
            request_id = %$request_id,
            count = $count,
            "API operation completed: {}", $msg
        );
    };
    ($operation:expr, request_id = $request_id:expr, $msg:expr) => {
        tracing::info!(
            operation = $operation,
            request_id = %$request_id,
            "API operation completed: {}", $msg
        );
    };
}

// ============================================================================
// LLM Service Logging Macros
// ============================================================================

/// Log LLM service operations with provider context
#[macro_export]
macro_rules! log_llm_operation {
    (start, $operation:expr, provider = $provider:expr, prompt_length = $len:expr) => {
        tracing::debug!(
            component = "llm_service",
            operation = $operation,
            provider = %$provider,
            prompt_length = $len,
            "LLM operation started"
        );
    };
    (success, $operation:expr, provider = $provider:expr, duration_ms = $duration:expr, response_length = $len:expr) => {
        tracing::info!(
            component = "llm_service",
            operation = $operation,
            provider = %$provider,
            duration_ms = $duration,
            response_length = $len,
            "LLM operation completed successfully"
        );
    };
    (error, $operation:expr, provider = $provider:expr, error = $error:expr) => {
        tracing::error!(
            component = "llm_service",
            operation = $operation,
            provider = %$provider,
            error = %$error,
            "LLM operation failed"
        );
    };
}

// ============================================================================
// Response Interpretation Logging Macros
// ============================================================================

/// Log whether model output was used as-is or replaced by a fallback
#[macro_export]
macro_rules! log_interpretation {
    (parsed, $operation:expr, request_id = $request_id:expr) => {
        tracing::debug!(
            component = "interpreter",
            operation = $operation,
            request_id = %$request_id,
            outcome = "parsed",
            "Model output interpreted"
        );
    };
    (fallback, $operation:expr, request_id = $request_id:expr, raw_length = $len:expr) => {
        tracing::warn!(
            component = "interpreter",
            operation = $operation,
            request_id = %$request_id,
            outcome = "fallback",
            raw_length = $len,
            "Model output could not be interpreted, using fallback payload"
        );
    };
}

// ============================================================================
// System Event Logging Macros
// ============================================================================

/// Log system startup and shutdown events
#[macro_export]
macro_rules! log_system_event {
    (startup, component = $component:expr, $msg:expr) => {
        tracing::info!(
            event_type = "startup",
            component = $component,
            "System event: {}",
            $msg
        );
    };
    (shutdown, component = $component:expr, $msg:expr) => {
        tracing::info!(
            event_type = "shutdown",
            component = $component,
            "System event: {}",
            $msg
        );
    };
    (config, $msg:expr) => {
        tracing::info!(event_type = "configuration", "System event: {}", $msg);
    };
}

// ============================================================================
// Validation Logging Macros
// ============================================================================

/// Log validation results consistently
#[macro_export]
macro_rules! log_validation {
    (success, $component:expr, $msg:expr) => {
        tracing::debug!(
            event_type = "validation",
            component = $component,
            result = "success",
            "Validation completed: {}", $msg
        );
    };
    (failure, $component:expr, error = $error:expr) => {
        tracing::warn!(
            event_type = "validation",
            component = $component,
            result = "failure",
            error = %$error,
            "Validation failed"
        );
    };
}
