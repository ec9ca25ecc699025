pub mod api;
pub mod config;
pub mod errors;
pub mod interpreter;
pub mod llm_providers;
pub mod llm_service;
pub mod logging;
pub mod models;
pub mod prompts;

pub use config::Config;
pub use errors::*;
pub use interpreter::Interpretation;
pub use llm_providers::{GeminiProvider, TextCompletion};
pub use llm_service::LLMService;
pub use models::*;
