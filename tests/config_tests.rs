use std::env;
use std::time::Duration;
use study_assistant::config::{Config, DEFAULT_CORS_ORIGINS};

const VARS: [&str; 7] = [
    "GEMINI_API_KEY",
    "LLM_MODEL",
    "LLM_BASE_URL",
    "LLM_TIMEOUT_SECS",
    "PORT",
    "HOST",
    "CORS_ALLOWED_ORIGINS",
];

fn clear_env() {
    for var in VARS {
        unsafe { env::remove_var(var) };
    }
}

// Environment variables are process-global, so every scenario runs in one test
#[test]
fn test_config_from_environment() {
    clear_env();

    // Missing API key aborts startup
    let err = Config::from_env().unwrap_err();
    assert!(err.to_string().contains("GEMINI_API_KEY"));

    // Blank API key is treated as missing
    unsafe { env::set_var("GEMINI_API_KEY", "   ") };
    assert!(Config::from_env().is_err());

    // Defaults
    unsafe { env::set_var("GEMINI_API_KEY", "AIza-test-key") };
    let config = Config::from_env().unwrap();
    assert_eq!(config.llm.api_key, "AIza-test-key");
    assert_eq!(config.llm.model, "gemini-2.5-flash");
    assert_eq!(config.llm.timeout, Duration::from_secs(60));
    assert_eq!(config.server.port, 8000);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.cors.allowed_origins, DEFAULT_CORS_ORIGINS.to_vec());
    assert!(config.validate().is_ok());

    // Overrides
    unsafe {
        env::set_var("LLM_MODEL", "gemini-1.5-flash");
        env::set_var("LLM_TIMEOUT_SECS", "15");
        env::set_var("PORT", "9000");
        env::set_var("CORS_ALLOWED_ORIGINS", "https://study.example.com, http://localhost:3000");
    }
    let config = Config::from_env().unwrap();
    assert_eq!(config.llm.model, "gemini-1.5-flash");
    assert_eq!(config.llm.timeout, Duration::from_secs(15));
    assert_eq!(config.server.address(), "0.0.0.0:9000");
    assert_eq!(
        config.cors.allowed_origins,
        vec!["https://study.example.com".to_string(), "http://localhost:3000".to_string()]
    );

    // Malformed numbers are rejected
    unsafe { env::set_var("PORT", "not-a-number") };
    assert!(Config::from_env().is_err());
    unsafe {
        env::set_var("PORT", "9000");
        env::set_var("LLM_TIMEOUT_SECS", "soon");
    }
    assert!(Config::from_env().is_err());

    // Zero timeout parses but fails validation
    unsafe { env::set_var("LLM_TIMEOUT_SECS", "0") };
    let config = Config::from_env().unwrap();
    assert!(config.validate().is_err());

    clear_env();
}
