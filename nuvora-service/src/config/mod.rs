use secrecy::Secret;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::time::Duration;

const DEFAULT_GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
const DEFAULT_GROQ_MODEL: &str = "llama3-8b-8192";
const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";
const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Clone)]
pub struct NuvoraConfig {
    pub common: core_config::Config,
    pub groq: GroqConfig,
    pub gemini: GeminiConfig,
    /// Upper bound on a single outbound provider call.
    pub provider_timeout: Duration,
    pub log_level: String,
    pub otlp_endpoint: Option<String>,
}

/// Chat-completions provider (bearer auth).
#[derive(Debug, Clone)]
pub struct GroqConfig {
    pub api_key: Secret<String>,
    pub api_url: String,
    pub model: String,
}

/// generateContent provider (key in query string).
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: Secret<String>,
    pub api_base: String,
    pub model: String,
}

impl NuvoraConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        let provider_timeout_secs = get_env(
            "PROVIDER_TIMEOUT_SECS",
            Some(&DEFAULT_PROVIDER_TIMEOUT_SECS.to_string()),
            false,
        )?
        .parse()
        .unwrap_or(DEFAULT_PROVIDER_TIMEOUT_SECS);

        Ok(NuvoraConfig {
            common,
            groq: GroqConfig {
                api_key: Secret::new(get_env("GROQ_API_KEY", Some(""), is_prod)?),
                api_url: get_env("GROQ_API_URL", Some(DEFAULT_GROQ_API_URL), false)?,
                model: get_env("GROQ_MODEL", Some(DEFAULT_GROQ_MODEL), false)?,
            },
            gemini: GeminiConfig {
                api_key: Secret::new(get_env("GEMINI_API_KEY", Some(""), is_prod)?),
                api_base: get_env("GEMINI_API_BASE", Some(DEFAULT_GEMINI_API_BASE), false)?,
                model: get_env("GEMINI_MODEL", Some(DEFAULT_GEMINI_MODEL), false)?,
            },
            provider_timeout: Duration::from_secs(provider_timeout_secs),
            log_level: get_env("LOG_LEVEL", Some("info"), false)?,
            otlp_endpoint: env::var("OTLP_ENDPOINT").ok().filter(|v| !v.is_empty()),
        })
    }

    /// Configuration pointing both providers at `base_url`, for tests and local stubs.
    pub fn with_provider_base(base_url: &str) -> Self {
        NuvoraConfig {
            common: core_config::Config {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            groq: GroqConfig {
                api_key: Secret::new("test-groq-key".to_string()),
                api_url: format!("{}/openai/v1/chat/completions", base_url),
                model: DEFAULT_GROQ_MODEL.to_string(),
            },
            gemini: GeminiConfig {
                api_key: Secret::new("test-gemini-key".to_string()),
                api_base: format!("{}/v1beta", base_url),
                model: DEFAULT_GEMINI_MODEL.to_string(),
            },
            provider_timeout: Duration::from_secs(5),
            log_level: "debug".to_string(),
            otlp_endpoint: None,
        }
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn default_is_used_outside_production() {
        let value = get_env("NUVORA_TEST_UNSET_VARIABLE", Some("fallback"), false).unwrap();
        assert_eq!(value, "fallback");
    }

    #[test]
    fn production_requires_variable() {
        let err = get_env("NUVORA_TEST_UNSET_VARIABLE", Some("fallback"), true).unwrap_err();
        assert!(err.to_string().contains("required in production"));
    }

    #[test]
    fn provider_base_override_builds_both_endpoints() {
        let config = NuvoraConfig::with_provider_base("http://127.0.0.1:9999");

        assert_eq!(
            config.groq.api_url,
            "http://127.0.0.1:9999/openai/v1/chat/completions"
        );
        assert_eq!(config.gemini.api_base, "http://127.0.0.1:9999/v1beta");
        assert_eq!(config.groq.api_key.expose_secret(), "test-groq-key");
        assert_eq!(config.common.port, 0);
    }

    #[test]
    fn debug_output_redacts_keys() {
        let config = NuvoraConfig::with_provider_base("http://localhost");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("test-groq-key"));
        assert!(!debug.contains("test-gemini-key"));
    }
}
