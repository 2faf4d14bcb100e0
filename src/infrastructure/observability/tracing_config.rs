use crate::presentation::config::Environment;

/// Configuration for tracing initialization. JSON output follows the
/// environment unless LOG_FORMAT overrides it.
pub struct TracingConfig {
    pub environment: Environment,
    pub json_format: bool,
}

impl TracingConfig {
    pub fn for_environment(environment: Environment) -> Self {
        Self {
            environment,
            json_format: environment.is_production(),
        }
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        let environment = std::env::var("APP_ENV")
            .ok()
            .and_then(|v| Environment::try_from(v).ok())
            .unwrap_or(Environment::Local);

        let json_format = match std::env::var("LOG_FORMAT") {
            Ok(v) => v.to_lowercase() == "json",
            Err(_) => environment.is_production(),
        };

        Self {
            environment,
            json_format,
        }
    }
}
