use crate::config::types::{Config, NotionConfig, PublisherConfig, SourceConfig, UserAgentConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_source_config(&config.source)?;
    validate_notion_config(&config.notion)?;
    validate_publisher_config(&config.publisher)?;
    validate_user_agent_config(&config.user_agent)?;
    Ok(())
}

/// Validates the data source section, including the id range
fn validate_source_config(config: &SourceConfig) -> Result<(), ConfigError> {
    validate_http_url("base-url", &config.base_url)?;

    if config.start < 1 {
        return Err(ConfigError::Validation(format!(
            "start must be a positive identifier, got {}",
            config.start
        )));
    }

    if config.end < config.start {
        return Err(ConfigError::Validation(format!(
            "end ({}) must not be smaller than start ({})",
            config.end, config.start
        )));
    }

    if config.timeout_secs < 1 {
        return Err(ConfigError::Validation(
            "timeout-secs must be >= 1".to_string(),
        ));
    }

    Ok(())
}

/// Validates the Notion API section
fn validate_notion_config(config: &NotionConfig) -> Result<(), ConfigError> {
    validate_http_url("api-base", &config.api_base)?;

    if config.api_version.trim().is_empty() {
        return Err(ConfigError::Validation(
            "api-version cannot be empty".to_string(),
        ));
    }

    for (key, name) in [
        ("token-env", &config.token_env),
        ("database-id-env", &config.database_id_env),
    ] {
        validate_env_name(key, name)?;
    }

    Ok(())
}

/// Validates publish pacing
fn validate_publisher_config(config: &PublisherConfig) -> Result<(), ConfigError> {
    if config.delay_ms < 1 {
        return Err(ConfigError::Validation(format!(
            "delay-ms must be >= 1ms, got {}ms",
            config.delay_ms
        )));
    }

    if config.burst < 1 {
        return Err(ConfigError::Validation(format!(
            "burst must be >= 1, got {}",
            config.burst
        )));
    }

    Ok(())
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    if config.name.is_empty() {
        return Err(ConfigError::Validation(
            "user-agent name cannot be empty".to_string(),
        ));
    }

    if !config.name.chars().all(|c| c.is_alphanumeric() || c == '-') {
        return Err(ConfigError::Validation(format!(
            "user-agent name must contain only alphanumeric characters and hyphens, got '{}'",
            config.name
        )));
    }

    Url::parse(&config.contact_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid contact-url: {}", e)))?;

    Ok(())
}

/// Requires an absolute http(s) URL
fn validate_http_url(key: &str, value: &str) -> Result<(), ConfigError> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid {} '{}': {}", key, value, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "{} '{}' must use http or https",
            key, value
        )));
    }

    Ok(())
}

/// Environment variable names: non-empty, `[A-Za-z0-9_]`, not starting with a digit
fn validate_env_name(key: &str, name: &str) -> Result<(), ConfigError> {
    let valid = !name.is_empty()
        && !name.starts_with(|c: char| c.is_ascii_digit())
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');

    if !valid {
        return Err(ConfigError::Validation(format!(
            "{} must be a valid environment variable name, got '{}'",
            key, name
        )));
    }

    Ok(())
}
