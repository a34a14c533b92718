use crate::config::types::{Config, CrawlerConfig, ExtractionConfig, OutputConfig, UserAgentConfig};
use crate::ConfigError;
use regex::Regex;
use url::Url;

/// Longest per-request timeout accepted (seconds)
const MAX_FETCH_TIMEOUT: u64 = 300;

/// Longest politeness delay accepted (seconds)
const MAX_REQUEST_DELAY: f64 = 3600.0;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_crawler_config(&config.crawler)?;
    validate_user_agent_config(&config.user_agent)?;
    validate_output_config(&config.output)?;
    validate_extraction_config(&config.extraction)?;
    Ok(())
}

/// Validates crawler configuration
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    if config.max_pages < 1 {
        return Err(ConfigError::Validation(format!(
            "max_pages must be >= 1, got {}",
            config.max_pages
        )));
    }

    if !(0.0..=MAX_REQUEST_DELAY).contains(&config.request_delay) {
        return Err(ConfigError::Validation(format!(
            "request_delay must be between 0 and {} seconds, got {}",
            MAX_REQUEST_DELAY, config.request_delay
        )));
    }

    if config.fetch_timeout < 1 || config.fetch_timeout > MAX_FETCH_TIMEOUT {
        return Err(ConfigError::Validation(format!(
            "fetch_timeout must be between 1 and {} seconds, got {}",
            MAX_FETCH_TIMEOUT, config.fetch_timeout
        )));
    }

    Ok(())
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    // Crawler name: non-empty, alphanumeric + hyphens only
    if config.crawler_name.is_empty() {
        return Err(ConfigError::Validation(
            "crawler_name cannot be empty".to_string(),
        ));
    }

    if !config
        .crawler_name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-')
    {
        return Err(ConfigError::Validation(format!(
            "crawler_name must contain only alphanumeric characters and hyphens, got '{}'",
            config.crawler_name
        )));
    }

    if config.crawler_version.is_empty() {
        return Err(ConfigError::Validation(
            "crawler_version cannot be empty".to_string(),
        ));
    }

    if !config.contact_url.is_empty() {
        Url::parse(&config.contact_url)
            .map_err(|e| ConfigError::InvalidUrl(format!("Invalid contact_url: {}", e)))?;
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.csv_path.trim().is_empty() {
        return Err(ConfigError::Validation(
            "csv_path cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates that every extraction pattern compiles
fn validate_extraction_config(config: &ExtractionConfig) -> Result<(), ConfigError> {
    validate_pattern("name_pattern", &config.name_pattern)?;
    validate_pattern("email_pattern", &config.email_pattern)?;

    let qualification = validate_pattern("qualification_pattern", &config.qualification_pattern)?;
    if qualification.captures_len() < 2 {
        return Err(ConfigError::InvalidPattern(format!(
            "qualification_pattern must contain a capture group, got '{}'",
            config.qualification_pattern
        )));
    }

    if config.specializations.iter().any(|k| k.trim().is_empty()) {
        return Err(ConfigError::Validation(
            "specializations cannot contain empty keywords".to_string(),
        ));
    }

    Ok(())
}

fn validate_pattern(field: &str, pattern: &str) -> Result<Regex, ConfigError> {
    if pattern.is_empty() {
        return Err(ConfigError::InvalidPattern(format!(
            "{} cannot be empty",
            field
        )));
    }

    Regex::new(pattern).map_err(|e| ConfigError::InvalidPattern(format!("{}: {}", field, e)))
}
