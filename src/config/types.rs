use serde::Deserialize;
use std::time::Duration;

/// Default cap on the number of pages a crawl emits
pub const DEFAULT_MAX_PAGES: usize = 50;

/// Default politeness delay between successful fetches (seconds)
pub const DEFAULT_REQUEST_DELAY: f64 = 1.0;

/// Default per-request network deadline (seconds)
pub const DEFAULT_FETCH_TIMEOUT: u64 = 5;

/// Default CSV destination
pub const DEFAULT_CSV_PATH: &str = "doctors.csv";

/// Main configuration structure for Medcrawl
///
/// Every section is optional in the TOML file; missing sections and keys
/// fall back to the defaults below.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub crawler: CrawlerConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    pub output: OutputConfig,
    pub extraction: ExtractionConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// Maximum number of pages emitted by one crawl
    #[serde(rename = "max-pages")]
    pub max_pages: usize,

    /// Delay after every successful fetch (seconds)
    #[serde(rename = "request-delay")]
    pub request_delay: f64,

    /// Per-request timeout (seconds)
    #[serde(rename = "fetch-timeout")]
    pub fetch_timeout: u64,
}

impl CrawlerConfig {
    pub fn request_delay(&self) -> Duration {
        Duration::from_secs_f64(self.request_delay)
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout)
    }
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            max_pages: DEFAULT_MAX_PAGES,
            request_delay: DEFAULT_REQUEST_DELAY,
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserAgentConfig {
    /// Name of the crawler
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,

    /// URL with information about the crawler (optional)
    #[serde(rename = "contact-url")]
    pub contact_url: String,
}

impl UserAgentConfig {
    /// Formats the User-Agent header value
    ///
    /// Format: `CrawlerName/Version` or `CrawlerName/Version (+ContactURL)`
    pub fn header_value(&self) -> String {
        if self.contact_url.is_empty() {
            format!("{}/{}", self.crawler_name, self.crawler_version)
        } else {
            format!(
                "{}/{} (+{})",
                self.crawler_name, self.crawler_version, self.contact_url
            )
        }
    }
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            crawler_name: env!("CARGO_PKG_NAME").to_string(),
            crawler_version: env!("CARGO_PKG_VERSION").to_string(),
            contact_url: String::new(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Path to the CSV export
    #[serde(rename = "csv-path")]
    pub csv_path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            csv_path: DEFAULT_CSV_PATH.to_string(),
        }
    }
}

/// Record extraction patterns
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Regex matching a doctor's name; every match yields one record
    #[serde(rename = "name-pattern")]
    pub name_pattern: String,

    /// Regex whose first capture group is a qualification
    #[serde(rename = "qualification-pattern")]
    pub qualification_pattern: String,

    /// Regex matching an email address
    #[serde(rename = "email-pattern")]
    pub email_pattern: String,

    /// Keywords searched case-insensitively anywhere in the page text
    pub specializations: Vec<String>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            name_pattern: r"\bDr\.?\s+[A-Z][a-z]+(?:\s+[A-Z][a-z]+)?\b".to_string(),
            qualification_pattern: r"(?i)\b(MBBS|MD|DO|DDS|PhD|MS|DMD)\b".to_string(),
            email_pattern: r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}".to_string(),
            specializations: [
                "dentist",
                "dermatologist",
                "cardiologist",
                "neurologist",
                "orthopedic",
                "surgeon",
                "pediatrician",
                "gynecologist",
                "psychiatrist",
                "urologist",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}
