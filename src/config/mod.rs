//! Configuration module for Medcrawl
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every key is optional; an absent file is equivalent to `Config::default()`.
//!
//! # Example
//!
//! ```no_run
//! use medcrawl::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("medcrawl.toml")).unwrap();
//! println!("Crawler will visit at most {} pages", config.crawler.max_pages);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, CrawlerConfig, ExtractionConfig, OutputConfig, UserAgentConfig, DEFAULT_CSV_PATH,
    DEFAULT_FETCH_TIMEOUT, DEFAULT_MAX_PAGES, DEFAULT_REQUEST_DELAY,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
pub use validation::validate;
