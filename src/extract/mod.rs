//! Record extraction from page text
//!
//! A [`RecordExtractor`] turns the flattened text of one page into doctor
//! records. Every name match yields one record. Qualifications,
//! specializations and emails are scanned over the whole page, not near the
//! name, so all records from the same page carry identical attribute sets.

mod text;

pub use text::page_text;

use crate::config::ExtractionConfig;
use crate::ConfigError;
use regex::Regex;
use std::collections::BTreeSet;

/// One extracted doctor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// The matched name, e.g. `Dr. Jane Smith`
    pub name: String,
    /// Qualifications found on the page, as written
    pub qualifications: BTreeSet<String>,
    /// Specialization keywords found on the page, in keyword-list order
    pub specializations: Vec<String>,
    /// Email addresses found on the page
    pub emails: BTreeSet<String>,
}

/// Precompiled extraction patterns
#[derive(Debug, Clone)]
pub struct RecordExtractor {
    name: Regex,
    qualification: Regex,
    email: Regex,
    specializations: Vec<String>,
}

impl RecordExtractor {
    /// Compiles the configured patterns
    ///
    /// # Returns
    ///
    /// * `Ok(RecordExtractor)` - All patterns compiled
    /// * `Err(ConfigError::InvalidPattern)` - A pattern failed to compile
    pub fn new(config: &ExtractionConfig) -> Result<Self, ConfigError> {
        let compile = |field: &str, pattern: &str| {
            Regex::new(pattern).map_err(|e| ConfigError::InvalidPattern(format!("{}: {}", field, e)))
        };

        let mut specializations: Vec<String> = Vec::new();
        for keyword in &config.specializations {
            let keyword = keyword.trim().to_string();
            if !keyword.is_empty() && !specializations.contains(&keyword) {
                specializations.push(keyword);
            }
        }

        Ok(Self {
            name: compile("name_pattern", &config.name_pattern)?,
            qualification: compile("qualification_pattern", &config.qualification_pattern)?,
            email: compile("email_pattern", &config.email_pattern)?,
            specializations,
        })
    }

    /// Extracts records from flattened page text
    ///
    /// ```
    /// use medcrawl::config::ExtractionConfig;
    /// use medcrawl::extract::RecordExtractor;
    ///
    /// let extractor = RecordExtractor::new(&ExtractionConfig::default()).unwrap();
    /// let records = extractor.extract("Dr. Jane Smith, MBBS, dentist, jane@x.com");
    /// assert_eq!(records.len(), 1);
    /// assert_eq!(records[0].name, "Dr. Jane Smith");
    /// ```
    pub fn extract(&self, text: &str) -> Vec<Record> {
        let names: Vec<&str> = self.name.find_iter(text).map(|m| m.as_str()).collect();
        if names.is_empty() {
            return Vec::new();
        }

        let qualifications: BTreeSet<String> = self
            .qualification
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .collect();

        let lowered = text.to_lowercase();
        let specializations: Vec<String> = self
            .specializations
            .iter()
            .filter(|keyword| lowered.contains(&keyword.to_lowercase()))
            .cloned()
            .collect();

        let emails: BTreeSet<String> = self
            .email
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect();

        names
            .into_iter()
            .map(|name| Record {
                name: name.to_string(),
                qualifications: qualifications.clone(),
                specializations: specializations.clone(),
                emails: emails.clone(),
            })
            .collect()
    }

    /// Extracts records from an HTML document
    pub fn extract_html(&self, html: &str) -> Vec<Record> {
        self.extract(&page_text(html))
    }
}
