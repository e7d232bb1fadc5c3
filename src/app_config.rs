use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::default::Default;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Which resolver backend answers verse lookups
    #[serde(default)]
    pub resolver: ResolverKind,

    /// Default translation code (e.g. "kjv", "niv")
    #[serde(default = "default_translation")]
    pub translation: String,

    /// Base URL of the remote verse API
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds for the remote resolver
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Verse resolver backend type
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ResolverKind {
    // @resolver: bible-api.com HTTP lookup
    #[default]
    Remote,
    // @resolver: Built-in verse table, offline
    Local,
}

impl ResolverKind {
    // @returns: Capitalized resolver name
    pub fn display_name(&self) -> &str {
        match self {
            Self::Remote => "Remote",
            Self::Local => "Local",
        }
    }

    // @returns: Lowercase resolver identifier
    pub fn to_lowercase_string(&self) -> String {
        match self {
            Self::Remote => "remote".to_string(),
            Self::Local => "local".to_string(),
        }
    }
}

// Implement Display trait for ResolverKind
impl std::fmt::Display for ResolverKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_lowercase_string())
    }
}

// Implement FromStr trait for ResolverKind
impl std::str::FromStr for ResolverKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "remote" => Ok(Self::Remote),
            "local" => Ok(Self::Local),
            _ => Err(anyhow!("Invalid resolver type: {}", s)),
        }
    }
}

/// Log level for the application logger
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_translation() -> String {
    "kjv".to_string()
}

fn default_endpoint() -> String {
    "https://bible-api.com".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Config {
    /// Validate the configuration after loading and CLI overrides
    pub fn validate(&self) -> Result<()> {
        if self.translation.trim().is_empty() {
            return Err(anyhow!("Translation code must not be empty"));
        }

        if !self.translation.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(anyhow!("Invalid translation code: {}", self.translation));
        }

        if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            return Err(anyhow!(
                "Endpoint must be an http(s) URL, got: {}",
                self.endpoint
            ));
        }

        if self.timeout_secs == 0 {
            return Err(anyhow!("Request timeout must be greater than zero"));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            resolver: ResolverKind::default(),
            translation: default_translation(),
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
            log_level: LogLevel::default(),
        }
    }
}
