use std::time::Duration;

use async_trait::async_trait;
use log::{debug, error};
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::book_names;
use crate::errors::LookupError;
use crate::resolvers::{Verse, VerseResolver};

/// Translation code used when the user does not ask for one
pub const DEFAULT_TRANSLATION: &str = "kjv";

/// BibleApi client for fetching verses from bible-api.com
#[derive(Debug)]
pub struct BibleApi {
    /// HTTP client for API requests
    client: Client,
    /// Base URL of the verse API
    endpoint: String,
}

/// Successful verse response from the API
///
/// All fields default to empty so a sparse body still deserializes; the
/// resolver fills the gaps from the normalized reference and translation code.
#[derive(Debug, Deserialize)]
pub struct VerseResponse {
    /// The verse text
    #[serde(default)]
    pub text: String,

    /// The reference as the API spells it
    #[serde(default)]
    pub reference: String,

    /// Human-readable translation name
    #[serde(default)]
    pub translation_name: String,
}

/// Extract a human-readable error message from a failed API response
///
/// Ordered fallback: JSON `error` field, then JSON `message` field, then
/// `"<status code> <reason>"`, then a generic message. Kept as a standalone
/// function so the precedence can be tested in isolation.
pub fn error_message_from_body(status: StatusCode, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["error", "message"] {
            if let Some(message) = value.get(key).and_then(|v| v.as_str()) {
                if !message.trim().is_empty() {
                    return message.trim().to_string();
                }
            }
        }
    }

    match status.canonical_reason() {
        Some(reason) => format!("{} {}", status.as_u16(), reason),
        None => format!("Verse lookup failed with status {}", status.as_u16()),
    }
}

impl BibleApi {
    /// Create a new BibleApi client with the given endpoint and timeout
    pub fn new(endpoint: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
            endpoint: endpoint.into(),
        }
    }

    /// Build the request URL for a normalized reference and translation code
    ///
    /// Spaces in the reference are encoded as `+`. The translation query
    /// parameter is only appended when the code differs from the default.
    pub fn request_url(&self, normalized: &str, translation: &str) -> String {
        let encoded = normalized.replace(' ', "+");
        let mut url = format!("{}/{}", self.endpoint.trim_end_matches('/'), encoded);

        if !translation.eq_ignore_ascii_case(DEFAULT_TRANSLATION) {
            url.push_str(&format!("?translation={}", translation.to_lowercase()));
        }

        url
    }
}

#[async_trait]
impl VerseResolver for BibleApi {
    async fn resolve(
        &self,
        reference: &str,
        translation: Option<&str>,
    ) -> Result<Option<Verse>, LookupError> {
        let normalized = book_names::normalize_reference(reference);
        let translation = translation.unwrap_or(DEFAULT_TRANSLATION).to_lowercase();
        let url = self.request_url(&normalized, &translation);

        debug!("Fetching verse: GET {}", url);

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                error!("Verse API request failed: {}", e);
                if e.is_timeout() || e.is_connect() || e.is_request() {
                    return Err(LookupError::Network {
                        reference: normalized,
                    });
                }
                return Err(LookupError::Unexpected {
                    message: e.to_string(),
                    reference: normalized,
                });
            }
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = error_message_from_body(status, &body);
            error!("Verse API error ({}): {}", status, message);
            return Err(LookupError::Api {
                status_code: status.as_u16(),
                message,
                reference: normalized,
            });
        }

        let body = response.text().await.map_err(|e| {
            error!("Failed to read verse API response: {}", e);
            LookupError::Network {
                reference: normalized.clone(),
            }
        })?;

        let parsed: VerseResponse = match serde_json::from_str(&body) {
            Ok(parsed) => parsed,
            Err(e) => {
                error!("Failed to parse verse API response: {}", e);
                return Err(LookupError::InvalidResponse {
                    reference: normalized,
                });
            }
        };

        let text = parsed.text.trim().to_string();
        if text.is_empty() {
            return Err(LookupError::EmptyResult {
                reference: normalized,
            });
        }

        Ok(Some(Verse {
            reference: if parsed.reference.is_empty() {
                normalized
            } else {
                parsed.reference
            },
            text,
            translation_name: if parsed.translation_name.is_empty() {
                translation.to_uppercase()
            } else {
                parsed.translation_name
            },
            translation,
        }))
    }
}
