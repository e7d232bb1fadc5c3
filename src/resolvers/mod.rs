/*!
 * Resolver implementations for verse lookups.
 *
 * This module contains the backends that turn a verse reference into text:
 * - BibleApi: bible-api.com HTTP lookup
 * - LocalTable: fixed in-memory verse table, offline
 */

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::app_config::{Config, ResolverKind};
use crate::errors::LookupError;

/// A successfully resolved verse
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Verse {
    /// The resolved reference as reported by the backend
    pub reference: String,

    /// The verse text
    pub text: String,

    /// Human-readable translation name (e.g. "King James Version")
    pub translation_name: String,

    /// Lowercase translation code (e.g. "kjv")
    pub translation: String,
}

/// Common trait for all verse resolvers
///
/// This trait defines the interface that all resolver implementations must
/// follow, allowing them to be used interchangeably by the controller.
#[async_trait]
pub trait VerseResolver: Send + Sync + Debug {
    /// Resolve a verse reference to verse text
    ///
    /// # Arguments
    /// * `reference` - The raw, non-empty reference the user typed
    /// * `translation` - Optional translation code override
    ///
    /// # Returns
    /// * `Ok(Some(verse))` - The reference resolved to a verse
    /// * `Ok(None)` - The reference is not in the backend's table (local only)
    /// * `Err(LookupError)` - The lookup failed; never panics or propagates raw errors
    async fn resolve(
        &self,
        reference: &str,
        translation: Option<&str>,
    ) -> Result<Option<Verse>, LookupError>;

    /// References this resolver can enumerate, when backed by a fixed table
    fn known_references(&self) -> Option<Vec<&'static str>> {
        None
    }
}

/// Build the resolver selected by the configuration
pub fn from_config(config: &Config) -> Box<dyn VerseResolver> {
    match config.resolver {
        ResolverKind::Remote => Box::new(bible_api::BibleApi::new(
            &config.endpoint,
            config.timeout_secs,
        )),
        ResolverKind::Local => Box::new(local::LocalTable::new()),
    }
}

pub mod bible_api;
pub mod local;
