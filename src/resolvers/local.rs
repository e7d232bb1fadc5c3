use std::collections::BTreeMap;

use async_trait::async_trait;
use log::debug;
use once_cell::sync::Lazy;

use crate::book_names;
use crate::errors::LookupError;
use crate::resolvers::{Verse, VerseResolver};

const TRANSLATION_CODE: &str = "kjv";
const TRANSLATION_NAME: &str = "King James Version";

/// Fixed verse table for offline lookups. KJV text, never mutated after load.
static VERSES: Lazy<BTreeMap<&'static str, &'static str>> = Lazy::new(|| {
    BTreeMap::from([
        (
            "Genesis 1:1",
            "In the beginning God created the heaven and the earth.",
        ),
        (
            "Joshua 1:9",
            "Have not I commanded thee? Be strong and of a good courage; be not afraid, \
             neither be thou dismayed: for the LORD thy God is with thee whithersoever thou goest.",
        ),
        ("Psalm 23:1", "The LORD is my shepherd; I shall not want."),
        (
            "Proverbs 3:5",
            "Trust in the LORD with all thine heart; and lean not unto thine own understanding.",
        ),
        (
            "Isaiah 41:10",
            "Fear thou not; for I am with thee: be not dismayed; for I am thy God: I will \
             strengthen thee; yea, I will help thee; yea, I will uphold thee with the right \
             hand of my righteousness.",
        ),
        (
            "Jeremiah 29:11",
            "For I know the thoughts that I think toward you, saith the LORD, thoughts of \
             peace, and not of evil, to give you an expected end.",
        ),
        (
            "Matthew 6:33",
            "But seek ye first the kingdom of God, and his righteousness; and all these \
             things shall be added unto you.",
        ),
        (
            "John 3:16",
            "For God so loved the world, that he gave his only begotten Son, that whosoever \
             believeth in him should not perish, but have everlasting life.",
        ),
        (
            "Romans 8:28",
            "And we know that all things work together for good to them that love God, to \
             them who are the called according to his purpose.",
        ),
        (
            "Philippians 4:13",
            "I can do all things through Christ which strengtheneth me.",
        ),
    ])
});

/// Resolver backed by the built-in verse table
///
/// Looks up the reference exactly first, then falls back to a
/// case-insensitive scan over all keys. A miss is not an error; it is
/// reported as an absent result. No network access, no failure paths.
#[derive(Debug, Default)]
pub struct LocalTable;

impl LocalTable {
    /// Create a new local table resolver
    pub fn new() -> Self {
        Self
    }

    /// All references present in the verse table, in alphabetical order
    pub fn references() -> Vec<&'static str> {
        VERSES.keys().copied().collect()
    }
}

#[async_trait]
impl VerseResolver for LocalTable {
    async fn resolve(
        &self,
        reference: &str,
        _translation: Option<&str>,
    ) -> Result<Option<Verse>, LookupError> {
        let normalized = book_names::capitalize_reference(reference);

        let entry = VERSES.get_key_value(normalized.as_str()).or_else(|| {
            let lowered = normalized.to_lowercase();
            VERSES
                .iter()
                .find(|(key, _)| key.to_lowercase() == lowered)
        });

        let Some((key, text)) = entry else {
            debug!("Reference not in local table: {}", normalized);
            return Ok(None);
        };

        Ok(Some(Verse {
            reference: (*key).to_string(),
            text: (*text).to_string(),
            translation_name: TRANSLATION_NAME.to_string(),
            translation: TRANSLATION_CODE.to_string(),
        }))
    }

    fn known_references(&self) -> Option<Vec<&'static str>> {
        Some(Self::references())
    }
}
