use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Book name utilities for Bible reference handling
///
/// This module provides the fixed abbreviation table mapping lowercase
/// 2-3 letter book codes to canonical book names, plus the two reference
/// normalization strategies used by the resolvers.
/// Abbreviation table, one entry per book of the Bible (66 entries).
///
/// Keys are the lowercase short codes users commonly type; values are the
/// canonical book names the lookup targets recognize. Loaded once, never
/// mutated afterwards.
static ABBREVIATIONS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        // Old Testament
        ("gen", "Genesis"),
        ("exo", "Exodus"),
        ("lev", "Leviticus"),
        ("num", "Numbers"),
        ("deu", "Deuteronomy"),
        ("jos", "Joshua"),
        ("jdg", "Judges"),
        ("rut", "Ruth"),
        ("1sa", "1 Samuel"),
        ("2sa", "2 Samuel"),
        ("1ki", "1 Kings"),
        ("2ki", "2 Kings"),
        ("1ch", "1 Chronicles"),
        ("2ch", "2 Chronicles"),
        ("ezr", "Ezra"),
        ("neh", "Nehemiah"),
        ("est", "Esther"),
        ("job", "Job"),
        ("psa", "Psalms"),
        ("pro", "Proverbs"),
        ("ecc", "Ecclesiastes"),
        ("sng", "Song of Solomon"),
        ("isa", "Isaiah"),
        ("jer", "Jeremiah"),
        ("lam", "Lamentations"),
        ("ezk", "Ezekiel"),
        ("dan", "Daniel"),
        ("hos", "Hosea"),
        ("jol", "Joel"),
        ("amo", "Amos"),
        ("oba", "Obadiah"),
        ("jon", "Jonah"),
        ("mic", "Micah"),
        ("nam", "Nahum"),
        ("hab", "Habakkuk"),
        ("zep", "Zephaniah"),
        ("hag", "Haggai"),
        ("zec", "Zechariah"),
        ("mal", "Malachi"),
        // New Testament
        ("mat", "Matthew"),
        ("mar", "Mark"),
        ("luk", "Luke"),
        ("joh", "John"),
        ("act", "Acts"),
        ("rom", "Romans"),
        ("1co", "1 Corinthians"),
        ("2co", "2 Corinthians"),
        ("gal", "Galatians"),
        ("eph", "Ephesians"),
        ("phi", "Philippians"),
        ("col", "Colossians"),
        ("1th", "1 Thessalonians"),
        ("2th", "2 Thessalonians"),
        ("1ti", "1 Timothy"),
        ("2ti", "2 Timothy"),
        ("tit", "Titus"),
        ("phm", "Philemon"),
        ("heb", "Hebrews"),
        ("jam", "James"),
        ("1pe", "1 Peter"),
        ("2pe", "2 Peter"),
        ("1jo", "1 John"),
        ("2jo", "2 John"),
        ("3jo", "3 John"),
        ("jud", "Jude"),
        ("rev", "Revelation"),
    ])
});

/// Look up the canonical book name for an abbreviation code
///
/// The code is matched case-insensitively after trimming. Returns `None`
/// when the code is not a known abbreviation.
pub fn canonical_book(code: &str) -> Option<&'static str> {
    ABBREVIATIONS.get(code.trim().to_lowercase().as_str()).copied()
}

/// Normalize a verse reference for API lookup
///
/// Trims the input, splits it on whitespace, and replaces the first token
/// with its canonical book name when it matches a known abbreviation.
/// Unknown first tokens are left untouched. Tokens are rejoined with
/// single spaces. This function never fails.
pub fn normalize_reference(reference: &str) -> String {
    let mut parts: Vec<&str> = reference.split_whitespace().collect();

    if let Some(first) = parts.first() {
        if let Some(book) = canonical_book(first) {
            parts[0] = book;
        }
    }

    parts.join(" ")
}

/// Normalize a verse reference for the local verse table
///
/// Only capitalizes the first token (first letter uppercased, remainder
/// lowercased) and rejoins with single spaces. Deliberately does not
/// consult the abbreviation table; the two resolvers keep their distinct
/// normalization behaviors.
pub fn capitalize_reference(reference: &str) -> String {
    let parts: Vec<String> = reference
        .split_whitespace()
        .enumerate()
        .map(|(i, token)| {
            if i == 0 {
                let mut chars = token.chars();
                match chars.next() {
                    Some(first) => {
                        first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                    }
                    None => String::new(),
                }
            } else {
                token.to_string()
            }
        })
        .collect();

    parts.join(" ")
}

/// Number of entries in the abbreviation table
pub fn abbreviation_count() -> usize {
    ABBREVIATIONS.len()
}
