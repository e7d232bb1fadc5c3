/*!
 * Tests for book name and reference normalization functions
 */

use versum::book_names::{
    abbreviation_count, canonical_book, capitalize_reference, normalize_reference,
};

/// Test abbreviation lookup
#[test]
fn test_canonical_book_withKnownCodes_shouldReturnBookName() {
    assert_eq!(canonical_book("gen"), Some("Genesis"));
    assert_eq!(canonical_book("joh"), Some("John"));
    assert_eq!(canonical_book("psa"), Some("Psalms"));
    assert_eq!(canonical_book("1co"), Some("1 Corinthians"));
    assert_eq!(canonical_book("rev"), Some("Revelation"));

    // Case insensitivity and whitespace
    assert_eq!(canonical_book("JOH"), Some("John"));
    assert_eq!(canonical_book(" gen "), Some("Genesis"));

    // Unknown codes
    assert_eq!(canonical_book("xyz"), None);
    assert_eq!(canonical_book(""), None);
}

/// Test that the table has one entry per book of the Bible
#[test]
fn test_abbreviation_count_withFullTable_shouldHave66Entries() {
    assert_eq!(abbreviation_count(), 66);
}

/// Test normalization of references for the remote resolver
#[test]
fn test_normalize_reference_withAbbreviation_shouldExpandBookName() {
    assert_eq!(normalize_reference("joh 3:16"), "John 3:16");
    assert_eq!(normalize_reference("gen 1:1"), "Genesis 1:1");
    assert_eq!(normalize_reference("1co 13:4-7"), "1 Corinthians 13:4-7");

    // Case insensitivity of the abbreviation
    assert_eq!(normalize_reference("JOH 3:16"), "John 3:16");

    // Extra whitespace is collapsed
    assert_eq!(normalize_reference("  joh   3:16  "), "John 3:16");
}

/// Test that unknown first tokens pass through unchanged
#[test]
fn test_normalize_reference_withUnknownBook_shouldLeaveTokensUnchanged() {
    assert_eq!(normalize_reference("John 3:16"), "John 3:16");
    assert_eq!(normalize_reference("Nonexistent 1:1"), "Nonexistent 1:1");
    assert_eq!(normalize_reference(""), "");
}

/// Test the local variant's capitalization-only normalization
#[test]
fn test_capitalize_reference_withLowercaseBook_shouldCapitalizeFirstToken() {
    assert_eq!(capitalize_reference("john 3:16"), "John 3:16");
    assert_eq!(capitalize_reference("JOHN 3:16"), "John 3:16");
    assert_eq!(capitalize_reference("  psalm 23:1 "), "Psalm 23:1");
}

/// Test that the local normalization does not consult the abbreviation table
#[test]
fn test_capitalize_reference_withAbbreviation_shouldNotExpandBookName() {
    // "joh" is a known abbreviation but only gets capitalized here
    assert_eq!(capitalize_reference("joh 3:16"), "Joh 3:16");
}
