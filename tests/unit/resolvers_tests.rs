/*!
 * Tests for the verse resolver implementations
 */

use reqwest::StatusCode;
use versum::errors::LookupError;
use versum::resolvers::VerseResolver;
use versum::resolvers::bible_api::{BibleApi, VerseResponse, error_message_from_body};
use versum::resolvers::local::LocalTable;

/// Test local resolution of a known verse
#[tokio::test]
async fn test_local_resolve_withKnownReference_shouldReturnVerse() {
    let resolver = LocalTable::new();

    let verse = resolver
        .resolve("John 3:16", None)
        .await
        .expect("Local lookups never fail")
        .expect("John 3:16 is in the table");

    assert_eq!(verse.reference, "John 3:16");
    assert!(verse.text.contains("For God so loved the world"));
    assert_eq!(verse.translation_name, "King James Version");
    assert_eq!(verse.translation, "kjv");
}

/// Test that lookups are case-insensitive
#[tokio::test]
async fn test_local_resolve_withLowercaseReference_shouldMatchSameVerse() {
    let resolver = LocalTable::new();

    let exact = resolver.resolve("John 3:16", None).await.unwrap();
    let lowered = resolver.resolve("john 3:16", None).await.unwrap();

    assert_eq!(exact, lowered);
}

/// Test that an absent reference is not-found, not an error
#[tokio::test]
async fn test_local_resolve_withUnknownReference_shouldReturnNone() {
    let resolver = LocalTable::new();

    let outcome = resolver
        .resolve("Luke 2:1", None)
        .await
        .expect("Local lookups never fail");

    assert!(outcome.is_none());
}

/// Test the listing used by the 'list' command
#[tokio::test]
async fn test_local_known_references_withFixedTable_shouldListAllEntries() {
    let resolver = LocalTable::new();

    let references = resolver
        .known_references()
        .expect("Local resolver is table-backed");

    assert_eq!(references.len(), 10);
    assert!(references.contains(&"John 3:16"));
    assert!(references.contains(&"Genesis 1:1"));
    assert!(references.contains(&"Psalm 23:1"));
}

/// Test request URL construction
#[test]
fn test_request_url_withDefaultTranslation_shouldOmitQueryParameter() {
    let api = BibleApi::new("https://bible-api.com", 10);

    assert_eq!(
        api.request_url("John 3:16", "kjv"),
        "https://bible-api.com/John+3:16"
    );

    // Default translation comparison is case-insensitive
    assert_eq!(
        api.request_url("John 3:16", "KJV"),
        "https://bible-api.com/John+3:16"
    );
}

/// Test request URL construction with a translation override
#[test]
fn test_request_url_withTranslationOverride_shouldAppendQueryParameter() {
    let api = BibleApi::new("https://bible-api.com", 10);

    assert_eq!(
        api.request_url("Psalm 23:1-6", "niv"),
        "https://bible-api.com/Psalm+23:1-6?translation=niv"
    );

    // Mixed-case codes are lowercased
    assert_eq!(
        api.request_url("John 3:16", "ESV"),
        "https://bible-api.com/John+3:16?translation=esv"
    );
}

/// Test endpoint trailing slash handling
#[test]
fn test_request_url_withTrailingSlashEndpoint_shouldNotDoubleSlash() {
    let api = BibleApi::new("https://bible-api.com/", 10);

    assert_eq!(
        api.request_url("Genesis 1:1", "kjv"),
        "https://bible-api.com/Genesis+1:1"
    );
}

/// Test the ordered fallback for error message extraction
#[test]
fn test_error_message_from_body_withVariousBodies_shouldFollowPrecedence() {
    let not_found = StatusCode::NOT_FOUND;

    // 1. JSON 'error' field wins
    assert_eq!(
        error_message_from_body(not_found, r#"{"error": "not found"}"#),
        "not found"
    );
    assert_eq!(
        error_message_from_body(not_found, r#"{"error": "not found", "message": "other"}"#),
        "not found"
    );

    // 2. JSON 'message' field is next
    assert_eq!(
        error_message_from_body(not_found, r#"{"message": "verse missing"}"#),
        "verse missing"
    );

    // Empty fields are skipped
    assert_eq!(
        error_message_from_body(not_found, r#"{"error": "", "message": "verse missing"}"#),
        "verse missing"
    );

    // 3. Status line for non-JSON bodies
    assert_eq!(
        error_message_from_body(not_found, "<html>nope</html>"),
        "404 Not Found"
    );
    assert_eq!(error_message_from_body(not_found, ""), "404 Not Found");
}

/// Test deserialization of a successful API body
#[test]
fn test_verse_response_withFullBody_shouldDeserializeAllFields() {
    let body = r#"{
        "reference": "John 3:16",
        "text": "For God so loved the world...",
        "translation_name": "King James Version",
        "translation_id": "kjv"
    }"#;

    let response: VerseResponse = serde_json::from_str(body).expect("Body should deserialize");

    assert_eq!(response.reference, "John 3:16");
    assert!(response.text.starts_with("For God so loved"));
    assert_eq!(response.translation_name, "King James Version");
}

/// Test deserialization of a sparse API body
#[test]
fn test_verse_response_withMissingFields_shouldDefaultToEmpty() {
    let response: VerseResponse =
        serde_json::from_str(r#"{"text": "some text"}"#).expect("Body should deserialize");

    assert_eq!(response.text, "some text");
    assert_eq!(response.reference, "");
    assert_eq!(response.translation_name, "");
}

/// Test that an unreachable endpoint is classified as a network failure
#[tokio::test]
async fn test_remote_resolve_withUnreachableEndpoint_shouldReturnNetworkError() {
    crate::common::init_test_logging();

    // Port 9 on localhost refuses connections
    let api = BibleApi::new("http://127.0.0.1:9", 1);

    let outcome = api.resolve("John 3:16", None).await;

    match outcome {
        Err(LookupError::Network { reference }) => {
            assert_eq!(reference, "John 3:16");
        }
        other => panic!("Expected a network error, got: {:?}", other),
    }
}

/// Test that network failures carry a connectivity-oriented message
#[tokio::test]
async fn test_remote_resolve_withUnreachableEndpoint_shouldMentionConnectivity() {
    let api = BibleApi::new("http://127.0.0.1:9", 1);

    let error = api
        .resolve("John 3:16", None)
        .await
        .expect_err("Lookup against an unreachable endpoint must fail");

    assert!(error.to_string().contains("Network error"));
}
