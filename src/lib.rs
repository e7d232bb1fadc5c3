/*!
 * # Versum - Bible verse lookup for the terminal
 *
 * A Rust library and CLI for resolving Bible verse references to verse text.
 *
 * ## Features
 *
 * - Normalize user-typed references (abbreviations, casing) to canonical book names
 * - Resolve verses through two interchangeable backends:
 *   - bible-api.com (remote HTTP lookup, any supported translation)
 *   - Built-in verse table (offline, KJV only)
 * - Formatted terminal output for verses, errors and not-found results
 * - Batch (one-shot) and interactive line-by-line modes
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `book_names`: Book abbreviation table and reference normalization
 * - `resolvers`: Verse resolver implementations:
 *   - `resolvers::bible_api`: bible-api.com HTTP client
 *   - `resolvers::local`: Fixed in-memory verse table
 * - `presenter`: Terminal output formatting
 * - `app_controller`: Batch and interactive drivers
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod book_names;
pub mod errors;
pub mod presenter;
pub mod resolvers;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::Controller;
pub use book_names::{canonical_book, capitalize_reference, normalize_reference};
pub use errors::{AppError, LookupError};
pub use resolvers::{Verse, VerseResolver};
