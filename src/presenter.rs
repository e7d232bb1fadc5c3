use crate::errors::LookupError;
use crate::resolvers::Verse;

/// Terminal output formatting for lookup outcomes
///
/// Formatting is kept as pure string builders so it can be tested without
/// capturing stdout; `display` is the only function that prints.
/// Format a resolved verse: reference, an `=` underline matching its
/// length, the verse text and the translation label in parentheses.
pub fn format_verse(verse: &Verse) -> String {
    let reference = verse.reference.trim();
    let underline = "=".repeat(reference.chars().count());

    format!(
        "\n{}\n{}\n\n{}\n\n({})\n",
        reference,
        underline,
        verse.text.trim(),
        verse.translation_name
    )
}

/// Format a failed lookup with a hint pointing at the help command
pub fn format_error(error: &LookupError) -> String {
    format!("\nError: {}\nType 'help' for usage instructions.\n", error)
}

/// Format an absent result (reference not in the local table)
pub fn format_not_found() -> String {
    "\nVerse not found.\nType 'help' for usage instructions, or 'list' to see available verses.\n"
        .to_string()
}

/// Print the outcome of a lookup to stdout
pub fn display(outcome: &Result<Option<Verse>, LookupError>) {
    match outcome {
        Ok(Some(verse)) => println!("{}", format_verse(verse)),
        Ok(None) => println!("{}", format_not_found()),
        Err(error) => println!("{}", format_error(error)),
    }
}
