use std::io::Write;

use anyhow::Result;
use log::{debug, info};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::app_config::{Config, ResolverKind};
use crate::presenter;
use crate::resolvers::{self, VerseResolver};

/// Application controller that drives verse lookups
///
/// Owns the configured resolver and dispatches each input string through
/// normalization, resolution and presentation. Holds no state across
/// requests beyond the configuration.
pub struct Controller {
    /// Application configuration
    config: Config,
    /// The resolver backend answering lookups
    resolver: Box<dyn VerseResolver>,
}

/// Split an input string into a reference and an optional inline
/// translation override of the form `<reference> (<translation>)`.
///
/// The input is split on the first `(`; the trailing `)` is stripped and
/// the code lowercased. Input without parentheses passes through unchanged
/// with no override.
pub fn parse_translation_override(input: &str) -> (String, Option<String>) {
    if input.contains('(') && input.contains(')') {
        let mut parts = input.splitn(2, '(');
        let reference = parts.next().unwrap_or("").trim().to_string();
        let translation = parts
            .next()
            .unwrap_or("")
            .trim()
            .trim_end_matches(')')
            .trim()
            .to_lowercase();

        if !translation.is_empty() {
            return (reference, Some(translation));
        }
        return (reference, None);
    }

    (input.trim().to_string(), None)
}

impl Controller {
    /// Create a controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let resolver = resolvers::from_config(&config);
        debug!("Using {} resolver", config.resolver.display_name());

        Ok(Self { config, resolver })
    }

    /// Process a single reference or meta-command from the command line
    pub async fn run_batch(&self, input: &str) -> Result<()> {
        let input = input.trim();
        if input.is_empty() {
            return Ok(());
        }

        match input.to_lowercase().as_str() {
            "help" | "--help" | "-h" => println!("{}", self.help_text()),
            "list" | "--list" if self.config.resolver == ResolverKind::Local => {
                println!("{}", self.list_text());
            }
            _ => self.lookup(input).await,
        }

        Ok(())
    }

    /// Run the interactive read loop until quit, end-of-input or interrupt
    pub async fn run_interactive(&self) -> Result<()> {
        println!("Bible Verse Lookup");
        println!("{}", "=".repeat(40));
        println!("Enter verse references (e.g. 'John 3:16', 'Psalm 23:1-6')");
        if self.config.resolver == ResolverKind::Remote {
            println!("You can also specify a translation: 'John 3:16 (NIV)'");
        }
        println!("Type 'help' for more information");
        println!("Type 'quit' or 'exit' to exit the program.\n");

        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            print!("Enter verse reference: ");
            std::io::stdout().flush()?;

            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    println!("\n\nGoodbye!");
                    break;
                }
                line = lines.next_line() => {
                    match line {
                        Ok(Some(line)) => {
                            if !self.handle_line(line.trim()).await {
                                break;
                            }
                        }
                        // End of input
                        Ok(None) => {
                            println!("\nGoodbye!");
                            break;
                        }
                        Err(e) => {
                            info!("Failed to read input: {}", e);
                            println!("\nGoodbye!");
                            break;
                        }
                    }
                }
            }
        }

        Ok(())
    }

    /// Handle one interactive line; returns false when the loop should stop
    pub async fn handle_line(&self, input: &str) -> bool {
        if input.is_empty() {
            return true;
        }

        match input.to_lowercase().as_str() {
            "quit" | "exit" | "q" => {
                println!("Goodbye!");
                return false;
            }
            "help" | "h" => println!("{}", self.help_text()),
            "list" if self.config.resolver == ResolverKind::Local => {
                println!("{}", self.list_text());
            }
            _ => self.lookup(input).await,
        }

        true
    }

    /// Resolve one reference and print the outcome
    async fn lookup(&self, input: &str) {
        let (reference, override_code) = parse_translation_override(input);
        if reference.is_empty() {
            println!("{}", presenter::format_not_found());
            return;
        }

        let translation = override_code.unwrap_or_else(|| self.config.translation.clone());
        let outcome = self
            .resolver
            .resolve(&reference, Some(translation.as_str()))
            .await;
        presenter::display(&outcome);
    }

    /// Help text for the active resolver
    pub fn help_text(&self) -> String {
        let mut help = String::new();
        help.push_str("\nBible Verse Lookup Help\n");
        help.push_str(&"=".repeat(40));
        help.push('\n');
        help.push_str("Look up Bible verses by reference.\n");
        help.push_str("\nUsage examples:\n");
        help.push_str("  - John 3:16\n");
        help.push_str("  - Genesis 1:1\n");
        help.push_str("  - Psalm 23:1-6\n");
        help.push_str("  - Romans 8:28\n");
        help.push_str("  - 1 Corinthians 13:4-7\n");

        if self.config.resolver == ResolverKind::Remote {
            help.push_str("\nYou can also specify a translation:\n");
            help.push_str("  - John 3:16 (NIV)\n");
            help.push_str("  - Genesis 1:1 (ESV)\n");
            help.push_str("\nAvailable translations include: KJV, NIV, ESV, NASB, NLT, and more!\n");
        }

        help.push_str("\nSpecial commands:\n");
        if self.config.resolver == ResolverKind::Local {
            help.push_str("  - 'list': Show the available verses\n");
        }
        help.push_str("  - 'help': Show this help\n");
        help.push_str("  - 'quit' or 'exit': Exit the program\n");
        help
    }

    /// Listing of the references the local table can answer
    pub fn list_text(&self) -> String {
        let mut listing = String::new();
        listing.push_str("\nAvailable verses\n");
        listing.push_str(&"=".repeat(40));
        listing.push('\n');

        if let Some(references) = self.resolver.known_references() {
            for reference in references {
                listing.push_str("  - ");
                listing.push_str(reference);
                listing.push('\n');
            }
        }

        listing
    }
}
