// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use std::fs::File;
use std::io::BufReader;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, warn};

use crate::app_config::{Config, ResolverKind};
use app_controller::Controller;

mod app_config;
mod app_controller;
mod book_names;
mod errors;
mod presenter;
mod resolvers;

/// CLI Wrapper for ResolverKind to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliResolverKind {
    Remote,
    Local,
}

impl From<CliResolverKind> for ResolverKind {
    fn from(cli_resolver: CliResolverKind) -> Self {
        match cli_resolver {
            CliResolverKind::Remote => ResolverKind::Remote,
            CliResolverKind::Local => ResolverKind::Local,
        }
    }
}

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

/// Versum - Bible verse lookup for the terminal
///
/// Resolves Bible verse references to verse text, either through
/// bible-api.com or a built-in offline verse table.
#[derive(Parser, Debug)]
#[command(name = "versum")]
#[command(version = "1.0.0")]
#[command(about = "Bible verse lookup for the terminal")]
#[command(long_about = "Versum resolves Bible verse references to verse text and prints them.

EXAMPLES:
    versum John 3:16                  # Look up a verse
    versum \"Psalm 23:1-6\"             # Verse ranges work too
    versum \"John 3:16 (NIV)\"          # Inline translation override
    versum -r local John 3:16         # Use the built-in offline table
    versum                            # Interactive mode

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default
    one will be created automatically.

RESOLVERS:
    remote - bible-api.com HTTP lookup (default, any supported translation)
    local  - built-in verse table, offline, KJV only")]
struct CommandLineOptions {
    /// Verse reference or command; omit to enter interactive mode
    #[arg(value_name = "REFERENCE", trailing_var_arg = true)]
    reference: Vec<String>,

    /// Resolver backend to use
    #[arg(short, long, value_enum)]
    resolver: Option<CliResolverKind>,

    /// Translation code (e.g. 'kjv', 'niv', 'esv')
    #[arg(short, long)]
    translation: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {} {}\x1B[0m",
                color,
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &cli.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level_filter(&config_log_level));
    }

    // Load or create configuration
    let config_path = &cli.config_path;
    let mut config = if Path::new(config_path).exists() {
        // Load existing configuration
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;

        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?
    } else {
        // Create default configuration if not exists
        warn!(
            "Config file not found at '{}', creating default config.",
            config_path
        );

        let config = Config::default();
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;

        std::fs::write(config_path, config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;

        config
    };

    // Override config with CLI options if provided
    if let Some(resolver) = &cli.resolver {
        config.resolver = resolver.clone().into();
    }

    if let Some(translation) = &cli.translation {
        config.translation = translation.to_lowercase();
    }

    if let Some(log_level) = &cli.log_level {
        config.log_level = log_level.clone().into();
    }

    // Validate the configuration after loading and overriding
    config
        .validate()
        .context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if cli.log_level.is_none() {
        log::set_max_level(level_filter(&config.log_level));
    }

    // Create controller
    let controller = Controller::with_config(config)?;

    // One-or-more arguments are joined into a single reference string;
    // no arguments enters interactive mode
    if cli.reference.is_empty() {
        controller.run_interactive().await
    } else {
        controller.run_batch(&cli.reference.join(" ")).await
    }
}
