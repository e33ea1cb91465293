//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::transform::TransformKind;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Batch configuration.
///
/// Parsed from the command line by the binary, or constructed programmatically
/// by library users.
///
/// # Examples
///
/// ```no_run
/// use probe_normalizer::Config;
/// use probe_normalizer::transform::TransformKind;
/// use std::path::PathBuf;
///
/// let config = Config {
///     file: PathBuf::from("zgrab-http.jsonl"),
///     transform: TransformKind::OpenProxy,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "probe_normalizer",
    about = "Normalize raw HTTP/TLS probe results into flat records (JSON Lines in, JSON Lines out)"
)]
pub struct Config {
    /// File to read probe records from, one JSON object per line (`-` for stdin)
    #[arg(default_value = "-")]
    pub file: PathBuf,

    /// Write normalized records here instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Transform to apply (http/generic, http/www, http/openproxy)
    #[arg(long, short, default_value = "http/generic")]
    pub transform: TransformKind,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Exit with an error if any input line is not valid JSON
    #[arg(long)]
    pub fail_on_invalid: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file: PathBuf::from(crate::config::STDIN_PATH),
            output: None,
            transform: TransformKind::HttpGeneric,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            fail_on_invalid: false,
        }
    }
}
