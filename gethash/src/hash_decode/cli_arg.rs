// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Command-line argument parsing for gethash.

use crate::{common::log_support::{DEFAULT_LOG_FILE_NAME, TracingConfig, WriterConfig},
            hash_decode::types::{DecodeOptions, OnLineError, TrailingGroup}};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Decode `prefix|payload` hash lines into `prefix|digits`.
#[derive(Debug, Parser)]
#[command(
    name = "gethash",
    about = "Decode `prefix|payload` hash lines into `prefix|digits`",
    long_about = "Each input line looks like `<prefix>|<base64 payload>`. The payload is \
                  base64 decoded, then unpacked twice with a six bit (uuencode style) \
                  charset, and the digits found in the result replace the payload.\n\n\
                  Reads the given files, or stdin when there are none (or for `-`). \
                  Lines that can't be decoded never stop the rest from being decoded.",
    version
)]
#[allow(clippy::struct_excessive_bools)]
pub struct CLIArg {
    /// What to do with a line that can't be decoded
    #[arg(long, value_enum, default_value_t = OnLineError::PassThrough)]
    pub on_error: OnLineError,

    /// How to treat a character group with fewer than 4 symbols at the end of a payload.
    /// `zero-fill` gives the same output as the web decoder
    #[arg(long, value_enum, default_value_t = TrailingGroup::Truncate)]
    pub trailing_group: TrailingGroup,

    /// Decode stdin line by line, as each line arrives
    #[arg(long, short = 'f')]
    pub follow: bool,

    /// Copy the decoded output to the system clipboard
    #[arg(long, short = 'c')]
    pub copy: bool,

    /// Exit with status 1 if any line could not be decoded
    #[arg(long, short = 's')]
    pub strict: bool,

    /// Report every line that could not be decoded on stderr
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Log app output to a file (`log.txt` unless `--log-file` is given) for debugging
    #[arg(long, short = 'l')]
    pub enable_logging: bool,

    /// File to log to when logging is enabled
    #[arg(long, value_name = "FILE", default_value = DEFAULT_LOG_FILE_NAME)]
    pub log_file: String,

    /// Most verbose level to log when logging is enabled
    #[arg(long, value_enum, default_value_t = LogLevel::Debug)]
    pub log_level: LogLevel,

    /// Files to decode. If none are given (or for `-`), stdin is decoded.
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for tracing_core::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Self::ERROR,
            LogLevel::Warn => Self::WARN,
            LogLevel::Info => Self::INFO,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Trace => Self::TRACE,
        }
    }
}

impl CLIArg {
    /// Convert CLI arguments to [`DecodeOptions`].
    #[must_use]
    pub fn to_decode_options(&self) -> DecodeOptions {
        DecodeOptions {
            on_line_error: self.on_error,
            trailing_group: self.trailing_group,
        }
    }

    /// Convert CLI arguments to a [`TracingConfig`]. Logging is off unless it was asked
    /// for.
    #[must_use]
    pub fn to_tracing_config(&self) -> TracingConfig {
        if self.enable_logging {
            TracingConfig {
                level_filter: self.log_level.into(),
                writer_config: WriterConfig::File(self.log_file.clone()),
            }
        } else {
            TracingConfig::off()
        }
    }
}
