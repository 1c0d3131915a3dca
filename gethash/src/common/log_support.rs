// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Tracing setup.
//!
//! Logging is **DISABLED** by **default**. Nothing is written anywhere unless
//! [`try_initialize_logging_global`] (or [`try_initialize_logging_thread_local`]) is
//! called with a level filter other than [`LevelFilter::OFF`]. After that, use the
//! [`tracing::info!`], [`tracing::debug!`], etc. macros as usual.
//!
//! Both functions receive anything that is [`Into<TracingConfig>`], so a bare level or
//! a bare writer config is enough:
//!
//! ```no_run
//! use r3bl_gethash::common::log_support::{DisplayPreference, WriterConfig,
//!                                         try_initialize_logging_global};
//!
//! try_initialize_logging_global(WriterConfig::Display(DisplayPreference::Stderr)).ok();
//! tracing::debug!(message = "Start logging...");
//! ```

use super::rolling_file_appender_impl;
use miette::IntoDiagnostic;
use tracing::dispatcher;
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, layer::SubscriberExt, registry::LookupSpan,
                         util::SubscriberInitExt};

pub const DEFAULT_LOG_FILE_NAME: &str = "log.txt";

/// Where to log, and how much.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    pub level_filter: LevelFilter,
    pub writer_config: WriterConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterConfig {
    None,
    Display(DisplayPreference),
    File(String /* log file path */),
    DisplayAndFile(DisplayPreference, String /* log file path */),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayPreference {
    Stdout,
    Stderr,
}

impl TracingConfig {
    #[must_use]
    pub fn off() -> Self {
        Self {
            level_filter: LevelFilter::OFF,
            writer_config: WriterConfig::None,
        }
    }

    fn is_off(&self) -> bool {
        self.level_filter == LevelFilter::OFF
            || matches!(self.writer_config, WriterConfig::None)
    }
}

impl From<LevelFilter> for TracingConfig {
    fn from(level_filter: LevelFilter) -> Self {
        Self {
            level_filter,
            writer_config: WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string()),
        }
    }
}

impl From<WriterConfig> for TracingConfig {
    fn from(writer_config: WriterConfig) -> Self {
        Self {
            level_filter: LevelFilter::DEBUG,
            writer_config,
        }
    }
}

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Install a global subscriber for the rest of the process.
///
/// # Errors
///
/// Returns an error if the log file can't be created, or if a global subscriber has
/// already been installed.
pub fn try_initialize_logging_global(
    options: impl Into<TracingConfig>,
) -> miette::Result<()> {
    let it: TracingConfig = options.into();

    // Early return if logging is off.
    if it.is_off() {
        return Ok(());
    }

    let layers = try_create_layers(&it)?;
    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .into_diagnostic()
}

/// Install a subscriber for the current thread only, until the returned guard is
/// dropped. This is great for tests.
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_initialize_logging_thread_local(
    options: impl Into<TracingConfig>,
) -> miette::Result<Option<dispatcher::DefaultGuard>> {
    let it: TracingConfig = options.into();

    // Early return if logging is off.
    if it.is_off() {
        return Ok(None);
    }

    let layers = try_create_layers(&it)?;
    let subscriber = tracing_subscriber::registry().with(layers);
    Ok(Some(tracing::subscriber::set_default(subscriber)))
}

/// Returns the layers. This does not initialize the tracing system.
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_create_layers(
    tracing_config: &TracingConfig,
) -> miette::Result<Vec<Box<DynLayer<tracing_subscriber::Registry>>>> {
    let mut return_it: Vec<Box<DynLayer<tracing_subscriber::Registry>>> = vec![];

    // Set the level filter for the whole registry, in addition to each layer.
    return_it.push(Box::new(tracing_config.level_filter));

    if let Some(layer) = try_create_display_layer(
        tracing_config.level_filter,
        &tracing_config.writer_config,
    ) {
        return_it.push(layer);
    }

    if let Some(layer) =
        try_create_file_layer(tracing_config.level_filter, &tracing_config.writer_config)?
    {
        return_it.push(layer);
    }

    Ok(return_it)
}

fn try_create_display_layer<S>(
    level_filter: LevelFilter,
    writer_config: &WriterConfig,
) -> Option<Box<DynLayer<S>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    let fmt_layer = tracing_subscriber::fmt::layer().compact().without_time();

    match writer_config {
        WriterConfig::DisplayAndFile(display_pref, _)
        | WriterConfig::Display(display_pref) => match display_pref {
            DisplayPreference::Stdout => Some(Box::new(
                fmt_layer
                    .with_writer(std::io::stdout)
                    .with_filter(level_filter),
            )),
            DisplayPreference::Stderr => Some(Box::new(
                fmt_layer
                    .with_writer(std::io::stderr)
                    .with_filter(level_filter),
            )),
        },
        _ => None,
    }
}

fn try_create_file_layer<S>(
    level_filter: LevelFilter,
    writer_config: &WriterConfig,
) -> miette::Result<Option<Box<DynLayer<S>>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    Ok(match writer_config {
        WriterConfig::DisplayAndFile(_, log_file_path)
        | WriterConfig::File(log_file_path) => {
            let file = rolling_file_appender_impl::try_create(log_file_path)?;
            Some(Box::new(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(file)
                    .with_filter(level_filter),
            ))
        }
        _ => None,
    })
}
