// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Wire a [`TracingConfig`] into [`tracing_subscriber`] layers.
//!
//! [`crate::Sequence`] reports every failed precondition (empty collection, index out of
//! range, etc.) as a [`tracing::debug!`] event before it returns the error. Nothing is
//! printed unless the calling app installs a subscriber, either its own or one created
//! by the functions in this module.
//!
//! Logging is **DISABLED** by **default**.

use std::io::IsTerminal;

use tracing::dispatcher;
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, registry::LookupSpan};

use super::rolling_file_appender_impl;
use crate::{DisplayPreference, TracingConfig, WriterConfig};

/// Avoid gnarly type annotations by using a macro to create the `fmt` layer. Note that
/// [`tracing_subscriber::fmt::format::Pretty`] and
/// [`tracing_subscriber::fmt::format::Compact`] are mutually exclusive.
#[macro_export]
macro_rules! create_fmt {
    () => {
        tracing_subscriber::fmt::layer()
            .compact()
            .without_time()
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_target(false)
            .with_file(false)
            .with_line_number(false)
    };
}

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Set the global default subscriber. Returns early w/out doing anything if the level
/// filter is [`LevelFilter::OFF`].
///
/// # Errors
///
/// See [`TracingConfig::install_global`].
pub fn try_initialize_logging_global(
    options: impl Into<TracingConfig>,
) -> miette::Result<()> {
    let it: TracingConfig = options.into();

    // Early return if the level filter is off.
    if it.get_level_filter() == LevelFilter::OFF {
        return Ok(());
    }

    it.install_global()
}

/// Set a thread local subscriber. Returns [`None`] w/out doing anything if the level
/// filter is [`LevelFilter::OFF`]. Otherwise the subscriber stays active until the
/// returned guard is dropped.
///
/// # Errors
///
/// See [`TracingConfig::install_thread_local`].
pub fn try_initialize_logging_thread_local(
    options: impl Into<TracingConfig>,
) -> miette::Result<Option<dispatcher::DefaultGuard>> {
    let it: TracingConfig = options.into();

    // Early return if the level filter is off.
    if it.get_level_filter() == LevelFilter::OFF {
        return Ok(None);
    }

    it.install_thread_local().map(Some)
}

/// Returns the layers. This does not initialize the tracing system, use
/// [`TracingConfig::install_global`] or [`TracingConfig::install_thread_local`] for that.
///
/// # Errors
///
/// The log file can't be created.
pub fn try_create_layers(
    tracing_config: TracingConfig,
) -> miette::Result<Vec<Box<DynLayer<tracing_subscriber::Registry>>>> {
    let level_filter = tracing_config.get_level_filter();
    let mut return_it: Vec<Box<DynLayer<tracing_subscriber::Registry>>> = vec![];

    // Applies to every layer, including ones added later that don't carry a filter.
    return_it.push(Box::new(level_filter));

    if let Some(layer) =
        try_create_display_layer(level_filter, tracing_config.get_writer_config())?
    {
        return_it.push(layer);
    }

    if let Some(layer) =
        try_create_file_layer(level_filter, tracing_config.get_writer_config())?
    {
        return_it.push(layer);
    }

    Ok(return_it)
}

/// This erases the concrete type of the writer, and returns a boxed layer. Returns
/// [`None`] if `writer_config` has no display.
///
/// # Errors
///
/// This never fails, the [`miette::Result`] keeps the signature in line w/
/// [`try_create_file_layer`].
pub fn try_create_display_layer<S>(
    level_filter: LevelFilter,
    writer_config: WriterConfig,
) -> miette::Result<Option<Box<DynLayer<S>>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    let fmt_layer = create_fmt!();

    Ok(match writer_config {
        WriterConfig::DisplayAndFile(display_pref, _)
        | WriterConfig::Display(display_pref) => match display_pref {
            // Only colorize when the output is a terminal, not a pipe or a file.
            DisplayPreference::Stdout => Some(Box::new(
                fmt_layer
                    .with_ansi(std::io::stdout().is_terminal())
                    .with_writer(std::io::stdout)
                    .with_filter(level_filter),
            )),
            DisplayPreference::Stderr => Some(Box::new(
                fmt_layer
                    .with_ansi(std::io::stderr().is_terminal())
                    .with_writer(std::io::stderr)
                    .with_filter(level_filter),
            )),
        },
        WriterConfig::None | WriterConfig::File(_) => None,
    })
}

/// This erases the concrete type of the writer, and returns a boxed layer. Returns
/// [`None`] if `writer_config` has no file.
///
/// # Errors
///
/// The log file can't be created. See [`rolling_file_appender_impl::try_create`].
pub fn try_create_file_layer<S>(
    level_filter: LevelFilter,
    writer_config: WriterConfig,
) -> miette::Result<Option<Box<DynLayer<S>>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    let fmt_layer = create_fmt!().with_ansi(false);

    Ok(match writer_config {
        WriterConfig::DisplayAndFile(_, tracing_log_file_path_and_prefix)
        | WriterConfig::File(tracing_log_file_path_and_prefix) => {
            let file = rolling_file_appender_impl::try_create(
                tracing_log_file_path_and_prefix.as_str(),
            )?;
            Some(Box::new(
                fmt_layer.with_writer(file).with_filter(level_filter),
            ))
        }
        WriterConfig::None | WriterConfig::Display(_) => None,
    })
}
