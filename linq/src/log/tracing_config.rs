// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::Add;

use tracing::dispatcher;
use tracing_core::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::try_create_layers;

pub const DEFAULT_LOG_FILE_NAME: &str = "linq_log.txt";

/// Configure where the debug events emitted by [`crate::Sequence`] (and anything else in
/// your app that uses [`tracing`]) end up. You can display the logs to:
/// 1. a file,
/// 2. stdout or stderr,
/// 3. both.
///
/// Build one directly, or convert from a [`tracing::Level`], a [`LevelFilter`], a
/// [`DisplayPreference`] or a [`WriterConfig`], and compose them w/ `+`:
///
/// ```no_run
/// use r3bl_linq::{DisplayPreference, TracingConfig, WriterConfig};
///
/// let level: TracingConfig = tracing_core::LevelFilter::DEBUG.into();
/// let display: TracingConfig = DisplayPreference::Stderr.into();
/// let file: TracingConfig = WriterConfig::File("linq.log".to_string()).into();
///
/// let config = level + display + file;
/// assert_eq!(
///     config.writer_config,
///     WriterConfig::DisplayAndFile(DisplayPreference::Stderr, "linq.log".to_string())
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TracingConfig {
    pub writer_config: WriterConfig,
    pub level_filter: LevelFilter,
}

/// - `tracing_log_file_path_and_prefix`: [String] is the file path and prefix to use for
///   the log file. Eg: `/tmp/linq_log.txt` or `linq_log.txt`.
/// - [`DisplayPreference`] is the preferred display to use for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterConfig {
    None,
    Display(DisplayPreference),
    File(String /* tracing_log_file_path_and_prefix */),
    DisplayAndFile(
        DisplayPreference,
        String, /* tracing_log_file_path_and_prefix */
    ),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayPreference {
    Stdout,
    Stderr,
}

impl TracingConfig {
    #[must_use]
    pub fn new_display(preferred_display: DisplayPreference) -> Self {
        Self {
            writer_config: WriterConfig::Display(preferred_display),
            level_filter: LevelFilter::DEBUG,
        }
    }

    #[must_use]
    pub fn new_file(filename: Option<String>) -> Self {
        Self {
            writer_config: WriterConfig::File(
                filename.unwrap_or_else(|| DEFAULT_LOG_FILE_NAME.to_string()),
            ),
            level_filter: LevelFilter::DEBUG,
        }
    }

    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }

    /// Global default subscriber, which once set, can't be unset or changed. This is
    /// meant for apps.
    ///
    /// # Errors
    ///
    /// - The log file can't be created.
    /// - A global default subscriber has already been set.
    pub fn install_global(self) -> miette::Result<()> {
        let layers = try_create_layers(self)?;
        tracing_subscriber::registry()
            .with(layers)
            .try_init()
            .map_err(|err| miette::miette!("Can't set global tracing subscriber: {err}"))
    }

    /// Thread local subscriber. It stays active until the returned guard is dropped, which
    /// makes it a good fit for tests.
    ///
    /// # Errors
    ///
    /// The log file can't be created.
    pub fn install_thread_local(self) -> miette::Result<dispatcher::DefaultGuard> {
        let layers = try_create_layers(self)?;
        Ok(tracing_subscriber::registry().with(layers).set_default())
    }
}

impl From<tracing::Level> for TracingConfig {
    fn from(level: tracing::Level) -> Self {
        Self {
            level_filter: level.into(),
            writer_config: WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string()),
        }
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

impl From<DisplayPreference> for TracingConfig {
    fn from(preferred_display: DisplayPreference) -> Self {
        Self::new_display(preferred_display)
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

/// Merge two [`TracingConfig`] instances. The more verbose level filter wins.
impl Add<TracingConfig> for TracingConfig {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            level_filter: self.level_filter.max(rhs.level_filter),
            writer_config: self.writer_config + rhs.writer_config,
        }
    }
}

/// Merge two [`WriterConfig`] instances. A display and a file merge into
/// [`WriterConfig::DisplayAndFile`]. When both sides set the same thing, `rhs` wins.
/// [`WriterConfig::None`] on either side is ignored.
impl Add<WriterConfig> for WriterConfig {
    type Output = Self;

    fn add(self, rhs: WriterConfig) -> Self::Output {
        use WriterConfig::{Display, DisplayAndFile, File, None};

        match (self, rhs) {
            (None, it) | (it, None) => it,

            (Display(dp), File(f))
            | (File(f), Display(dp))
            | (_, DisplayAndFile(dp, f))
            | (DisplayAndFile(_, f), Display(dp))
            | (DisplayAndFile(dp, _), File(f)) => DisplayAndFile(dp, f),

            (Display(_), Display(dp)) => Display(dp),
            (File(_), File(f)) => File(f),
        }
    }
}

#[cfg(test)]
mod tests_tracing_config {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn file(name: &str) -> WriterConfig { WriterConfig::File(name.to_string()) }

    fn both(dp: DisplayPreference, name: &str) -> WriterConfig {
        WriterConfig::DisplayAndFile(dp, name.to_string())
    }

    const STDOUT: WriterConfig = WriterConfig::Display(DisplayPreference::Stdout);
    const STDERR: WriterConfig = WriterConfig::Display(DisplayPreference::Stderr);

    #[test_case(WriterConfig::None, STDOUT, STDOUT)]
    #[test_case(STDOUT, WriterConfig::None, STDOUT)]
    #[test_case(STDOUT, STDERR, STDERR)]
    #[test_case(STDOUT, file("a"), both(DisplayPreference::Stdout, "a"))]
    #[test_case(file("a"), STDERR, both(DisplayPreference::Stderr, "a"))]
    #[test_case(file("a"), file("b"), file("b"))]
    #[test_case(both(DisplayPreference::Stdout, "a"), STDERR, both(DisplayPreference::Stderr, "a"))]
    #[test_case(both(DisplayPreference::Stdout, "a"), file("b"), both(DisplayPreference::Stdout, "b"))]
    #[test_case(STDERR, both(DisplayPreference::Stdout, "a"), both(DisplayPreference::Stdout, "a"))]
    #[test_case(both(DisplayPreference::Stdout, "a"), both(DisplayPreference::Stderr, "b"), both(DisplayPreference::Stderr, "b"))]
    fn test_add_writer_configs(lhs: WriterConfig, rhs: WriterConfig, expected: WriterConfig) {
        assert_eq!(lhs + rhs, expected);
    }

    #[test]
    fn test_from_conversions() {
        let it: TracingConfig = tracing::Level::INFO.into();
        assert_eq!(it.get_level_filter(), LevelFilter::INFO);
        assert_eq!(it.get_writer_config(), file(DEFAULT_LOG_FILE_NAME));

        let it: TracingConfig = DisplayPreference::Stderr.into();
        assert_eq!(it.get_level_filter(), LevelFilter::DEBUG);
        assert_eq!(it.get_writer_config(), STDERR);
    }

    #[test]
    fn test_add_tracing_configs_picks_more_verbose_level() {
        let lhs: TracingConfig = LevelFilter::WARN.into();
        let rhs = TracingConfig {
            writer_config: STDOUT,
            level_filter: LevelFilter::TRACE,
        };

        let it = lhs + rhs;
        assert_eq!(it.level_filter, LevelFilter::TRACE);
        assert_eq!(
            it.writer_config,
            both(DisplayPreference::Stdout, DEFAULT_LOG_FILE_NAME)
        );
    }
}
