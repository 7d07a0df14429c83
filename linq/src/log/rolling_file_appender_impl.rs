// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

/// Create a file appender that never rotates. Note that if you wrap this up in a non
/// blocking writer, it doesn't work, eg:
/// `tracing_appender::non_blocking(try_create("foo")?)`
///
/// # Errors
///
/// Returns an error if:
/// - The path has no parent directory
/// - The path has no file name
pub fn try_create(
    path_str: &str,
) -> miette::Result<tracing_appender::rolling::RollingFileAppender> {
    let path = PathBuf::from(path_str);

    let parent = path.parent().ok_or_else(|| {
        miette::miette!(
            "Can't access parent folder of {}. It might not exist, or don't have required permissions.",
            path.display()
        )
    })?;

    let file_name = path.file_name().ok_or_else(|| {
        miette::miette!(
            "Can't access file name {}. It might not exist, or don't have required permissions.",
            path.display()
        )
    })?;

    Ok(tracing_appender::rolling::never(parent, file_name))
}

#[cfg(test)]
mod tests_rolling_file_appender_impl {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_try_create() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("appender.log");

        let _appender = try_create(file_path.to_str().unwrap()).unwrap();
        assert!(file_path.exists());
    }

    #[test]
    fn test_try_create_without_file_name_fails() {
        assert!(try_create("/").is_err());
        assert!(try_create("foo/..").is_err());
    }
}
