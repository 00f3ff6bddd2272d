// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::Path;

/// Open `path_str` as a log file that is never rotated.
///
/// # Errors
///
/// Returns an error if the path has no parent directory or no file name.
pub fn try_create(
    path_str: &str,
) -> miette::Result<tracing_appender::rolling::RollingFileAppender> {
    let path = Path::new(path_str);

    let file_name = path.file_name().ok_or_else(|| {
        miette::miette!("Log file path {} has no file name", path.display())
    })?;

    // A bare file name has an empty parent, which means the current directory.
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        Some(_) => Path::new("."),
        None => miette::bail!("Log file path {} has no parent folder", path.display()),
    };

    Ok(tracing_appender::rolling::never(parent, file_name))
}
