//! Input file loading: one link per line, `#` lines are comments.
//!
//! A missing or unreadable file is not fatal. It is reported as a warning and
//! treated as an empty input, so the run still succeeds with zero results.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Why the input file could not be loaded.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("file {} not found", .path.display())]
    NotFound { path: PathBuf },
    #[error("could not read file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// True if the first non-whitespace character is `#`.
pub fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with('#')
}

/// Splits on `\n`, `\r\n` and a lone `\r`. A trailing terminator does not
/// produce an extra empty line.
pub fn split_lines(data: &str) -> Vec<&str> {
    let bytes = data.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&data[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&data[start..i]);
                i += if bytes.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                start = i;
            }
            _ => i += 1,
        }
    }
    if start < bytes.len() {
        lines.push(&data[start..]);
    }
    lines
}

/// Loads all non-comment lines of `path`, in file order.
pub fn try_read_lines(path: &Path) -> Result<Vec<String>, ReadError> {
    let data = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => ReadError::NotFound {
            path: path.to_path_buf(),
        },
        _ => ReadError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    Ok(split_lines(&data)
        .into_iter()
        .filter(|line| !is_comment(line))
        .map(str::to_string)
        .collect())
}

/// Like [`try_read_lines`], but a failure is logged and yields no lines.
pub fn read_lines(path: &Path) -> Vec<String> {
    match try_read_lines(path) {
        Ok(lines) => lines,
        Err(err) => {
            tracing::warn!("{}", err);
            Vec::new()
        }
    }
}
