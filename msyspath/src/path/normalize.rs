//! Segment normalization for native paths.
//!
//! This module resolves `.` and `..` segments and collapses repeated
//! separators below a path's root. It is needed before a path gets the
//! `\\?\` prefix, which turns off the normalization Windows would otherwise
//! do on its own.

use crate::error::{Error, Result};
use crate::path::classify::root_len;

/// Resolve `.` and `..` segments in an absolute native path.
///
/// The root keeps its shape with separators rewritten to `\`; the remaining
/// segments are joined with `\` and a trailing separator is dropped.
///
/// # Errors
///
/// Returns an error if:
/// - The path is not absolute
/// - The path contains too many `..` segments (escapes the root)
///
/// # Examples
///
/// ```
/// use msyspath::path::normalize::resolve_segments;
///
/// assert_eq!(resolve_segments("c:/a/./b/../c").unwrap(), "c:\\a\\c");
/// assert_eq!(resolve_segments("c:\\a\\\\b\\").unwrap(), "c:\\a\\b");
/// assert_eq!(resolve_segments("\\\\?\\c:\\a\\..").unwrap(), "\\\\?\\c:\\");
/// assert!(resolve_segments("c:\\..").is_err());
/// ```
pub fn resolve_segments(path: &str) -> Result<String> {
    let root = root_len(path).ok_or_else(|| Error::InvalidPath {
        path: path.to_string(),
        reason: "Path is not absolute".to_string(),
    })?;

    let mut segments: Vec<&str> = Vec::new();
    for segment in path[root..].split(['/', '\\']) {
        match segment {
            "" | "." => {}
            ".." => {
                if segments.pop().is_none() {
                    return Err(Error::InvalidPath {
                        path: path.to_string(),
                        reason: "Path contains too many '..' segments (escapes root)".to_string(),
                    });
                }
            }
            other => segments.push(other),
        }
    }

    let mut result = path[..root].replace('/', "\\");
    result.push_str(&segments.join("\\"));
    Ok(result)
}
