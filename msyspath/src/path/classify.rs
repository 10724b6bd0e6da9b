//! Pure classification of path strings.
//!
//! Both `/` and `\` are separators everywhere in this module. Three root
//! shapes are recognized, checked in this order:
//!
//! 1. long-path-UNC: `\\?\c:\`
//! 2. drive-absolute: `c:/` or `c:\`
//! 3. POSIX-style: a leading `/` or `\`
//!
//! Nothing here touches the filesystem, and mixed separators are never
//! rewritten: the last separator of either kind decides where a path splits.

/// Prefix that disables Win32 path normalization and length limits.
pub const LONG_PATH_PREFIX: &str = "\\\\?\\";

/// Returns `true` for `/` and `\`.
#[must_use]
pub const fn is_separator(c: u8) -> bool {
    c == b'/' || c == b'\\'
}

/// Returns `true` if `path` starts with a drive letter, a colon, and a separator.
///
/// # Examples
///
/// ```
/// use msyspath::path::classify::is_drive_absolute;
///
/// assert!(is_drive_absolute("c:/"));
/// assert!(is_drive_absolute("D:\\foo"));
/// assert!(!is_drive_absolute("c:"));
/// assert!(!is_drive_absolute("c:foo"));
/// ```
#[must_use]
pub fn is_drive_absolute(path: &str) -> bool {
    let bytes = path.as_bytes();
    bytes.len() >= 3 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' && is_separator(bytes[2])
}

/// Returns `true` if `path` is `\\?\` followed by a drive-absolute path.
///
/// # Examples
///
/// ```
/// use msyspath::path::classify::is_long_path_unc;
///
/// assert!(is_long_path_unc("\\\\?\\c:\\"));
/// assert!(!is_long_path_unc("\\\\?\\"));
/// assert!(!is_long_path_unc("c:\\"));
/// ```
#[must_use]
pub fn is_long_path_unc(path: &str) -> bool {
    path.strip_prefix(LONG_PATH_PREFIX)
        .is_some_and(is_drive_absolute)
}

/// Length in bytes of the root prefix of `path`, or `None` if it is not absolute.
///
/// # Examples
///
/// ```
/// use msyspath::path::classify::root_len;
///
/// assert_eq!(root_len("\\\\?\\c:\\foo"), Some(7));
/// assert_eq!(root_len("c:/foo"), Some(3));
/// assert_eq!(root_len("/foo"), Some(1));
/// assert_eq!(root_len("foo"), None);
/// ```
#[must_use]
pub fn root_len(path: &str) -> Option<usize> {
    if is_long_path_unc(path) {
        Some(LONG_PATH_PREFIX.len() + 3)
    } else if is_drive_absolute(path) {
        Some(3)
    } else if path.bytes().next().is_some_and(is_separator) {
        Some(1)
    } else {
        None
    }
}

fn last_separator(path: &str) -> Option<usize> {
    path.bytes().rposition(is_separator)
}

/// Returns everything before the last separator.
///
/// Root paths come back unchanged, and a separator that belongs to the root
/// is kept as part of the result.
///
/// # Examples
///
/// ```
/// use msyspath::path::classify::dirname;
///
/// assert_eq!(dirname(""), "");
/// assert_eq!(dirname("/foo/"), "/foo");
/// assert_eq!(dirname("/foo"), "/");
/// assert_eq!(dirname("c:/"), "c:/");
/// assert_eq!(dirname("c:\\foo"), "c:\\");
/// assert_eq!(dirname("\\\\?\\c:\\foo"), "\\\\?\\c:\\");
/// assert_eq!(dirname("foo\\bar/baz\\qux"), "foo\\bar/baz");
/// assert_eq!(dirname("foo"), "");
/// ```
#[must_use]
pub fn dirname(path: &str) -> &str {
    let root = root_len(path);
    if root == Some(path.len()) {
        return path;
    }

    match (last_separator(path), root) {
        (None, _) => "",
        (Some(pos), Some(root)) if pos < root => &path[..root],
        (Some(pos), _) => &path[..pos],
    }
}

/// Returns everything after the last separator.
///
/// Roots and paths ending in a separator yield an empty string.
///
/// # Examples
///
/// ```
/// use msyspath::path::classify::basename;
///
/// assert_eq!(basename("/"), "");
/// assert_eq!(basename("/foo/"), "");
/// assert_eq!(basename("c:/foo"), "foo");
/// assert_eq!(basename("\\\\?\\c:\\"), "");
/// assert_eq!(basename("\\\\?\\c:\\foo"), "foo");
/// assert_eq!(basename("foo"), "foo");
/// ```
#[must_use]
pub fn basename(path: &str) -> &str {
    if is_root_directory(path) {
        return "";
    }

    match last_separator(path) {
        Some(pos) => &path[pos + 1..],
        None => path,
    }
}

/// Returns `true` for POSIX-style, drive-absolute, and long-path-UNC paths.
///
/// A bare drive (`c:`) is drive-relative and therefore not absolute.
///
/// # Examples
///
/// ```
/// use msyspath::path::classify::is_absolute;
///
/// assert!(is_absolute("/"));
/// assert!(is_absolute("\\foo"));
/// assert!(is_absolute("c:/"));
/// assert!(is_absolute("\\\\?\\c:\\foo"));
/// assert!(!is_absolute("c:"));
/// assert!(!is_absolute(""));
/// assert!(!is_absolute("foo/bar"));
/// ```
#[must_use]
pub fn is_absolute(path: &str) -> bool {
    root_len(path).is_some()
}

/// Returns `true` only if the whole path is a root with nothing after it.
///
/// # Examples
///
/// ```
/// use msyspath::path::classify::is_root_directory;
///
/// assert!(is_root_directory("/"));
/// assert!(is_root_directory("c:\\"));
/// assert!(is_root_directory("\\\\?\\c:\\"));
/// assert!(!is_root_directory("c:"));
/// assert!(!is_root_directory("/foo"));
/// ```
#[must_use]
pub fn is_root_directory(path: &str) -> bool {
    root_len(path) == Some(path.len())
}
