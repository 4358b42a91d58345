//! Path separator normalization

use std::path::MAIN_SEPARATOR;

/// Rewrite every `/` and `\` in a playlist filename to the host separator
///
/// All other characters pass through unchanged, so the result is stable
/// under repeated application.
///
/// # Examples
///
/// ```ignore
/// // on unix hosts
/// assert_eq!(normalize_path(r"Music\Album\01.mp3"), "Music/Album/01.mp3");
/// ```
pub fn normalize_path(path: &str) -> String {
    path.chars()
        .map(|c| match c {
            '/' | '\\' => MAIN_SEPARATOR,
            _ => c,
        })
        .collect()
}
