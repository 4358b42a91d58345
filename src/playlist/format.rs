//! Playlist format detection from file names

use std::ffi::OsStr;
use std::fmt;
use std::path::{Path, PathBuf};

use super::error::{ConvertError, Result};

/// Supported playlist formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaylistFormat {
    M3u,
    Pls,
}

impl PlaylistFormat {
    /// File suffix, including the dot
    pub fn suffix(self) -> &'static str {
        match self {
            Self::M3u => ".m3u",
            Self::Pls => ".pls",
        }
    }

    /// Suffix without the leading dot
    fn extension(self) -> &'static str {
        &self.suffix()[1..]
    }

    /// Detect the format of a playlist path by its suffix (case-sensitive)
    ///
    /// Matching works on the raw OS string, so non-UTF-8 names are accepted.
    pub fn from_path(path: &Path) -> Result<Self> {
        let name = path.as_os_str().as_encoded_bytes();
        [Self::M3u, Self::Pls]
            .into_iter()
            .find(|format| name.ends_with(format.suffix().as_bytes()))
            .ok_or_else(|| ConvertError::UnsupportedFormat {
                path: path.to_path_buf(),
            })
    }

    /// The format this one converts into
    pub fn target(self) -> Self {
        match self {
            Self::M3u => Self::Pls,
            Self::Pls => Self::M3u,
        }
    }

    /// Swap this format's suffix on `path` for the target format's
    pub fn output_path(self, path: &Path) -> PathBuf {
        let target = self.target();
        if path.extension() == Some(OsStr::new(self.extension())) {
            return path.with_extension(target.extension());
        }
        // a bare ".m3u" file name has no extension of its own
        if path.file_name() == Some(OsStr::new(self.suffix())) {
            return path.with_file_name(target.suffix());
        }
        let mut name = path.as_os_str().to_owned();
        name.push(target.suffix());
        PathBuf::from(name)
    }
}

impl fmt::Display for PlaylistFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::M3u => write!(f, "M3U"),
            Self::Pls => write!(f, "PLS"),
        }
    }
}
