//! Conversion errors

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("Unsupported file format: {} (expected .m3u or .pls)", .path.display())]
    UnsupportedFormat { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, ConvertError>;
