//! Utility functions

mod path;

pub use path::normalize_path;
