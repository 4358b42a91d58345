//! Parse → serialize pipeline between the two formats

use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::error::Result;
use super::format::PlaylistFormat;
use super::m3u::{read_m3u, write_m3u};
use super::pls::{PlsNumbering, read_pls, write_pls};
use super::track::{ReadOptions, Track};

/// Result of converting one playlist
#[derive(Debug, Clone)]
pub struct Conversion {
    pub source: PlaylistFormat,
    pub target: PlaylistFormat,
    pub output_path: PathBuf,
    pub content: String,
    pub track_count: usize,
}

/// Converts playlists into the opposite format
#[derive(Debug, Clone, Copy, Default)]
pub struct Converter {
    numbering: PlsNumbering,
    read_options: ReadOptions,
}

impl Converter {
    pub fn new(numbering: PlsNumbering, read_options: ReadOptions) -> Self {
        Self {
            numbering,
            read_options,
        }
    }

    /// Convert the playlist read from `path`
    ///
    /// The format is taken from the suffix of `path`. Invalid UTF-8 in `data`
    /// is replaced rather than rejected.
    pub fn convert(&self, path: &Path, data: &[u8]) -> Result<Conversion> {
        let source = PlaylistFormat::from_path(path)?;
        let target = source.target();
        let text = String::from_utf8_lossy(data);

        let tracks = self.read(source, &text);
        info!("Read {} track(s) from {} playlist", tracks.len(), source);

        let content = self.write(target, &tracks);
        let output_path = source.output_path(path);
        debug!("Converted {} -> {}", path.display(), output_path.display());

        Ok(Conversion {
            source,
            target,
            output_path,
            content,
            track_count: tracks.len(),
        })
    }

    pub fn read(&self, format: PlaylistFormat, text: &str) -> Vec<Track> {
        match format {
            PlaylistFormat::M3u => read_m3u(text, self.read_options),
            PlaylistFormat::Pls => read_pls(text, self.read_options),
        }
    }

    pub fn write(&self, format: PlaylistFormat, tracks: &[Track]) -> String {
        match format {
            PlaylistFormat::M3u => write_m3u(tracks),
            PlaylistFormat::Pls => write_pls(tracks, self.numbering),
        }
    }
}
