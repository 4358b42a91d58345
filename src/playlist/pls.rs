//! PLS reading and writing

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::track::{BuilderState, ReadOptions, Track, TrackBuilder};
use super::{lines, render};
use crate::utils::normalize_path;

const PLS_HEADER: &str = "[playlist]";

/// How the `File<N>`/`Title<N>`/`Length<N>` keys are numbered on output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PlsNumbering {
    /// Every entry carries the total entry count (legacy output)
    #[default]
    Total,
    /// Entries are numbered 1, 2, 3, ...
    Sequential,
}

/// Parse PLS text into tracks, in file order
///
/// Keys are matched by prefix only; their numeric suffixes are ignored.
pub fn read_pls(data: &str, options: ReadOptions) -> Vec<Track> {
    let mut tracks = Vec::new();
    let mut builder = TrackBuilder::new(options);

    for line in lines(data) {
        if line.starts_with(PLS_HEADER) {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            continue;
        };

        if key.starts_with("File") {
            builder.set_filename(normalize_path(value));
        } else if key.starts_with("Title") {
            builder.set_title(value);
        } else if key.starts_with("Length") {
            match value.parse::<i64>() {
                Ok(seconds) => builder.set_duration(seconds),
                Err(_) => {
                    debug!("Ignoring unparseable {}: {:?}", key, value);
                    builder.clear_duration();
                }
            }
        }

        if let Some(track) = builder.take_complete() {
            tracks.push(track);
        }
    }

    if builder.state() != BuilderState::Empty {
        debug!("Discarding incomplete PLS entry at end of input: {:?}", builder);
    }

    tracks
}

/// Generate PLS playlist content
pub fn write_pls(tracks: &[Track], numbering: PlsNumbering) -> String {
    let total = tracks.len();
    render(PLS_HEADER, tracks, |position, track| {
        let n = match numbering {
            PlsNumbering::Total => total,
            PlsNumbering::Sequential => position + 1,
        };
        format!(
            "File{n}={}\nTitle{n}={}\nLength{n}={}\n",
            track.filename, track.title, track.duration_seconds
        )
    })
}
