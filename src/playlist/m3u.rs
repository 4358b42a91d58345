//! Extended M3U reading and writing

use tracing::{debug, warn};

use super::track::{BuilderState, INVALID_DURATION, ReadOptions, Track, TrackBuilder};
use super::{lines, render};
use crate::utils::normalize_path;

const M3U_HEADER: &str = "#EXTM3U";
const EXTINF_PREFIX: &str = "#EXTINF:";

/// Parse extended M3U text into tracks, in file order
///
/// Entries that are still missing a field at end of input are dropped.
pub fn read_m3u(data: &str, options: ReadOptions) -> Vec<Track> {
    let mut tracks = Vec::new();
    let mut builder = TrackBuilder::new(options);

    for line in lines(data) {
        if line.starts_with(M3U_HEADER) {
            continue;
        }

        if let Some(info) = line.strip_prefix(EXTINF_PREFIX) {
            match parse_extinf(info) {
                Some((title, seconds)) => {
                    builder.set_title(title);
                    builder.set_duration(seconds);
                }
                None => {
                    debug!("EXTINF line without title: {}", line);
                    builder.set_title("");
                    builder.set_duration(INVALID_DURATION);
                }
            }
        } else {
            builder.set_filename(normalize_path(line));
        }

        if let Some(track) = builder.take_complete() {
            tracks.push(track);
        }
    }

    if builder.state() != BuilderState::Empty {
        debug!("Discarding incomplete M3U entry at end of input: {:?}", builder);
    }

    tracks
}

/// Split the body of an `#EXTINF:` line into title and duration
///
/// Returns `None` when there is no comma. An unparseable duration is logged
/// and replaced by [`INVALID_DURATION`].
fn parse_extinf(info: &str) -> Option<(&str, i64)> {
    let (duration, title) = info.split_once(',')?;
    let seconds = match duration.parse::<i64>() {
        Ok(seconds) => seconds,
        Err(e) => {
            warn!("Invalid duration in EXTINF {:?}: {}", duration, e);
            INVALID_DURATION
        }
    };
    Some((title, seconds))
}

/// Generate extended M3U playlist content
pub fn write_m3u(tracks: &[Track]) -> String {
    render(M3U_HEADER, tracks, |_, track| {
        format!(
            "{}{},{}\n{}\n",
            EXTINF_PREFIX, track.duration_seconds, track.title, track.filename
        )
    })
}
