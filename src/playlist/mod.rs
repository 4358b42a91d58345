//! Playlist formats and conversion between them

mod converter;
mod error;
mod format;
mod m3u;
mod pls;
mod track;

pub use converter::{Conversion, Converter};
pub use pls::PlsNumbering;
pub use track::ReadOptions;

use track::Track;

/// Non-blank, trimmed lines of a playlist, split on any of `\n`, `\r\n` or `\r`
fn lines(data: &str) -> impl Iterator<Item = &str> {
    data.split(['\n', '\r'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
}

/// Header, one formatted block per track, then the entry-count trailer
///
/// `entry` receives each track's 0-based position.
fn render<F>(header: &str, tracks: &[Track], entry: F) -> String
where
    F: Fn(usize, &Track) -> String,
{
    let mut content = String::from(header);
    content.push('\n');
    for (position, track) in tracks.iter().enumerate() {
        content.push_str(&entry(position, track));
    }
    content.push_str(&format!("NumberOfEntries={}\nVersion=2\n", tracks.len()));
    content
}
