//! Playlist entries and the per-entry accumulator used by the readers

/// Duration recorded when an `#EXTINF` length could not be parsed
pub const INVALID_DURATION: i64 = -1;

/// One playlist entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub title: String,
    /// Filename with separators already normalized to the host convention
    pub filename: String,
    pub duration_seconds: i64,
}

/// Options shared by both readers
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadOptions {
    /// Accept 0 as an assigned duration instead of treating it as unset
    pub keep_zero_length: bool,
}

/// Where a [`TrackBuilder`] stands in the current entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuilderState {
    Empty,
    Partial,
    Complete,
}

/// Field accumulator for the entry currently being read
///
/// Fields are assigned one line at a time. Once all three hold a value the
/// builder is `Complete` and [`TrackBuilder::take_complete`] hands out the
/// track and resets for the next entry.
#[derive(Debug, Default)]
pub struct TrackBuilder {
    title: Option<String>,
    filename: Option<String>,
    duration: Option<i64>,
    options: ReadOptions,
}

impl TrackBuilder {
    pub fn new(options: ReadOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Assign the title; an empty title clears the field
    pub fn set_title(&mut self, title: &str) {
        self.title = non_empty(title);
    }

    /// Assign the filename; an empty filename clears the field
    pub fn set_filename(&mut self, filename: String) {
        self.filename = if filename.is_empty() { None } else { Some(filename) };
    }

    /// Assign the duration
    ///
    /// Zero is indistinguishable from "not set" unless `keep_zero_length`
    /// is enabled, so a 0-second entry never completes by default.
    pub fn set_duration(&mut self, seconds: i64) {
        self.duration = if seconds == 0 && !self.options.keep_zero_length {
            None
        } else {
            Some(seconds)
        };
    }

    pub fn clear_duration(&mut self) {
        self.duration = None;
    }

    pub fn state(&self) -> BuilderState {
        let assigned = [
            self.title.is_some(),
            self.filename.is_some(),
            self.duration.is_some(),
        ];
        match assigned.iter().filter(|a| **a).count() {
            0 => BuilderState::Empty,
            3 => BuilderState::Complete,
            _ => BuilderState::Partial,
        }
    }

    /// Yield the finished track and reset, or `None` while fields are missing
    pub fn take_complete(&mut self) -> Option<Track> {
        if self.state() != BuilderState::Complete {
            return None;
        }
        let options = self.options;
        let builder = std::mem::replace(self, Self::new(options));
        Some(Track {
            title: builder.title?,
            filename: builder.filename?,
            duration_seconds: builder.duration?,
        })
    }
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}
