//! Player state snapshot and repeat mode.

use serde::Serialize;

use crate::model::Track;

/// Repeat behaviour for the play queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatMode {
    /// No repeat: playback stops at the queue boundary
    #[default]
    #[serde(rename = "none")]
    Off,
    /// Repeat the current track on end-of-track
    One,
    /// Wrap around at the queue boundary
    All,
}

/// Read-only snapshot of the playback engine, published for UI consumers.
///
/// Invariants: `playing` implies `current_track` is present;
/// `current_index` is a valid index into `queue` or the queue is empty;
/// `0 <= position <= duration` once the duration is known.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerState {
    /// Track currently loaded into the audio resource (if any)
    pub current_track: Option<Track>,
    /// The transient play queue
    pub queue: Vec<Track>,
    /// Display name of the queue (e.g. the source playlist's name)
    pub queue_name: Option<String>,
    /// Position of the current track within the queue
    pub current_index: Option<usize>,
    /// Whether a play request is in effect
    pub playing: bool,
    /// Whether the audio resource is still buffering the current source
    pub loading: bool,
    /// Playback position in seconds
    pub position: f64,
    /// Track duration in seconds (0.0 until known)
    pub duration: f64,
    /// Volume level (0.0 - 1.0)
    pub volume: f64,
    /// Whether output is muted
    pub muted: bool,
    /// Whether the queue iterates in a shuffled order
    pub shuffled: bool,
    /// Repeat behaviour
    pub repeat: RepeatMode,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            current_track: None,
            queue: Vec::new(),
            queue_name: None,
            current_index: None,
            playing: false,
            loading: false,
            position: 0.0,
            duration: 0.0,
            volume: 1.0,
            muted: false,
            shuffled: false,
            repeat: RepeatMode::Off,
        }
    }
}

impl PlayerState {
    /// Get position as a fraction (0.0 - 1.0).
    pub fn position_fraction(&self) -> f64 {
        if self.duration <= 0.0 {
            0.0
        } else {
            (self.position / self.duration).clamp(0.0, 1.0)
        }
    }

    /// Format position as MM:SS.
    pub fn position_str(&self) -> String {
        format_duration(self.position)
    }

    /// Format duration as MM:SS.
    pub fn duration_str(&self) -> String {
        format_duration(self.duration)
    }
}

/// Format a duration in seconds as MM:SS or HH:MM:SS.
pub fn format_duration(seconds: f64) -> String {
    let secs = seconds.max(0.0) as u64;
    let hours = secs / 3600;
    let mins = (secs % 3600) / 60;
    let secs = secs % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, mins, secs)
    } else {
        format!("{}:{:02}", mins, secs)
    }
}
