//! Play queue management.
//!
//! The queue is transient: it is rebuilt whenever a play action supplies a
//! new set of tracks and is never synced back to the server. Persisted
//! playlists live in `store::PlaylistStore`; a queue is only a snapshot of
//! whatever the user chose to play.

use rand::seq::SliceRandom;

use super::state::RepeatMode;
use crate::model::Track;

/// The play queue with current position tracking.
#[derive(Debug, Clone, Default)]
pub struct PlayQueue {
    /// All tracks in play order
    tracks: Vec<Track>,
    /// Invariant: `Some` exactly when `tracks` is non-empty
    index: Option<usize>,
    /// Display name of the queue's source
    name: Option<String>,
    /// Shuffle mode enabled
    shuffled: bool,
    /// Shuffled indices (maps shuffle position → track index); empty unless shuffled
    shuffle_order: Vec<usize>,
}

impl PlayQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if queue is empty.
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Get queue length.
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Get all tracks in play order.
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Get the queue's display name.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Get current position (index into the track list).
    pub fn current_index(&self) -> Option<usize> {
        self.index
    }

    /// Get the current track.
    pub fn current(&self) -> Option<&Track> {
        self.index.and_then(|i| self.tracks.get(i))
    }

    /// Get shuffle mode.
    pub fn shuffled(&self) -> bool {
        self.shuffled
    }

    /// Replace the queue contents and jump to `start`.
    pub fn load(&mut self, tracks: Vec<Track>, start: usize, name: Option<String>) {
        self.tracks = tracks;
        self.name = name;
        self.index = if self.tracks.is_empty() {
            None
        } else {
            Some(start.min(self.tracks.len() - 1))
        };
        if self.shuffled {
            self.generate_shuffle_order();
        } else {
            self.shuffle_order.clear();
        }
    }

    /// Append a track to the end of the queue.
    pub fn enqueue(&mut self, track: Track) {
        let new_index = self.tracks.len();
        self.tracks.push(track);
        if self.index.is_none() {
            self.index = Some(0);
        }
        if self.shuffled {
            // Insert at a random position after the current shuffle slot
            let after = self.shuffle_pos().map(|p| p + 1).unwrap_or(0);
            let pos = if after >= self.shuffle_order.len() {
                self.shuffle_order.len()
            } else {
                let mut rng = rand::rng();
                rand::Rng::random_range(&mut rng, after..=self.shuffle_order.len())
            };
            self.shuffle_order.insert(pos, new_index);
        }
    }

    /// Advance to the next track. Returns true when the index actually
    /// changed; at the end of the queue this is a no-op unless repeat wraps.
    pub fn advance(&mut self, repeat: RepeatMode) -> bool {
        let Some(cur) = self.index else { return false };
        if self.shuffled && !self.shuffle_order.is_empty() {
            return self.advance_shuffled(cur, repeat);
        }

        let next = if cur + 1 < self.tracks.len() {
            cur + 1
        } else if repeat == RepeatMode::All {
            0
        } else {
            return false; // stay on the last track
        };
        self.index = Some(next);
        next != cur
    }

    /// Step back to the previous track. Returns true when the index actually
    /// changed; at the start of the queue this is a no-op unless repeat wraps.
    pub fn retreat(&mut self, repeat: RepeatMode) -> bool {
        let Some(cur) = self.index else { return false };
        if self.shuffled && !self.shuffle_order.is_empty() {
            return self.retreat_shuffled(cur, repeat);
        }

        let prev = if cur > 0 {
            cur - 1
        } else if repeat == RepeatMode::All {
            self.tracks.len() - 1
        } else {
            return false; // stay on the first track
        };
        self.index = Some(prev);
        prev != cur
    }

    fn advance_shuffled(&mut self, cur: usize, repeat: RepeatMode) -> bool {
        let pos = self.shuffle_pos().unwrap_or(0);
        if pos + 1 < self.shuffle_order.len() {
            self.index = Some(self.shuffle_order[pos + 1]);
        } else if repeat == RepeatMode::All {
            // Reshuffle for the next loop through the queue
            self.generate_shuffle_order_from(None);
            if self.shuffle_order.len() > 1 && self.shuffle_order[0] == cur {
                // Avoid replaying the track we just finished
                let last = self.shuffle_order.len() - 1;
                self.shuffle_order.swap(0, last);
            }
            self.index = Some(self.shuffle_order[0]);
        } else {
            return false;
        }
        self.index != Some(cur)
    }

    fn retreat_shuffled(&mut self, cur: usize, repeat: RepeatMode) -> bool {
        let pos = self.shuffle_pos().unwrap_or(0);
        if pos > 0 {
            self.index = Some(self.shuffle_order[pos - 1]);
        } else if repeat == RepeatMode::All {
            self.index = Some(self.shuffle_order[self.shuffle_order.len() - 1]);
        } else {
            return false;
        }
        self.index != Some(cur)
    }

    /// Set shuffle mode. Enabling keeps the current track first in the new
    /// order; the visible queue order is unchanged either way.
    pub fn set_shuffled(&mut self, enabled: bool) {
        self.shuffled = enabled;
        if enabled {
            self.generate_shuffle_order();
        } else {
            self.shuffle_order.clear();
        }
    }

    /// Position of the current track within the shuffle order.
    fn shuffle_pos(&self) -> Option<usize> {
        let cur = self.index?;
        self.shuffle_order.iter().position(|&i| i == cur)
    }

    /// Generate a new shuffle order, keeping the current track first.
    fn generate_shuffle_order(&mut self) {
        self.generate_shuffle_order_from(self.index);
    }

    fn generate_shuffle_order_from(&mut self, pinned: Option<usize>) {
        let len = self.tracks.len();
        self.shuffle_order = (0..len).collect();
        if len == 0 {
            return;
        }

        let mut rng = rand::rng();
        self.shuffle_order.shuffle(&mut rng);

        if let Some(cur) = pinned {
            if let Some(pos) = self.shuffle_order.iter().position(|&i| i == cur) {
                self.shuffle_order.remove(pos);
                self.shuffle_order.insert(0, cur);
            }
        }
    }
}
