//! Playback engine.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     UI shell (out of scope)                     │
//! │        calls transport operations, reads state snapshots        │
//! └────────────────────────────┬────────────────────────────────────┘
//!                              │ operations / Arc<RwLock<PlayerState>>
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                       Player (this module)                      │
//! │   one authoritative state + queue, drives the single MediaSink  │
//! └────────────────────────────┬────────────────────────────────────┘
//!                              │ load/play/pause/seek   ▲ SinkEvent channel
//!                              ▼                        │
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                 Audio resource (media element)                  │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The engine is the only component allowed to touch the sink. State
//! changes flow one way: an operation (or a sink event) mutates the
//! engine's fields, the sink is brought in line, and a fresh snapshot is
//! published for UI consumers.

mod queue;
mod sink;
mod state;

pub use queue::PlayQueue;
pub use sink::{MediaSink, SinkEvent};
pub use state::{PlayerState, RepeatMode, format_duration};

use std::sync::Arc;

use crossbeam_channel::Receiver;
use parking_lot::RwLock;

use crate::model::Track;

/// Errors from the audio resource.
///
/// The engine recovers from these internally (playback downgrades to
/// paused); the type exists for sink implementations and logs.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PlaybackError {
    #[error("audio resource rejected the play request: {0}")]
    Rejected(String),

    #[error("no playable source loaded")]
    NoSource,
}

/// The playback engine.
///
/// Owns the play queue, the transport state, and the single audio sink.
/// Construct one per application; the UI keeps a read-only snapshot handle
/// and dispatches intents through the operation methods.
pub struct Player {
    queue: PlayQueue,
    repeat: RepeatMode,
    playing: bool,
    loading: bool,
    position: f64,
    duration: f64,
    volume: f64,
    muted: bool,
    sink: Box<dyn MediaSink>,
    events: Receiver<SinkEvent>,
    shared: Arc<RwLock<PlayerState>>,
}

impl Player {
    /// Create an engine around a sink and its event channel.
    pub fn new(sink: Box<dyn MediaSink>, events: Receiver<SinkEvent>) -> Self {
        let mut player = Self {
            queue: PlayQueue::new(),
            repeat: RepeatMode::Off,
            playing: false,
            loading: false,
            position: 0.0,
            duration: 0.0,
            volume: 1.0,
            muted: false,
            sink,
            events,
            shared: Arc::new(RwLock::new(PlayerState::default())),
        };
        player.sink.set_volume(player.volume);
        player.publish();
        player
    }

    /// Read-only snapshot handle for UI consumers.
    pub fn state_handle(&self) -> Arc<RwLock<PlayerState>> {
        Arc::clone(&self.shared)
    }

    /// Get the current state snapshot.
    pub fn state(&self) -> PlayerState {
        self.shared.read().clone()
    }

    /// Replace the queue and start playing `track`.
    ///
    /// `queue` defaults to a singleton holding just the track. A track
    /// missing from the supplied queue resolves to the queue's first entry.
    pub async fn play_track(
        &mut self,
        track: Track,
        queue: Option<Vec<Track>>,
        queue_name: Option<String>,
    ) {
        let tracks = queue.unwrap_or_else(|| vec![track.clone()]);
        let start = match tracks.iter().position(|t| t.id == track.id) {
            Some(pos) => pos,
            None => {
                tracing::warn!(
                    track_id = track.id,
                    "track not in the supplied queue, starting from the top"
                );
                0
            }
        };

        self.queue.load(tracks, start, queue_name);
        self.playing = true;
        self.loading = true;
        self.position = 0.0;
        self.duration = self.queue.current().and_then(|t| t.duration).unwrap_or(0.0);
        self.sync_source();
        self.start_sink().await;
        self.publish();
    }

    /// Pause playback. The position is untouched.
    pub fn pause(&mut self) {
        self.playing = false;
        self.sink.pause();
        self.publish();
    }

    /// Resume the current track. No-op when nothing is loaded.
    pub async fn resume(&mut self) {
        if self.queue.current().is_none() {
            return;
        }
        self.playing = true;
        self.start_sink().await;
        self.publish();
    }

    /// Stop playback and rewind to the start of the current track.
    pub fn stop(&mut self) {
        self.playing = false;
        self.position = 0.0;
        self.sink.pause();
        self.sink.seek(0.0);
        self.publish();
    }

    /// Skip to the next track in the queue.
    ///
    /// At the end of the queue this is a no-op unless repeat-all wraps.
    pub async fn next(&mut self) {
        if self.queue.advance(self.repeat) {
            self.on_index_changed().await;
        }
        self.publish();
    }

    /// Step back to the previous track in the queue.
    pub async fn previous(&mut self) {
        if self.queue.retreat(self.repeat) {
            self.on_index_changed().await;
        }
        self.publish();
    }

    /// Seek to `position` seconds, clamped into the known duration.
    pub fn seek(&mut self, position: f64) {
        if self.queue.current().is_none() {
            return;
        }
        let clamped = if self.duration > 0.0 {
            position.clamp(0.0, self.duration)
        } else {
            position.max(0.0)
        };
        self.position = clamped;
        self.sink.seek(clamped);
        self.publish();
    }

    /// Set the output volume. Zero volume implies muted.
    pub fn set_volume(&mut self, volume: f64) {
        self.volume = volume.clamp(0.0, 1.0);
        self.muted = self.volume == 0.0;
        self.sink.set_volume(self.volume);
        self.sink.set_muted(self.muted);
        self.publish();
    }

    /// Flip the mute flag without touching the volume level.
    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
        self.sink.set_muted(self.muted);
        self.publish();
    }

    /// Flip shuffle mode. The visible queue order is unchanged; only the
    /// iteration order is (re)materialized.
    pub fn toggle_shuffle(&mut self) {
        self.queue.set_shuffled(!self.queue.shuffled());
        self.publish();
    }

    /// Set the repeat behaviour.
    pub fn set_repeat(&mut self, repeat: RepeatMode) {
        self.repeat = repeat;
        self.publish();
    }

    /// Append a track to the live queue.
    pub fn enqueue(&mut self, track: Track) {
        self.queue.enqueue(track);
        self.publish();
    }

    /// Drain pending sink events and apply them to the state.
    ///
    /// Call from the host's event loop whenever the media resource signals;
    /// each event is applied synchronously and atomically.
    pub async fn pump_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            self.handle_event(event).await;
        }
        self.publish();
    }

    async fn handle_event(&mut self, event: SinkEvent) {
        match event {
            SinkEvent::Position(p) => {
                self.position = if self.duration > 0.0 {
                    p.clamp(0.0, self.duration)
                } else {
                    p.max(0.0)
                };
            }
            SinkEvent::Duration(d) => {
                self.duration = d.max(0.0);
                if self.duration > 0.0 && self.position > self.duration {
                    self.position = self.duration;
                }
            }
            SinkEvent::Ready => {
                self.loading = false;
            }
            SinkEvent::Ended => {
                if self.repeat == RepeatMode::One {
                    self.position = 0.0;
                    self.sink.seek(0.0);
                    self.start_sink().await;
                } else if self.queue.advance(self.repeat) {
                    self.on_index_changed().await;
                } else {
                    // End of the queue with repeat off: stay on the last frame
                    self.playing = false;
                }
            }
        }
    }

    /// Transition shared by manual skips and end-of-track auto-advance.
    async fn on_index_changed(&mut self) {
        self.position = 0.0;
        self.loading = true;
        self.duration = self.queue.current().and_then(|t| t.duration).unwrap_or(0.0);
        self.sync_source();
        if self.playing {
            self.start_sink().await;
        }
    }

    /// Bring the sink's loaded source in line with the current track.
    fn sync_source(&mut self) {
        let Some(url) = self.queue.current().map(|t| t.audio_url.clone()) else {
            return;
        };
        if self.sink.source().as_deref() != Some(url.as_str()) {
            self.sink.load(&url);
        }
    }

    /// Issue a play request. A rejection downgrades the state to paused
    /// instead of surfacing an error: there is no synchronous call site to
    /// report it to, and retrying would fight the platform's policy.
    async fn start_sink(&mut self) {
        if let Err(e) = self.sink.play().await {
            tracing::warn!("playback request rejected: {e}");
            self.playing = false;
            self.loading = false;
        }
    }

    fn publish(&self) {
        let mut shared = self.shared.write();
        *shared = PlayerState {
            current_track: self.queue.current().cloned(),
            queue: self.queue.tracks().to_vec(),
            queue_name: self.queue.name().map(str::to_string),
            current_index: self.queue.current_index(),
            playing: self.playing,
            loading: self.loading,
            position: self.position,
            duration: self.duration,
            volume: self.volume,
            muted: self.muted,
            shuffled: self.queue.shuffled(),
            repeat: self.repeat,
        };
    }
}
