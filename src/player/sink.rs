//! Audio sink abstraction.
//!
//! The engine owns exactly one sink and is the only component allowed to
//! touch its source, transport, or volume. Implementations wrap whatever
//! actually produces sound: the HTML media element in the web shell, a
//! native output in desktop builds, or a recording fake in tests.

use async_trait::async_trait;

use super::PlaybackError;

/// Events emitted by the underlying media resource.
///
/// Delivered over a channel and drained by `Player::pump_events` on the
/// host's event loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SinkEvent {
    /// Playback position advanced (seconds)
    Position(f64),
    /// Track duration became known (seconds)
    Duration(f64),
    /// Enough data is buffered to begin playback
    Ready,
    /// The loaded source played to completion
    Ended,
}

/// The single audio output resource driven by the playback engine.
#[async_trait]
pub trait MediaSink: Send {
    /// Source address currently loaded, if any.
    fn source(&self) -> Option<String>;

    /// Assign a new source and reset the resource. Called before any play
    /// attempt whenever the current track's address differs from the
    /// loaded one.
    fn load(&mut self, url: &str);

    /// Begin playback of the loaded source. Asynchronous and fallible:
    /// the resource may reject the request (autoplay policy, decode
    /// failure).
    async fn play(&mut self) -> Result<(), PlaybackError>;

    /// Pause playback. Synchronous and infallible.
    fn pause(&mut self);

    /// Seek to an absolute position in seconds.
    fn seek(&mut self, position: f64);

    /// Set the output volume (0.0 - 1.0).
    fn set_volume(&mut self, volume: f64);

    /// Mute or unmute the output without touching the volume level.
    fn set_muted(&mut self, muted: bool);
}

/// Mock sink for engine tests.
///
/// Records every call through a shared probe so tests can inspect the
/// sink after handing it to the engine, and lets tests inject a play
/// rejection.
#[cfg(test)]
pub mod mocks {
    use std::sync::Arc;

    use parking_lot::Mutex;

    use super::*;

    /// Shared view of everything the engine did to the sink.
    #[derive(Debug, Default)]
    pub struct SinkProbe {
        pub source: Option<String>,
        pub loads: Vec<String>,
        pub play_calls: usize,
        pub pause_calls: usize,
        pub seeks: Vec<f64>,
        pub volume: f64,
        pub muted: bool,
        /// When set, the next play request is rejected with this message
        pub fail_next_play: Option<String>,
    }

    pub struct MockSink {
        probe: Arc<Mutex<SinkProbe>>,
    }

    impl MockSink {
        pub fn new() -> (Self, Arc<Mutex<SinkProbe>>) {
            let probe = Arc::new(Mutex::new(SinkProbe::default()));
            (
                Self {
                    probe: Arc::clone(&probe),
                },
                probe,
            )
        }
    }

    #[async_trait]
    impl MediaSink for MockSink {
        fn source(&self) -> Option<String> {
            self.probe.lock().source.clone()
        }

        fn load(&mut self, url: &str) {
            let mut probe = self.probe.lock();
            probe.source = Some(url.to_string());
            probe.loads.push(url.to_string());
        }

        async fn play(&mut self) -> Result<(), PlaybackError> {
            let mut probe = self.probe.lock();
            probe.play_calls += 1;
            if let Some(message) = probe.fail_next_play.take() {
                return Err(PlaybackError::Rejected(message));
            }
            Ok(())
        }

        fn pause(&mut self) {
            self.probe.lock().pause_calls += 1;
        }

        fn seek(&mut self, position: f64) {
            self.probe.lock().seeks.push(position);
        }

        fn set_volume(&mut self, volume: f64) {
            self.probe.lock().volume = volume;
        }

        fn set_muted(&mut self, muted: bool) {
            self.probe.lock().muted = muted;
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[tokio::test]
        async fn test_mock_sink_records_calls() {
            let (mut sink, probe) = MockSink::new();
            sink.load("https://cdn.example.com/a.mp3");
            sink.play().await.unwrap();
            sink.pause();
            sink.seek(12.5);

            let probe = probe.lock();
            assert_eq!(probe.loads.len(), 1);
            assert_eq!(probe.play_calls, 1);
            assert_eq!(probe.pause_calls, 1);
            assert_eq!(probe.seeks, vec![12.5]);
        }

        #[tokio::test]
        async fn test_mock_sink_injected_failure() {
            let (mut sink, probe) = MockSink::new();
            probe.lock().fail_next_play = Some("autoplay blocked".to_string());

            let result = sink.play().await;
            assert!(matches!(result, Err(PlaybackError::Rejected(_))));

            // Failure is one-shot
            assert!(sink.play().await.is_ok());
        }
    }
}
