//! Player - core state machine and engine reconciliation
//!
//! The single authoritative record of playback intent. Every mutation entry
//! point reconciles the engine with the new intent; engine lifecycle events
//! feed back in through [`Player::pump`] / [`Player::handle_engine_event`].
//! A load issued while a previous load is still pending supersedes it - late
//! events from the superseded load are discarded via the generation marker.

use crate::{
    engine::{EngineEvent, EngineEventKind, Generation, PlaybackEngine},
    error::{PlaybackError, Result},
    events::PlaybackEvent,
    traversal,
    types::{clamp_playback_rate, clamp_volume, NowPlaying, PlaybackState, PlayerSnapshot},
};
use muse_core::types::{PlayerPrefs, RepeatMode, Track, TrackId};
use rand::thread_rng;
use std::time::Duration;
use tracing::{debug, warn};

/// Central player state
///
/// Owns the queue, the current-track snapshot, transport flags, and the
/// playback engine. There is exactly one logical owner; all mutation goes
/// through this type's methods.
pub struct Player {
    engine: Box<dyn PlaybackEngine>,

    state: PlaybackState,
    current_track: Option<Track>,

    queue: Vec<Track>,
    current_index: usize,

    position: Duration,
    duration: Option<Duration>,

    volume: f32,
    playback_rate: f32,
    repeat: RepeatMode,
    shuffle: bool,

    /// Generation of the load whose events we still care about
    generation: Generation,

    /// Play intent recorded while a load is in flight
    autoplay: bool,

    last_error: Option<String>,

    // Event queue for UI/session synchronization
    pending_events: Vec<PlaybackEvent>,
}

impl Player {
    /// Create a new player over the given engine, restoring persisted
    /// preferences
    pub fn new(mut engine: Box<dyn PlaybackEngine>, prefs: PlayerPrefs) -> Self {
        let volume = clamp_volume(prefs.volume);
        let playback_rate = clamp_playback_rate(prefs.playback_rate);
        engine.set_volume(volume);
        engine.set_rate(playback_rate);

        Self {
            engine,
            state: PlaybackState::Stopped,
            current_track: None,
            queue: Vec::new(),
            current_index: 0,
            position: Duration::ZERO,
            duration: None,
            volume,
            playback_rate,
            repeat: prefs.repeat_mode,
            shuffle: prefs.shuffle_mode,
            generation: 0,
            autoplay: false,
            last_error: None,
            pending_events: Vec::new(),
        }
    }

    // ===== Playback Control =====

    /// Start or resume playback
    pub fn play(&mut self) -> Result<()> {
        match self.state {
            PlaybackState::Playing => Ok(()),
            PlaybackState::Paused | PlaybackState::Ready => self.start_engine(),
            PlaybackState::Loading => {
                self.autoplay = true;
                Ok(())
            }
            PlaybackState::Stopped | PlaybackState::Ended => {
                if self.current_track.is_some() {
                    // Stopped playback restarts from the top of the track
                    self.engine.seek(Duration::ZERO);
                    self.position = Duration::ZERO;
                    self.start_engine()
                } else if self.queue.is_empty() {
                    Err(PlaybackError::QueueEmpty)
                } else {
                    let index = self.current_index.min(self.queue.len() - 1);
                    self.play_index(index)
                }
            }
            PlaybackState::Failed => {
                // No automatic retry happens; an explicit play is a fresh
                // load request for the current queue slot.
                if self.queue.is_empty() {
                    Err(PlaybackError::NoTrackLoaded)
                } else {
                    let index = self.current_index.min(self.queue.len() - 1);
                    self.play_index(index)
                }
            }
        }
    }

    /// Pause playback
    ///
    /// Flips the transport flags only; position and queue are untouched.
    pub fn pause(&mut self) {
        match self.state {
            PlaybackState::Playing => {
                if let Err(err) = self.engine.set_playing(false) {
                    warn!("engine pause failed: {err}");
                }
                self.set_state(PlaybackState::Paused);
            }
            PlaybackState::Loading => {
                self.autoplay = false;
            }
            _ => {}
        }
    }

    /// Toggle between playing and paused
    pub fn toggle_play(&mut self) -> Result<()> {
        if self.state.is_playing() {
            self.pause();
            Ok(())
        } else {
            self.play()
        }
    }

    /// Stop playback
    ///
    /// Resets the position to zero and clears both transport flags but
    /// preserves the current track identity and the queue.
    pub fn stop(&mut self) {
        if let Err(err) = self.engine.set_playing(false) {
            warn!("engine pause failed on stop: {err}");
        }
        self.engine.seek(Duration::ZERO);
        self.position = Duration::ZERO;
        self.autoplay = false;
        self.set_state(PlaybackState::Stopped);
    }

    /// Skip to the next track per the traversal policy
    ///
    /// "No further track" stops playback; it never wraps on its own.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<()> {
        let target = traversal::next_index(
            self.queue.len(),
            self.current_index,
            self.shuffle,
            self.repeat,
            &mut thread_rng(),
        );
        match target {
            Some(index) => self.play_index(index),
            None => {
                self.stop();
                Ok(())
            }
        }
    }

    /// Go to the previous track per the traversal policy
    pub fn previous(&mut self) -> Result<()> {
        let target = traversal::previous_index(
            self.queue.len(),
            self.current_index,
            self.shuffle,
            self.repeat,
            &mut thread_rng(),
        );
        match target {
            Some(index) => self.play_index(index),
            None => {
                self.stop();
                Ok(())
            }
        }
    }

    // ===== Queue Management =====

    /// Replace the queue without starting playback
    pub fn set_queue(&mut self, tracks: Vec<Track>) {
        self.queue = tracks;
        self.current_index = 0;
        self.emit(PlaybackEvent::QueueChanged {
            length: self.queue.len(),
        });
    }

    /// Replace the queue and start playing at the given index
    pub fn play_queue(&mut self, tracks: Vec<Track>, start_index: usize) -> Result<()> {
        self.set_queue(tracks);
        self.play_index(start_index)
    }

    /// Load and play the track at the given queue index
    pub fn play_index(&mut self, index: usize) -> Result<()> {
        if index >= self.queue.len() {
            return Err(PlaybackError::IndexOutOfBounds(index));
        }
        self.current_index = index;
        self.load_current(true);
        Ok(())
    }

    /// Remove every queue occurrence of the given track
    ///
    /// If the track is currently loaded it is unloaded and playback stops.
    /// The queue position is adjusted so the remaining order is preserved.
    pub fn remove_track(&mut self, id: &TrackId) {
        let removed_before_current = self
            .queue
            .iter()
            .take(self.current_index)
            .filter(|t| &t.id == id)
            .count();

        if self.current_track.as_ref().is_some_and(|t| &t.id == id) {
            if let Err(err) = self.engine.set_playing(false) {
                warn!("engine pause failed on track removal: {err}");
            }
            self.current_track = None;
            self.position = Duration::ZERO;
            self.duration = None;
            self.autoplay = false;
            self.set_state(PlaybackState::Stopped);
        }

        let before = self.queue.len();
        self.queue.retain(|t| &t.id != id);
        if self.queue.len() != before {
            self.current_index = self.current_index.saturating_sub(removed_before_current);
            if self.current_index >= self.queue.len() {
                self.current_index = 0;
            }
            self.emit(PlaybackEvent::QueueChanged {
                length: self.queue.len(),
            });
        }
    }

    /// Clear the queue (the current track keeps playing)
    pub fn clear_queue(&mut self) {
        self.queue.clear();
        self.current_index = 0;
        self.emit(PlaybackEvent::QueueChanged { length: 0 });
    }

    // ===== Seek =====

    /// Seek to a position in the current track
    ///
    /// The position is updated optimistically before the engine confirms.
    pub fn seek(&mut self, position: Duration) {
        let clamped = match self.duration {
            Some(duration) => position.min(duration),
            None => position,
        };
        self.position = clamped;
        self.engine.seek(clamped);
    }

    /// Seek forward by the given offset, clamped to the track end
    pub fn seek_forward(&mut self, offset: Duration) {
        let target = self.position.saturating_add(offset);
        self.seek(target);
    }

    /// Seek backward by the given offset, clamped to zero
    pub fn seek_backward(&mut self, offset: Duration) {
        self.seek(self.position.saturating_sub(offset));
    }

    // ===== Volume & Rate =====

    /// Set volume; out-of-range inputs are clamped to [0, 1]
    pub fn set_volume(&mut self, volume: f32) {
        let volume = clamp_volume(volume);
        self.volume = volume;
        self.engine.set_volume(volume);
        self.emit(PlaybackEvent::VolumeChanged { volume });
    }

    /// Set playback rate; out-of-range inputs are clamped to [0.25, 4]
    pub fn set_playback_rate(&mut self, rate: f32) {
        let rate = clamp_playback_rate(rate);
        self.playback_rate = rate;
        self.engine.set_rate(rate);
        self.emit(PlaybackEvent::RateChanged { rate });
    }

    // ===== Shuffle & Repeat =====

    /// Set repeat mode
    pub fn set_repeat(&mut self, mode: RepeatMode) {
        self.repeat = mode;
    }

    /// Set shuffle flag
    ///
    /// Shuffle is a traversal policy here; the queue order itself is never
    /// rearranged.
    pub fn set_shuffle(&mut self, shuffle: bool) {
        self.shuffle = shuffle;
    }

    // ===== Engine Events =====

    /// Drain the engine's pending lifecycle events into the state machine
    pub fn pump(&mut self) {
        let events = self.engine.poll_events();
        for event in events {
            self.handle_engine_event(event);
        }
    }

    /// Feed a single engine lifecycle event into the state machine
    ///
    /// Events from superseded loads are discarded.
    pub fn handle_engine_event(&mut self, event: EngineEvent) {
        if event.generation != self.generation {
            debug!(
                event_generation = event.generation,
                current_generation = self.generation,
                "discarding event from superseded load"
            );
            return;
        }

        match event.kind {
            EngineEventKind::MetadataReady { duration } => {
                self.duration = Some(duration);
                // Duration is authoritative once known
                if let Some(track) = self.current_track.as_mut() {
                    track.set_duration(duration);
                    let id = track.id.clone();
                    if let Some(entry) = self.queue.get_mut(self.current_index) {
                        if entry.id == id {
                            entry.set_duration(duration);
                        }
                    }
                }

                if self.state == PlaybackState::Loading {
                    if self.autoplay {
                        if let Err(err) = self.start_engine() {
                            warn!("playback start rejected after load: {err}");
                        }
                    } else {
                        self.set_state(PlaybackState::Ready);
                    }
                }
            }

            EngineEventKind::TimeAdvanced { position } => {
                if self.state == PlaybackState::Playing {
                    self.position = position;
                    let duration_ms = self.duration.map_or(0, |d| d.as_millis() as u64);
                    self.emit(PlaybackEvent::PositionUpdate {
                        position_ms: position.as_millis() as u64,
                        duration_ms,
                    });
                }
            }

            EngineEventKind::Ended => self.handle_ended(),

            EngineEventKind::Failed { message } => {
                self.autoplay = false;
                self.last_error = Some(message.clone());
                self.set_state(PlaybackState::Failed);
                self.emit(PlaybackEvent::Error { message });
            }
        }
    }

    /// Resolve a natural end-of-track
    fn handle_ended(&mut self) {
        let Some(track_id) = self.current_track.as_ref().map(|t| t.id.clone()) else {
            return;
        };

        // Transient state; resolved before this call returns
        self.state = PlaybackState::Ended;
        self.emit(PlaybackEvent::TrackFinished { track_id });

        if self.repeat == RepeatMode::One {
            // Restart the same track from the top. Not a new assignment, so
            // the play count is untouched.
            self.engine.seek(Duration::ZERO);
            self.position = Duration::ZERO;
            if let Err(err) = self.start_engine() {
                warn!("restart rejected: {err}");
            }
        } else if let Err(err) = self.next() {
            warn!("queue advance failed: {err}");
        }
    }

    // ===== State Queries =====

    /// Current playback state
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Whether playback is running
    pub fn is_playing(&self) -> bool {
        self.state.is_playing()
    }

    /// Whether playback is paused mid-track
    pub fn is_paused(&self) -> bool {
        self.state.is_paused()
    }

    /// Currently loaded track
    pub fn current_track(&self) -> Option<&Track> {
        self.current_track.as_ref()
    }

    /// The working play order
    pub fn queue(&self) -> &[Track] {
        &self.queue
    }

    /// Position into the queue; meaningful only when the queue is non-empty
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Current position within the track
    pub fn position(&self) -> Duration {
        self.position
    }

    /// Track duration, once known
    pub fn duration(&self) -> Option<Duration> {
        self.duration
    }

    /// Current volume in [0, 1]
    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// Current playback rate in [0.25, 4]
    pub fn playback_rate(&self) -> f32 {
        self.playback_rate
    }

    /// Current repeat mode
    pub fn repeat(&self) -> RepeatMode {
        self.repeat
    }

    /// Current shuffle flag
    pub fn shuffle(&self) -> bool {
        self.shuffle
    }

    /// Most recent playback error, if any
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Whether the traversal policy can yield a next track
    pub fn has_next(&self) -> bool {
        if self.queue.is_empty() {
            return false;
        }
        self.shuffle
            || self.repeat == RepeatMode::All
            || self.current_index + 1 < self.queue.len()
    }

    /// Whether the traversal policy can yield a previous track
    pub fn has_previous(&self) -> bool {
        if self.queue.is_empty() {
            return false;
        }
        self.shuffle || self.repeat == RepeatMode::All || self.current_index > 0
    }

    /// The persisted slice of player state
    pub fn prefs(&self) -> PlayerPrefs {
        PlayerPrefs {
            volume: self.volume,
            playback_rate: self.playback_rate,
            repeat_mode: self.repeat,
            shuffle_mode: self.shuffle,
        }
    }

    /// Point-in-time view for outbound publication
    pub fn snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot {
            track: self.current_track.as_ref().map(|t| NowPlaying {
                title: t.title.clone(),
                artist: t.artist.clone(),
                album: t.album().map(str::to_string),
                thumbnail: t.thumbnail.clone(),
            }),
            is_playing: self.state.is_playing(),
            position: self.position,
            duration: self.duration,
        }
    }

    /// Drain pending playback events
    pub fn take_events(&mut self) -> Vec<PlaybackEvent> {
        std::mem::take(&mut self.pending_events)
    }

    // ===== Internal =====

    /// Assign the queue slot at `current_index` as the current track and
    /// issue the load
    fn load_current(&mut self, autoplay: bool) {
        let previous_id = self.current_track.as_ref().map(|t| t.id.clone());

        // Every assignment counts, including replaying the same track.
        let entry = &mut self.queue[self.current_index];
        entry.play_count += 1;
        let track = entry.clone();

        self.emit(PlaybackEvent::TrackLoaded {
            track_id: track.id.clone(),
            play_count: track.play_count,
        });
        self.emit(PlaybackEvent::TrackChanged {
            track_id: track.id.clone(),
            previous_track_id: previous_id,
        });

        self.position = Duration::ZERO;
        // Ingestion estimate until the engine reports the real value
        self.duration = (track.duration_secs > 0.0).then(|| track.duration());
        self.last_error = None;
        self.autoplay = autoplay;

        self.generation = self.engine.load(&track.url);
        self.engine.set_volume(self.volume);
        self.engine.set_rate(self.playback_rate);

        self.current_track = Some(track);
        self.set_state(PlaybackState::Loading);
    }

    /// Ask the engine to start; rejection falls back to paused
    fn start_engine(&mut self) -> Result<()> {
        self.autoplay = false;
        match self.engine.set_playing(true) {
            Ok(()) => {
                self.set_state(PlaybackState::Playing);
                Ok(())
            }
            Err(err) => {
                self.last_error = Some(err.to_string());
                self.set_state(PlaybackState::Paused);
                self.emit(PlaybackEvent::Error {
                    message: err.to_string(),
                });
                Err(err)
            }
        }
    }

    fn set_state(&mut self, state: PlaybackState) {
        if self.state != state {
            self.state = state;
            self.emit(PlaybackEvent::StateChanged { state });
        }
    }

    fn emit(&mut self, event: PlaybackEvent) {
        self.pending_events.push(event);
    }
}
