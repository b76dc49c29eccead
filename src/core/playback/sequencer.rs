//! core/playback/sequencer.rs
//! Playlist-driven playback sequencing.
//!
//! Owns:
//! - the playlist
//! - the one live session (index + engine handle)
//! - the volume level, which outlives sessions
//!
//! Everything runs on the UI thread. Engine calls are fire-and-forget; the
//! engine answers later through [`EngineEvent`]s fed to [`Sequencer::handle_event`].

use std::time::Duration;

use tracing::{debug, info, warn};

use super::{EngineEvent, EngineEventKind, MediaEngine, PlaybackState, SessionId};
use crate::core::error::{PlayerError, Result};
use crate::core::playlist::{IndexShift, Playlist};
use crate::core::types::{PlaylistEntry, format_clock};

pub const DEFAULT_VOLUME: f32 = 0.5;

const NOTHING_TO_PLAY: &str = "No media in playlist";

struct Session<H> {
    id: SessionId,
    index: usize,
    // None after a failed load or an engine error.
    handle: Option<H>,
}

pub struct Sequencer<E: MediaEngine> {
    engine: E,
    playlist: Playlist,
    session: Option<Session<E::Handle>>,
    next_session: SessionId,

    state: PlaybackState,
    volume: f32,
    position: Duration,
    duration: Option<Duration>,
    seeking: bool,
    status: String,
}

impl<E: MediaEngine> Sequencer<E> {
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            playlist: Playlist::new(),
            session: None,
            next_session: SessionId::FIRST,

            state: PlaybackState::Idle,
            volume: DEFAULT_VOLUME,
            position: Duration::ZERO,
            duration: None,
            seeking: false,
            status: "Ready to play".to_string(),
        }
    }

    // ---- read side -------------------------------------------------------

    #[cfg(test)]
    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn current_index(&self) -> Option<usize> {
        self.session.as_ref().map(|s| s.index)
    }

    pub fn now_playing(&self) -> Option<&PlaylistEntry> {
        self.current_index()
            .and_then(|i| self.playlist.get(i).ok())
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Id of the live session; changes every time an entry is (re)loaded.
    pub fn session_id(&self) -> Option<SessionId> {
        self.session.as_ref().map(|s| s.id)
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn position(&self) -> Duration {
        self.position
    }

    pub fn duration(&self) -> Option<Duration> {
        self.duration
    }

    /// `MM:SS / MM:SS`; an unknown total shows as `00:00`.
    pub fn time_label(&self) -> String {
        format!(
            "{} / {}",
            format_clock(self.position),
            format_clock(self.duration.unwrap_or(Duration::ZERO))
        )
    }

    // ---- playlist mutations ---------------------------------------------

    /// Append entries. Nothing happens to the session.
    pub fn add(&mut self, entries: Vec<PlaylistEntry>) -> usize {
        let added = self.playlist.add(entries);
        if added > 0 {
            info!(added, total = self.playlist.len(), "playlist extended");
            self.status = format!("Added {added} file(s) to playlist");
        }
        added
    }

    /// Remove one entry, keeping the session pointed at the same entry.
    /// Removing the current entry stops playback and drops the session.
    pub fn remove_at(&mut self, index: usize) -> Result<PlaylistEntry> {
        self.playlist.get(index)?;

        match IndexShift::after_removal(self.current_index(), index) {
            IndexShift::Invalidated => self.teardown(),
            IndexShift::MovedTo(new_index) => {
                if let Some(session) = self.session.as_mut() {
                    session.index = new_index;
                }
            }
            IndexShift::Unchanged => {}
        }

        let removed = self.playlist.remove_at(index)?;
        debug!(index, name = %removed.name, "playlist entry removed");
        self.status = format!("Removed: {}", removed.name);
        Ok(removed)
    }

    pub fn clear(&mut self) {
        self.teardown();
        self.playlist.clear();
        info!("playlist cleared");
        self.status = "Playlist cleared".to_string();
    }

    // ---- transport -------------------------------------------------------

    /// Replace whatever is loaded with entry `index` and start it.
    ///
    /// A load failure does not return an error: it is recorded as the
    /// `Error` state plus a status message.
    pub fn load_and_play(&mut self, index: usize) -> Result<()> {
        self.playlist.get(index)?;
        self.load(index);
        Ok(())
    }

    pub fn play(&mut self) {
        let Some(session) = self.session.as_ref() else {
            if self.playlist.is_empty() {
                self.status = NOTHING_TO_PLAY.to_string();
            } else {
                self.load(0);
            }
            return;
        };

        let index = session.index;
        match (self.state, session.handle.as_ref()) {
            (PlaybackState::Paused | PlaybackState::Stopped, Some(handle)) => {
                self.engine.play(handle);
                self.state = PlaybackState::Playing;
                self.status = self.playing_status(index);
            }
            (PlaybackState::Playing | PlaybackState::Loading, Some(_)) => {}
            // Failed entry: try it again.
            _ => self.load(index),
        }
    }

    pub fn pause(&mut self) {
        let Some(handle) = self.session.as_ref().and_then(|s| s.handle.as_ref()) else {
            return;
        };

        if matches!(self.state, PlaybackState::Playing | PlaybackState::Loading) {
            self.engine.pause(handle);
            self.state = PlaybackState::Paused;
            self.status = "Paused".to_string();
        }
    }

    /// Halt and rewind. The handle stays loaded so `play` resumes from zero.
    pub fn stop(&mut self) {
        let Some(handle) = self.session.as_ref().and_then(|s| s.handle.as_ref()) else {
            return;
        };

        self.engine.stop(handle);
        self.state = PlaybackState::Stopped;
        self.position = Duration::ZERO;
        // The next Position tick fills the total back in.
        self.duration = None;
        self.status = "Stopped".to_string();
    }

    /// Next entry, looping to the start.
    pub fn next(&mut self) {
        let len = self.playlist.len();
        if len == 0 {
            self.status = NOTHING_TO_PLAY.to_string();
            return;
        }

        let target = match self.current_index() {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        };
        self.load(target);
    }

    /// Previous entry, looping to the end.
    pub fn previous(&mut self) {
        let len = self.playlist.len();
        if len == 0 {
            self.status = NOTHING_TO_PLAY.to_string();
            return;
        }

        let target = match self.current_index() {
            Some(i) if i > 0 => i - 1,
            _ => len - 1,
        };
        self.load(target);
    }

    /// Jump to `seconds`, clamped into `[0, duration]`.
    ///
    /// With no known duration only the lower bound applies. The engine gets
    /// the raw target and the displayed position waits for its next tick.
    pub fn seek(&mut self, seconds: f64) {
        let Some(handle) = self.session.as_ref().and_then(|s| s.handle.as_ref()) else {
            return;
        };

        let seconds = if seconds.is_finite() { seconds.max(0.0) } else { 0.0 };
        let target = Duration::try_from_secs_f64(seconds).unwrap_or(Duration::MAX);

        match self.duration {
            Some(total) => {
                let target = target.min(total);
                debug!(target_ms = target.as_millis() as u64, "seek");
                self.engine.seek(handle, target);
                self.position = target;
            }
            None => {
                debug!(target_ms = target.as_millis() as u64, "seek, total unknown");
                self.engine.seek(handle, target);
            }
        }
    }

    /// Clamp into `[0, 1]` and keep it for every later session.
    pub fn set_volume(&mut self, level: f32) {
        let level = if level.is_nan() { 0.0 } else { level.clamp(0.0, 1.0) };
        self.volume = level;

        if let Some(handle) = self.session.as_ref().and_then(|s| s.handle.as_ref()) {
            self.engine.set_volume(handle, level);
        }
    }

    /// Surface a rejected request (bad index and the like) as status text.
    pub fn report(&mut self, err: &PlayerError) {
        warn!(error = %err, "request rejected");
        self.status = format!("Error: {err}");
    }

    /// UI is dragging the seek slider: stop overwriting the position.
    pub fn set_seeking(&mut self, seeking: bool) {
        self.seeking = seeking;
    }

    /// Release the live handle (window closing).
    pub fn shutdown(&mut self) {
        self.teardown();
    }

    // ---- engine events ---------------------------------------------------

    /// Single entry point for engine events. Events from any session other
    /// than the live one are dropped.
    pub fn handle_event(&mut self, event: EngineEvent) {
        let live = matches!(
            &self.session,
            Some(s) if s.id == event.session && s.handle.is_some()
        );
        if !live {
            debug!(session = %event.session, kind = ?event.kind, "dropping stale engine event");
            return;
        }

        match event.kind {
            EngineEventKind::Started { duration } => self.on_started(duration),
            EngineEventKind::Position { position, total } => {
                self.on_position_changed(position, total)
            }
            EngineEventKind::EndOfMedia => self.on_end_of_media(),
            EngineEventKind::Error(message) => self.on_engine_error(message),
        }
    }

    pub fn on_position_changed(&mut self, position: Duration, total: Option<Duration>) {
        if total.is_some() {
            self.duration = total;
        }
        // If the user is dragging the seek slider, don't fight them.
        if !self.seeking {
            self.position = position;
        }
    }

    pub fn on_end_of_media(&mut self) {
        info!(index = ?self.current_index(), "end of media, advancing");
        self.next();
    }

    /// Engine failure for the live session. During `Loading` this is the
    /// source failing to open, reported like a failed `create`.
    pub fn on_engine_error(&mut self, message: String) {
        warn!(%message, "engine error");
        self.status = match (self.state, self.now_playing()) {
            (PlaybackState::Loading, Some(entry)) => {
                format!("Error loading: {} - {message}", entry.name)
            }
            _ => format!("Error: {message}"),
        };

        let Some(session) = self.session.as_mut() else {
            return;
        };
        if let Some(handle) = session.handle.take() {
            release(&mut self.engine, session.id, handle);
        }
        self.state = PlaybackState::Error;
    }

    fn on_started(&mut self, duration: Option<Duration>) {
        if duration.is_some() {
            self.duration = duration;
        }
        // A pause issued while loading wins over the engine's confirmation.
        if self.state == PlaybackState::Loading {
            self.state = PlaybackState::Playing;
        }
    }

    // ---- internals -------------------------------------------------------

    fn load(&mut self, index: usize) {
        let Ok(entry) = self.playlist.get(index).cloned() else {
            return;
        };

        // At most one live handle: the old one goes before the new one exists.
        self.teardown();

        let id = self.next_session;
        self.next_session = id.next();

        info!(session = %id, index, source = %entry.source.display(), "loading");

        match self.engine.create(id, &entry.source) {
            Ok(handle) => {
                self.engine.set_volume(&handle, self.volume);
                self.engine.play(&handle);
                self.session = Some(Session {
                    id,
                    index,
                    handle: Some(handle),
                });
                self.state = PlaybackState::Loading;
                self.status = format!("Playing: {}", entry.name);
            }
            Err(e) => {
                warn!(session = %id, source = %entry.source.display(), error = %e, "load failed");
                self.session = Some(Session {
                    id,
                    index,
                    handle: None,
                });
                self.state = PlaybackState::Error;
                self.status = format!("Error loading: {} - {e}", entry.name);
            }
        }
    }

    /// Drop the session (if any) and go back to `Idle`.
    fn teardown(&mut self) {
        if let Some(session) = self.session.take() {
            if let Some(handle) = session.handle {
                release(&mut self.engine, session.id, handle);
            }
        }

        self.state = PlaybackState::Idle;
        self.position = Duration::ZERO;
        self.duration = None;
        // A drag on the old session's slider means nothing for the next one.
        self.seeking = false;
    }

    fn playing_status(&self, index: usize) -> String {
        match self.playlist.get(index) {
            Ok(entry) => format!("Playing: {}", entry.name),
            Err(_) => "Playing".to_string(),
        }
    }
}

/// Dispose a handle. Failures are logged, never surfaced.
fn release<E: MediaEngine>(engine: &mut E, session: SessionId, handle: E::Handle) {
    if let Err(e) = engine.dispose(handle) {
        warn!(%session, error = %e, "failed to release engine handle");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::playback::testing::{Call, FakeEngine};

    fn seq_with(names: &[&str]) -> Sequencer<FakeEngine> {
        let mut seq = Sequencer::new(FakeEngine::default());
        seq.add(names.iter().map(|n| PlaylistEntry::from_path(*n)).collect());
        seq
    }

    fn loaded(seq: &Sequencer<FakeEngine>) -> Vec<String> {
        seq.engine()
            .calls
            .iter()
            .filter_map(|c| match c {
                Call::Create(_, path) => Some(path.clone()),
                _ => None,
            })
            .collect()
    }

    fn live_session(seq: &Sequencer<FakeEngine>) -> SessionId {
        seq.engine().last_session().expect("a session was created")
    }

    fn event(session: SessionId, kind: EngineEventKind) -> EngineEvent {
        EngineEvent { session, kind }
    }

    #[test]
    fn starts_idle_with_default_volume() {
        let seq = seq_with(&[]);
        assert_eq!(seq.state(), PlaybackState::Idle);
        assert_eq!(seq.current_index(), None);
        assert_eq!(seq.volume(), DEFAULT_VOLUME);
        assert_eq!(seq.time_label(), "00:00 / 00:00");
    }

    #[test]
    fn play_on_empty_playlist_does_nothing_but_report() {
        let mut seq = seq_with(&[]);
        seq.play();

        assert_eq!(seq.state(), PlaybackState::Idle);
        assert_eq!(seq.status(), NOTHING_TO_PLAY);
        assert!(seq.engine().calls.is_empty());
    }

    #[test]
    fn next_and_previous_on_empty_playlist_are_noops() {
        let mut seq = seq_with(&[]);
        seq.next();
        seq.previous();

        assert_eq!(seq.state(), PlaybackState::Idle);
        assert_eq!(seq.status(), NOTHING_TO_PLAY);
        assert!(seq.engine().calls.is_empty());
    }

    #[test]
    fn play_without_session_starts_first_entry() {
        let mut seq = seq_with(&["a.mp3", "b.mp3"]);
        seq.play();

        assert_eq!(seq.current_index(), Some(0));
        assert_eq!(seq.state(), PlaybackState::Loading);
        assert_eq!(seq.status(), "Playing: a.mp3");
        assert_eq!(loaded(&seq), ["a.mp3"]);
    }

    #[test]
    fn load_applies_volume_then_plays() {
        let mut seq = seq_with(&["a.mp3"]);
        seq.set_volume(0.8);
        seq.load_and_play(0).unwrap();

        let s = live_session(&seq);
        assert_eq!(
            seq.engine().calls,
            vec![
                Call::Create(s, "a.mp3".into()),
                Call::SetVolume(s, 0.8),
                Call::Play(s),
            ]
        );
    }

    #[test]
    fn started_event_moves_loading_to_playing() {
        let mut seq = seq_with(&["a.mp3"]);
        seq.play();
        let s = live_session(&seq);

        seq.handle_event(event(
            s,
            EngineEventKind::Started {
                duration: Some(Duration::from_secs(200)),
            },
        ));

        assert_eq!(seq.state(), PlaybackState::Playing);
        assert_eq!(seq.duration(), Some(Duration::from_secs(200)));
    }

    #[test]
    fn pause_during_load_survives_started_event() {
        let mut seq = seq_with(&["a.mp3"]);
        seq.play();
        let s = live_session(&seq);
        seq.pause();

        seq.handle_event(event(s, EngineEventKind::Started { duration: None }));
        assert_eq!(seq.state(), PlaybackState::Paused);
    }

    #[test]
    fn load_and_play_out_of_range_is_rejected() {
        let mut seq = seq_with(&["a.mp3"]);
        assert_eq!(
            seq.load_and_play(1).unwrap_err(),
            PlayerError::OutOfRange { index: 1, len: 1 }
        );
        assert_eq!(seq.state(), PlaybackState::Idle);
        assert!(seq.engine().calls.is_empty());
    }

    #[test]
    fn switching_entries_disposes_old_handle_first() {
        let mut seq = seq_with(&["a.mp3", "b.mp3"]);
        seq.load_and_play(0).unwrap();
        let first = live_session(&seq);
        seq.load_and_play(1).unwrap();
        let second = live_session(&seq);

        let calls = &seq.engine().calls;
        let disposed = calls
            .iter()
            .filter(|c| **c == Call::Dispose(first))
            .count();
        assert_eq!(disposed, 1);

        let dispose_at = calls.iter().position(|c| *c == Call::Dispose(first));
        let create_at = calls
            .iter()
            .position(|c| *c == Call::Create(second, "b.mp3".into()));
        assert!(dispose_at < create_at);
        assert_eq!(seq.engine().max_live, 1);
        assert_eq!(seq.engine().live, 1);
    }

    #[test]
    fn failed_dispose_is_swallowed() {
        let mut seq = seq_with(&["a.mp3", "b.mp3"]);
        seq.load_and_play(0).unwrap();
        seq.engine.fail_dispose = true;

        seq.load_and_play(1).unwrap();

        assert_eq!(seq.current_index(), Some(1));
        assert_eq!(seq.state(), PlaybackState::Loading);
    }

    #[test]
    fn load_failure_records_error_without_advancing() {
        let mut seq = seq_with(&["bad.avi", "b.mp3"]);
        seq.engine.fail_create.push("bad.avi".into());

        seq.load_and_play(0).unwrap();

        assert_eq!(seq.state(), PlaybackState::Error);
        assert_eq!(seq.current_index(), Some(0));
        assert!(seq.status().starts_with("Error loading: bad.avi - "));
        assert_eq!(seq.engine().live, 0);

        // Controls stay usable: next moves on from the failed entry.
        seq.next();
        assert_eq!(seq.current_index(), Some(1));
        assert_eq!(seq.state(), PlaybackState::Loading);
    }

    #[test]
    fn play_after_load_failure_retries_same_entry() {
        let mut seq = seq_with(&["a.mp3", "b.mp3"]);
        seq.engine.fail_create.push("b.mp3".into());
        seq.load_and_play(1).unwrap();

        seq.engine.fail_create.clear();
        seq.play();

        assert_eq!(loaded(&seq), ["b.mp3", "b.mp3"]);
        assert_eq!(seq.state(), PlaybackState::Loading);
    }

    #[test]
    fn pause_resume_and_stop() {
        let mut seq = seq_with(&["a.mp3"]);
        seq.play();
        let s = live_session(&seq);
        seq.handle_event(event(s, EngineEventKind::Started { duration: None }));

        seq.pause();
        assert_eq!(seq.state(), PlaybackState::Paused);
        assert_eq!(seq.status(), "Paused");
        seq.pause();

        seq.play();
        assert_eq!(seq.state(), PlaybackState::Playing);
        assert_eq!(seq.status(), "Playing: a.mp3");

        seq.on_position_changed(Duration::from_secs(42), Some(Duration::from_secs(90)));
        seq.stop();
        assert_eq!(seq.state(), PlaybackState::Stopped);
        assert_eq!(seq.position(), Duration::ZERO);
        assert_eq!(seq.time_label(), "00:00 / 00:00");
        assert_eq!(seq.current_index(), Some(0));
        assert_eq!(seq.engine().live, 1);

        let pauses = seq
            .engine()
            .calls
            .iter()
            .filter(|c| **c == Call::Pause(s))
            .count();
        assert_eq!(pauses, 1);
        assert!(seq.engine().calls.contains(&Call::Stop(s)));

        seq.play();
        assert_eq!(seq.state(), PlaybackState::Playing);
    }

    #[test]
    fn transport_without_session_is_a_noop() {
        let mut seq = seq_with(&["a.mp3"]);
        seq.pause();
        seq.stop();
        seq.seek(10.0);

        assert_eq!(seq.state(), PlaybackState::Idle);
        assert!(seq.engine().calls.is_empty());
    }

    #[test]
    fn next_cycles_back_to_start() {
        let mut seq = seq_with(&["a", "b", "c", "d"]);
        for start in 0..4 {
            seq.load_and_play(start).unwrap();
            for _ in 0..seq.playlist().len() {
                seq.next();
            }
            assert_eq!(seq.current_index(), Some(start));
        }
    }

    #[test]
    fn previous_wraps_to_end() {
        let mut seq = seq_with(&["a", "b", "c"]);
        seq.load_and_play(0).unwrap();
        seq.previous();
        assert_eq!(seq.current_index(), Some(2));
        seq.previous();
        assert_eq!(seq.current_index(), Some(1));
    }

    #[test]
    fn previous_without_session_starts_at_last_entry() {
        let mut seq = seq_with(&["a", "b", "c"]);
        seq.previous();
        assert_eq!(seq.current_index(), Some(2));
    }

    #[test]
    fn end_of_media_on_last_entry_loops_to_first() {
        let mut seq = seq_with(&["A", "B", "C"]);
        seq.load_and_play(2).unwrap();
        let s = live_session(&seq);

        seq.handle_event(event(s, EngineEventKind::EndOfMedia));

        assert_eq!(seq.current_index(), Some(0));
        assert_eq!(loaded(&seq), ["C", "A"]);
    }

    #[test]
    fn single_entry_replays_itself() {
        let mut seq = seq_with(&["only.mp3"]);
        seq.load_and_play(0).unwrap();

        seq.next();
        assert_eq!(seq.current_index(), Some(0));
        seq.previous();
        assert_eq!(seq.current_index(), Some(0));
        let s = live_session(&seq);
        seq.handle_event(event(s, EngineEventKind::EndOfMedia));
        assert_eq!(seq.current_index(), Some(0));

        assert_eq!(loaded(&seq), ["only.mp3"; 4]);
        assert_eq!(seq.engine().live, 1);
    }

    #[test]
    fn engine_error_stops_without_advancing() {
        let mut seq = seq_with(&["a", "b"]);
        seq.load_and_play(0).unwrap();
        let s = live_session(&seq);
        seq.handle_event(event(s, EngineEventKind::Started { duration: None }));

        seq.handle_event(event(s, EngineEventKind::Error("device lost".into())));

        assert_eq!(seq.state(), PlaybackState::Error);
        assert_eq!(seq.status(), "Error: device lost");
        assert_eq!(seq.current_index(), Some(0));
        assert_eq!(seq.engine().live, 0);
        assert_eq!(loaded(&seq), ["a"]);
    }

    #[test]
    fn error_before_started_reads_as_load_failure() {
        let mut seq = seq_with(&["broken.mp4", "b"]);
        seq.load_and_play(0).unwrap();
        let s = live_session(&seq);

        seq.handle_event(event(s, EngineEventKind::Error("Unsupported codec".into())));

        assert_eq!(seq.state(), PlaybackState::Error);
        assert_eq!(seq.status(), "Error loading: broken.mp4 - Unsupported codec");
        assert_eq!(seq.current_index(), Some(0));
        assert_eq!(seq.engine().live, 0);

        seq.play();
        assert_eq!(loaded(&seq), ["broken.mp4", "broken.mp4"]);
    }

    #[test]
    fn stale_events_are_ignored() {
        let mut seq = seq_with(&["a", "b", "c"]);
        seq.load_and_play(0).unwrap();
        let old = live_session(&seq);
        seq.load_and_play(1).unwrap();

        seq.handle_event(event(old, EngineEventKind::EndOfMedia));
        seq.handle_event(event(old, EngineEventKind::Error("late".into())));
        seq.handle_event(event(
            old,
            EngineEventKind::Position {
                position: Duration::from_secs(30),
                total: Some(Duration::from_secs(60)),
            },
        ));

        assert_eq!(seq.current_index(), Some(1));
        assert_eq!(seq.state(), PlaybackState::Loading);
        assert_eq!(seq.position(), Duration::ZERO);
        assert_eq!(seq.duration(), None);
    }

    #[test]
    fn position_updates_paused_while_dragging() {
        let mut seq = seq_with(&["a"]);
        seq.play();
        let s = live_session(&seq);
        let pos = |secs| EngineEventKind::Position {
            position: Duration::from_secs(secs),
            total: Some(Duration::from_secs(125)),
        };

        seq.handle_event(event(s, pos(5)));
        assert_eq!(seq.time_label(), "00:05 / 02:05");

        seq.set_seeking(true);
        seq.handle_event(event(s, pos(6)));
        assert_eq!(seq.position(), Duration::from_secs(5));

        seq.set_seeking(false);
        seq.handle_event(event(s, pos(7)));
        assert_eq!(seq.position(), Duration::from_secs(7));
    }

    #[test]
    fn end_of_media_mid_drag_starts_a_fresh_session() {
        let mut seq = seq_with(&["only.mp3"]);
        seq.load_and_play(0).unwrap();
        let first = live_session(&seq);
        assert_eq!(seq.session_id(), Some(first));

        seq.set_seeking(true);
        seq.handle_event(event(first, EngineEventKind::EndOfMedia));

        // Same index, new session: the drag belonged to the old one.
        assert_eq!(seq.current_index(), Some(0));
        assert_ne!(seq.session_id(), Some(first));
        let second = live_session(&seq);
        seq.handle_event(event(
            second,
            EngineEventKind::Position {
                position: Duration::from_secs(1),
                total: Some(Duration::from_secs(30)),
            },
        ));
        assert_eq!(seq.position(), Duration::from_secs(1));
    }

    #[test]
    fn seek_without_known_duration_only_clamps_below() {
        let mut seq = seq_with(&["a"]);
        seq.play();
        let s = live_session(&seq);
        assert_eq!(seq.duration(), None);

        seq.seek(-5.0);
        seq.seek(f64::NAN);
        seq.seek(f64::INFINITY);
        seq.seek(1e30);
        seq.seek(42.0);

        let seeks: Vec<_> = seq
            .engine()
            .calls
            .iter()
            .filter_map(|c| match c {
                Call::Seek(id, d) if *id == s => Some(*d),
                _ => None,
            })
            .collect();
        assert_eq!(
            seeks,
            [
                Duration::ZERO,
                Duration::ZERO,
                Duration::ZERO,
                Duration::MAX,
                Duration::from_secs(42)
            ]
        );
        // Without a total the displayed position waits for the engine.
        assert_eq!(seq.position(), Duration::ZERO);
        assert_eq!(seq.time_label(), "00:00 / 00:00");
    }

    #[test]
    fn report_shows_rejected_request_as_status() {
        let mut seq = seq_with(&["a"]);
        let err = seq.load_and_play(3).unwrap_err();

        seq.report(&err);

        assert_eq!(
            seq.status(),
            "Error: index 3 out of range (playlist has 1 entries)"
        );
        assert_eq!(seq.state(), PlaybackState::Idle);
        assert!(seq.engine().calls.is_empty());
    }

    #[test]
    fn seek_is_clamped_to_duration() {
        let mut seq = seq_with(&["a"]);
        seq.play();
        let s = live_session(&seq);
        seq.on_position_changed(Duration::ZERO, Some(Duration::from_secs(60)));

        seq.seek(-3.0);
        seq.seek(90.0);
        seq.seek(12.5);

        let seeks: Vec<_> = seq
            .engine()
            .calls
            .iter()
            .filter_map(|c| match c {
                Call::Seek(id, d) if *id == s => Some(*d),
                _ => None,
            })
            .collect();
        assert_eq!(
            seeks,
            [
                Duration::ZERO,
                Duration::from_secs(60),
                Duration::from_millis(12_500)
            ]
        );
        assert_eq!(seq.position(), Duration::from_millis(12_500));
    }

    #[test]
    fn volume_is_clamped_and_persists_across_sessions() {
        let mut seq = seq_with(&["a", "b"]);

        seq.set_volume(-0.5);
        assert_eq!(seq.volume(), 0.0);
        seq.set_volume(1.7);
        assert_eq!(seq.volume(), 1.0);
        seq.set_volume(f32::NAN);
        assert_eq!(seq.volume(), 0.0);

        seq.set_volume(0.3);
        seq.load_and_play(0).unwrap();
        seq.load_and_play(1).unwrap();

        let s = live_session(&seq);
        assert!(seq.engine().calls.contains(&Call::SetVolume(s, 0.3)));

        seq.set_volume(0.9);
        assert!(seq.engine().calls.contains(&Call::SetVolume(s, 0.9)));
        assert_eq!(seq.volume(), 0.9);
    }

    #[test]
    fn removing_current_entry_goes_idle() {
        let mut seq = seq_with(&["a", "b", "c"]);
        seq.load_and_play(1).unwrap();
        let s = live_session(&seq);

        let removed = seq.remove_at(1).unwrap();

        assert_eq!(removed.name, "b");
        assert_eq!(seq.state(), PlaybackState::Idle);
        assert_eq!(seq.current_index(), None);
        assert!(seq.engine().calls.contains(&Call::Dispose(s)));
        assert_eq!(seq.engine().live, 0);
    }

    #[test]
    fn removing_earlier_entry_keeps_same_entry_current() {
        let mut seq = seq_with(&["a", "b", "c"]);
        seq.load_and_play(2).unwrap();
        let before = seq.now_playing().cloned();

        seq.remove_at(0).unwrap();

        assert_eq!(seq.current_index(), Some(1));
        assert_eq!(seq.now_playing().cloned(), before);
        assert_eq!(seq.state(), PlaybackState::Loading);
        assert_eq!(seq.engine().live, 1);
    }

    #[test]
    fn removing_later_entry_changes_nothing() {
        let mut seq = seq_with(&["a", "b", "c"]);
        seq.load_and_play(0).unwrap();

        seq.remove_at(2).unwrap();

        assert_eq!(seq.current_index(), Some(0));
        assert_eq!(seq.now_playing().map(|e| e.name.as_str()), Some("a"));
    }

    #[test]
    fn remove_out_of_range_leaves_everything_alone() {
        let mut seq = seq_with(&["a"]);
        seq.load_and_play(0).unwrap();

        assert!(seq.remove_at(3).is_err());
        assert_eq!(seq.current_index(), Some(0));
        assert_eq!(seq.playlist().len(), 1);
    }

    #[test]
    fn clear_tears_down_session() {
        let mut seq = seq_with(&["a", "b"]);
        seq.load_and_play(0).unwrap();

        seq.clear();

        assert!(seq.playlist().is_empty());
        assert_eq!(seq.state(), PlaybackState::Idle);
        assert_eq!(seq.status(), "Playlist cleared");
        assert_eq!(seq.engine().live, 0);
    }

    #[test]
    fn add_reports_count_and_ignores_empty_input() {
        let mut seq = seq_with(&[]);
        assert_eq!(seq.add(Vec::new()), 0);
        assert_eq!(seq.status(), "Ready to play");

        assert_eq!(
            seq.add(vec![
                PlaylistEntry::from_path("a.mp3"),
                PlaylistEntry::from_path("b.wav")
            ]),
            2
        );
        assert_eq!(seq.status(), "Added 2 file(s) to playlist");
    }

    #[test]
    fn shutdown_releases_handle() {
        let mut seq = seq_with(&["a"]);
        seq.play();
        seq.shutdown();

        assert_eq!(seq.engine().live, 0);
        assert_eq!(seq.state(), PlaybackState::Idle);
    }
}
