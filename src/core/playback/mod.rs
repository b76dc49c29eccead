//! core/playback/mod.rs
//! Playback core: engine seam, session-tagged events, and the sequencer.
//!
//! - [`MediaEngine`] is what the sequencer drives (rodio in the app, a fake in tests)
//! - [`EngineEvent`] is what engines report back, always tagged with a [`SessionId`]
//! - [`Sequencer`] owns the playlist and the one live session

use std::fmt;
use std::path::Path;
use std::time::Duration;

use super::error::Result;

mod engine;
mod probe;
mod sequencer;

#[cfg(test)]
pub(crate) mod testing;

pub use engine::{RodioEngine, start_engine};
pub use sequencer::Sequencer;

/// Identity of one playback session. A new id is minted every time an
/// entry is loaded, so events from an older session can be told apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(u64);

impl SessionId {
    pub const FIRST: SessionId = SessionId(1);

    pub fn next(self) -> SessionId {
        SessionId(self.0 + 1)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// No session.
    Idle,
    /// Session created, engine has not confirmed yet.
    Loading,
    Playing,
    Paused,
    /// Engine halted at zero; the handle is kept.
    Stopped,
    /// Last load or playback failed; no engine handle.
    Error,
}

/// Event emitted by an engine for one session.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineEvent {
    pub session: SessionId,
    pub kind: EngineEventKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEventKind {
    /// Media is loaded and playback can run.
    Started { duration: Option<Duration> },
    Position {
        position: Duration,
        total: Option<Duration>,
    },
    EndOfMedia,
    Error(String),
}

/// The playback backend the sequencer drives.
///
/// One handle = one loaded media source. The sequencer never holds more than
/// one handle and always disposes it before creating the next.
pub trait MediaEngine {
    type Handle;

    /// Open `source` for `session`. Fails with `PlayerError::Load` when the
    /// source is rejected up front. Engines that open sources in the
    /// background report a later failure as an `Error` event instead.
    fn create(&mut self, session: SessionId, source: &Path) -> Result<Self::Handle>;

    fn play(&mut self, handle: &Self::Handle);
    fn pause(&mut self, handle: &Self::Handle);
    /// Halt and rewind to zero. The handle stays usable.
    fn stop(&mut self, handle: &Self::Handle);
    fn seek(&mut self, handle: &Self::Handle, position: Duration);
    fn set_volume(&mut self, handle: &Self::Handle, level: f32);

    /// Release the handle. Events for its session must stop after this.
    fn dispose(&mut self, handle: Self::Handle) -> Result<()>;
}
