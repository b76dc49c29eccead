//! Recording engine for sequencer tests.

use std::path::Path;
use std::time::Duration;

use super::{MediaEngine, SessionId};
use crate::core::error::{PlayerError, Result};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    Create(SessionId, String),
    Play(SessionId),
    Pause(SessionId),
    Stop(SessionId),
    Seek(SessionId, Duration),
    SetVolume(SessionId, f32),
    Dispose(SessionId),
}

#[derive(Debug)]
pub(crate) struct FakeHandle(SessionId);

#[derive(Debug, Default)]
pub(crate) struct FakeEngine {
    pub calls: Vec<Call>,
    /// Handles created and not yet disposed.
    pub live: usize,
    pub max_live: usize,
    /// Sources whose `create` fails.
    pub fail_create: Vec<String>,
    pub fail_dispose: bool,
}

impl FakeEngine {
    pub fn last_session(&self) -> Option<SessionId> {
        self.calls.iter().rev().find_map(|c| match c {
            Call::Create(id, _) => Some(*id),
            _ => None,
        })
    }
}

impl MediaEngine for FakeEngine {
    type Handle = FakeHandle;

    fn create(&mut self, session: SessionId, source: &Path) -> Result<FakeHandle> {
        let source = source.to_string_lossy().to_string();
        self.calls.push(Call::Create(session, source.clone()));

        if self.fail_create.contains(&source) {
            return Err(PlayerError::Load(format!("unsupported format: {source}")));
        }

        self.live += 1;
        self.max_live = self.max_live.max(self.live);
        Ok(FakeHandle(session))
    }

    fn play(&mut self, handle: &FakeHandle) {
        self.calls.push(Call::Play(handle.0));
    }

    fn pause(&mut self, handle: &FakeHandle) {
        self.calls.push(Call::Pause(handle.0));
    }

    fn stop(&mut self, handle: &FakeHandle) {
        self.calls.push(Call::Stop(handle.0));
    }

    fn seek(&mut self, handle: &FakeHandle, position: Duration) {
        self.calls.push(Call::Seek(handle.0, position));
    }

    fn set_volume(&mut self, handle: &FakeHandle, level: f32) {
        self.calls.push(Call::SetVolume(handle.0, level));
    }

    fn dispose(&mut self, handle: FakeHandle) -> Result<()> {
        self.calls.push(Call::Dispose(handle.0));
        // The handle is gone either way.
        self.live -= 1;

        if self.fail_dispose {
            return Err(PlayerError::Engine("device busy".into()));
        }
        Ok(())
    }
}
