//! gui/update/playback.rs
//! GUI-sequencer bridge
//!
//! Design goals:
//! - GUI never touches rodio/symphonia directly.
//! - All sequencing rules live in the core `Sequencer`; this file only
//!   forwards messages and keeps selection/seek-preview in sync.

use iced::{Task, window};
use tracing::{debug, info};

use super::super::state::{Message, Player};
use crate::core::playback::EngineEvent;

pub(crate) fn drain_events(state: &mut Player) -> Task<Message> {
    let drained: Vec<EngineEvent> = state.engine_events.try_iter().collect();
    if drained.is_empty() {
        return Task::none();
    }

    let before = state.sequencer.session_id();
    for ev in drained {
        state.sequencer.handle_event(ev);
    }
    // Auto-advance started a new session (possibly on the same entry): drop
    // any in-flight drag and let the selection follow.
    if state.sequencer.session_id() != before {
        after_switch(state);
    }

    Task::none()
}

pub(crate) fn play_entry(state: &mut Player, i: usize) -> Task<Message> {
    if let Err(e) = state.sequencer.load_and_play(i) {
        state.sequencer.report(&e);
        return Task::none();
    }
    after_switch(state);
    Task::none()
}

pub(crate) fn play(state: &mut Player) -> Task<Message> {
    state.sequencer.play();
    after_switch(state);
    Task::none()
}

pub(crate) fn pause(state: &mut Player) -> Task<Message> {
    state.sequencer.pause();
    Task::none()
}

pub(crate) fn stop(state: &mut Player) -> Task<Message> {
    state.sequencer.stop();
    state.seek_preview = None;
    Task::none()
}

pub(crate) fn next(state: &mut Player) -> Task<Message> {
    state.sequencer.next();
    after_switch(state);
    Task::none()
}

pub(crate) fn prev(state: &mut Player) -> Task<Message> {
    state.sequencer.previous();
    after_switch(state);
    Task::none()
}

/// Seek slider changed: preview only (UI updates, no engine command).
pub(crate) fn seek_preview(state: &mut Player, secs: f32) -> Task<Message> {
    if state.sequencer.current_index().is_none() {
        return Task::none();
    }

    state.seek_preview = Some(secs);
    state.sequencer.set_seeking(true);
    Task::none()
}

/// Seek slider released: commit the last preview to the engine.
pub(crate) fn seek_commit(state: &mut Player) -> Task<Message> {
    if let Some(secs) = state.seek_preview.take() {
        debug!(secs, "seek commit");
        state.sequencer.seek(f64::from(secs));
    }
    state.sequencer.set_seeking(false);
    Task::none()
}

pub(crate) fn set_volume(state: &mut Player, volume: f32) -> Task<Message> {
    state.sequencer.set_volume(volume);
    Task::none()
}

/// Release the engine handle, then let the app exit.
pub(crate) fn close(state: &mut Player, _id: window::Id) -> Task<Message> {
    info!("window closing");
    state.sequencer.shutdown();
    iced::exit()
}

fn after_switch(state: &mut Player) {
    state.seek_preview = None;
    state.sequencer.set_seeking(false);
    follow_current(state);
}

/// Keep the playlist selection on the playing entry, like the list did
/// when the user double-clicked it.
fn follow_current(state: &mut Player) {
    if let Some(i) = state.sequencer.current_index() {
        state.selected = Some(i);
    }
}
