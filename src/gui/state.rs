//! GUI state + messages.
//! Pure data definitions used by update + view.

use std::path::PathBuf;
use std::sync::mpsc::Receiver;

use crate::core::playback::{EngineEvent, RodioEngine, Sequencer, start_engine};
use crate::core::types::PlaylistEntry;

/// App state
pub(crate) struct Player {
    pub sequencer: Sequencer<RodioEngine>,
    pub engine_events: Receiver<EngineEvent>,

    // Playlist row the user clicked (what "Remove" acts on).
    pub selected: Option<usize>,

    // Seek slider value while the user drags it (seconds).
    pub seek_preview: Option<f32>,

    // File dialog open.
    pub picking: bool,
}

impl Player {
    pub(crate) fn new() -> Self {
        let (engine, engine_events) = start_engine();

        Self {
            sequencer: Sequencer::new(engine),
            engine_events,
            selected: None,
            seek_preview: None,
            picking: false,
        }
    }
}

/// Message = “something happened”.
#[derive(Debug, Clone)]
pub(crate) enum Message {
    TickPlayback,

    // Playlist
    AddFiles,
    FilesPicked(Vec<PlaylistEntry>),
    FileDropped(PathBuf),
    DroppedLoaded(Vec<PlaylistEntry>),
    RemoveSelected,
    ClearPlaylist,
    SelectEntry(usize),
    PlayEntry(usize),

    // Transport
    Play,
    Pause,
    Stop,
    Next,
    Prev,

    // Seek: preview while dragging, commit on release
    SeekTo(f32),
    SeekCommit,

    SetVolume(f32),

    CloseRequested(iced::window::Id),
}
