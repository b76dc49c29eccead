//! gui/update/playlist.rs
//! Playlist panel: add (dialog or drop), remove, clear, select.
//!
//! Tag reading for new entries happens off the UI thread.

use std::path::PathBuf;

use iced::Task;
use tracing::debug;

use super::super::state::{Message, Player};
use super::util::spawn_blocking;
use crate::core::library::{self, AUDIO_EXTENSIONS, MEDIA_EXTENSIONS, VIDEO_EXTENSIONS};
use crate::core::types::PlaylistEntry;

pub(crate) fn add_files(state: &mut Player) -> Task<Message> {
    if state.picking {
        return Task::none();
    }
    state.picking = true;

    Task::perform(
        async {
            let picked = rfd::AsyncFileDialog::new()
                .set_title("Select Media Files")
                .add_filter("Media Files", MEDIA_EXTENSIONS)
                .add_filter("Audio Files", AUDIO_EXTENSIONS)
                .add_filter("Video Files", VIDEO_EXTENSIONS)
                .add_filter("All Files", &["*"])
                .pick_files()
                .await;

            // Cancelled = nothing picked.
            let paths: Vec<PathBuf> = picked
                .unwrap_or_default()
                .iter()
                .map(|h| h.path().to_path_buf())
                .collect();

            if paths.is_empty() {
                return Vec::new();
            }
            spawn_blocking(move || library::entries_from_paths(paths))
                .await
                .unwrap_or_default()
        },
        Message::FilesPicked,
    )
}

pub(crate) fn files_picked(state: &mut Player, entries: Vec<PlaylistEntry>) -> Task<Message> {
    state.picking = false;
    debug!(count = entries.len(), "files picked");
    state.sequencer.add(entries);
    Task::none()
}

/// One event per dropped path; folders are walked for media.
pub(crate) fn file_dropped(path: PathBuf) -> Task<Message> {
    Task::perform(
        spawn_blocking(move || {
            let found = library::collect_media(&[path]);
            library::entries_from_paths(found)
        }),
        |entries| Message::DroppedLoaded(entries.unwrap_or_default()),
    )
}

pub(crate) fn dropped_loaded(state: &mut Player, entries: Vec<PlaylistEntry>) -> Task<Message> {
    debug!(count = entries.len(), "files dropped");
    state.sequencer.add(entries);
    Task::none()
}

pub(crate) fn remove_selected(state: &mut Player) -> Task<Message> {
    let Some(i) = state.selected else {
        return Task::none();
    };

    if let Err(e) = state.sequencer.remove_at(i) {
        state.sequencer.report(&e);
    }
    state.selected = None;
    Task::none()
}

pub(crate) fn clear(state: &mut Player) -> Task<Message> {
    state.sequencer.clear();
    state.selected = None;
    state.seek_preview = None;
    Task::none()
}

pub(crate) fn select(state: &mut Player, i: usize) -> Task<Message> {
    if i < state.sequencer.playlist().len() {
        state.selected = Some(i);
    }
    Task::none()
}
