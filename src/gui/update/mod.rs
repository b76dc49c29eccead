//! gui/update/mod.rs
//! Update logic (router).
//! Mutates state in response to `Message` events.

use iced::Task;

use super::state::{Message, Player};

mod playback;
mod playlist;
mod util;

pub(crate) fn update(state: &mut Player, message: Message) -> Task<Message> {
    match message {
        Message::TickPlayback => playback::drain_events(state),

        // Playlist
        Message::AddFiles => playlist::add_files(state),
        Message::FilesPicked(entries) => playlist::files_picked(state, entries),
        Message::FileDropped(path) => playlist::file_dropped(path),
        Message::DroppedLoaded(entries) => playlist::dropped_loaded(state, entries),
        Message::RemoveSelected => playlist::remove_selected(state),
        Message::ClearPlaylist => playlist::clear(state),
        Message::SelectEntry(i) => playlist::select(state, i),
        Message::PlayEntry(i) => playback::play_entry(state, i),

        // Transport
        Message::Play => playback::play(state),
        Message::Pause => playback::pause(state),
        Message::Stop => playback::stop(state),
        Message::Next => playback::next(state),
        Message::Prev => playback::prev(state),

        // Seek: preview vs commit
        Message::SeekTo(secs) => playback::seek_preview(state, secs),
        Message::SeekCommit => playback::seek_commit(state),

        Message::SetVolume(vol) => playback::set_volume(state, vol),

        Message::CloseRequested(id) => playback::close(state, id),
    }
}
