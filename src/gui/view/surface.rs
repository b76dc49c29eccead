//! Media surface. Frames are not rendered; it shows what is loaded.

use iced::widget::{column, container, text};
use iced::{Alignment, Length};

use super::super::state::{Message, Player};
use super::constants::{NOW_PLAYING_TEXT, PANEL_PAD};
use crate::core::playback::PlaybackState;

pub(crate) fn build_surface(state: &Player) -> iced::widget::Container<'_, Message> {
    let seq = &state.sequencer;

    let title = match seq.now_playing() {
        Some(entry) => entry.name.clone(),
        None => "Nothing playing".to_string(),
    };

    let caption = match seq.state() {
        PlaybackState::Idle => "Add media to the playlist, then press ▶",
        PlaybackState::Loading => "Loading…",
        PlaybackState::Playing => "Playing",
        PlaybackState::Paused => "Paused",
        PlaybackState::Stopped => "Stopped",
        PlaybackState::Error => "Could not play this item",
    };

    container(
        column![text(title).size(NOW_PLAYING_TEXT), text(caption).size(14)]
            .spacing(8)
            .align_x(Alignment::Center),
    )
    .padding(PANEL_PAD)
    .height(Length::Fill)
    .center_x(Length::Fill)
    .center_y(Length::Fill)
}
