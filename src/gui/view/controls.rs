//! Bottom controls: status, seek bar + time, transport, volume.
//!
//! Emits only Messages (no rodio, no decoding).

use iced::widget::{column, container, row, slider, text};
use iced::{Alignment, Length};

use super::super::state::{Message, Player};
use super::constants::{STATUS_TEXT, TIME_TEXT, VOLUME_W};
use super::widgets::transport_button;
use crate::core::playback::PlaybackState;
use crate::core::types::format_clock;

pub(crate) fn build_controls_panel(state: &Player) -> iced::widget::Container<'_, Message> {
    let seq = &state.sequencer;
    let has_session = seq.current_index().is_some();
    let has_entries = !seq.playlist().is_empty();

    // --- seek slider ---
    let dur = seq.duration().map(|d| d.as_secs_f32()).unwrap_or(0.0);
    let seek_enabled = has_session && dur > 0.0;

    // slider needs a sane range; if we don't know duration yet, freeze it at 0..=1
    let (seek_max, seek_val, time_text) = if seek_enabled {
        match state.seek_preview {
            Some(preview) => {
                let preview = preview.clamp(0.0, dur);
                let label = format!(
                    "{} / {}",
                    format_clock(std::time::Duration::from_secs_f32(preview)),
                    format_clock(seq.duration().unwrap_or_default())
                );
                (dur, preview, label)
            }
            None => (dur, seq.position().as_secs_f32().min(dur), seq.time_label()),
        }
    } else {
        (1.0, 0.0, seq.time_label())
    };

    let seek = if seek_enabled {
        slider(0.0..=seek_max, seek_val, Message::SeekTo)
            .step(0.1)
            .on_release(Message::SeekCommit)
    } else {
        // Nothing to seek in yet: dragging only clears the seeking flag.
        slider(0.0..=seek_max, seek_val, |_| Message::SeekCommit)
    }
    .width(Length::Fill);

    let seek_row = row![seek, text(time_text).size(TIME_TEXT)]
        .spacing(15)
        .align_y(Alignment::Center);

    // --- transport ---
    let playing = seq.state() == PlaybackState::Playing;
    let transport = row![
        transport_button("⏮", has_entries.then_some(Message::Prev)),
        transport_button("▶", (has_entries && !playing).then_some(Message::Play)),
        transport_button("⏸", has_session.then_some(Message::Pause)),
        transport_button("⏹", has_session.then_some(Message::Stop)),
        transport_button("⏭", has_entries.then_some(Message::Next)),
    ]
    .spacing(10)
    .align_y(Alignment::Center);

    // --- volume ---
    let vol = seq.volume();
    let volume = row![
        text("🔊 Volume").size(STATUS_TEXT),
        slider(0.0..=1.0, vol, Message::SetVolume)
            .step(0.01)
            .width(Length::Fixed(VOLUME_W)),
        text(format!("{:.0}%", vol * 100.0)).size(STATUS_TEXT),
    ]
    .spacing(10)
    .align_y(Alignment::Center);

    let col = column![
        text(seq.status()).size(STATUS_TEXT),
        seek_row,
        transport,
        volume,
    ]
    .spacing(15)
    .align_x(Alignment::Center);

    container(col).padding([20, 15]).width(Length::Fill)
}
