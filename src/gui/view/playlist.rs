//! Playlist panel (rows + add/remove/clear).

use iced::widget::{column, container, mouse_area, row, scrollable, text};
use iced::{Alignment, Length};

use super::super::state::{Message, Player};
use super::constants::{MARKER_W, ROW_H, ROW_HPAD, ROW_TEXT, ROW_VPAD};
use super::widgets::{action_button, panel};

pub(crate) fn build_playlist_panel(state: &Player) -> iced::widget::Container<'_, Message> {
    let playing = state.sequencer.current_index();

    let mut rows = column![].spacing(1);
    for (i, entry) in state.sequencer.playlist().iter().enumerate() {
        // Playing row gets ▶. Selected (not playing) gets ●.
        let marker = if playing == Some(i) {
            "▶"
        } else if state.selected == Some(i) {
            "●"
        } else {
            ""
        };

        let cells = row![
            text(marker).size(ROW_TEXT).width(Length::Fixed(MARKER_W)),
            text(entry.name.as_str()).size(ROW_TEXT).width(Length::Fill),
        ]
        .spacing(6)
        .align_y(Alignment::Center);

        let row_widget = mouse_area(
            container(cells)
                .padding([ROW_VPAD, ROW_HPAD])
                .height(Length::Fixed(ROW_H))
                .width(Length::Fill),
        )
        .on_press(Message::SelectEntry(i))
        .on_double_click(Message::PlayEntry(i));

        rows = rows.push(row_widget);
    }

    let has_entries = !state.sequencer.playlist().is_empty();
    let buttons = row![
        action_button("+ Add", (!state.picking).then_some(Message::AddFiles)),
        action_button("- Remove", state.selected.map(|_| Message::RemoveSelected)),
        action_button("Clear", has_entries.then_some(Message::ClearPlaylist)),
    ]
    .spacing(8);

    let content = column![scrollable(rows).height(Length::Fill), buttons].spacing(10);
    panel("🎵 PLAYLIST", content)
}
