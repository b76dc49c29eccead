//! GUI renderer (reads state, produces widgets; no mutation).

mod constants;
mod controls;
mod playlist;
mod surface;
mod widgets;

use iced::Length;
use iced::widget::{Column, column, row};

use super::state::{Message, Player};
use constants::{CONTROLS_H, PLAYLIST_W, SPACING};

pub(crate) fn view(state: &Player) -> Column<'_, Message> {
    let surface = surface::build_surface(state).width(Length::Fill);
    let playlist = playlist::build_playlist_panel(state).width(Length::Fixed(PLAYLIST_W));
    let controls = controls::build_controls_panel(state).height(Length::Fixed(CONTROLS_H));

    let body = row![surface, playlist].spacing(SPACING).height(Length::Fill);
    column![body, controls].spacing(SPACING).padding(SPACING)
}
