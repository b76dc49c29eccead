//! View constants (layout/sizing).

pub(crate) const SPACING: f32 = 12.0;

pub(crate) const PLAYLIST_W: f32 = 280.0;
pub(crate) const CONTROLS_H: f32 = 190.0;

pub(crate) const PANEL_PAD: f32 = 15.0;
pub(crate) const PANEL_TITLE: f32 = 14.0;

// playlist rows
pub(crate) const ROW_TEXT: f32 = 14.0;
pub(crate) const ROW_H: f32 = 26.0;
pub(crate) const ROW_VPAD: f32 = 2.0;
pub(crate) const ROW_HPAD: f32 = 8.0;
pub(crate) const MARKER_W: f32 = 20.0;

// controls
pub(crate) const STATUS_TEXT: f32 = 12.0;
pub(crate) const TIME_TEXT: f32 = 11.0;
pub(crate) const TRANSPORT_TEXT: f32 = 18.0;
pub(crate) const VOLUME_W: f32 = 200.0;

// media surface
pub(crate) const NOW_PLAYING_TEXT: f32 = 22.0;
