//! Playdeck
//!
//! # What this program is
//! A small desktop media player (built with the `iced` GUI library): a media
//! surface, a playlist panel, and transport controls.
//!
//! # How it is split
//! - `core` = playlist store, playback sequencer, rodio engine, probing, tags
//! - `gui`  = iced state/messages/update/view; forwards everything to the sequencer
//!
//! # Concurrency model
//! - The sequencer runs on the UI thread inside `update()`.
//! - Audio runs on a playback thread that owns the output stream.
//! - Engine events are polled every 200 ms and fed back into the sequencer.
//! - File dialogs and tag reading run off the UI thread.
//!
//! # Logging
//! `RUST_LOG` controls verbosity (default `playdeck=info`).

mod core;
mod gui;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> iced::Result {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "playdeck=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    iced::application(gui::Player::new, gui::update, gui::view)
        .title("Playdeck")
        .subscription(gui::subscription)
        .exit_on_close_request(false)
        .window_size((1000.0, 650.0))
        .run()
}
