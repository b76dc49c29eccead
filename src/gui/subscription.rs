//! gui/subscription.rs
//! - poll playback events by emitting a periodic TickPlayback message
//! - files dropped on the window
//! - window close (so the engine handle is released first)

use std::time::Duration;

use iced::{Event, Subscription, event, time, window};

use super::state::{Message, Player};

const TICK_MS: u64 = 200;

pub(crate) fn subscription(_state: &Player) -> Subscription<Message> {
    Subscription::batch([
        time::every(Duration::from_millis(TICK_MS)).map(|_| Message::TickPlayback),
        event::listen_with(on_window_event),
        window::close_requests().map(Message::CloseRequested),
    ])
}

fn on_window_event(event: Event, _status: event::Status, _id: window::Id) -> Option<Message> {
    match event {
        Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
        _ => None,
    }
}
