//! gui/mod.rs
//!
//! This folder contains ONLY frontend concerns:
//! - app state ('Player')
//! - messages ('Message')
//! - update logic ('update()')
//! - view layout ('view()')
//! - subscriptions (engine polling, file drops, close requests)

pub(crate) mod state;
pub(crate) mod subscription;
pub(crate) mod update;
pub(crate) mod view;

// Re-export the entry points main.rs needs.
pub(crate) use state::Player;
pub(crate) use subscription::subscription;
pub(crate) use update::update;
pub(crate) use view::view;
