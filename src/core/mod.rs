//! core/mod.rs
//!
//! The brain of the app:
//! - Playlist store (ordered entries, index bookkeeping)
//! - Playback sequencing (which entry plays, what the engine is told)
//! - Engine adapter (rodio thread) and media probing (symphonia)
//! - Turning picked/dropped paths into playlist entries
//!
//! This keeps the GUI dumb: it forwards button presses to the sequencer and
//! renders whatever the sequencer reports back.

pub mod error;
pub mod library;
pub mod playback;
pub mod playlist;
pub mod tags;
pub mod types;
