//! core/error.rs
//! Error type shared by the playlist store, the sequencer and engine adapters.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayerError {
    /// Playlist index outside `0..len`. Means the UI asked for something it
    /// should have disabled.
    #[error("index {index} out of range (playlist has {len} entries)")]
    OutOfRange { index: usize, len: usize },

    /// The engine could not open or decode the requested source.
    #[error("{0}")]
    Load(String),

    /// Engine failure during playback, or while releasing a handle.
    #[error("{0}")]
    Engine(String),
}

pub type Result<T> = std::result::Result<T, PlayerError>;
