//! core/playlist.rs
//! Playlist store: ordered entries + index-shift bookkeeping.
//!
//! The store knows nothing about playback. The sequencer asks
//! [`IndexShift::after_removal`] what a removal means for the session it owns.

use super::error::{PlayerError, Result};
use super::types::PlaylistEntry;

#[derive(Debug, Default, Clone)]
pub struct Playlist {
    entries: Vec<PlaylistEntry>,
}

/// What happens to a "current index" when an entry is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexShift {
    /// Nothing was current, or the removed entry came after it.
    Unchanged,
    /// The current entry itself was removed; the session must go.
    Invalidated,
    /// An earlier entry was removed; the same entry now sits at this index.
    MovedTo(usize),
}

impl IndexShift {
    pub fn after_removal(current: Option<usize>, removed: usize) -> Self {
        match current {
            Some(cur) if cur == removed => IndexShift::Invalidated,
            Some(cur) if removed < cur => IndexShift::MovedTo(cur - 1),
            _ => IndexShift::Unchanged,
        }
    }
}

impl Playlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append entries in the given order. Returns how many were added.
    pub fn add(&mut self, entries: impl IntoIterator<Item = PlaylistEntry>) -> usize {
        let before = self.entries.len();
        self.entries.extend(entries);
        self.entries.len() - before
    }

    /// Remove one entry; everything after it moves down by one.
    pub fn remove_at(&mut self, index: usize) -> Result<PlaylistEntry> {
        self.check(index)?;
        Ok(self.entries.remove(index))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn get(&self, index: usize) -> Result<&PlaylistEntry> {
        self.check(index)?;
        Ok(&self.entries[index])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlaylistEntry> {
        self.entries.iter()
    }

    fn check(&self, index: usize) -> Result<()> {
        if index < self.entries.len() {
            Ok(())
        } else {
            Err(PlayerError::OutOfRange {
                index,
                len: self.entries.len(),
            })
        }
    }
}
