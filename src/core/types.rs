//! Core data types shared between core logic and the UI.
//!
//! Rule of thumb:
//! - These structs are boring bags of data
//! - No GUI code
//! - No engine code

use std::path::{Path, PathBuf};
use std::time::Duration;

/// One playlist item: where the media lives plus what we show for it.
///
/// Entries never change after they are added. Identity is positional
/// (index in the playlist), so duplicates are fine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistEntry {
    pub source: PathBuf,
    pub name: String,
}

impl PlaylistEntry {
    pub fn new(source: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            name: name.into(),
        }
    }

    /// Entry named after the file (what the playlist shows by default).
    pub fn from_path(source: impl Into<PathBuf>) -> Self {
        let source = source.into();
        let name = file_name(&source);
        Self { source, name }
    }
}

/// Gets the file name (with extension), falling back to the full path.
pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// Format a duration as `MM:SS`. Minutes keep counting past 59.
pub fn format_clock(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_pads_and_does_not_wrap_minutes() {
        assert_eq!(format_clock(Duration::ZERO), "00:00");
        assert_eq!(format_clock(Duration::from_millis(65_900)), "01:05");
        assert_eq!(format_clock(Duration::from_secs(3 * 3600 + 7)), "180:07");
    }

    #[test]
    fn entry_from_path_uses_file_name() {
        let e = PlaylistEntry::from_path("/music/Intro.mp3");
        assert_eq!(e.name, "Intro.mp3");
        assert_eq!(e.source, PathBuf::from("/music/Intro.mp3"));
    }
}
