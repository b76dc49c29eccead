//! core/library.rs
//! Which files count as media, and turning picked/dropped paths into entries.

use std::path::{Path, PathBuf};

use tracing::warn;

use super::tags;
use super::types::PlaylistEntry;

pub const AUDIO_EXTENSIONS: &[&str] = &["mp3", "wav", "m4a"];
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "flv", "avi", "mov"];
pub const MEDIA_EXTENSIONS: &[&str] = &["mp3", "mp4", "wav", "m4a", "flv", "avi", "mov"];

pub fn is_media(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| MEDIA_EXTENSIONS.iter().any(|m| ext.eq_ignore_ascii_case(m)))
        .unwrap_or(false)
}

/// Build entries for files the user picked. Every path is kept as-is:
/// the picker already filtered, and "All Files" means all files.
pub fn entries_from_paths(paths: Vec<PathBuf>) -> Vec<PlaylistEntry> {
    paths
        .into_iter()
        .map(|path| {
            let name = tags::display_name(&path);
            PlaylistEntry::new(path, name)
        })
        .collect()
}

/// Expand dropped paths: media files are kept, folders are walked for media.
/// Folder contents come back sorted; dropped files keep their order.
pub fn collect_media(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut out = Vec::new();

    for path in paths {
        if path.is_dir() {
            let mut found = Vec::new();
            if let Err(e) = walk_dir(path, &mut found) {
                warn!(error = %e, "folder scan incomplete");
            }
            found.sort();
            out.extend(found);
        } else if is_media(path) {
            out.push(path.clone());
        }
    }

    out
}

fn walk_dir(dir: &Path, out: &mut Vec<PathBuf>) -> Result<(), String> {
    let entries = std::fs::read_dir(dir).map_err(|e| format!("{}: {e}", dir.display()))?;

    for entry in entries {
        let entry = entry.map_err(|e| e.to_string())?;
        let path = entry.path();

        if path.is_dir() {
            walk_dir(&path, out)?;
        } else if is_media(&path) {
            out.push(path);
        }
    }

    Ok(())
}
