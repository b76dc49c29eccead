//! core/tags/read.rs
//! Turn a media path into a playlist label.
//!
//! - MP3s with ID3 title (and maybe artist) show as "Artist - Title"
//! - Everything else, and any tag read failure, shows the file name

use std::path::Path;

use id3::{Tag, TagLike};

use super::super::types::file_name;

pub fn display_name(path: &Path) -> String {
    tagged_name(path).unwrap_or_else(|| file_name(path))
}

fn tagged_name(path: &Path) -> Option<String> {
    let is_mp3 = path
        .extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("mp3"));
    if !is_mp3 {
        return None;
    }

    let tag = Tag::read_from_path(path).ok()?;
    let title = clean(tag.title())?;

    Some(match clean(tag.artist()) {
        Some(artist) => format!("{artist} - {title}"),
        None => title.to_string(),
    })
}

fn clean(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}
