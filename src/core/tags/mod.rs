//! core/tags/mod.rs
//!
//! ID3 tag reading for playlist labels.
//! Public API:
//! - [`display_name`] picks the label a playlist row shows for a file.

mod read;

pub use read::display_name;
