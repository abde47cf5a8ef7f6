//! Unified data model for the video catalog
//!
//! This module defines the entities the console operates on, independent of
//! the catalog source format and of command handling.

mod catalog;
mod playlist;
mod video;

pub use catalog::Catalog;
pub use playlist::Playlist;
pub use video::Video;
