//! Unified data model for the video catalog
//!
//! This module defines the data structures shared by the player and the
//! shell: videos, the read-only library they live in, and user playlists.

mod library;
mod playlist;
mod video;

pub use library::{CatalogError, VideoLibrary};
pub use playlist::Playlist;
pub use video::Video;
