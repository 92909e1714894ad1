//! The video player state machine
//!
//! Holds the library plus all mutable session state: what is playing or
//! paused, and the user's playlists. Every operation returns either the
//! exact lines to print or a typed error whose `Display` is the exact
//! failure message, so the shell just prints whichever it gets.

mod error;
mod search;
mod video_player;

pub use error::PlayerError;
pub use search::{SearchHit, SearchResults};
pub use video_player::{PlaybackState, VideoPlayer};
