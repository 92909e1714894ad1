//! tubeplay - an interactive in-memory video player
//!
//! A video library, a player state machine (play/pause/stop/continue,
//! random play, flagging), user playlists, and a line-oriented command
//! shell on top.

pub mod model;
pub mod player;
pub mod shell;

pub use model::{Playlist, Video, VideoLibrary};
pub use player::{PlayerError, VideoPlayer};
pub use shell::Shell;
