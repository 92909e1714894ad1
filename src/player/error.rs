use thiserror::Error;

/// A player operation that could not be carried out
///
/// Nothing here is fatal: the shell prints the message and carries on.
/// The `Display` impls are the exact user-facing templates, so tests can
/// assert on `err.to_string()`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PlayerError {
    /// `action` is the verb phrase for the attempted operation
    /// ("play", "flag", "remove flag from", ...)
    #[error("Cannot {action} video: Video does not exist")]
    UnknownVideo { action: &'static str },

    #[error("Cannot {action} video: Video is currently flagged (reason: {reason})")]
    FlaggedVideo { action: &'static str, reason: String },

    #[error("Cannot {action} video: No video is currently playing")]
    NothingPlaying { action: &'static str },

    #[error("Cannot continue video: Video is not paused")]
    NotPaused,

    #[error("No videos available")]
    NoVideosAvailable,

    #[error("Cannot create playlist: A playlist with the same name already exists")]
    DuplicatePlaylistName,

    /// `action` is the verb phrase including the trailing preposition
    /// where one belongs ("add video to", "show playlist", ...)
    #[error("Cannot {action} {name}: Playlist does not exist")]
    UnknownPlaylist { action: &'static str, name: String },

    #[error("Cannot add video to {name}: Video does not exist")]
    AddUnknownVideo { name: String },

    #[error("Cannot add video to {name}: Video is currently flagged (reason: {reason})")]
    AddFlaggedVideo { name: String, reason: String },

    #[error("Cannot add video to {name}: Video already added")]
    VideoAlreadyAdded { name: String },

    #[error("Cannot remove video from {name}: Video does not exist")]
    RemoveUnknownVideo { name: String },

    #[error("Cannot remove video from {name}: Video is not in playlist")]
    VideoNotInPlaylist { name: String },

    #[error("Cannot flag video: Video is already flagged")]
    AlreadyFlagged,

    #[error("Cannot remove flag from video: Video is not flagged")]
    NotFlagged,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_match_templates() {
        assert_eq!(
            PlayerError::UnknownVideo { action: "play" }.to_string(),
            "Cannot play video: Video does not exist"
        );
        assert_eq!(
            PlayerError::FlaggedVideo {
                action: "play",
                reason: "dont_like_cats".to_string()
            }
            .to_string(),
            "Cannot play video: Video is currently flagged (reason: dont_like_cats)"
        );
        assert_eq!(
            PlayerError::UnknownPlaylist {
                action: "show playlist",
                name: "road_trip".to_string()
            }
            .to_string(),
            "Cannot show playlist road_trip: Playlist does not exist"
        );
        assert_eq!(
            PlayerError::NothingPlaying { action: "stop" }.to_string(),
            "Cannot stop video: No video is currently playing"
        );
    }
}
