use super::{PlayerError, SearchHit, SearchResults};
use crate::model::{Playlist, Video, VideoLibrary};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashMap;

/// What the player is doing right now
///
/// Paused carries the video id just like Playing, so a paused flag
/// cannot exist without a current video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackState {
    Stopped,
    Playing(String),
    Paused(String),
}

impl PlaybackState {
    /// Id of the current video, whether playing or paused
    pub fn current_id(&self) -> Option<&str> {
        match self {
            PlaybackState::Stopped => None,
            PlaybackState::Playing(id) | PlaybackState::Paused(id) => Some(id),
        }
    }
}

/// The video player: library, playlists, and playback state
///
/// Playlists are kept in a map keyed by the upper-cased name, which
/// makes name lookup case-insensitive without scanning; the original
/// casing lives inside each [`Playlist`].
pub struct VideoPlayer {
    library: VideoLibrary,
    playlists: HashMap<String, Playlist>,
    state: PlaybackState,
}

impl VideoPlayer {
    /// Create a player over a loaded library, with no playlists and
    /// nothing playing.
    pub fn new(library: VideoLibrary) -> Self {
        Self {
            library,
            playlists: HashMap::new(),
            state: PlaybackState::Stopped,
        }
    }

    /// The underlying library
    pub fn library(&self) -> &VideoLibrary {
        &self.library
    }

    /// Current playback state
    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    fn current_video(&self) -> Option<&Video> {
        self.state
            .current_id()
            .and_then(|id| self.library.get_video(id))
    }

    fn playlist_key(name: &str) -> String {
        name.to_uppercase()
    }

    // ---- library ----

    pub fn number_of_videos(&self) -> Vec<String> {
        vec![format!("{} videos in the library", self.library.len())]
    }

    pub fn show_all_videos(&self) -> Vec<String> {
        let mut videos: Vec<&Video> = self.library.all_videos().collect();
        videos.sort_by(|a, b| a.title.cmp(&b.title));

        let mut lines = vec!["Here's a list of all available videos:".to_string()];
        lines.extend(videos.iter().map(|v| v.display_line()));
        lines
    }

    // ---- playback ----

    /// Play a video by id, stopping whatever was current first.
    /// On failure the whole state, including a paused video, is left
    /// untouched.
    pub fn play_video(&mut self, video_id: &str) -> Result<Vec<String>, PlayerError> {
        let video = self
            .library
            .get_video(video_id)
            .ok_or(PlayerError::UnknownVideo { action: "play" })?;
        if let Some(reason) = video.flag_reason() {
            return Err(PlayerError::FlaggedVideo {
                action: "play",
                reason: reason.to_string(),
            });
        }
        let title = video.title.clone();

        let mut lines = Vec::new();
        if let Some(current) = self.current_video() {
            lines.push(format!("Stopping video: {}", current.title));
        }
        self.state = PlaybackState::Playing(video_id.to_string());
        lines.push(format!("Playing video: {}", title));
        Ok(lines)
    }

    pub fn stop_video(&mut self) -> Result<Vec<String>, PlayerError> {
        match self.current_video() {
            Some(video) => {
                let line = format!("Stopping video: {}", video.title);
                self.state = PlaybackState::Stopped;
                Ok(vec![line])
            }
            None => Err(PlayerError::NothingPlaying { action: "stop" }),
        }
    }

    /// Play a uniformly-chosen non-flagged video. The RNG is injected
    /// so sessions can be replayed in tests.
    pub fn play_random_video<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<Vec<String>, PlayerError> {
        let candidates: Vec<&Video> = self
            .library
            .all_videos()
            .filter(|v| !v.is_flagged())
            .collect();
        let choice = candidates
            .choose(rng)
            .ok_or(PlayerError::NoVideosAvailable)?;
        let video_id = choice.id.clone();
        self.play_video(&video_id)
    }

    pub fn pause_video(&mut self) -> Result<Vec<String>, PlayerError> {
        match &self.state {
            PlaybackState::Stopped => Err(PlayerError::NothingPlaying { action: "pause" }),
            PlaybackState::Paused(_) => {
                let title = self.current_video().map(|v| v.title.clone()).unwrap_or_default();
                Ok(vec![format!("Video already paused: {}", title)])
            }
            PlaybackState::Playing(id) => {
                let id = id.clone();
                let title = self.current_video().map(|v| v.title.clone()).unwrap_or_default();
                self.state = PlaybackState::Paused(id);
                Ok(vec![format!("Pausing video: {}", title)])
            }
        }
    }

    pub fn continue_video(&mut self) -> Result<Vec<String>, PlayerError> {
        match &self.state {
            PlaybackState::Stopped => Err(PlayerError::NothingPlaying { action: "continue" }),
            PlaybackState::Playing(_) => Err(PlayerError::NotPaused),
            PlaybackState::Paused(id) => {
                let id = id.clone();
                let title = self.current_video().map(|v| v.title.clone()).unwrap_or_default();
                self.state = PlaybackState::Playing(id);
                Ok(vec![format!("Continuing video: {}", title)])
            }
        }
    }

    pub fn show_playing(&self) -> Vec<String> {
        match (&self.state, self.current_video()) {
            (PlaybackState::Playing(_), Some(video)) => {
                vec![format!("Currently playing: {}", video.display_line())]
            }
            (PlaybackState::Paused(_), Some(video)) => {
                vec![format!("Currently playing: {} - PAUSED", video.display_line())]
            }
            _ => vec!["No video is currently playing".to_string()],
        }
    }

    // ---- playlists ----

    pub fn create_playlist(&mut self, name: &str) -> Result<Vec<String>, PlayerError> {
        let key = Self::playlist_key(name);
        if self.playlists.contains_key(&key) {
            return Err(PlayerError::DuplicatePlaylistName);
        }
        self.playlists.insert(key, Playlist::new(name.to_string()));
        Ok(vec![format!("Successfully created new playlist: {}", name)])
    }

    pub fn add_to_playlist(&mut self, name: &str, video_id: &str) -> Result<Vec<String>, PlayerError> {
        let key = Self::playlist_key(name);
        if !self.playlists.contains_key(&key) {
            return Err(PlayerError::UnknownPlaylist {
                action: "add video to",
                name: name.to_string(),
            });
        }

        let video = self
            .library
            .get_video(video_id)
            .ok_or_else(|| PlayerError::AddUnknownVideo {
                name: name.to_string(),
            })?;
        if let Some(reason) = video.flag_reason() {
            return Err(PlayerError::AddFlaggedVideo {
                name: name.to_string(),
                reason: reason.to_string(),
            });
        }
        let title = video.title.clone();

        // Checked above, so get_mut cannot miss
        let playlist = self.playlists.get_mut(&key).ok_or_else(|| {
            PlayerError::UnknownPlaylist {
                action: "add video to",
                name: name.to_string(),
            }
        })?;
        if !playlist.add(video_id.to_string()) {
            return Err(PlayerError::VideoAlreadyAdded {
                name: name.to_string(),
            });
        }
        Ok(vec![format!("Added video to {}: {}", name, title)])
    }

    pub fn remove_from_playlist(
        &mut self,
        name: &str,
        video_id: &str,
    ) -> Result<Vec<String>, PlayerError> {
        let key = Self::playlist_key(name);
        if !self.playlists.contains_key(&key) {
            return Err(PlayerError::UnknownPlaylist {
                action: "remove video from",
                name: name.to_string(),
            });
        }

        let title = self
            .library
            .get_video(video_id)
            .map(|v| v.title.clone())
            .ok_or_else(|| PlayerError::RemoveUnknownVideo {
                name: name.to_string(),
            })?;

        let playlist = self.playlists.get_mut(&key).ok_or_else(|| {
            PlayerError::UnknownPlaylist {
                action: "remove video from",
                name: name.to_string(),
            }
        })?;
        if !playlist.remove(video_id) {
            return Err(PlayerError::VideoNotInPlaylist {
                name: name.to_string(),
            });
        }
        Ok(vec![format!("Removed video from {}: {}", name, title)])
    }

    pub fn clear_playlist(&mut self, name: &str) -> Result<Vec<String>, PlayerError> {
        let key = Self::playlist_key(name);
        let playlist = self
            .playlists
            .get_mut(&key)
            .ok_or_else(|| PlayerError::UnknownPlaylist {
                action: "clear playlist",
                name: name.to_string(),
            })?;
        playlist.clear();
        Ok(vec![format!("Successfully removed all videos from {}", name)])
    }

    pub fn delete_playlist(&mut self, name: &str) -> Result<Vec<String>, PlayerError> {
        let key = Self::playlist_key(name);
        self.playlists
            .remove(&key)
            .ok_or_else(|| PlayerError::UnknownPlaylist {
                action: "delete playlist",
                name: name.to_string(),
            })?;
        Ok(vec![format!("Deleted playlist: {}", name)])
    }

    pub fn show_all_playlists(&self) -> Vec<String> {
        if self.playlists.is_empty() {
            return vec!["No playlists exist yet".to_string()];
        }

        let mut names: Vec<&str> = self.playlists.values().map(|p| p.name()).collect();
        names.sort_unstable();

        let mut lines = vec!["Showing all playlists:".to_string()];
        lines.extend(names.into_iter().map(str::to_string));
        lines
    }

    pub fn show_playlist(&self, name: &str) -> Result<Vec<String>, PlayerError> {
        let key = Self::playlist_key(name);
        let playlist = self
            .playlists
            .get(&key)
            .ok_or_else(|| PlayerError::UnknownPlaylist {
                action: "show playlist",
                name: name.to_string(),
            })?;

        let mut lines = vec![format!("Showing playlist: {}", name)];
        if playlist.is_empty() {
            lines.push("No videos here yet".to_string());
        } else {
            lines.extend(
                playlist
                    .video_ids()
                    .iter()
                    .filter_map(|id| self.library.get_video(id))
                    .map(|v| v.display_line()),
            );
        }
        Ok(lines)
    }

    // ---- search ----

    fn search_with<F>(&self, query: &str, matches: F) -> SearchResults
    where
        F: Fn(&Video) -> bool,
    {
        let mut found: Vec<&Video> = self
            .library
            .all_videos()
            .filter(|v| !v.is_flagged())
            .filter(|v| matches(v))
            .collect();
        found.sort_by(|a, b| a.title.cmp(&b.title));

        let hits = found
            .into_iter()
            .map(|v| SearchHit {
                video_id: v.id.clone(),
                line: v.display_line(),
            })
            .collect();
        SearchResults::new(query.to_string(), hits)
    }

    /// Case-insensitive substring search on titles. Flagged videos
    /// never appear in the results.
    pub fn search_videos(&self, term: &str) -> SearchResults {
        let needle = term.to_lowercase();
        self.search_with(term, |v| v.title.to_lowercase().contains(&needle))
    }

    /// Exact (case-insensitive) tag match. Flagged videos never appear
    /// in the results.
    pub fn search_videos_with_tag(&self, tag: &str) -> SearchResults {
        self.search_with(tag, |v| {
            v.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
        })
    }

    // ---- flag / allow ----

    /// Flag a video, stopping it first if it is the current one.
    /// An empty reason is recorded as "Not supplied".
    pub fn flag_video(&mut self, video_id: &str, reason: &str) -> Result<Vec<String>, PlayerError> {
        let video = self
            .library
            .get_video(video_id)
            .ok_or(PlayerError::UnknownVideo { action: "flag" })?;
        if video.is_flagged() {
            return Err(PlayerError::AlreadyFlagged);
        }

        let mut lines = Vec::new();
        if self.state.current_id() == Some(video_id) {
            if let Some(current) = self.current_video() {
                lines.push(format!("Stopping video: {}", current.title));
            }
            self.state = PlaybackState::Stopped;
        }

        // Lookup checked above
        if let Some(video) = self.library.get_video_mut(video_id) {
            video.set_flag(reason);
            lines.push(format!(
                "Successfully flagged video: {} (reason: {})",
                video.title,
                video.flag_reason().unwrap_or_default()
            ));
        }
        Ok(lines)
    }

    pub fn allow_video(&mut self, video_id: &str) -> Result<Vec<String>, PlayerError> {
        let video = self
            .library
            .get_video_mut(video_id)
            .ok_or(PlayerError::UnknownVideo {
                action: "remove flag from",
            })?;
        if !video.is_flagged() {
            return Err(PlayerError::NotFlagged);
        }
        video.clear_flag();
        Ok(vec![format!(
            "Successfully removed flag from video: {}",
            video.title
        )])
    }
}
