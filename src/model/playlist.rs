/// Represents a user-created playlist
///
/// A playlist holds references to library videos by id, in insertion
/// order. All mutation goes through methods here so the no-duplicates
/// invariant cannot be broken from outside.
#[derive(Debug, Clone)]
pub struct Playlist {
    /// Playlist name, as the user originally typed it
    name: String,

    /// Video ids in insertion order, no duplicates
    video_ids: Vec<String>,
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new(name: String) -> Self {
        Self {
            name,
            video_ids: Vec::new(),
        }
    }

    /// Playlist name with its original casing
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the playlist already contains a video
    pub fn contains(&self, video_id: &str) -> bool {
        self.video_ids.iter().any(|id| id == video_id)
    }

    /// Append a video id. Returns false (and leaves the playlist
    /// unchanged) if the id is already present.
    pub fn add(&mut self, video_id: String) -> bool {
        if self.contains(&video_id) {
            return false;
        }
        self.video_ids.push(video_id);
        true
    }

    /// Remove a video id. Returns false if it was not present.
    pub fn remove(&mut self, video_id: &str) -> bool {
        match self.video_ids.iter().position(|id| id == video_id) {
            Some(index) => {
                self.video_ids.remove(index);
                true
            }
            None => false,
        }
    }

    /// Remove all videos, keeping the playlist itself
    pub fn clear(&mut self) {
        self.video_ids.clear();
    }

    /// Video ids in insertion order
    pub fn video_ids(&self) -> &[String] {
        &self.video_ids
    }

    /// Number of videos in this playlist
    pub fn len(&self) -> usize {
        self.video_ids.len()
    }

    /// Check if the playlist is empty
    pub fn is_empty(&self) -> bool {
        self.video_ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut playlist = Playlist::new("road_trip".to_string());
        assert!(playlist.add("v3".to_string()));
        assert!(playlist.add("v1".to_string()));
        assert!(playlist.add("v2".to_string()));
        assert_eq!(playlist.video_ids(), ["v3", "v1", "v2"]);
    }

    #[test]
    fn test_add_rejects_duplicates() {
        let mut playlist = Playlist::new("road_trip".to_string());
        assert!(playlist.add("v1".to_string()));
        assert!(!playlist.add("v1".to_string()));
        assert_eq!(playlist.len(), 1);
    }

    #[test]
    fn test_remove() {
        let mut playlist = Playlist::new("road_trip".to_string());
        playlist.add("v1".to_string());
        playlist.add("v2".to_string());

        assert!(playlist.remove("v1"));
        assert!(!playlist.remove("v1"));
        assert_eq!(playlist.video_ids(), ["v2"]);
    }

    #[test]
    fn test_clear_keeps_playlist() {
        let mut playlist = Playlist::new("road_trip".to_string());
        playlist.add("v1".to_string());
        playlist.clear();
        assert!(playlist.is_empty());
        assert_eq!(playlist.name(), "road_trip");
    }
}
