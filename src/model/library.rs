use super::Video;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Error raised while loading a catalog file
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed catalog line {line}: expected 'Title|id|url|tags', got '{text}'")]
    MalformedLine { line: usize, text: String },

    #[error("duplicate video id '{id}' on catalog line {line}")]
    DuplicateId { id: String, line: usize },
}

/// Read-only in-memory collection of videos, loaded once at startup
#[derive(Debug, Clone)]
pub struct VideoLibrary {
    /// All videos indexed by their ID
    videos: HashMap<String, Video>,
}

impl VideoLibrary {
    /// Create a new empty library
    pub fn new() -> Self {
        Self {
            videos: HashMap::new(),
        }
    }

    /// The built-in sample catalog, used when no catalog file is given
    pub fn builtin() -> Self {
        let mut library = Self::new();
        let catalog = [
            ("funny_dogs_video_id", "Funny Dogs", &["#dog", "#animal"][..]),
            ("amazing_cats_video_id", "Amazing Cats", &["#cat", "#animal"]),
            ("another_cat_video_id", "Another Cat Video", &["#cat", "#animal"]),
            ("life_at_google_video_id", "Life at Google", &["#google", "#career"]),
            ("nothing_video_id", "Video about nothing", &[]),
        ];
        for (id, title, tags) in catalog {
            let url = format!("https://video.example/{}", id);
            let tags = tags.iter().map(|t| t.to_string()).collect();
            library.add_video(Video::new(id, title, url, tags));
        }
        library
    }

    /// Load a library from a plain-text catalog file
    ///
    /// One video per line: `Title|id|url|tag1,tag2,…` (tags may be empty).
    /// Blank lines and lines starting with `#` are skipped.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let text = fs::read_to_string(path)?;
        let mut library = Self::new();

        for (index, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let fields: Vec<&str> = line.split('|').map(str::trim).collect();
            let &[title, id, url, tags] = fields.as_slice() else {
                return Err(CatalogError::MalformedLine {
                    line: index + 1,
                    text: line.to_string(),
                });
            };
            if title.is_empty() || id.is_empty() {
                return Err(CatalogError::MalformedLine {
                    line: index + 1,
                    text: line.to_string(),
                });
            }
            if library.videos.contains_key(id) {
                return Err(CatalogError::DuplicateId {
                    id: id.to_string(),
                    line: index + 1,
                });
            }

            let tags = tags
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect();
            library.add_video(Video::new(id, title, url, tags));
        }

        log::info!("Loaded {} videos from {:?}", library.len(), path);
        Ok(library)
    }

    /// Add a video to the library
    pub fn add_video(&mut self, video: Video) {
        self.videos.insert(video.id.clone(), video);
    }

    /// Get a video by ID
    pub fn get_video(&self, id: &str) -> Option<&Video> {
        self.videos.get(id)
    }

    /// Get a video by ID for flag/allow mutation
    pub(crate) fn get_video_mut(&mut self, id: &str) -> Option<&mut Video> {
        self.videos.get_mut(id)
    }

    /// All videos, in no particular order
    pub fn all_videos(&self) -> impl Iterator<Item = &Video> {
        self.videos.values()
    }

    /// Total number of videos
    pub fn len(&self) -> usize {
        self.videos.len()
    }

    /// Check if the library is empty
    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}

impl Default for VideoLibrary {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_builtin_catalog() {
        let library = VideoLibrary::builtin();
        assert_eq!(library.len(), 5);

        let cats = library.get_video("amazing_cats_video_id").unwrap();
        assert_eq!(cats.title, "Amazing Cats");
        assert_eq!(cats.tags, ["#cat", "#animal"]);
        assert!(!cats.is_flagged());
    }

    #[test]
    fn test_get_video_unknown_id() {
        let library = VideoLibrary::builtin();
        assert!(library.get_video("no_such_video").is_none());
    }

    #[test]
    fn test_load_catalog_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "# sample catalog").unwrap();
        writeln!(file, "Amazing Cats|v1|https://video.example/v1|#cat,#animal").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "Video about nothing|v2|https://video.example/v2|").unwrap();

        let library = VideoLibrary::load(file.path()).unwrap();
        assert_eq!(library.len(), 2);
        assert_eq!(library.get_video("v1").unwrap().tags, ["#cat", "#animal"]);
        assert!(library.get_video("v2").unwrap().tags.is_empty());
    }

    #[test]
    fn test_load_rejects_malformed_line() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Amazing Cats|v1|https://video.example/v1|#cat").unwrap();
        writeln!(file, "just a title").unwrap();

        let err = VideoLibrary::load(file.path()).unwrap_err();
        assert!(matches!(err, CatalogError::MalformedLine { line: 2, .. }));
    }

    #[test]
    fn test_load_rejects_duplicate_id() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Amazing Cats|v1|https://video.example/v1|#cat").unwrap();
        writeln!(file, "Copy Cats|v1|https://video.example/v1-copy|#cat").unwrap();

        let err = VideoLibrary::load(file.path()).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId { line: 2, .. }));
    }
}
