/// Represents a single video with all its metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Video {
    /// Unique identifier for this video
    pub id: String,

    /// Video title
    pub title: String,

    /// Where the video actually lives
    pub url: String,

    /// Tags, in catalog order (e.g. `#cat`, `#animal`)
    pub tags: Vec<String>,

    /// Flag reason when the video is restricted, `None` otherwise.
    /// A single field so the flag and its reason cannot drift apart.
    flag: Option<String>,
}

impl Video {
    /// Create a new unflagged video
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        url: impl Into<String>,
        tags: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            url: url.into(),
            tags,
            flag: None,
        }
    }

    /// Whether this video is currently flagged
    pub fn is_flagged(&self) -> bool {
        self.flag.is_some()
    }

    /// The flag reason, if flagged
    pub fn flag_reason(&self) -> Option<&str> {
        self.flag.as_deref()
    }

    /// Mark this video as flagged. An empty reason is recorded as
    /// "Not supplied".
    pub fn set_flag(&mut self, reason: &str) {
        let reason = if reason.is_empty() {
            "Not supplied"
        } else {
            reason
        };
        self.flag = Some(reason.to_string());
    }

    /// Clear the flag and its reason
    pub fn clear_flag(&mut self) {
        self.flag = None;
    }

    /// Render the standard one-line display form:
    /// `Title (id) [#tag1 #tag2]`, with the flag annotation appended
    /// when flagged.
    pub fn display_line(&self) -> String {
        let mut line = format!("{} ({}) [{}]", self.title, self.id, self.tags.join(" "));
        if let Some(reason) = self.flag_reason() {
            line.push_str(&format!(" - FLAGGED (reason: {})", reason));
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cat_video() -> Video {
        Video::new(
            "amazing_cats_video_id",
            "Amazing Cats",
            "https://video.example/amazing_cats",
            vec!["#cat".to_string(), "#animal".to_string()],
        )
    }

    #[test]
    fn test_display_line() {
        let video = cat_video();
        assert_eq!(
            video.display_line(),
            "Amazing Cats (amazing_cats_video_id) [#cat #animal]"
        );
    }

    #[test]
    fn test_display_line_no_tags() {
        let video = Video::new("nothing_video_id", "Video about nothing", "", vec![]);
        assert_eq!(
            video.display_line(),
            "Video about nothing (nothing_video_id) []"
        );
    }

    #[test]
    fn test_flag_annotation() {
        let mut video = cat_video();
        video.set_flag("dont_like_cats");
        assert!(video.is_flagged());
        assert_eq!(
            video.display_line(),
            "Amazing Cats (amazing_cats_video_id) [#cat #animal] \
             - FLAGGED (reason: dont_like_cats)"
        );
    }

    #[test]
    fn test_empty_flag_reason_defaults() {
        let mut video = cat_video();
        video.set_flag("");
        assert_eq!(video.flag_reason(), Some("Not supplied"));

        video.clear_flag();
        assert!(!video.is_flagged());
        assert_eq!(video.flag_reason(), None);
    }
}
