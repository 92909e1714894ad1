//! Search results, decoupled from the prompt that follows them
//!
//! The player produces a `SearchResults`; the shell renders it, asks the
//! user whether to play one, and maps the answer back to a video id.
//! Flagged videos never appear here, and numbering always lines up with
//! what was printed.

/// One search match, captured at search time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    /// Id of the matched video
    pub video_id: String,

    /// The video's display line at the time of the search
    pub line: String,
}

/// Outcome of a title or tag search
#[derive(Debug, Clone)]
pub struct SearchResults {
    /// The search term or tag as the user typed it
    query: String,

    /// Non-flagged matches in ascending title order
    hits: Vec<SearchHit>,
}

impl SearchResults {
    pub(crate) fn new(query: String, hits: Vec<SearchHit>) -> Self {
        Self { query, hits }
    }

    /// Whether the search matched anything
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    /// Number of matches
    pub fn len(&self) -> usize {
        self.hits.len()
    }

    /// The video id for a 1-based selection, if in range
    pub fn video_id(&self, selection: usize) -> Option<&str> {
        if selection == 0 {
            return None;
        }
        self.hits.get(selection - 1).map(|hit| hit.video_id.as_str())
    }

    /// Render the result listing: either the no-results line, or the
    /// header plus numbered matches.
    pub fn render(&self) -> Vec<String> {
        if self.hits.is_empty() {
            return vec![format!("No search results for {}", self.query)];
        }

        let mut lines = vec![format!("Here are the results for {}:", self.query)];
        for (index, hit) in self.hits.iter().enumerate() {
            lines.push(format!("{}) {}", index + 1, hit.line));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results() -> SearchResults {
        SearchResults::new(
            "cat".to_string(),
            vec![
                SearchHit {
                    video_id: "v1".to_string(),
                    line: "Amazing Cats (v1) [#cat #animal]".to_string(),
                },
                SearchHit {
                    video_id: "v2".to_string(),
                    line: "Another Cat Video (v2) [#cat #animal]".to_string(),
                },
            ],
        )
    }

    #[test]
    fn test_render_numbers_from_one() {
        assert_eq!(
            results().render(),
            [
                "Here are the results for cat:",
                "1) Amazing Cats (v1) [#cat #animal]",
                "2) Another Cat Video (v2) [#cat #animal]",
            ]
        );
    }

    #[test]
    fn test_render_no_results() {
        let empty = SearchResults::new("funny".to_string(), Vec::new());
        assert_eq!(empty.render(), ["No search results for funny"]);
    }

    #[test]
    fn test_selection_bounds() {
        let results = results();
        assert_eq!(results.video_id(0), None);
        assert_eq!(results.video_id(1), Some("v1"));
        assert_eq!(results.video_id(2), Some("v2"));
        assert_eq!(results.video_id(3), None);
    }
}
