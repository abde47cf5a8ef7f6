use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents a single video in the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Video {
    /// Unique identifier, stable for the life of the catalog
    pub id: String,

    /// Display title (not necessarily unique)
    pub title: String,

    /// Tags in source order, each carrying its leading '#'
    pub tags: Vec<String>,

    /// Moderation flag reason; `Some` means the video is flagged
    flag_reason: Option<String>,
}

impl Video {
    /// Create an unflagged video
    pub fn new(id: impl Into<String>, title: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            tags,
            flag_reason: None,
        }
    }

    /// Whether the video is currently flagged
    pub fn is_flagged(&self) -> bool {
        self.flag_reason.is_some()
    }

    /// The stored flag reason, if flagged
    pub fn flag_reason(&self) -> Option<&str> {
        self.flag_reason.as_deref()
    }

    /// Flag the video with the given reason, replacing any previous reason
    pub fn flag(&mut self, reason: impl Into<String>) {
        self.flag_reason = Some(reason.into());
    }

    /// Clear the flag and its reason
    pub fn unflag(&mut self) {
        self.flag_reason = None;
    }

    /// Tags rendered as `[#tag1 #tag2]`, or `[]` when there are none
    pub fn tag_list(&self) -> String {
        format!("[{}]", self.tags.join(" "))
    }
}

/// Canonical catalog line: `Title (id) [tags]`, with the flag annotation
/// appended when the video is flagged
impl fmt::Display for Video {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) {}", self.title, self.id, self.tag_list())?;
        if let Some(reason) = &self.flag_reason {
            write!(f, " - FLAGGED (reason: {reason})")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(list: &[&str]) -> Vec<String> {
        list.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_display_line() {
        let video = Video::new("amazing_cats_video_id", "Amazing Cats", tags(&["#cat", "#animal"]));
        assert_eq!(
            video.to_string(),
            "Amazing Cats (amazing_cats_video_id) [#cat #animal]"
        );
    }

    #[test]
    fn test_display_line_without_tags() {
        // Empty tag list still renders the brackets
        let video = Video::new("nothing_video_id", "Video about nothing", tags(&[]));
        assert_eq!(video.to_string(), "Video about nothing (nothing_video_id) []");
    }

    #[test]
    fn test_display_line_flagged() {
        let mut video = Video::new("another_cat_video_id", "Another Cat Video", tags(&["#cat"]));
        video.flag("Flagged");
        assert_eq!(
            video.to_string(),
            "Another Cat Video (another_cat_video_id) [#cat] - FLAGGED (reason: Flagged)"
        );
    }

    #[test]
    fn test_flag_and_unflag() {
        let mut video = Video::new("v", "Test", tags(&[]));
        assert!(!video.is_flagged());

        video.flag("dont_like_cats");
        assert!(video.is_flagged());
        assert_eq!(video.flag_reason(), Some("dont_like_cats"));

        video.unflag();
        assert!(!video.is_flagged());
        assert_eq!(video.flag_reason(), None);
    }
}
