use serde::{Deserialize, Serialize};

/// Represents a named playlist
///
/// The display name keeps the exact spelling given at creation; uniqueness
/// against other playlists is decided on the normalized form, which the
/// store owns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    /// Display name, as given at creation
    pub name: String,

    /// Video ids in insertion order, no duplicates
    video_ids: Vec<String>,
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            video_ids: Vec::new(),
        }
    }

    /// Ids in playlist order
    pub fn video_ids(&self) -> &[String] {
        &self.video_ids
    }

    /// Whether the playlist already contains the id
    pub fn contains(&self, video_id: &str) -> bool {
        self.video_ids.iter().any(|id| id == video_id)
    }

    /// Append an id; the caller has already ruled out duplicates
    pub(crate) fn push(&mut self, video_id: String) {
        self.video_ids.push(video_id);
    }

    /// Remove an id, keeping the relative order of the rest; false if absent
    pub(crate) fn remove(&mut self, video_id: &str) -> bool {
        match self.video_ids.iter().position(|id| id == video_id) {
            Some(pos) => {
                self.video_ids.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Drop every entry, keeping the playlist itself
    pub(crate) fn clear(&mut self) {
        self.video_ids.clear();
    }

    /// Number of videos in this playlist
    pub fn len(&self) -> usize {
        self.video_ids.len()
    }

    /// Check if the playlist has no videos
    pub fn is_empty(&self) -> bool {
        self.video_ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_keeps_insertion_order() {
        let mut playlist = Playlist::new("road trip");
        playlist.push("b".to_string());
        playlist.push("a".to_string());
        playlist.push("c".to_string());

        assert_eq!(playlist.video_ids(), ["b", "a", "c"]);
        assert!(playlist.contains("a"));
        assert!(!playlist.contains("z"));
    }

    #[test]
    fn test_remove_preserves_remaining_order() {
        let mut playlist = Playlist::new("road trip");
        playlist.push("a".to_string());
        playlist.push("b".to_string());
        playlist.push("c".to_string());

        assert!(playlist.remove("b"));
        assert_eq!(playlist.video_ids(), ["a", "c"]);

        // Removing an absent id reports false and changes nothing
        assert!(!playlist.remove("b"));
        assert_eq!(playlist.len(), 2);
    }

    #[test]
    fn test_clear_keeps_playlist() {
        let mut playlist = Playlist::new("road trip");
        playlist.push("a".to_string());
        playlist.clear();

        assert!(playlist.is_empty());
        assert_eq!(playlist.name, "road trip");
    }
}
