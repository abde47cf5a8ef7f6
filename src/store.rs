//! Playlist ownership and membership rules
//!
//! The store owns every playlist and enforces the one structural invariant:
//! no two playlists whose trimmed, lowercased names match. Lookups normalize
//! the queried name the same way, so any spelling reaches the same playlist.
//! Membership operations check their preconditions in a fixed order and the
//! command handlers rely on it.

use crate::error::CommandError;
use crate::model::{Catalog, Playlist};

/// Normalized form used for playlist name comparison
fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Owns the set of playlists and enforces name uniqueness
#[derive(Debug, Clone, Default)]
pub struct PlaylistStore {
    playlists: Vec<Playlist>,
}

impl PlaylistStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, name: &str) -> Option<usize> {
        let wanted = normalize(name);
        self.playlists.iter().position(|p| normalize(&p.name) == wanted)
    }

    /// Create an empty playlist; the display name keeps the given spelling
    pub fn create(&mut self, name: &str) -> Result<(), CommandError> {
        if self.position(name).is_some() {
            return Err(CommandError::DuplicatePlaylist);
        }
        log::debug!("Creating playlist {:?}", name);
        self.playlists.push(Playlist::new(name));
        Ok(())
    }

    /// Look up a playlist under any spelling of its name
    pub fn get(&self, name: &str) -> Option<&Playlist> {
        self.position(name).map(|pos| &self.playlists[pos])
    }

    /// Delete a playlist, returning it
    pub fn delete(&mut self, name: &str) -> Result<Playlist, CommandError> {
        let pos = self.position(name).ok_or(CommandError::PlaylistNotFound)?;
        Ok(self.playlists.remove(pos))
    }

    /// Append a video to a playlist, returning the video title for the
    /// result message
    ///
    /// Precondition order: missing playlist, then missing video, then
    /// flagged video, then already present.
    pub fn add_video(
        &mut self,
        catalog: &Catalog,
        name: &str,
        video_id: &str,
    ) -> Result<String, CommandError> {
        let pos = self.position(name).ok_or(CommandError::PlaylistNotFound)?;
        let video = catalog.get(video_id).ok_or(CommandError::VideoNotFound)?;
        if let Some(reason) = video.flag_reason() {
            return Err(CommandError::VideoFlagged(reason.to_string()));
        }
        if self.playlists[pos].contains(&video.id) {
            return Err(CommandError::AlreadyInPlaylist);
        }
        self.playlists[pos].push(video.id.clone());
        Ok(video.title.clone())
    }

    /// Remove a video from a playlist, returning the video title
    ///
    /// Precondition order: missing playlist, then missing video, then not in
    /// playlist. Flagged videos can be removed.
    pub fn remove_video(
        &mut self,
        catalog: &Catalog,
        name: &str,
        video_id: &str,
    ) -> Result<String, CommandError> {
        let pos = self.position(name).ok_or(CommandError::PlaylistNotFound)?;
        let video = catalog.get(video_id).ok_or(CommandError::VideoNotFound)?;
        if !self.playlists[pos].remove(&video.id) {
            return Err(CommandError::NotInPlaylist);
        }
        Ok(video.title.clone())
    }

    /// Empty a playlist, keeping it in the store
    pub fn clear(&mut self, name: &str) -> Result<(), CommandError> {
        let pos = self.position(name).ok_or(CommandError::PlaylistNotFound)?;
        self.playlists[pos].clear();
        Ok(())
    }

    /// All playlists ordered by normalized name, ascending
    pub fn sorted_by_name(&self) -> Vec<&Playlist> {
        let mut playlists: Vec<&Playlist> = self.playlists.iter().collect();
        playlists.sort_by_key(|p| normalize(&p.name));
        playlists
    }

    /// Number of playlists
    pub fn len(&self) -> usize {
        self.playlists.len()
    }

    /// Check if no playlists exist
    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Video;

    fn catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.add_video(Video::new("cats_id", "Amazing Cats", vec!["#cat".to_string()]));
        catalog.add_video(Video::new("dogs_id", "Funny Dogs", vec!["#dog".to_string()]));
        let mut flagged = Video::new("bad_id", "Bad Video", vec![]);
        flagged.flag("dont_like");
        catalog.add_video(flagged);
        catalog
    }

    #[test]
    fn test_create_rejects_same_name_any_spelling() {
        let mut store = PlaylistStore::new();
        store.create("my list").unwrap();

        assert_eq!(store.create("My List "), Err(CommandError::DuplicatePlaylist));
        assert_eq!(store.create("MY LIST"), Err(CommandError::DuplicatePlaylist));
        assert_eq!(store.len(), 1);

        // The original spelling is what the store keeps
        assert_eq!(store.get("MY list").map(|p| p.name.as_str()), Some("my list"));
    }

    #[test]
    fn test_add_video_precondition_order() {
        let catalog = catalog();
        let mut store = PlaylistStore::new();

        // Missing playlist wins over missing video
        assert_eq!(
            store.add_video(&catalog, "nope", "missing_id"),
            Err(CommandError::PlaylistNotFound)
        );

        store.create("mix").unwrap();
        assert_eq!(
            store.add_video(&catalog, "mix", "missing_id"),
            Err(CommandError::VideoNotFound)
        );
        assert_eq!(
            store.add_video(&catalog, "mix", "bad_id"),
            Err(CommandError::VideoFlagged("dont_like".to_string()))
        );

        assert_eq!(store.add_video(&catalog, "mix", "cats_id"), Ok("Amazing Cats".to_string()));
        assert_eq!(
            store.add_video(&catalog, "mix", "cats_id"),
            Err(CommandError::AlreadyInPlaylist)
        );
    }

    #[test]
    fn test_remove_video_allows_flagged() {
        let mut catalog = catalog();
        let mut store = PlaylistStore::new();
        store.create("mix").unwrap();
        store.add_video(&catalog, "mix", "dogs_id").unwrap();

        // Flag after adding; removal still goes through
        if let Some(video) = catalog.get_mut("dogs_id") {
            video.flag("late_flag");
        }
        assert_eq!(
            store.remove_video(&catalog, "mix", "dogs_id"),
            Ok("Funny Dogs".to_string())
        );
        assert_eq!(
            store.remove_video(&catalog, "mix", "dogs_id"),
            Err(CommandError::NotInPlaylist)
        );
    }

    #[test]
    fn test_clear_keeps_playlist_registered() {
        let catalog = catalog();
        let mut store = PlaylistStore::new();
        store.create("mix").unwrap();
        store.add_video(&catalog, "mix", "cats_id").unwrap();

        store.clear("MIX").unwrap();
        assert!(store.get("mix").is_some_and(Playlist::is_empty));
    }

    #[test]
    fn test_delete_frees_the_name() {
        let mut store = PlaylistStore::new();
        store.create("mix").unwrap();
        store.delete("Mix ").unwrap();

        assert!(store.is_empty());
        assert!(store.create("MIX").is_ok());
    }

    #[test]
    fn test_sorted_by_name_is_case_insensitive() {
        let mut store = PlaylistStore::new();
        store.create("Zoo").unwrap();
        store.create("alpha").unwrap();
        store.create("Beta").unwrap();

        let names: Vec<&str> = store.sorted_by_name().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["alpha", "Beta", "Zoo"]);
    }
}
