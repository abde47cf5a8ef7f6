//! Playlist commands
//!
//! Thin rendering over the playlist store: the store decides the outcome,
//! these handlers word it. Result messages echo the playlist name exactly as
//! the caller typed it, whatever spelling the playlist was created under.

use super::Console;
use crate::error::CommandError;
use crate::selection::SelectionSource;
use anyhow::Result;
use std::io::Write;

impl<W: Write, S: SelectionSource> Console<W, S> {
    /// CREATE_PLAYLIST
    pub fn create_playlist(&mut self, name: &str) -> Result<()> {
        match self.playlists.create(name) {
            Ok(()) => writeln!(self.out, "Successfully created new playlist: {}", name)?,
            Err(err) => writeln!(self.out, "Cannot create playlist: {}", err)?,
        }
        Ok(())
    }

    /// ADD_TO_PLAYLIST
    pub fn add_to_playlist(&mut self, name: &str, video_id: &str) -> Result<()> {
        match self.playlists.add_video(&self.catalog, name, video_id) {
            Ok(title) => writeln!(self.out, "Added video to {}: {}", name, title)?,
            Err(err) => writeln!(self.out, "Cannot add video to {}: {}", name, err)?,
        }
        Ok(())
    }

    /// REMOVE_FROM_PLAYLIST
    pub fn remove_from_playlist(&mut self, name: &str, video_id: &str) -> Result<()> {
        match self.playlists.remove_video(&self.catalog, name, video_id) {
            Ok(title) => writeln!(self.out, "Removed video from {}: {}", name, title)?,
            Err(err) => writeln!(self.out, "Cannot remove video from {}: {}", name, err)?,
        }
        Ok(())
    }

    /// CLEAR_PLAYLIST
    pub fn clear_playlist(&mut self, name: &str) -> Result<()> {
        match self.playlists.clear(name) {
            Ok(()) => writeln!(self.out, "Successfully removed all videos from {}", name)?,
            Err(err) => writeln!(self.out, "Cannot clear playlist {}: {}", name, err)?,
        }
        Ok(())
    }

    /// DELETE_PLAYLIST
    pub fn delete_playlist(&mut self, name: &str) -> Result<()> {
        match self.playlists.delete(name) {
            Ok(_) => writeln!(self.out, "Deleted playlist: {}", name)?,
            Err(err) => writeln!(self.out, "Cannot delete playlist {}: {}", name, err)?,
        }
        Ok(())
    }

    /// SHOW_PLAYLIST
    ///
    /// Videos in playlist insertion order. Flagged members stay listed, with
    /// the usual annotation.
    pub fn show_playlist(&mut self, name: &str) -> Result<()> {
        let lines: Option<Vec<String>> = self.playlists.get(name).map(|playlist| {
            playlist
                .video_ids()
                .iter()
                .filter_map(|id| self.catalog.get(id))
                .map(|video| video.to_string())
                .collect()
        });

        match lines {
            None => writeln!(
                self.out,
                "Cannot show playlist {}: {}",
                name,
                CommandError::PlaylistNotFound
            )?,
            Some(lines) => {
                writeln!(self.out, "Showing playlist: {}", name)?;
                if lines.is_empty() {
                    writeln!(self.out, "No videos here yet")?;
                }
                for line in lines {
                    writeln!(self.out, "{}", line)?;
                }
            }
        }
        Ok(())
    }

    /// SHOW_ALL_PLAYLISTS
    pub fn show_all_playlists(&mut self) -> Result<()> {
        if self.playlists.is_empty() {
            writeln!(self.out, "No playlists exist yet")?;
            return Ok(());
        }

        let names: Vec<String> = self
            .playlists
            .sorted_by_name()
            .into_iter()
            .map(|playlist| playlist.name.clone())
            .collect();

        writeln!(self.out, "Showing all playlists:")?;
        for name in names {
            writeln!(self.out, "{}", name)?;
        }
        Ok(())
    }
}
