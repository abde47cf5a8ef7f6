//! Command console
//!
//! One method per user command. Every method validates its preconditions
//! against the catalog, the playlist store and the player, applies the state
//! change, and writes the exact result lines to the output sink. Failed
//! preconditions are ordinary outcomes rendered as `Cannot <action>:
//! <reason>`, never process errors; the `anyhow::Result` return only carries
//! sink write failures.
//!
//! The handlers are split by command family:
//!
//! - playback: PLAY, PLAY_RANDOM, STOP, PAUSE, CONTINUE, SHOW_PLAYING
//! - playlists: the CREATE / ADD / REMOVE / CLEAR / DELETE / SHOW family
//! - search: SEARCH_VIDEOS and SEARCH_VIDEOS_WITH_TAG plus the selection
//!   step
//! - moderation: FLAG_VIDEO and ALLOW_VIDEO

mod moderation;
mod playback;
mod playlists;
mod search;

pub use moderation::DEFAULT_FLAG_REASON;

use crate::model::Catalog;
use crate::player::Player;
use crate::selection::SelectionSource;
use crate::store::PlaylistStore;
use anyhow::Result;
use std::io::Write;

/// The command console; owns the whole session state
pub struct Console<W: Write, S: SelectionSource> {
    catalog: Catalog,
    playlists: PlaylistStore,
    player: Player,
    out: W,
    selector: S,
}

impl<W: Write, S: SelectionSource> Console<W, S> {
    /// Create a console over a loaded catalog
    ///
    /// The playlist store starts empty and the player starts with nothing
    /// loaded.
    pub fn new(catalog: Catalog, out: W, selector: S) -> Self {
        Self {
            catalog,
            playlists: PlaylistStore::new(),
            player: Player::new(),
            out,
            selector,
        }
    }

    /// NUMBER_OF_VIDEOS
    pub fn number_of_videos(&mut self) -> Result<()> {
        let count = self.catalog.len();
        writeln!(self.out, "{} videos in the library", count)?;
        Ok(())
    }

    /// SHOW_ALL_VIDEOS
    ///
    /// Every video in title order, flagged ones included and annotated.
    pub fn show_all_videos(&mut self) -> Result<()> {
        let lines: Vec<String> = self
            .catalog
            .sorted_by_title()
            .into_iter()
            .map(|video| video.to_string())
            .collect();

        writeln!(self.out, "Here's a list of all available videos:")?;
        for line in lines {
            writeln!(self.out, "{}", line)?;
        }
        Ok(())
    }

    /// Write a line that is not a command result (REPL hints and the help
    /// text)
    pub(crate) fn note(&mut self, message: &str) -> Result<()> {
        writeln!(self.out, "{}", message)?;
        Ok(())
    }

    /// Title for a result message; falls back to the id itself if the id is
    /// unknown, which cannot happen for ids that passed precondition checks
    fn video_title(&self, id: &str) -> String {
        self.catalog
            .get(id)
            .map_or_else(|| id.to_string(), |video| video.title.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Video;
    use crate::selection::NoSelection;

    fn catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.add_video(Video::new("b_id", "Bravo", vec!["#b".to_string()]));
        catalog.add_video(Video::new("a_id", "Alpha", vec![]));
        catalog
    }

    fn run(script: impl FnOnce(&mut Console<&mut Vec<u8>, NoSelection>) -> Result<()>) -> String {
        let mut out = Vec::new();
        let mut console = Console::new(catalog(), &mut out, NoSelection);
        script(&mut console).unwrap();
        drop(console);
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_number_of_videos() {
        let text = run(|console| console.number_of_videos());
        assert_eq!(text, "2 videos in the library\n");
    }

    #[test]
    fn test_show_all_videos_in_title_order() {
        let text = run(|console| console.show_all_videos());
        assert_eq!(
            text,
            "Here's a list of all available videos:\nAlpha (a_id) []\nBravo (b_id) [#b]\n"
        );
    }
}
