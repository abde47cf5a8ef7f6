//! Playback commands
//!
//! Catalog-dependent preconditions (unknown id, flagged target) are checked
//! here; state-dependent ones live on the player. PLAY_RANDOM makes a single
//! uniform draw over the whole catalog, flagged videos included: a flagged
//! draw fails like a direct PLAY of that video and leaves the current video
//! running.

use super::Console;
use crate::error::CommandError;
use crate::selection::SelectionSource;
use anyhow::Result;
use rand::Rng;
use std::io::Write;

impl<W: Write, S: SelectionSource> Console<W, S> {
    /// PLAY
    ///
    /// Loads the video by id. Whatever was loaded before, paused or not,
    /// gets its stop notification first.
    pub fn play_video(&mut self, video_id: &str) -> Result<()> {
        let target = match self.catalog.get(video_id) {
            None => Err(CommandError::VideoNotFound),
            Some(video) => match video.flag_reason() {
                Some(reason) => Err(CommandError::VideoFlagged(reason.to_string())),
                None => Ok(video.title.clone()),
            },
        };

        match target {
            Err(err) => writeln!(self.out, "Cannot play video: {}", err)?,
            Ok(title) => {
                if let Some(displaced) = self.player.load(video_id) {
                    let stopped = self.video_title(&displaced);
                    writeln!(self.out, "Stopping video: {}", stopped)?;
                }
                log::debug!("Now playing {:?}", video_id);
                writeln!(self.out, "Playing video: {}", title)?;
            }
        }
        Ok(())
    }

    /// STOP
    pub fn stop_video(&mut self) -> Result<()> {
        match self.player.stop() {
            Ok(id) => {
                let title = self.video_title(&id);
                writeln!(self.out, "Stopping video: {}", title)?;
            }
            Err(err) => writeln!(self.out, "Cannot stop video: {}", err)?,
        }
        Ok(())
    }

    /// PLAY_RANDOM
    ///
    /// One draw, no retry. Only a catalog with no playable video at all is
    /// reported as having none available.
    pub fn play_random_video(&mut self) -> Result<()> {
        // Covers the empty catalog too
        if !self.catalog.videos().any(|video| !video.is_flagged()) {
            writeln!(self.out, "{}", CommandError::NoVideosAvailable)?;
            return Ok(());
        }

        let index = rand::thread_rng().gen_range(0..self.catalog.len());
        let id = self.catalog.videos().nth(index).map(|video| video.id.clone());
        if let Some(id) = id {
            self.play_video(&id)?;
        }
        Ok(())
    }

    /// PAUSE
    ///
    /// Pausing an already paused video repeats the notice instead of
    /// failing with a `Cannot` line.
    pub fn pause_video(&mut self) -> Result<()> {
        match self.player.pause() {
            Ok(id) => {
                let title = self.video_title(&id);
                writeln!(self.out, "Pausing video: {}", title)?;
            }
            Err(CommandError::AlreadyPaused) => {
                if let Some(id) = self.player.current_id().map(str::to_string) {
                    let title = self.video_title(&id);
                    writeln!(self.out, "Video already paused: {}", title)?;
                }
            }
            Err(err) => writeln!(self.out, "Cannot pause video: {}", err)?,
        }
        Ok(())
    }

    /// CONTINUE
    pub fn continue_video(&mut self) -> Result<()> {
        match self.player.resume() {
            Ok(id) => {
                let title = self.video_title(&id);
                writeln!(self.out, "Continuing video: {}", title)?;
            }
            Err(err) => writeln!(self.out, "Cannot continue video: {}", err)?,
        }
        Ok(())
    }

    /// SHOW_PLAYING
    pub fn show_playing(&mut self) -> Result<()> {
        let line = self
            .player
            .current_id()
            .and_then(|id| self.catalog.get(id))
            .map(|video| {
                let mut line = format!("Currently playing: {}", video);
                if self.player.is_paused() {
                    line.push_str(" - PAUSED");
                }
                line
            });

        match line {
            Some(line) => writeln!(self.out, "{}", line)?,
            None => writeln!(self.out, "No video is currently playing")?,
        }
        Ok(())
    }
}
