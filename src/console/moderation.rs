//! Moderation commands
//!
//! Flagging owns the one cross-component side effect in the console: a video
//! that is currently loaded, playing or paused, gets its stop notification
//! before the success line. Flagged state lives on the video itself, so
//! every other command family picks it up from the catalog.

use super::Console;
use crate::error::CommandError;
use crate::selection::SelectionSource;
use anyhow::Result;
use std::io::Write;

/// Reason recorded when FLAG_VIDEO is given without one
pub const DEFAULT_FLAG_REASON: &str = "Not supplied";

impl<W: Write, S: SelectionSource> Console<W, S> {
    /// FLAG_VIDEO
    pub fn flag_video(&mut self, video_id: &str, reason: Option<&str>) -> Result<()> {
        let reason = reason.unwrap_or(DEFAULT_FLAG_REASON);

        let outcome = match self.catalog.get_mut(video_id) {
            None => Err(CommandError::VideoNotFound),
            Some(video) if video.is_flagged() => Err(CommandError::AlreadyFlagged),
            Some(video) => {
                video.flag(reason);
                Ok(video.title.clone())
            }
        };

        match outcome {
            Err(err) => writeln!(self.out, "Cannot flag video: {}", err)?,
            Ok(title) => {
                if self.player.current_id() == Some(video_id) && self.player.stop().is_ok() {
                    writeln!(self.out, "Stopping video: {}", title)?;
                }
                log::info!("Flagged video {:?} (reason: {:?})", video_id, reason);
                writeln!(
                    self.out,
                    "Successfully flagged video: {} (reason: {})",
                    title, reason
                )?;
            }
        }
        Ok(())
    }

    /// ALLOW_VIDEO
    pub fn allow_video(&mut self, video_id: &str) -> Result<()> {
        let outcome = match self.catalog.get_mut(video_id) {
            None => Err(CommandError::VideoNotFound),
            Some(video) if !video.is_flagged() => Err(CommandError::NotFlagged),
            Some(video) => {
                video.unflag();
                Ok(video.title.clone())
            }
        };

        match outcome {
            Err(err) => writeln!(self.out, "Cannot remove flag from video: {}", err)?,
            Ok(title) => {
                log::info!("Removed flag from video {:?}", video_id);
                writeln!(self.out, "Successfully removed flag from video: {}", title)?;
            }
        }
        Ok(())
    }
}
