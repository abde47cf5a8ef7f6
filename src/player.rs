//! Playback session state
//!
//! The player is a three-state machine (empty, playing, paused) over the id
//! of the currently loaded video. It holds ids rather than catalog references
//! so the catalog stays independently borrowable. Every transition leaves the
//! invariant intact that `paused` is false whenever nothing is loaded.

use crate::error::CommandError;

/// Tracks which single video, if any, is loaded and whether it is paused
#[derive(Debug, Clone, Default)]
pub struct Player {
    current: Option<String>,
    paused: bool,
}

impl Player {
    /// Create an empty player
    pub fn new() -> Self {
        Self::default()
    }

    /// Id of the currently loaded video, if any
    pub fn current_id(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Whether the loaded video is paused; false when nothing is loaded
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Load a video and land in Playing, returning the id of the video this
    /// displaced. The caller owes the displaced video a stop notification.
    pub fn load(&mut self, video_id: &str) -> Option<String> {
        let displaced = self.current.replace(video_id.to_string());
        self.paused = false;
        displaced
    }

    /// Stop playback, returning the id that was stopped
    pub fn stop(&mut self) -> Result<String, CommandError> {
        let id = self.current.take().ok_or(CommandError::NothingPlaying)?;
        self.paused = false;
        Ok(id)
    }

    /// Pause the loaded video, returning its id
    pub fn pause(&mut self) -> Result<String, CommandError> {
        let id = self.current.clone().ok_or(CommandError::NothingPlaying)?;
        if self.paused {
            return Err(CommandError::AlreadyPaused);
        }
        self.paused = true;
        Ok(id)
    }

    /// Resume the paused video, returning its id
    pub fn resume(&mut self) -> Result<String, CommandError> {
        let id = self.current.clone().ok_or(CommandError::NothingPlaying)?;
        if !self.paused {
            return Err(CommandError::NotPaused);
        }
        self.paused = false;
        Ok(id)
    }
}
