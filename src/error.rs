//! User-facing command failures
//!
//! Every console command either succeeds or fails exactly one precondition,
//! and each precondition has a fixed reason phrase. The `Display` text is
//! that phrase alone; handlers prefix it with "Cannot <action>: " where the
//! command's wording calls for it.

use thiserror::Error;

/// Precondition failures a console command can report
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// No video with the requested id exists in the catalog
    #[error("Video does not exist")]
    VideoNotFound,

    /// The target video is flagged; carries the stored reason
    #[error("Video is currently flagged (reason: {0})")]
    VideoFlagged(String),

    /// Playback command issued while the player is empty
    #[error("No video is currently playing")]
    NothingPlaying,

    /// Pause issued while the loaded video is already paused
    #[error("Video is already paused")]
    AlreadyPaused,

    /// Continue issued while the loaded video is not paused
    #[error("Video is not paused")]
    NotPaused,

    /// Random draw requested with no playable videos in the catalog
    #[error("No videos available")]
    NoVideosAvailable,

    /// A playlist with the same normalized name already exists
    #[error("A playlist with the same name already exists")]
    DuplicatePlaylist,

    /// No playlist with the requested name exists
    #[error("Playlist does not exist")]
    PlaylistNotFound,

    /// The video is already in the target playlist
    #[error("Video already added")]
    AlreadyInPlaylist,

    /// The video is not in the target playlist
    #[error("Video is not in playlist")]
    NotInPlaylist,

    /// Flag issued on an already flagged video
    #[error("Video is already flagged")]
    AlreadyFlagged,

    /// Allow issued on a video that carries no flag
    #[error("Video is not flagged")]
    NotFlagged,
}
